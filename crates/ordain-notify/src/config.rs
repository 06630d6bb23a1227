//! Sink selection from configuration

use crate::{AbsentSink, NotificationSink, NotifyResult, WebhookSink};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default bound on a single webhook request
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Notification channel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Webhook endpoint; `None` selects the absent sink
    pub webhook_url: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SinkConfig {
    /// Configuration for a webhook at `url`
    pub fn webhook(url: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Build the sink described by `config`
pub fn build_sink(config: &SinkConfig) -> NotifyResult<Arc<dyn NotificationSink>> {
    match &config.webhook_url {
        Some(url) => {
            info!(timeout_secs = config.timeout_secs, "Using webhook notification sink");
            Ok(Arc::new(WebhookSink::new(url.clone(), config.timeout())?))
        }
        None => {
            info!("No notification sink configured");
            Ok(Arc::new(AbsentSink::new()))
        }
    }
}
