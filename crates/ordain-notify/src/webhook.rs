//! Chat webhook sink
//!
//! Posts `{"text": "<message>"}` as JSON to a configured URL. The color hint
//! is accepted for interface compatibility but not transmitted; incoming
//! webhooks of this shape render plain text only.

use crate::{Color, NotificationSink, NotifyError, NotifyResult};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Wire body sent to the webhook
#[derive(Debug, Clone, Serialize)]
pub struct WebhookMessage<'a> {
    /// Message text
    pub text: &'a str,
}

/// Notification sink backed by an HTTP webhook
#[derive(Debug, Clone)]
pub struct WebhookSink {
    /// Target URL; empty means unconfigured
    url: String,
    /// HTTP client carrying the request timeout
    client: reqwest::Client,
}

impl WebhookSink {
    /// Create a webhook sink with a bounded request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> NotifyResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(url, client))
    }

    /// Create a webhook sink around an existing client
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    /// Configured webhook URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    async fn notify(&self, message: &str, _color: Color) -> NotifyResult<()> {
        if self.url.is_empty() {
            return Err(NotifyError::Unconfigured);
        }

        let body = serde_json::to_vec(&WebhookMessage { text: message })?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!("Could not post to webhook for the reason {}", e);
                NotifyError::from(e)
            })?;

        let status = response.status();
        // Drain the body so a broken response surfaces as an error.
        let _ = response.bytes().await.map_err(|e| {
            warn!("Could not read webhook response for the reason {}", e);
            NotifyError::from(e)
        })?;

        if !status.is_success() {
            warn!("Webhook rejected notification with status {}", status);
            return Err(NotifyError::transport(format!(
                "webhook returned status {status}"
            )));
        }

        debug!(bytes = message.len(), "Notification delivered via webhook");
        Ok(())
    }

    fn name(&self) -> &str {
        "webhook"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn empty_url_is_unconfigured() {
        let sink = WebhookSink::with_client("", reqwest::Client::new());
        let result = sink.notify("hello", Color::Red).await;
        assert_matches!(result, Err(NotifyError::Unconfigured));
    }

    #[tokio::test]
    async fn invalid_url_is_a_transport_error() {
        let sink = WebhookSink::with_client("not a url", reqwest::Client::new());
        let result = sink.notify("hello", Color::Red).await;
        assert_matches!(result, Err(NotifyError::Transport(_)));
    }

    #[test]
    fn wire_body_carries_only_text() {
        let body = serde_json::to_value(WebhookMessage { text: "order up" }).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "order up" }));
    }
}
