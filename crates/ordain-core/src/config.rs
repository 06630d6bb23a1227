//! Registry configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! [registry]
//! host = "ro.example.com"
//! delivery = "fail_fast"
//!
//! [notifier]
//! webhook_url = "https://hooks.example.com/services/T000/B000/XXXX"
//! timeout_secs = 10
//! ```

use crate::{OrderError, OrderResult};
use ordain_notify::SinkConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound accepted for the webhook timeout
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// What a new-order announcement does when one owner link fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// Stop at the first failure and report it; later owners are not tried
    #[default]
    FailFast,
    /// Try every owner, then report the first failure
    BestEffort,
}

/// Settings owned by the order registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Host that serves the delegation page linked from owner notifications
    pub host: String,
    /// Owner-link delivery behaviour
    pub delivery: DeliveryPolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            host: "localhost:8080".to_string(),
            delivery: DeliveryPolicy::FailFast,
        }
    }
}

impl RegistryConfig {
    /// Configuration linking to `host`
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Override the delivery policy
    pub fn with_delivery(mut self, delivery: DeliveryPolicy) -> Self {
        self.delivery = delivery;
        self
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdainConfig {
    /// Registry settings
    pub registry: RegistryConfig,
    /// Notification sink settings
    pub notifier: SinkConfig,
}

impl OrdainConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> OrderResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| OrderError::config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load_from_file(path: &Path) -> OrderResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            OrderError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges
    pub fn validate(&self) -> OrderResult<()> {
        if self.registry.host.trim().is_empty() {
            return Err(OrderError::config("registry.host cannot be empty"));
        }
        if self.notifier.timeout_secs == 0 {
            return Err(OrderError::config("notifier.timeout_secs cannot be zero"));
        }
        if self.notifier.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(OrderError::config(format!(
                "notifier.timeout_secs cannot exceed {MAX_TIMEOUT_SECS}"
            )));
        }
        Ok(())
    }
}
