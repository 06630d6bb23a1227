//! Error types for notification delivery

use thiserror::Error;

/// Result type for sink operations
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Errors a notification sink can report
#[derive(Error, Debug)]
pub enum NotifyError {
    /// No notification channel is available
    #[error("no notification sink configured")]
    Unconfigured,

    /// Network or HTTP failure, including an unreadable response
    #[error("notification transport error: {0}")]
    Transport(String),

    /// The message could not be serialized for the wire
    #[error("notification encoding error: {0}")]
    Encoding(String),
}

impl NotifyError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// True when the failure is a missing sink rather than a delivery failure
    pub fn is_unconfigured(&self) -> bool {
        matches!(self, Self::Unconfigured)
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for NotifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
