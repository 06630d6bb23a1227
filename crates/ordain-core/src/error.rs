//! Error types for order bookkeeping

use crate::OrderId;
use ordain_notify::NotifyError;
use thiserror::Error;

/// Result type for registry operations
pub type OrderResult<T> = Result<T, OrderError>;

/// Errors surfaced by the order registry
#[derive(Error, Debug)]
pub enum OrderError {
    /// A lifecycle notification could not be delivered
    #[error(transparent)]
    Notify(#[from] NotifyError),

    /// No outstanding order has this id
    #[error("order {0} not found")]
    NotFound(OrderId),

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl OrderError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
