//! The notification sink capability

use crate::{Color, NotifyError, NotifyResult};
use async_trait::async_trait;

/// A channel that can announce a message to humans.
///
/// Delivery is best effort from the sink's point of view: it reports failure
/// and never retries. Implementations must be shareable across tasks.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver `message` with a presentation hint
    async fn notify(&self, message: &str, color: Color) -> NotifyResult<()>;

    /// Short name used in log output
    fn name(&self) -> &str;
}

/// Sink used when no notification channel is configured.
///
/// Every attempt fails with [`NotifyError::Unconfigured`] so callers can
/// tell "nobody was told" apart from a successful announcement.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsentSink;

impl AbsentSink {
    /// Create a new absent sink
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for AbsentSink {
    async fn notify(&self, _message: &str, _color: Color) -> NotifyResult<()> {
        Err(NotifyError::Unconfigured)
    }

    fn name(&self) -> &str {
        "absent"
    }
}
