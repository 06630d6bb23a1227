//! In-memory sink for tests
//!
//! Records every delivery and can be scripted to fail on a given attempt,
//! which is how callers verify fail-fast and best-effort delivery.

use crate::{Color, NotificationSink, NotifyError, NotifyResult};
use async_trait::async_trait;
use parking_lot::Mutex;

/// A notification captured by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Message text as passed to the sink
    pub message: String,
    /// Presentation hint as passed to the sink
    pub color: Color,
}

#[derive(Debug, Default)]
struct RecordingState {
    attempts: usize,
    delivered: Vec<Delivery>,
}

/// Sink that stores deliveries instead of sending them
#[derive(Debug, Default)]
pub struct RecordingSink {
    state: Mutex<RecordingState>,
    /// 1-based attempt numbers that fail with a transport error
    fail_on: Vec<usize>,
}

impl RecordingSink {
    /// Sink where every attempt succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink whose `attempt`-th call (1-based) fails
    pub fn failing_on(attempt: usize) -> Self {
        Self {
            state: Mutex::default(),
            fail_on: vec![attempt],
        }
    }

    /// Sink that fails on every listed attempt
    pub fn failing_on_each(attempts: impl IntoIterator<Item = usize>) -> Self {
        Self {
            state: Mutex::default(),
            fail_on: attempts.into_iter().collect(),
        }
    }

    /// Successful deliveries, oldest first
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.state.lock().delivered.clone()
    }

    /// Messages of successful deliveries, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.state
            .lock()
            .delivered
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }

    /// Number of `notify` calls, successful or not
    pub fn attempts(&self) -> usize {
        self.state.lock().attempts
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn notify(&self, message: &str, color: Color) -> NotifyResult<()> {
        let mut state = self.state.lock();
        state.attempts += 1;
        if self.fail_on.contains(&state.attempts) {
            return Err(NotifyError::transport(format!(
                "scripted failure on attempt {}",
                state.attempts
            )));
        }
        state.delivered.push(Delivery {
            message: message.to_string(),
            color,
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
