//! Ordain Notify
//!
//! Delivery side of the order pipeline: announces order creation, delegation
//! and fulfillment to humans through a pluggable [`NotificationSink`].
//!
//! Sinks are selected at construction time and injected into the order
//! registry as `Arc<dyn NotificationSink>`:
//! - [`AbsentSink`] - no channel configured; every attempt is an error
//! - [`WebhookSink`] - JSON `POST` to a chat webhook
//!
//! A sink never swallows a failure. Whether a failure aborts the surrounding
//! operation is the caller's decision.

pub mod color;
pub mod config;
pub mod error;
pub mod sink;
pub mod webhook;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use color::Color;
pub use config::{build_sink, SinkConfig, DEFAULT_TIMEOUT_SECS};
pub use error::{NotifyError, NotifyResult};
pub use sink::{AbsentSink, NotificationSink};
pub use webhook::{WebhookMessage, WebhookSink};
