//! Ordain Core
//!
//! Bookkeeping for delegation *orders*: a creator asks that a set of users
//! receive delegated access to a set of labels, and a set of owners must
//! delegate before the order is fulfilled.
//!
//! The [`OrderRegistry`] owns every outstanding [`Order`], answers "does this
//! user already have a pending order covering these labels", and announces
//! lifecycle events through an injected [`ordain_notify::NotificationSink`].
//!
//! The registry only tracks requests. Granting access, expiring delegations
//! and persisting state belong to the delegation engine that drives it.

pub mod config;
pub mod error;
pub mod id;
pub mod messages;
pub mod order;
pub mod registry;

pub use config::{DeliveryPolicy, OrdainConfig, RegistryConfig};
pub use error::{OrderError, OrderResult};
pub use id::OrderId;
pub use order::{Order, OrderIndex};
pub use registry::{NewOrderNotice, OrderRegistry};

pub use ordain_notify::{Color, NotificationSink, NotifyError};
