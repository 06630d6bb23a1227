//! Order identifiers

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Random bytes per identifier (2^96 space, collisions treated as impossible)
pub const ORDER_ID_BYTES: usize = 12;

/// Unique key of an order in the registry.
///
/// Generated ids are 24 lowercase hex characters. Ids received from callers
/// are accepted verbatim through `From<String>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generate a fresh identifier from the operating system CSPRNG.
    ///
    /// # Panics
    /// Panics if the OS randomness source is unavailable. A predictable id
    /// is never returned in its place.
    pub fn generate() -> Self {
        let mut bytes = [0u8; ORDER_ID_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Borrow the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
