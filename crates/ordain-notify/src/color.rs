//! Presentation hints attached to every notification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display color (severity/category) for a notification.
///
/// Purely presentational. Sinks that cannot style messages ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Urgent, e.g. a new order waiting on owners
    Red,
    /// A delegation was granted
    Yellow,
    /// Actionable link for a single owner
    Green,
    /// Informational
    Gray,
    /// An order was fulfilled
    Purple,
    /// Let the backend pick
    Random,
}

impl Color {
    /// Lowercase name understood by chat backends
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Gray => "gray",
            Color::Purple => "purple",
            Color::Random => "random",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Color::Purple).unwrap();
        assert_eq!(json, "\"purple\"");

        let parsed: Color = serde_json::from_str("\"gray\"").unwrap();
        assert_eq!(parsed, Color::Gray);
    }

    #[test]
    fn display_matches_as_str() {
        for color in [
            Color::Red,
            Color::Yellow,
            Color::Green,
            Color::Gray,
            Color::Purple,
            Color::Random,
        ] {
            assert_eq!(color.to_string(), color.as_str());
        }
    }
}
