//! Notification message templates
//!
//! Downstream tooling parses these strings, so parameter order and
//! separators are fixed.

use url::form_urlencoded;

/// Separator for label and user lists in new-order messages and links.
///
/// No space: the joined text is query-encoded as one value and a space
/// would turn into `+`.
pub const LIST_SEPARATOR: &str = ",";

/// Separator for label lists in delegation messages
pub const DELEGATION_LABEL_SEPARATOR: &str = ", ";

/// `<creator> has created an order for the label <labels>. requesting <uses> delegations for <duration>`
pub fn new_order(creator: &str, labels: &str, uses: u32, duration: &str) -> String {
    format!(
        "{creator} has created an order for the label {labels}. requesting {uses} delegations for {duration}"
    )
}

/// `<delegator> has delegated the label <labels> to <delegatee> (per order <orderNum>) for <duration>`
pub fn new_delegation(
    delegator: &str,
    labels: &str,
    delegatee: &str,
    order_num: &str,
    duration: &str,
) -> String {
    format!(
        "{delegator} has delegated the label {labels} to {delegatee} (per order {order_num}) for {duration}"
    )
}

/// `<name> has had order <orderNum> fulfilled.`
pub fn order_fulfilled(name: &str, order_num: &str) -> String {
    format!("{name} has had order {order_num} fulfilled.")
}

/// `@<displayName> - https://<host>?<query>`
pub fn order_link(display_name: &str, host: &str, query: &str) -> String {
    format!("@{display_name} - https://{host}?{query}")
}

/// Join a list for new-order messages and links
pub fn join_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

/// Join labels for delegation messages
pub fn join_delegation_labels(labels: &[String]) -> String {
    labels.join(DELEGATION_LABEL_SEPARATOR)
}

/// Query parameters of the per-owner approval link.
///
/// `label` and `delegatee` are pre-joined lists encoded as single opaque
/// values.
#[derive(Debug, Clone, Copy)]
pub struct LinkQuery<'a> {
    /// Owner being asked to delegate
    pub delegator: &'a str,
    /// Joined label list
    pub label: &'a str,
    /// Requested duration as text
    pub duration: &'a str,
    /// Number of uses requested
    pub uses: u32,
    /// Order identifier
    pub ordernum: &'a str,
    /// Joined user list
    pub delegatee: &'a str,
}

impl LinkQuery<'_> {
    /// Encode with keys in sorted order
    pub fn encode(&self) -> String {
        let uses = self.uses.to_string();
        [
            ("delegatee", self.delegatee),
            ("delegator", self.delegator),
            ("duration", self.duration),
            ("label", self.label),
            ("ordernum", self.ordernum),
            ("uses", uses.as_str()),
        ]
        .iter()
        .map(|(key, value)| format!("{key}={}", query_escape(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

/// Escape one query value.
///
/// Unreserved characters are `A-Z a-z 0-9 - _ . ~`, space becomes `+`, and
/// every other byte is percent-encoded. Form encoding keeps `*` and escapes
/// `~`, so those two are swapped back here.
pub fn query_escape(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('*', "%2A")
        .replace("%7E", "~")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn list_joins_differ_by_message_kind() {
        let labels = strings(&["a", "b", "c"]);
        assert_eq!(join_list(&labels), "a,b,c");
        assert_eq!(join_delegation_labels(&labels), "a, b, c");
        assert_eq!(join_list(&strings(&["only"])), "only");
        assert_eq!(join_delegation_labels(&strings(&["only"])), "only");
        assert_eq!(join_list(&[]), "");
    }

    #[test]
    fn templates_keep_parameter_order() {
        assert_eq!(
            new_order("alice", "prod-db", 2, "24h"),
            "alice has created an order for the label prod-db. requesting 2 delegations for 24h"
        );
        assert_eq!(
            new_delegation("dave", "a, b", "bob", "abcd1234", "1h"),
            "dave has delegated the label a, b to bob (per order abcd1234) for 1h"
        );
        assert_eq!(
            order_fulfilled("bob", "abcd1234"),
            "bob has had order abcd1234 fulfilled."
        );
    }

    #[test]
    fn query_escape_keeps_tilde_and_escapes_star() {
        assert_eq!(query_escape("a~b*c"), "a~b%2Ac");
        assert_eq!(query_escape("dave smith"), "dave+smith");
        assert_eq!(query_escape("bob,carol"), "bob%2Ccarol");
        assert_eq!(query_escape("100%~"), "100%25~");
        assert_eq!(query_escape("x-y_z.0"), "x-y_z.0");
    }

    #[test]
    fn link_query_encodes_each_value_opaquely() {
        let query = LinkQuery {
            delegator: "dave smith",
            label: "prod-db,logs",
            duration: "24h",
            uses: 2,
            ordernum: "abcd1234",
            delegatee: "bob,carol",
        }
        .encode();

        assert_eq!(
            query,
            "delegatee=bob%2Ccarol&delegator=dave+smith&duration=24h&label=prod-db%2Clogs&ordernum=abcd1234&uses=2"
        );
        assert_eq!(
            order_link("Dave D", "ro.example.com", "uses=2"),
            "@Dave D - https://ro.example.com?uses=2"
        );
    }
}
