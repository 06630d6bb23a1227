//! Subcommand handlers

pub mod delegation;
pub mod fulfilled;
pub mod new_order;

/// Parse an `owner=Display Name` pair
pub fn parse_owner(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((owner, display)) if !owner.is_empty() && !display.is_empty() => {
            Ok((owner.to_string(), display.to_string()))
        }
        _ => Err(format!("expected OWNER=DISPLAY_NAME, got `{value}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_pairs_split_on_first_equals() {
        assert_eq!(
            parse_owner("dave=Dave D").unwrap(),
            ("dave".to_string(), "Dave D".to_string())
        );
        assert_eq!(
            parse_owner("erin=a=b").unwrap(),
            ("erin".to_string(), "a=b".to_string())
        );
        assert!(parse_owner("dave").is_err());
        assert!(parse_owner("=Dave").is_err());
        assert!(parse_owner("dave=").is_err());
    }
}
