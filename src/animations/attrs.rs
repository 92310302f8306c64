use std::str::FromStr;

/// Parse an optional data-attribute, falling back when missing or malformed.
pub fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    parse_opt(raw).unwrap_or(default)
}

/// Like `parse_or`, for attributes with no default: a counter without a
/// parsable target simply never activates.
pub fn parse_opt<T: FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::{parse_opt, parse_or};

    #[test]
    fn missing_attribute_falls_back() {
        assert_eq!(parse_or(None, 0.5_f64), 0.5);
        assert_eq!(parse_or(None, 100_u32), 100);
    }

    #[test]
    fn malformed_attribute_falls_back() {
        assert_eq!(parse_or(Some("abc".to_string()), 0.5_f64), 0.5);
        assert_eq!(parse_or(Some("".to_string()), 2000_u32), 2000);
    }

    #[test]
    fn valid_attribute_wins() {
        assert_eq!(parse_or(Some("0.8".to_string()), 0.5_f64), 0.8);
        assert_eq!(parse_or(Some(" 150 ".to_string()), 100_u32), 150);
    }

    #[test]
    fn optional_parse_activates_only_on_valid_input() {
        assert_eq!(parse_opt::<i64>(Some("250".to_string())), Some(250));
        assert_eq!(parse_opt::<i64>(Some("lots".to_string())), None);
        assert_eq!(parse_opt::<i64>(None), None);
    }
}
