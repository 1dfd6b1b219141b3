/// Parse a raw price display string into a numeric value.
///
/// The upstream workflow sends prices as display strings ("$1,200+", "$950").
/// Currency symbols, thousands separators and trailing "+" are stripped; what
/// remains must parse as f64 or the value is treated as absent.
pub fn parse_price_display(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '+'))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Derive a neighbourhood from a listing address.
///
/// The segment before the first comma, trimmed. Addresses without a comma
/// carry no neighbourhood information.
pub fn extract_neighbourhood(address: &str) -> Option<String> {
    let (head, _rest) = address.split_once(',')?;
    let trimmed = head.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_display() {
        assert_eq!(parse_price_display("$1,200+"), Some(1200.0));
        assert_eq!(parse_price_display("$950"), Some(950.0));
        assert_eq!(parse_price_display("2450.50"), Some(2450.5));
        assert_eq!(parse_price_display("  $3,100  "), Some(3100.0));
        assert_eq!(parse_price_display("Call for price"), None);
        assert_eq!(parse_price_display(""), None);
        assert_eq!(parse_price_display("$,+"), None);
    }

    #[test]
    fn test_extract_neighbourhood() {
        assert_eq!(
            extract_neighbourhood("Capitol Hill, Seattle, WA"),
            Some("Capitol Hill".to_string())
        );
        assert_eq!(
            extract_neighbourhood("  Ballard , Seattle"),
            Some("Ballard".to_string())
        );
        // No comma means no neighbourhood segment
        assert_eq!(extract_neighbourhood("123 Main St"), None);
        assert_eq!(extract_neighbourhood(", Seattle"), None);
    }
}
