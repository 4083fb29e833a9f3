//! Helpers for the decimal strings the OKX API uses for prices, amounts and times.
//!
//! The service sends every numeric value as a JSON string (sometimes an empty
//! one). Response types keep those strings verbatim; these helpers convert on
//! demand.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse a decimal string such as `"0.00012345"`.
///
/// Returns `None` for empty strings and anything that is not a number.
/// Scientific notation (`"1.2e-7"`) is accepted since the service emits it for
/// very small token prices.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Parse a millisecond Unix timestamp string such as `"1700000000000"`.
pub fn parse_timestamp_ms(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("0.5"), Some(dec("0.5")));
        assert_eq!(parse_decimal(" 42 "), Some(dec("42")));
        assert_eq!(parse_decimal("0.00012345"), Some(dec("0.00012345")));
    }

    #[test]
    fn test_parse_decimal_scientific() {
        assert_eq!(parse_decimal("1.5e-3"), Some(dec("0.0015")));
    }

    #[test]
    fn test_parse_decimal_empty_or_garbage() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("n/a"), None);
    }

    #[test]
    fn test_parse_timestamp_ms() {
        assert_eq!(parse_timestamp_ms("1700000000000"), Some(1_700_000_000_000));
        assert_eq!(parse_timestamp_ms(""), None);
    }
}
