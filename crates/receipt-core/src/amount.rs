//! # Amount Parsing
//!
//! Receipts carry monetary values as decimal strings ("35.35", "6.49").
//! Both the validator and the scorer need them as numbers.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The points rules are defined over real numbers:                        │
//! │                                                                         │
//! │    total == floor(total)          → round dollar amount                 │
//! │    total % 0.25 == 0              → multiple of a quarter               │
//! │    ceil(price * 0.2)              → description bonus                   │
//! │                                                                         │
//! │  Scores must match other implementations bit-for-bit, so amounts are   │
//! │  parsed to f64 and the rules evaluated in f64, not in integer cents.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No locale handling: "1,50" or "$1.50" are not amounts.

/// Parses a decimal amount string.
///
/// Returns `None` for anything that is not a finite real number, including
/// the `inf` / `NaN` spellings that `f64::from_str` would otherwise accept.
///
/// ## Example
/// ```rust
/// use receipt_core::amount::parse_amount;
///
/// assert_eq!(parse_amount("35.35"), Some(35.35));
/// assert_eq!(parse_amount("abc"), None);
/// assert_eq!(parse_amount("inf"), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// True when the amount has no fractional part.
#[inline]
pub fn is_round(amount: f64) -> bool {
    amount == amount.floor()
}

/// True when the amount is an exact multiple of `step`, computed with the
/// floating-point remainder.
#[inline]
pub fn is_multiple_of(amount: f64, step: f64) -> bool {
    amount % step == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100.00"), Some(100.0));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount("-1.25"), Some(-1.25));

        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("$1.00"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("-infinity"), None);
    }

    #[test]
    fn test_is_round() {
        assert!(is_round(100.0));
        assert!(is_round(0.0));
        assert!(!is_round(1.01));
        assert!(!is_round(35.35));
    }

    #[test]
    fn test_is_multiple_of_quarter() {
        assert!(is_multiple_of(9.0, 0.25));
        assert!(is_multiple_of(1.75, 0.25));
        assert!(!is_multiple_of(1.01, 0.25));
        assert!(!is_multiple_of(35.35, 0.25));
    }
}
