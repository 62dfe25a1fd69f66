//! # Validation Module
//!
//! The gate a receipt must pass before it is scored.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Pipeline                                │
//! │                                                                         │
//! │  1. Presence   retailer, date, time, total non-empty; items non-empty  │
//! │       │        ✗ → MissingField                                         │
//! │       ▼                                                                 │
//! │  2. Date       YYYY-MM-DD              ✗ → InvalidDateFormat            │
//! │       ▼                                                                 │
//! │  3. Time       HH:MM (24h)             ✗ → InvalidTimeFormat            │
//! │       ▼                                                                 │
//! │  4. Total      finite real number      ✗ → InvalidTotalFormat           │
//! │       ▼                                                                 │
//! │  5. Items      description, price, price parses   ✗ → InvalidItem       │
//! │       ▼                                                                 │
//! │     Ok(())                                                              │
//! │                                                                         │
//! │  The first failing check wins. There is no partial acceptance.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::validate;
//! use receipt_core::{Item, Receipt, ValidationError};
//!
//! let mut receipt = Receipt {
//!     retailer: "Walgreens".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "08:13".to_string(),
//!     total: "2.65".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
//! };
//! assert!(validate(&receipt).is_ok());
//!
//! receipt.purchase_time = "8:13pm".to_string();
//! assert_eq!(validate(&receipt), Err(ValidationError::InvalidTimeFormat));
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::amount::parse_amount;
use crate::error::{ItemDefect, ValidationError};
use crate::types::{Item, Receipt};
use crate::{DATE_FORMAT, TIME_FORMAT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Runs every check against the receipt, stopping at the first failure.
pub fn validate(receipt: &Receipt) -> ValidationResult<()> {
    validate_presence(receipt)?;
    validate_purchase_date(&receipt.purchase_date)?;
    validate_purchase_time(&receipt.purchase_time)?;
    validate_total(&receipt.total)?;

    for (index, item) in receipt.items.iter().enumerate() {
        validate_item(index, item)?;
    }

    Ok(())
}

// =============================================================================
// Field Validators
// =============================================================================

/// Checks that no required top-level field is empty.
///
/// Emptiness is checked on the raw value; a retailer of `"   "` is present.
pub fn validate_presence(receipt: &Receipt) -> ValidationResult<()> {
    let missing = receipt.retailer.is_empty()
        || receipt.purchase_date.is_empty()
        || receipt.purchase_time.is_empty()
        || receipt.total.is_empty()
        || receipt.items.is_empty();

    if missing {
        return Err(ValidationError::MissingField);
    }

    Ok(())
}

/// Validates `purchaseDate` as a `YYYY-MM-DD` calendar date.
///
/// All three fields must be zero-padded; `2022-1-1` is rejected.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_purchase_date;
///
/// assert!(validate_purchase_date("2022-01-01").is_ok());
/// assert!(validate_purchase_date("2022-02-30").is_err());
/// assert!(validate_purchase_date("01/01/2022").is_err());
/// assert!(validate_purchase_date("22-01-01").is_err());
/// ```
pub fn validate_purchase_date(raw: &str) -> ValidationResult<NaiveDate> {
    if !has_date_shape(raw) {
        return Err(ValidationError::InvalidDateFormat);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ValidationError::InvalidDateFormat)
}

/// Validates `purchaseTime` as a 24-hour `HH:MM` clock time.
///
/// The hour may be a single digit (`9:05`); minutes are always two digits.
pub fn validate_purchase_time(raw: &str) -> ValidationResult<NaiveTime> {
    if !has_time_shape(raw) {
        return Err(ValidationError::InvalidTimeFormat);
    }
    NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| ValidationError::InvalidTimeFormat)
}

/// Validates `total` as a real number.
pub fn validate_total(raw: &str) -> ValidationResult<f64> {
    parse_amount(raw).ok_or(ValidationError::InvalidTotalFormat)
}

/// Validates a single item. `index` is only used for the error report.
pub fn validate_item(index: usize, item: &Item) -> ValidationResult<()> {
    let defect = if item.short_description.is_empty() {
        Some(ItemDefect::MissingDescription)
    } else if item.price.is_empty() {
        Some(ItemDefect::MissingPrice)
    } else if parse_amount(&item.price).is_none() {
        Some(ItemDefect::InvalidPrice)
    } else {
        None
    };

    match defect {
        Some(reason) => Err(ValidationError::InvalidItem { index, reason }),
        None => Ok(()),
    }
}

// =============================================================================
// Shape Checks
// =============================================================================
//
// chrono's `%Y`, `%m`, `%d` and `%M` tolerate unpadded numbers, signs and
// leading spaces. These run first so only the exact layout reaches chrono.

/// `DDDD-DD-DD`, ASCII only.
fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// `D:DD` or `DD:DD`, ASCII only.
fn has_time_shape(raw: &str) -> bool {
    match raw.split_once(':') {
        Some((hour, minute)) => {
            (1..=2).contains(&hour.len())
                && minute.len() == 2
                && hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "35.35".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
            ],
        }
    }

    #[test]
    fn test_valid_receipt_passes() {
        assert_eq!(validate(&valid_receipt()), Ok(()));
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        let blankers: [fn(&mut Receipt); 5] = [
            |r| r.retailer.clear(),
            |r| r.purchase_date.clear(),
            |r| r.purchase_time.clear(),
            |r| r.total.clear(),
            |r| r.items.clear(),
        ];

        for blank in blankers {
            let mut receipt = valid_receipt();
            blank(&mut receipt);
            assert_eq!(validate(&receipt), Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn test_presence_checked_before_formats() {
        let receipt = Receipt {
            retailer: String::new(),
            purchase_date: "not a date".to_string(),
            ..valid_receipt()
        };
        assert_eq!(validate(&receipt), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_invalid_date() {
        let cases = [
            "2022-13-01",
            "2022/01/01",
            "01-01-2022",
            "2022-01-01T00:00",
            "2022-1-1",
            "22-01-01",
            "+12022-01-01",
            " 2022-01-01",
            "2022-01- 1",
            "2022-01-01 ",
            "２０２２-01-01",
        ];
        for bad in cases {
            let receipt = Receipt {
                purchase_date: bad.to_string(),
                ..valid_receipt()
            };
            assert_eq!(
                validate(&receipt),
                Err(ValidationError::InvalidDateFormat),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_invalid_time() {
        let cases = [
            "25:00", "13:60", "1pm", "13:01:00", "13:1", "13: 1", " 13:01", "113:01", ":01", "+1:01",
        ];
        for bad in cases {
            let receipt = Receipt {
                purchase_time: bad.to_string(),
                ..valid_receipt()
            };
            assert_eq!(
                validate(&receipt),
                Err(ValidationError::InvalidTimeFormat),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_single_digit_hour_is_accepted() {
        let time = validate_purchase_time("1:01").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(1, 1, 0).unwrap());
        assert!(validate_purchase_time("09:05").is_ok());
    }

    #[test]
    fn test_date_checked_before_time() {
        let receipt = Receipt {
            purchase_date: "yesterday".to_string(),
            purchase_time: "noon".to_string(),
            ..valid_receipt()
        };
        assert_eq!(validate(&receipt), Err(ValidationError::InvalidDateFormat));
    }

    #[test]
    fn test_invalid_total() {
        for bad in ["thirty", "35,35", "$35.35", "inf"] {
            let receipt = Receipt {
                total: bad.to_string(),
                ..valid_receipt()
            };
            assert_eq!(
                validate(&receipt),
                Err(ValidationError::InvalidTotalFormat),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_invalid_items() {
        let mut receipt = valid_receipt();
        receipt.items[1] = Item::new("", "1.00");
        assert_eq!(
            validate(&receipt),
            Err(ValidationError::InvalidItem {
                index: 1,
                reason: ItemDefect::MissingDescription,
            })
        );

        receipt.items[1] = Item::new("Gum", "");
        assert_eq!(
            validate(&receipt),
            Err(ValidationError::InvalidItem {
                index: 1,
                reason: ItemDefect::MissingPrice,
            })
        );

        receipt.items[0] = Item::new("Gum", "free");
        assert_eq!(
            validate(&receipt),
            Err(ValidationError::InvalidItem {
                index: 0,
                reason: ItemDefect::InvalidPrice,
            })
        );
    }

    #[test]
    fn test_field_validators_return_parsed_values() {
        let date = validate_purchase_date("2022-03-20").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 3, 20).unwrap());

        let time = validate_purchase_time("14:33").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(14, 33, 0).unwrap());

        assert_eq!(validate_total("9.00"), Ok(9.0));
    }
}
