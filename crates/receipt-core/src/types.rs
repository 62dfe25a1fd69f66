//! # Domain Types
//!
//! Wire types accepted by the service and the value it produces.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │      Item       │   │     Points      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │   │  short_desc     │   │  u64            │       │
//! │  │  purchase_date  │──►│  price          │   │  (score result) │       │
//! │  │  purchase_time  │   └─────────────────┘   └─────────────────┘       │
//! │  │  total          │                                                    │
//! │  │  items[]        │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw Strings
//! Every field is kept exactly as it arrived on the wire. Parsing happens in
//! [`crate::validation`] and again inside [`crate::scoring`]; nothing here
//! interprets the values.
//!
//! An absent field and an explicit `null` both decode to the empty value.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Item
// =============================================================================

/// A single purchased line on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Short product description as printed on the receipt.
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,

    /// Unit price as a decimal currency string (e.g. "6.49").
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

impl Item {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt submitted for scoring.
///
/// Absent JSON fields deserialize to empty values so the validator, not the
/// JSON decoder, reports them as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Retailer or store name.
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,

    /// Total amount paid as a decimal currency string.
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,

    /// Purchased items, in receipt order.
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
}

/// Decodes `null` as `T::default()`, so it is reported the same as a missing
/// field rather than as malformed JSON.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Points
// =============================================================================

/// A non-negative reward-points total.
///
/// Serialized as a bare JSON number, so the TypeScript side sees `number`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(transparent)]
pub struct Points(#[ts(type = "number")] u64);

impl Points {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Points(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Points(0)
    }
}

impl From<u64> for Points {
    fn from(value: u64) -> Self {
        Points(value)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_deserializes_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "35.35",
            "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}]
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items, vec![Item::new("Mountain Dew 12PK", "6.49")]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let receipt: Receipt = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert!(receipt.total.is_empty());
        assert!(receipt.items.is_empty());

        let item: Item = serde_json::from_str(r#"{"price": "1.00"}"#).unwrap();
        assert!(item.short_description.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = r#"{
            "retailer": null,
            "purchaseDate": "2022-01-01",
            "items": null
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert!(receipt.retailer.is_empty());
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.purchase_date, "2022-01-01");

        let item: Item =
            serde_json::from_str(r#"{"shortDescription": null, "price": "1.00"}"#).unwrap();
        assert_eq!(item, Item::new("", "1.00"));
    }

    #[test]
    fn test_wrong_json_type_is_still_an_error() {
        assert!(serde_json::from_str::<Receipt>(r#"{"total": 35.35}"#).is_err());
        assert!(serde_json::from_str::<Receipt>(r#"{"items": {}}"#).is_err());
    }

    #[test]
    fn test_points_typescript_binding_is_number() {
        assert_eq!(Points::inline(), "number");
        assert!(Points::decl().contains("number"));
        assert!(!Points::decl().contains("bigint"));
    }

    #[test]
    fn test_points_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Points::new(28)).unwrap(), "28");
        assert_eq!(Points::new(28).to_string(), "28");
    }
}
