//! # Scoring Module
//!
//! Seven independent rules, each contributing a whole number of points.
//! The receipt's score is their sum.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Rule                 Contribution                                   │
//! │  ─  ───────────────────  ─────────────────────────────────────────────  │
//! │  1  Retailer density     +1 per ASCII letter or digit in retailer       │
//! │  2  Round total          +50 if total has no fractional part            │
//! │  3  Quarter total        +25 if total % 0.25 == 0                       │
//! │  4  Item pairs           +5 per two items (count / 2)                   │
//! │  5  Description length   +ceil(price * 0.2) per item whose trimmed      │
//! │                          description length is a multiple of 3          │
//! │  6  Odd day              +6 if day-of-month is odd                      │
//! │  7  Afternoon window     +10 if purchase hour == 14                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parse Failures
//! The scorer re-parses total, prices, date and time with the same parsers the
//! validator uses. A receipt normally reaches it only after
//! [`crate::validation::validate`], but the scorer does not rely on that: a
//! field that fails to parse contributes zero to the rules that read it, and
//! every other rule is still applied.
//!
//! Rule 7 checks the 14:00-14:59 hour only.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::amount::{is_multiple_of, is_round, parse_amount};
use crate::types::{Item, Points, Receipt};
use crate::validation::{validate_purchase_date, validate_purchase_time};

// =============================================================================
// Rule Constants
// =============================================================================

pub const ROUND_TOTAL_POINTS: u64 = 50;
pub const QUARTER_TOTAL_POINTS: u64 = 25;
pub const QUARTER: f64 = 0.25;
pub const ITEM_PAIR_POINTS: u64 = 5;
/// Trimmed description lengths divisible by this earn the price bonus.
pub const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;
pub const AFTERNOON_HOUR: u32 = 14;

// =============================================================================
// Points Breakdown
// =============================================================================

/// Per-rule contributions for one receipt.
///
/// Handy for logging why a receipt earned what it did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_total: u64,
    pub quarter_total: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all seven contributions.
    pub fn total(&self) -> Points {
        let sum = [
            self.retailer,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add);

        Points::new(sum)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Scores a receipt. Never fails and never panics.
///
/// ## Example
/// ```rust
/// use receipt_core::{score, Item, Receipt};
///
/// let receipt = Receipt {
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: "2022-03-20".to_string(),
///     purchase_time: "14:33".to_string(),
///     total: "9.00".to_string(),
///     items: vec![Item::new("Gatorade", "2.25"); 4],
/// };
///
/// assert_eq!(score(&receipt).value(), 109);
/// ```
pub fn score(receipt: &Receipt) -> Points {
    score_breakdown(receipt).total()
}

/// Applies each rule and returns the individual contributions.
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = parse_amount(&receipt.total);
    let date = validate_purchase_date(&receipt.purchase_date).ok();
    let time = validate_purchase_time(&receipt.purchase_time).ok();

    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_total: total.map_or(0, round_total_points),
        quarter_total: total.map_or(0, quarter_total_points),
        item_pairs: item_pair_points(receipt.items.len()),
        descriptions: receipt
            .items
            .iter()
            .map(description_points)
            .fold(0, u64::saturating_add),
        odd_day: date.map_or(0, odd_day_points),
        afternoon: time.map_or(0, afternoon_points),
    }
}

// =============================================================================
// Individual Rules
// =============================================================================

/// Rule 1. Punctuation, whitespace and non-ASCII letters do not count.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64
}

/// Rule 2.
pub fn round_total_points(total: f64) -> u64 {
    if is_round(total) {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// Rule 3.
pub fn quarter_total_points(total: f64) -> u64 {
    if is_multiple_of(total, QUARTER) {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

/// Rule 4. An odd item out earns nothing.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// Rule 5 for a single item.
///
/// Length is measured in bytes of the whitespace-trimmed description.
/// An unparseable or negative price contributes nothing.
pub fn description_points(item: &Item) -> u64 {
    let description = item.short_description.trim();
    if description.len() % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return 0;
    }

    match parse_amount(&item.price) {
        // `as` saturates on overflow, so huge prices clamp to u64::MAX
        Some(price) if price > 0.0 => (price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as u64,
        _ => 0,
    }
}

/// Rule 6.
pub fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Rule 7.
pub fn afternoon_points(time: NaiveTime) -> u64 {
    if time.hour() == AFTERNOON_HOUR {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
