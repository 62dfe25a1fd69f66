//! Opaque receipt identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The token a client uses to look up a receipt's points.
///
/// Generated ids are random UUID v4 strings, but nothing depends on that
/// format: any string arriving in a lookup path is a valid key, it just may
/// not be found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generates a fresh, unpredictable id.
    pub fn generate() -> Self {
        ReceiptId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(value: String) -> Self {
        ReceiptId(value)
    }
}

impl From<&str> for ReceiptId {
    fn from(value: &str) -> Self {
        ReceiptId(value.to_string())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
