//! Parsed slip data model.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured fields recovered from one payment slip.
///
/// Every field is independently optional: a slip may yield any subset
/// of them, and extraction degrades to `None` rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSlip {
    /// Monetary amount, currency-unit-agnostic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Transaction timestamp, naive, second precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,

    /// Opaque transaction identifier, trimmed, as matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_no: Option<String>,
}

impl ParsedSlip {
    /// Whether nothing at all was recovered from the text.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.timestamp.is_none() && self.reference_no.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn empty_slip_serializes_to_empty_object() {
        let slip = ParsedSlip::default();
        assert!(slip.is_empty());
        assert_eq!(serde_json::to_string(&slip).unwrap(), "{}");
    }

    #[test]
    fn populated_slip_round_trips() {
        let slip = ParsedSlip {
            amount: Some(Decimal::from_str("1234.56").unwrap()),
            timestamp: None,
            reference_no: Some("kb2025080712345".to_string()),
        };

        let json = serde_json::to_string(&slip).unwrap();
        let back: ParsedSlip = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slip);
    }
}
