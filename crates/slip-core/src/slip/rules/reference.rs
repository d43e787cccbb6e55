//! Transaction reference extraction with date/amount disambiguation.

use super::amounts::SimpleAmountParser;
use super::dates::DateTimeExtractor;
use super::patterns::REFERENCE_SHAPES;
use super::{first_accepted, FieldExtractor};

/// Finds the most plausible transaction identifier in lower-cased slip
/// text.
///
/// A reference number is distinguished only by shape and by *not*
/// parsing as a timestamp or an amount, so the extractor holds the
/// other two grammars and checks every candidate against them before
/// accepting it. A rejected candidate advances the scan to the next
/// shape in the catalogue.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceExtractor {
    date_guard: DateTimeExtractor,
    amount_guard: SimpleAmountParser,
    reject_dates: bool,
    reject_amounts: bool,
}

impl ReferenceExtractor {
    pub fn new() -> Self {
        Self {
            date_guard: DateTimeExtractor::new(),
            amount_guard: SimpleAmountParser::new(),
            reject_dates: true,
            reject_amounts: true,
        }
    }

    /// Set whether candidates that parse as timestamps are discarded.
    pub fn with_date_rejection(mut self, enabled: bool) -> Self {
        self.reject_dates = enabled;
        self
    }

    /// Set whether candidates that parse as amounts are discarded.
    pub fn with_amount_rejection(mut self, enabled: bool) -> Self {
        self.reject_amounts = enabled;
        self
    }

    fn is_date_like(&self, candidate: &str) -> bool {
        // Printed dates use slashes and dashes interchangeably; the
        // template check keys on dashes.
        let normalized = candidate.replace('/', "-");
        self.date_guard.matches_template(&normalized)
    }
}

impl Default for ReferenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ReferenceExtractor {
    type Output = String;

    fn extract(&self, lower_text: &str) -> Option<String> {
        first_accepted(lower_text, &REFERENCE_SHAPES, |candidate| {
            let token = candidate.text.trim();
            if self.reject_dates && self.is_date_like(token) {
                return None;
            }
            if self.reject_amounts && self.amount_guard.parse(token).is_some() {
                return None;
            }
            Some(token.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(text: &str) -> Option<String> {
        ReferenceExtractor::new().extract(&text.to_lowercase())
    }

    #[test]
    fn labeled_reference() {
        assert_eq!(
            reference("เลขที่อ้างอิง KB2025080712345"),
            Some("kb2025080712345".to_string())
        );
        assert_eq!(
            reference("TRAN ID: 9876543210abc"),
            Some("9876543210abc".to_string())
        );
        assert_eq!(reference("Ref AB12CD34EF"), Some("ab12cd34ef".to_string()));
    }

    #[test]
    fn long_bare_digit_run() {
        assert_eq!(reference("12345678901234"), Some("12345678901234".to_string()));
        assert_eq!(reference("1234567890"), Some("1234567890".to_string()));
    }

    #[test]
    fn short_digit_runs_read_as_amounts() {
        // Nine digits or fewer parse as plausible amounts, so they
        // never survive the cross-check.
        assert_eq!(reference("ref 12345678"), None);
        assert_eq!(reference("ref 1234567890"), Some("1234567890".to_string()));
    }

    #[test]
    fn date_shaped_candidates_are_rejected() {
        assert_eq!(reference("ref 07-08-2568"), None);
        assert_eq!(reference("ref 07/08/2568"), None);
    }

    #[test]
    fn amount_shaped_candidates_are_rejected() {
        assert_eq!(reference("ref 1,234.56"), None);
    }

    #[test]
    fn alphanumeric_run_as_last_resort() {
        assert_eq!(reference("payment ok AB12CD34EF"), Some("ab12cd34ef".to_string()));
    }

    #[test]
    fn nothing_reference_shaped() {
        assert_eq!(reference("Total 250.00 บาท"), None);
        assert_eq!(reference(""), None);
    }

    #[test]
    fn guards_can_be_disabled() {
        let extractor = ReferenceExtractor::new().with_date_rejection(false);
        assert_eq!(
            extractor.extract("ref 07-08-2568"),
            Some("07-08-2568".to_string())
        );
    }
}
