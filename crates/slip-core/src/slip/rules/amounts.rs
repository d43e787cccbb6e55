//! Monetary amount extraction and the strict whole-input parser.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::patterns::{
    AMOUNT_FALLBACK_PATTERNS, AMOUNT_KEYWORD_PATTERNS, SIMPLE_AMOUNT, SIMPLE_AMOUNT_FALLBACK,
};
use super::{first_accepted, Candidate, FieldExtractor};

/// Values at or below this are day-of-month and clock fragments, not
/// money.
fn noise_floor() -> Decimal {
    Decimal::new(99, 2)
}

/// Strip grouping commas; when more than one dot remains, all but the
/// last are grouping separators too.
fn normalize_decimal(raw: &str) -> String {
    let cleaned = raw.replace(',', "");
    if cleaned.matches('.').count() > 1 {
        if let Some(last) = cleaned.rfind('.') {
            return cleaned
                .char_indices()
                .filter(|&(i, c)| c != '.' || i == last)
                .map(|(_, c)| c)
                .collect();
        }
    }
    cleaned
}

fn parse_candidate(raw: &str) -> Option<Decimal> {
    Decimal::from_str(&normalize_decimal(raw)).ok()
}

/// Finds the most plausible monetary value in lower-cased slip text.
///
/// Keyword-anchored patterns run first; bare numeric shapes are
/// consulted only when no keyword candidate clears the noise floor.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = Decimal;

    fn extract(&self, lower_text: &str) -> Option<Decimal> {
        first_accepted(lower_text, &AMOUNT_KEYWORD_PATTERNS, accept_amount)
            .or_else(|| first_accepted(lower_text, &AMOUNT_FALLBACK_PATTERNS, accept_amount))
    }
}

/// Acceptance predicate shared by both tiers.
fn accept_amount(candidate: Candidate<'_>) -> Option<Decimal> {
    parse_candidate(candidate.text).filter(|value| *value > noise_floor())
}

/// Whole-input amount parser, the strict sibling of
/// [`AmountExtractor`].
///
/// Serves two callers: free-form typed-in amounts, and the reference
/// extractor's amount-rejection check. The entire trimmed input must
/// be one decimal-shaped numeral, optionally followed by a currency
/// marker; a bare integer-or-decimal of up to nine integer digits is
/// accepted as a fallback. Longer bare digit runs are identifiers, not
/// amounts. Non-positive values are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleAmountParser;

impl SimpleAmountParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, text: &str) -> Option<Decimal> {
        let trimmed = text.trim();
        let raw = SIMPLE_AMOUNT
            .captures(trimmed)
            .or_else(|| SIMPLE_AMOUNT_FALLBACK.captures(trimmed))
            .and_then(|caps| caps.get(1))?;
        parse_candidate(raw.as_str()).filter(|value| *value > Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(text: &str) -> Option<Decimal> {
        AmountExtractor::new().extract(&text.to_lowercase())
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn keyword_before_number() {
        assert_eq!(amount("Total 1,234.56 บาท"), Some(dec("1234.56")));
        assert_eq!(amount("ยอดชำระ 250.00"), Some(dec("250.00")));
    }

    #[test]
    fn number_before_currency() {
        assert_eq!(amount("1,234.56 baht"), Some(dec("1234.56")));
        assert_eq!(amount("599.00บาท"), Some(dec("599.00")));
    }

    #[test]
    fn dots_as_grouping_separators() {
        assert_eq!(amount("ยอด 1.234.56"), Some(dec("1234.56")));
    }

    #[test]
    fn noise_floor_rejects_small_fragments() {
        assert_eq!(amount("total 0.50"), None);
        assert_eq!(amount("0.99"), None);
    }

    #[test]
    fn fallback_decimal_shapes() {
        assert_eq!(amount("ค่าธรรมเนียม 35.00"), Some(dec("35.00")));
        assert_eq!(amount("โอน 12,345.00 เรียบร้อย"), Some(dec("12345.00")));
    }

    #[test]
    fn fallback_integer_shapes() {
        assert_eq!(amount("1,250"), Some(dec("1250")));
        assert_eq!(amount("450"), Some(dec("450")));
    }

    #[test]
    fn long_digit_runs_are_not_amounts() {
        assert_eq!(amount("1234567890"), None);
        assert_eq!(amount("12345678901234"), None);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(amount(""), None);
    }

    #[test]
    fn simple_parser_accepts_whole_input_amounts() {
        let parser = SimpleAmountParser::new();
        assert_eq!(parser.parse("1,234.56 บาท"), Some(dec("1234.56")));
        assert_eq!(parser.parse(" 750 thb "), Some(dec("750")));
        assert_eq!(parser.parse("500"), Some(dec("500")));
        assert_eq!(parser.parse("1234.56"), Some(dec("1234.56")));
    }

    #[test]
    fn simple_parser_rejects_non_amounts() {
        let parser = SimpleAmountParser::new();
        assert_eq!(parser.parse("12345678901234"), None);
        assert_eq!(parser.parse("1234567890"), None);
        assert_eq!(parser.parse("0"), None);
        assert_eq!(parser.parse("ab12345678"), None);
        assert_eq!(parser.parse(""), None);
    }
}
