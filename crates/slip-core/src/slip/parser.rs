//! Slip parsing orchestration.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::ExtractionConfig;
use crate::models::slip::ParsedSlip;
use crate::ocr::OcrEngine;

use super::rules::{
    amounts::AmountExtractor, dates::DateTimeExtractor, reference::ReferenceExtractor,
    FieldExtractor,
};

/// A parse together with its provenance, for callers that surface the
/// raw OCR text and timing alongside the fields.
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    /// Extracted fields.
    pub slip: ParsedSlip,
    /// The text the fields were extracted from.
    pub raw_text: String,
    /// Wall-clock parse time in milliseconds.
    pub processing_time_ms: u64,
}

/// Heuristic slip parser.
///
/// Runs the amount, timestamp and reference extractors independently
/// over the same input and assembles the result. Stateless: one
/// instance may serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct SlipParser {
    amounts: AmountExtractor,
    dates: DateTimeExtractor,
    references: ReferenceExtractor,
}

impl SlipParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            amounts: AmountExtractor::new(),
            dates: DateTimeExtractor::new(),
            references: ReferenceExtractor::new(),
        }
    }

    /// Build a parser from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_date_rejection(config.reject_date_like_references)
            .with_amount_rejection(config.reject_amount_like_references)
    }

    /// Set whether reference candidates that parse as timestamps are
    /// discarded.
    pub fn with_date_rejection(mut self, enabled: bool) -> Self {
        self.references = self.references.with_date_rejection(enabled);
        self
    }

    /// Set whether reference candidates that parse as amounts are
    /// discarded.
    pub fn with_amount_rejection(mut self, enabled: bool) -> Self {
        self.references = self.references.with_amount_rejection(enabled);
        self
    }

    /// Parse raw slip text.
    ///
    /// Total: every input maps to a [`ParsedSlip`], with fields the
    /// text does not support left empty.
    pub fn parse(&self, text: &str) -> ParsedSlip {
        info!("parsing slip text of {} characters", text.len());

        // Keyword search is case-insensitive; date matching needs the
        // original casing.
        let lower = text.to_lowercase();

        let slip = ParsedSlip {
            amount: self.amounts.extract(&lower),
            timestamp: self.dates.extract(text),
            reference_no: self.references.extract(&lower),
        };

        debug!(
            "extracted amount={:?} timestamp={:?} reference={:?}",
            slip.amount, slip.timestamp, slip.reference_no
        );

        slip
    }

    /// Parse and keep the raw text and timing alongside the fields.
    pub fn parse_report(&self, text: &str) -> ParseReport {
        let start = Instant::now();
        let slip = self.parse(text);
        ParseReport {
            slip,
            raw_text: text.to_string(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Run the supplied OCR engine over an image and parse its text.
    /// The engine call is the only fallible step.
    pub fn parse_image<O: OcrEngine>(&self, engine: &O, image: &[u8]) -> Result<ParsedSlip> {
        let text = engine.recognize(image)?;
        Ok(self.parse(&text))
    }
}

impl Default for SlipParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{OcrError, SlipError};
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn parses_a_complete_slip() {
        let text = "ธนาคารกสิกรไทย\nโอนเงินสำเร็จ\n07/08/2568 14:30\nTotal 1,234.56 บาท\nเลขที่อ้างอิง KB2025080712345";

        let slip = SlipParser::new().parse(text);

        assert_eq!(slip.amount, Some(Decimal::from_str("1234.56").unwrap()));
        assert_eq!(slip.timestamp, Some(dt(2025, 8, 7, 14, 30, 0)));
        assert_eq!(slip.reference_no, Some("kb2025080712345".to_string()));
    }

    #[test]
    fn empty_input_parses_to_empty_slip() {
        let slip = SlipParser::new().parse("");
        assert!(slip.is_empty());
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = "1 ก.พ. 2568 10:15 ยอด 250.00 บาท Ref TX12345678";
        let parser = SlipParser::new();
        assert_eq!(parser.parse(text), parser.parse(text));
    }

    #[test]
    fn bare_long_digit_run_is_a_reference_not_an_amount() {
        let slip = SlipParser::new().parse("12345678901234");

        assert_eq!(slip.reference_no, Some("12345678901234".to_string()));
        assert_eq!(slip.amount, None);
        assert_eq!(slip.timestamp, None);
    }

    #[test]
    fn date_is_never_returned_as_reference() {
        let slip = SlipParser::new().parse("ref 07/08/2568");

        assert_eq!(slip.timestamp, Some(dt(2025, 8, 7, 0, 0, 0)));
        assert_eq!(slip.reference_no, None);
    }

    #[test]
    fn report_carries_raw_text() {
        let report = SlipParser::new().parse_report("Total 99.50 บาท");
        assert_eq!(report.raw_text, "Total 99.50 บาท");
        assert_eq!(
            report.slip.amount,
            Some(Decimal::from_str("99.50").unwrap())
        );
    }

    struct FixedOcr(&'static str);

    impl OcrEngine for FixedOcr {
        fn recognize(&self, _image: &[u8]) -> std::result::Result<String, OcrError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingOcr;

    impl OcrEngine for FailingOcr {
        fn recognize(&self, _image: &[u8]) -> std::result::Result<String, OcrError> {
            Err(OcrError::Recognition("engine offline".to_string()))
        }
    }

    #[test]
    fn parse_image_equals_parse_of_recognized_text() {
        let parser = SlipParser::new();
        let engine = FixedOcr("Total 1,234.56 บาท");

        let via_image = parser.parse_image(&engine, &[0u8; 4]).unwrap();
        assert_eq!(via_image, parser.parse("Total 1,234.56 บาท"));
    }

    #[test]
    fn parse_image_propagates_engine_failure() {
        let parser = SlipParser::new();
        let err = parser.parse_image(&FailingOcr, &[0u8; 4]).unwrap_err();
        assert!(matches!(err, SlipError::Ocr(OcrError::Recognition(_))));
    }
}
