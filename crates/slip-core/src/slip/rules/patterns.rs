//! Static pattern catalogues for slip field extraction.
//!
//! Catalogue order is load-bearing: extractors scan each list top to
//! bottom and stop at the first accepted candidate, so an entry's
//! position encodes its priority over later, looser shapes.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Keyword-anchored amount tier: a label adjacent to a
    // decimal-shaped number, in both orientations. \D*? keeps the
    // label and the number free of intervening digits.
    pub static ref AMOUNT_KEYWORD_PATTERNS: Vec<Regex> = vec![
        Regex::new(
            r"(?i)(?:total|amount|รวม|ยอด|ชำระ|เป็นเงิน)\D*?(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{1,2})?)"
        )
        .unwrap(),
        Regex::new(
            r"(?i)(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{1,2})?)\D*?(?:บาท|baht|thb|total|amount|รวม|ยอด|ชำระ|เป็นเงิน)"
        )
        .unwrap(),
    ];

    // Fallback amount tier: standalone numeric tokens, most specific
    // shape first. Bare runs of 10+ digits belong to the reference
    // grammar, so the final integer shape stops at 9.
    pub static ref AMOUNT_FALLBACK_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\b(\d{1,3}(?:,\d{3})*\.\d{2})\b").unwrap(),
        Regex::new(r"\b(\d+\.\d{2})\b").unwrap(),
        Regex::new(r"\b(\d{1,3}(?:,\d{3})*)\b").unwrap(),
        Regex::new(r"\b(\d{1,9})\b").unwrap(),
    ];

    // Date/time shapes, most information-bearing first.
    pub static ref DATETIME_SHAPES: Vec<Regex> = vec![
        // DD-MM-YYYY HH:MM:SS
        Regex::new(r"(\d{2}[-/]\d{2}[-/]\d{4}\s+\d{2}:\d{2}:\d{2})").unwrap(),
        // DD-MM-YYYY HH:MM
        Regex::new(r"(\d{2}[-/]\d{2}[-/]\d{4}\s+\d{2}:\d{2})").unwrap(),
        // DD-MM-YY HH:MM:SS
        Regex::new(r"(\d{2}[-/]\d{2}[-/]\d{2}\s+\d{2}:\d{2}:\d{2})").unwrap(),
        // DD-MM-YY HH:MM
        Regex::new(r"(\d{2}[-/]\d{2}[-/]\d{2}\s+\d{2}:\d{2})").unwrap(),
        // D Mon YYYY HH:MM
        Regex::new(
            r"(?i)(\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}\s+\d{2}:\d{2})"
        )
        .unwrap(),
        // D Mon YY HH:MM
        Regex::new(
            r"(?i)(\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{2}\s+\d{2}:\d{2})"
        )
        .unwrap(),
        // YYYY-MM-DD HH:MM:SS
        Regex::new(r"(\d{4}[-/]\d{2}[-/]\d{2}\s+\d{2}:\d{2}:\d{2})").unwrap(),
        // YYYY-MM-DD HH:MM
        Regex::new(r"(\d{4}[-/]\d{2}[-/]\d{2}\s+\d{2}:\d{2})").unwrap(),
        // DD-MM-YYYY
        Regex::new(r"(\d{2}[-/]\d{2}[-/]\d{4})").unwrap(),
        // DD-MM-YY
        Regex::new(r"(\d{2}[-/]\d{2}[-/]\d{2})").unwrap(),
        // HH:MM:SS, bare clock time
        Regex::new(r"(\d{2}:\d{2}:\d{2})").unwrap(),
        // HH:MM, bare clock time
        Regex::new(r"(\d{2}:\d{2})").unwrap(),
    ];

    // Reference number shapes, most specific first: labeled tokens,
    // long bare digit runs, short labeled digit runs, and a generic
    // alphanumeric run as last resort.
    pub static ref REFERENCE_SHAPES: Vec<Regex> = vec![
        Regex::new(
            r"(?i)(?:Ref\s*|Reference\s*|เลขที่อ้างอิง\s*|Ref No\.\s*|TRAN ID:\s*|TRN ID:\s*|Trx Ref:\s*|TRN\s*|Txn\s*|Transaction No\.\s*|หมายเลขอ้างอิง\s*|รหัสอ้างอิง\s*|รหัสรายการ\s*|หมายเลขรายการ\s*|เลขที่อ้างอิงรายการ\s*)(\S{8,40})"
        )
        .unwrap(),
        Regex::new(r"(\d{10,30})").unwrap(),
        Regex::new(r"(?i)(?:R\s*|TID\s*|Tran ID\s*|Ref\s*)\s*(\d{6,25})").unwrap(),
        Regex::new(r"(?i)([A-Z0-9]{8,40})").unwrap(),
    ];

    // Whole-input amount shapes for SimpleAmountParser. The fallback
    // integer part stops at 9 digits, same boundary as the extraction
    // fallback above.
    pub static ref SIMPLE_AMOUNT: Regex = Regex::new(
        r"(?i)^\s*(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{1,2})?)\s*(?:บาท|baht|thb|$)"
    )
    .unwrap();
    pub static ref SIMPLE_AMOUNT_FALLBACK: Regex =
        Regex::new(r"^\s*(\d{1,9}(?:\.\d+)?)\s*$").unwrap();

    // First four-digit run in a candidate; Buddhist-era year detection.
    pub static ref FOUR_DIGIT_YEAR: Regex = Regex::new(r"\d{4}").unwrap();
}
