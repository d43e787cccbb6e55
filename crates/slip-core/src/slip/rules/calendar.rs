//! Thai calendar normalization: month aliases and Buddhist-era years.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::FOUR_DIGIT_YEAR;

/// Four-digit years above this are Buddhist era.
const BUDDHIST_ERA_CUTOFF: i32 = 2500;

/// Offset between the Buddhist and the civil calendar.
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Thai month tokens and their canonical Latin forms, abbreviations
/// before full names. Applied in table order as literal replacements.
const MONTH_ALIASES: &[(&str, &str)] = &[
    ("ม.ค.", "Jan"),
    ("ก.พ.", "Feb"),
    ("มี.ค.", "Mar"),
    ("เม.ย.", "Apr"),
    ("พ.ค.", "May"),
    ("มิ.ย.", "Jun"),
    ("ก.ค.", "Jul"),
    ("ส.ค.", "Aug"),
    ("ก.ย.", "Sep"),
    ("ต.ค.", "Oct"),
    ("พ.ย.", "Nov"),
    ("ธ.ค.", "Dec"),
    ("มกราคม", "January"),
    ("กุมภาพันธ์", "February"),
    ("มีนาคม", "March"),
    ("เมษายน", "April"),
    ("พฤษภาคม", "May"),
    ("มิถุนายน", "June"),
    ("กรกฎาคม", "July"),
    ("สิงหาคม", "August"),
    ("กันยายน", "September"),
    ("ตุลาคม", "October"),
    ("พฤศจิกายน", "November"),
    ("ธันวาคม", "December"),
];

lazy_static! {
    static ref MONTH_PATTERNS: Vec<(Regex, &'static str)> = MONTH_ALIASES
        .iter()
        .map(|(thai, latin)| {
            let pattern = Regex::new(&format!("(?i){}", regex::escape(thai))).unwrap();
            (pattern, *latin)
        })
        .collect();
}

/// Rewrite every Thai month token to its Latin form, leaving all other
/// text and its casing untouched. A no-op on text without Thai month
/// tokens, so normalizing twice is the same as normalizing once.
pub fn replace_thai_months(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, latin) in MONTH_PATTERNS.iter() {
        if pattern.is_match(&out) {
            out = pattern.replace_all(&out, *latin).into_owned();
        }
    }
    out
}

/// Convert a Buddhist-era year embedded in `candidate` to the civil
/// calendar. The first four-digit run is inspected; values above 2500
/// are Buddhist era, and every occurrence of that run is rewritten.
pub fn convert_buddhist_era(candidate: &str) -> Cow<'_, str> {
    if let Some(m) = FOUR_DIGIT_YEAR.find(candidate) {
        if let Ok(year) = m.as_str().parse::<i32>() {
            if year > BUDDHIST_ERA_CUTOFF {
                let civil = (year - BUDDHIST_ERA_OFFSET).to_string();
                return Cow::Owned(candidate.replace(m.as_str(), &civil));
            }
        }
    }
    Cow::Borrowed(candidate)
}
