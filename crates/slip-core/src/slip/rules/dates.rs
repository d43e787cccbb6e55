//! Timestamp extraction from slip text.

use std::borrow::Cow;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::calendar::{convert_buddhist_era, replace_thai_months};
use super::patterns::{DATETIME_SHAPES, FOUR_DIGIT_YEAR};
use super::{first_accepted, FieldExtractor};

/// What a format template describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateKind {
    DateTime,
    DateOnly,
    TimeOnly,
}

use TemplateKind::{DateOnly, DateTime, TimeOnly};

/// Format templates tried, in order, against a shape match:
/// (chrono format, kind, has a four-digit year field).
///
/// Four-digit-year templates are gated on the candidate actually
/// containing a four-digit run (strptime's `%Y` is fixed-width,
/// chrono's is not) and get the Buddhist-era conversion first.
const DATE_FORMATS: &[(&str, TemplateKind, bool)] = &[
    ("%d-%m-%Y %H:%M:%S", DateTime, true),
    ("%d/%m/%Y %H:%M:%S", DateTime, true),
    ("%d-%m-%Y %H:%M", DateTime, true),
    ("%d/%m/%Y %H:%M", DateTime, true),
    ("%d-%m-%y %H:%M:%S", DateTime, false),
    ("%d/%m/%y %H:%M:%S", DateTime, false),
    ("%d/%m/%y %H:%M", DateTime, false),
    ("%d-%m-%y %H:%M", DateTime, false),
    ("%d %b %Y %H:%M", DateTime, true),
    ("%d %b %y %H:%M", DateTime, false),
    ("%Y-%m-%d %H:%M:%S", DateTime, true),
    ("%Y-%m-%d %H:%M", DateTime, true),
    ("%d-%m-%Y", DateOnly, true),
    ("%d/%m/%Y", DateOnly, true),
    ("%d-%m-%y", DateOnly, false),
    ("%d/%m/%y", DateOnly, false),
    ("%H:%M:%S", TimeOnly, false),
    ("%H:%M", TimeOnly, false),
];

/// Date a time-only template parses onto; a result still sitting on it
/// carried no date at all.
fn time_only_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

/// Receipts carry same-day clock times, and the receipts come from one
/// zone; "today" is pinned to Bangkok (UTC+07:00, no DST).
fn bangkok_today() -> NaiveDate {
    let bangkok = FixedOffset::east_opt(7 * 3600).unwrap();
    Utc::now().with_timezone(&bangkok).date_naive()
}

/// Extracts the most plausible timestamp from slip text.
///
/// Scans an ordered catalogue of date/time shapes over
/// month-normalized, original-cased text; the first shape to match
/// wins the scan, and its first successfully parsing format template
/// wins outright.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeExtractor;

impl DateTimeExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Try every format template against a candidate string.
    fn parse_templates(&self, candidate: &str) -> Option<NaiveDateTime> {
        for &(fmt, kind, four_digit_year) in DATE_FORMATS {
            if four_digit_year && !FOUR_DIGIT_YEAR.is_match(candidate) {
                continue;
            }
            let input: Cow<'_, str> = if four_digit_year {
                convert_buddhist_era(candidate)
            } else {
                Cow::Borrowed(candidate)
            };
            let parsed = match kind {
                DateTime => NaiveDateTime::parse_from_str(&input, fmt).ok(),
                DateOnly => NaiveDate::parse_from_str(&input, fmt)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0)),
                TimeOnly => NaiveTime::parse_from_str(&input, fmt)
                    .ok()
                    .map(|t| time_only_epoch().and_time(t)),
            };
            if let Some(datetime) = parsed {
                return Some(datetime);
            }
        }
        None
    }

    /// Whether a candidate parses under any supported template. The
    /// reference extractor uses this to throw out date-shaped tokens.
    pub fn matches_template(&self, candidate: &str) -> bool {
        self.parse_templates(candidate).is_some()
    }

    fn resolve_time_only(&self, datetime: NaiveDateTime) -> NaiveDateTime {
        if datetime.date() == time_only_epoch() {
            bangkok_today().and_time(datetime.time())
        } else {
            datetime
        }
    }
}

impl FieldExtractor for DateTimeExtractor {
    type Output = NaiveDateTime;

    fn extract(&self, text: &str) -> Option<NaiveDateTime> {
        let normalized = replace_thai_months(text);
        first_accepted(&normalized, &DATETIME_SHAPES, |candidate| {
            self.parse_templates(candidate.text)
                .map(|datetime| self.resolve_time_only(datetime))
        })
    }
}
