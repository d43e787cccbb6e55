//! Rule-based field extractors for payment slips.

pub mod amounts;
pub mod calendar;
pub mod dates;
pub mod patterns;
pub mod reference;

pub use amounts::{AmountExtractor, SimpleAmountParser};
pub use dates::DateTimeExtractor;
pub use reference::ReferenceExtractor;

use regex::Regex;

/// Trait for slip field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text, or nothing. Extraction never
    /// fails; an unusable candidate means the next one is tried.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// A candidate produced by one catalogue pattern, before validation.
/// Lives only for the duration of one extractor call.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'t> {
    /// Matched text (first capture group of the shape pattern).
    pub text: &'t str,
    /// Byte span of the match in the scanned text.
    pub start: usize,
    pub end: usize,
}

/// Scan an ordered pattern catalogue, handing the first match of each
/// pattern to `accept`, and stop at the first accepted candidate.
///
/// Rejection advances to the next pattern in the catalogue, never to
/// another match of the same pattern; catalogue order, not position in
/// the text, decides between overlapping interpretations.
pub(crate) fn first_accepted<T>(
    text: &str,
    catalogue: &[Regex],
    mut accept: impl FnMut(Candidate<'_>) -> Option<T>,
) -> Option<T> {
    for pattern in catalogue {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        let Some(m) = caps.get(1) else {
            continue;
        };
        let candidate = Candidate {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        };
        if let Some(value) = accept(candidate) {
            return Some(value);
        }
    }
    None
}
