//! Interface to the external OCR collaborator.

use crate::error::OcrError;

/// Text recognition capability supplied by the caller.
///
/// Recognition is the only I/O-bearing step around the parser. The
/// engine is invoked solely through
/// [`SlipParser::parse_image`](crate::slip::SlipParser::parse_image),
/// so callers keep control of retries, timeouts and cancellation; its
/// result (raw text or failure) is the only thing that crosses into
/// the parsing core.
pub trait OcrEngine {
    /// Recognize text in an encoded image.
    fn recognize(&self, image: &[u8]) -> Result<String, OcrError>;
}
