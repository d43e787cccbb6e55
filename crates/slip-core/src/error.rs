//! Error types for the slip-core library.

use thiserror::Error;

/// Main error type for the slip library.
///
/// Parsing itself never produces one of these: the extractors degrade
/// to empty fields instead. Errors come from the surrounding surfaces
/// only, the OCR collaborator and configuration I/O.
#[derive(Error, Debug)]
pub enum SlipError {
    /// OCR collaborator error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors surfaced by an OCR collaborator.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The recognition call itself failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The input is not an image the engine understands.
    #[error("unsupported image input: {0}")]
    UnsupportedInput(String),
}

/// Result type for the slip library.
pub type Result<T> = std::result::Result<T, SlipError>;
