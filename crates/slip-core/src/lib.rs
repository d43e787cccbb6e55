//! Core library for Thai payment slip parsing.
//!
//! This crate turns unstructured OCR text recovered from a photographed
//! payment slip into three structured fields:
//! - the monetary amount,
//! - the transaction timestamp (Buddhist-era aware),
//! - the transaction reference number.
//!
//! Extraction is heuristic and total: any input, including the empty
//! string, yields a [`ParsedSlip`], with fields the text does not
//! support left empty. The engine is stateless and free of I/O; the
//! one external capability it composes with, optical character
//! recognition, is supplied by the caller through [`OcrEngine`].

pub mod error;
pub mod models;
pub mod ocr;
pub mod slip;

pub use error::{OcrError, Result, SlipError};
pub use models::config::{ExtractionConfig, SlipConfig};
pub use models::slip::ParsedSlip;
pub use ocr::OcrEngine;
pub use slip::rules::{
    AmountExtractor, DateTimeExtractor, FieldExtractor, ReferenceExtractor, SimpleAmountParser,
};
pub use slip::{ParseReport, SlipParser};
