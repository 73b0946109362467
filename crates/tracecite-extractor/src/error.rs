//! Error types for the annotation engine
//!
//! Only loading can fail. Malformed markup inside a loaded record is skipped,
//! never reported as an error.

use thiserror::Error;

/// Errors that can occur while loading an example record
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Record could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record is not valid JSON of the expected shape
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Serialized record exceeds the configured size
    #[error("Record too large: {0} bytes (max: {1})")]
    RecordTooLarge(usize, usize),

    /// A single text field exceeds its configured size
    #[error("Field '{field}' too large: {len} bytes (max: {max})")]
    FieldTooLarge {
        /// Name of the offending field
        field: &'static str,
        /// Actual length in bytes
        len: usize,
        /// Configured limit in bytes
        max: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
