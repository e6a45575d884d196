//! Error types for oxcolor

use thiserror::Error;

/// Result type for oxcolor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxcolor operations
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Text is neither 3 or 6 hex digits nor a known color name
    #[error("Invalid HTML color: {input:?} is not #RRGGBB, #RGB or a color name")]
    HexParse { input: String },

    /// Unrecognized color space mode string
    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),

    /// Unrecognized white point identifier
    #[error("Unknown white point: {0}")]
    UnknownWhitePoint(String),

    /// Wrong number of coordinates for a color space
    #[error("{space} takes {expected} components, got {actual}")]
    ComponentCount {
        space: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Channel cannot be quantized to a byte
    #[error("Component out of range: {value}")]
    OutOfRange { value: f64 },

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
