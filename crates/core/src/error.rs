//! Error types for nullable values
//!
//! Only two operations can fail: decoding structured (JSON) input and
//! scanning a database value. Everything else is total.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use nullable_convert::ConversionError;
use thiserror::Error;

/// Result type alias for nullable operations
pub type Result<T> = std::result::Result<T, Error>;

/// Structured input was present but is not an encoded byte sequence
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input is not syntactically valid JSON
    #[error("JSON syntax error: {0}")]
    Json(String),

    /// Token is well-formed but not a string, array or null
    #[error("expected base64 string, byte array or null, found {found}")]
    NotBytes {
        /// Description of the token that was found
        found: String,
    },

    /// Array token holds something other than an integer in `0..=255`
    #[error("array element {index} is not a byte: {found}")]
    InvalidElement {
        /// Position of the rejected element
        index: usize,
        /// Description of the rejected element
        found: String,
    },

    /// String token does not hold standard base64
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Json(e.to_string())
    }
}

/// Error types for nullable values
#[derive(Debug, Error)]
pub enum Error {
    /// Structured-serialization decode failed
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Database value could not be coerced to bytes
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}
