//! Text serialization for NullableBytes
//!
//! Text has no null literal: empty input decodes to null and a null value
//! encodes to no output at all. Non-empty payloads pass through unescaped.

use crate::bytes::NullableBytes;
use std::convert::Infallible;
use std::str::FromStr;

impl NullableBytes {
    /// Decode raw text. Empty text is `Null`, anything else is copied.
    pub fn from_text(text: &[u8]) -> Self {
        if text.is_empty() {
            NullableBytes::Null
        } else {
            NullableBytes::Value(text.to_vec())
        }
    }

    /// Decode raw text in place, reusing the payload buffer when possible.
    pub fn unmarshal_text(&mut self, text: &[u8]) {
        if text.is_empty() {
            *self = NullableBytes::Null;
            return;
        }
        match self {
            NullableBytes::Value(buf) => {
                buf.clear();
                buf.extend_from_slice(text);
            }
            _ => *self = NullableBytes::Value(text.to_vec()),
        }
    }

    /// Raw payload bytes, or `None` when not valid
    pub fn marshal_text(&self) -> Option<&[u8]> {
        self.as_option()
    }
}

impl FromStr for NullableBytes {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NullableBytes::from_text(s.as_bytes()))
    }
}
