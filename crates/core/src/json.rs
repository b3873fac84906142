//! Structured serialization for NullableBytes
//!
//! | State | JSON Representation |
//! |-------|---------------------|
//! | `Value(b)`, `b` non-empty | `"<base64>"` |
//! | `Value(b)`, `b` empty | `null` |
//! | `Null`, `Unset` | `null` |
//!
//! Base64 is the standard padded alphabet (RFC 4648 §4); CR and LF inside
//! the string are ignored on decode. Decoding also accepts a JSON array of
//! integers in `0..=255`. Encoding an empty payload as `null` loses the
//! empty/null distinction across this boundary; decoding `""` still yields a
//! valid empty value.
//!
//! Inside a struct, pair the field with `#[serde(default)]` so a missing key
//! stays `Unset` while an explicit `null` becomes `Null`.

use crate::bytes::NullableBytes;
use crate::error::DecodeError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt;
use tracing::debug;

/// The JSON null literal
pub const NULL_LITERAL: &[u8] = b"null";

impl Serialize for NullableBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_option() {
            Some(b) if !b.is_empty() => serializer.serialize_some(&BASE64.encode(b)),
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NullableBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(NullableVisitor)
    }
}

struct NullableVisitor;

impl<'de> Visitor<'de> for NullableVisitor {
    type Value = NullableBytes;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a base64 string or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NullableBytes::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NullableBytes::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Non-self-describing formats only ever carry the string form.
        let payload = if deserializer.is_human_readable() {
            deserializer.deserialize_any(PayloadVisitor)
        } else {
            deserializer.deserialize_str(PayloadVisitor)
        };
        payload.map(NullableBytes::Value)
    }
}

/// Decodes the non-null payload: base64 text, an array of byte values, or raw
/// bytes from binary formats
struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a base64 string or an array of bytes")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        decode_base64(v).map_err(|e| E::custom(format!("invalid base64: {}", e)))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            out.push(byte);
        }
        Ok(out)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(v.to_vec())
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(v)
    }
}

impl NullableBytes {
    /// Decode a JSON token.
    ///
    /// `null` yields `Null`; a base64 string or an array of byte values
    /// yields `Value`. Anything else is a [`DecodeError`].
    pub fn from_json(data: &[u8]) -> Result<Self, DecodeError> {
        if data == NULL_LITERAL {
            return Ok(NullableBytes::Null);
        }

        match serde_json::from_slice::<JsonValue>(data)? {
            JsonValue::Null => Ok(NullableBytes::Null),
            JsonValue::String(s) => Ok(NullableBytes::Value(decode_base64(&s)?)),
            JsonValue::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.as_u64()
                        .and_then(|n| u8::try_from(n).ok())
                        .ok_or_else(|| DecodeError::InvalidElement {
                            index,
                            found: describe(item),
                        })
                })
                .collect::<Result<Vec<u8>, _>>()
                .map(NullableBytes::Value),
            other => Err(DecodeError::NotBytes {
                found: describe(&other),
            }),
        }
    }

    /// Decode a JSON token in place.
    ///
    /// The value is marked set even when decoding fails: an `Unset` value
    /// becomes `Null`, any other state keeps its payload.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        self.mark_set();
        match Self::from_json(data) {
            Ok(decoded) => {
                *self = decoded;
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "rejected JSON input for nullable bytes");
                Err(e)
            }
        }
    }

    /// Encode as a JSON token. Never fails.
    pub fn to_json(&self) -> Vec<u8> {
        match self.as_option() {
            Some(b) if !b.is_empty() => {
                let encoded = BASE64.encode(b);
                let mut out = Vec::with_capacity(encoded.len() + 2);
                out.push(b'"');
                out.extend_from_slice(encoded.as_bytes());
                out.push(b'"');
                out
            }
            _ => NULL_LITERAL.to_vec(),
        }
    }
}

/// Standard base64, skipping line breaks the way MIME-wrapped input has them
fn decode_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if s.contains(['\r', '\n']) {
        let stripped: String = s.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        BASE64.decode(stripped)
    } else {
        BASE64.decode(s)
    }
}

fn describe(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => format!("boolean `{}`", b),
        JsonValue::Number(n) => format!("number `{}`", n),
        JsonValue::String(_) => "string".to_string(),
        JsonValue::Array(_) => "array".to_string(),
        JsonValue::Object(_) => "object".to_string(),
    }
}
