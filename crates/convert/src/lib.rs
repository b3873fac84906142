//! Driver value model and byte-sequence coercion
//!
//! Database drivers hand row values over in a handful of native shapes.
//! This crate defines that closed set ([`DriverValue`]) and the single
//! coercion nullable types need from it: assigning a driver value into a
//! byte-sequence target ([`assign_bytes`]).
//!
//! ## Coercion Rules
//!
//! | Source | Bytes produced |
//! |--------|----------------|
//! | `Bytes` | copied verbatim |
//! | `Text` | UTF-8 encoding of the string |
//! | `Int`, `Bool` | decimal / literal text (`42`, `true`) |
//! | `Float` | shortest `%g` text (`1.5`, `1e+21`) |
//! | `Timestamp` | RFC 3339 text, fraction without trailing zeros |
//! | `Null` | error, callers decide what null means |
//! | `Array`, `Object` | error |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod value;

pub use value::DriverValue;

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Errors raised while coercing a driver value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Null has no byte representation; the caller must handle it first
    #[error("cannot assign a null driver value to a byte sequence")]
    NullSource,

    /// The driver value's type has no byte-sequence coercion
    #[error("unsupported conversion: storing driver value of type {source_type} into bytes")]
    Unsupported {
        /// Type name of the rejected driver value
        source_type: &'static str,
    },
}

/// Coerce a driver value into an owned byte sequence.
pub fn assign_bytes(src: &DriverValue) -> Result<Vec<u8>, ConversionError> {
    match src {
        DriverValue::Bytes(b) => Ok(b.clone()),
        DriverValue::Text(s) => Ok(s.as_bytes().to_vec()),
        DriverValue::Int(i) => Ok(i.to_string().into_bytes()),
        DriverValue::Float(f) => Ok(format_float(*f).into_bytes()),
        DriverValue::Bool(b) => Ok(b.to_string().into_bytes()),
        DriverValue::Timestamp(ts) => Ok(format_timestamp(ts).into_bytes()),
        DriverValue::Null => Err(ConversionError::NullSource),
        DriverValue::Array(_) | DriverValue::Object(_) => Err(ConversionError::Unsupported {
            source_type: src.type_name(),
        }),
    }
}

/// RFC 3339 with nanoseconds, trailing fractional zeros dropped.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    let text = ts.to_rfc3339_opts(SecondsFormat::Nanos, true);
    match text.rfind('.') {
        Some(dot) => {
            let fraction = text[dot..].trim_end_matches('Z').trim_end_matches('0');
            if fraction == "." {
                format!("{}Z", &text[..dot])
            } else {
                format!("{}{}Z", &text[..dot], fraction)
            }
        }
        None => text,
    }
}

/// Shortest `%g` text: plain decimal for exponents in `-4..6`, otherwise
/// `d.ddde±XX` with at least two exponent digits.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        }
    } else {
        let sci = format!("{:e}", f);
        let Some((mantissa, exp)) = sci.split_once('e') else {
            return f.to_string();
        };
        let exp: i32 = exp.parse().unwrap_or(0);
        if f == 0.0 || (-4..6).contains(&exp) {
            f.to_string()
        } else {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
    }
}
