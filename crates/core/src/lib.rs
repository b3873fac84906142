//! Nullable byte sequences
//!
//! This crate defines [`NullableBytes`], an optional byte sequence that also
//! remembers whether it was ever set, and its three conversion boundaries:
//! - JSON: serde impls plus `from_json` / `unmarshal_json` / `to_json`
//! - Text: `from_text` / `unmarshal_text` / `marshal_text`
//! - Database: [`Scanner`] / [`Valuer`] over [`DriverValue`], and
//!   rusqlite `FromSql` / `ToSql` behind the `rusqlite` feature
//!
//! Fixture generators can fill values with `randomize`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bytes;
pub mod error;
pub mod json;
pub mod random;
pub mod sql;
pub mod text;

pub use bytes::NullableBytes;
pub use error::{DecodeError, Error, Result};
pub use json::NULL_LITERAL;
pub use sql::{Scanner, Valuer};

pub use nullable_convert::{assign_bytes, ConversionError, DriverValue};
