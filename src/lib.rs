//! Nullable - nullable byte sequences for serialization and database layers
//!
//! [`NullableBytes`] is an optional byte sequence with three states: unset,
//! null, and a present payload. It converts to and from JSON (base64 strings
//! and `null`), raw text, and database driver values.
//!
//! # Quick Start
//!
//! ```
//! use nullable::{NullableBytes, Scanner, Valuer, DriverValue};
//!
//! let b = NullableBytes::from(b"hi".to_vec());
//! assert_eq!(b.to_json(), br#""aGk=""#.to_vec());
//! assert_eq!(b.marshal_text(), Some(&b"hi"[..]));
//!
//! let mut row = NullableBytes::default();
//! row.scan(&DriverValue::Null).unwrap();
//! assert!(!row.is_set());
//! assert_eq!(b.value(), DriverValue::Bytes(b"hi".to_vec()));
//! ```

// Re-export the public API from nullable-core
pub use nullable_core::*;

/// Driver value model and coercion
pub use nullable_convert as convert;
