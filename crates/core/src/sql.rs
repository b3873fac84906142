//! Database binding for NullableBytes
//!
//! Reading goes through [`Scanner`], writing through [`Valuer`]. Both speak
//! [`DriverValue`], so any driver that can map its row values onto that set
//! can bind nullable bytes.
//!
//! Scanning SQL NULL leaves the value `Unset`, unlike the JSON and text
//! decoders, which mark a decoded null as set.

use crate::bytes::NullableBytes;
use nullable_convert::{assign_bytes, ConversionError, DriverValue};
use tracing::debug;

/// Reads a driver value into an existing destination
pub trait Scanner {
    /// Replace `self` with the contents of `value`.
    fn scan(&mut self, value: &DriverValue) -> Result<(), ConversionError>;
}

/// Produces the driver value to bind for a query parameter
pub trait Valuer {
    /// The value to hand to the driver
    fn value(&self) -> DriverValue;
}

impl NullableBytes {
    /// Build from a driver value.
    ///
    /// SQL NULL yields `Unset`. Other values are coerced with
    /// [`assign_bytes`].
    pub fn from_driver(value: &DriverValue) -> Result<Self, ConversionError> {
        if value.is_null() {
            return Ok(NullableBytes::Unset);
        }
        assign_bytes(value).map(NullableBytes::Value)
    }
}

impl Scanner for NullableBytes {
    /// On a failed coercion the value is left valid and set with its payload
    /// unchanged (empty if it was not valid before).
    fn scan(&mut self, value: &DriverValue) -> Result<(), ConversionError> {
        if value.is_null() {
            *self = NullableBytes::Unset;
            return Ok(());
        }
        match assign_bytes(value) {
            Ok(bytes) => {
                *self = NullableBytes::Value(bytes);
                Ok(())
            }
            Err(e) => {
                self.force_valid();
                debug!(
                    source_type = value.type_name(),
                    error = %e,
                    "failed to scan driver value into nullable bytes"
                );
                Err(e)
            }
        }
    }
}

impl Valuer for NullableBytes {
    fn value(&self) -> DriverValue {
        match self.as_option() {
            Some(b) => DriverValue::Bytes(b.to_vec()),
            None => DriverValue::Null,
        }
    }
}

#[cfg(feature = "rusqlite")]
mod sqlite {
    use super::*;
    use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

    /// Map a SQLite column value onto the driver value set
    pub(crate) fn driver_value(value: ValueRef<'_>) -> DriverValue {
        match value {
            ValueRef::Null => DriverValue::Null,
            ValueRef::Integer(i) => DriverValue::Int(i),
            ValueRef::Real(f) => DriverValue::Float(f),
            ValueRef::Text(t) => match std::str::from_utf8(t) {
                Ok(s) => DriverValue::Text(s.to_string()),
                Err(_) => DriverValue::Bytes(t.to_vec()),
            },
            ValueRef::Blob(b) => DriverValue::Bytes(b.to_vec()),
        }
    }

    impl FromSql for NullableBytes {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            NullableBytes::from_driver(&driver_value(value))
                .map_err(|e| FromSqlError::Other(Box::new(e)))
        }
    }

    impl ToSql for NullableBytes {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(match self.as_option() {
                Some(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
                None => ToSqlOutput::Borrowed(ValueRef::Null),
            })
        }
    }

}
