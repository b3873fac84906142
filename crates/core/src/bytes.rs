//! Nullable byte sequence
//!
//! [`NullableBytes`] tracks two things at once for a single optional byte
//! sequence:
//!
//! - **valid**: the value is present and not null
//! - **set**: the value was assigned or decoded at least once
//!
//! The pair collapses to three states, which is what the enum stores:
//!
//! | Variant | set | valid |
//! |---------|-----|-------|
//! | `Unset` | false | false |
//! | `Null` | true | false |
//! | `Value(b)` | true | true |
//!
//! Keeping `Unset` apart from `Null` lets PATCH-style callers tell "field
//! omitted" from "field explicitly nulled". A zero-length payload is valid
//! data, never null.

use std::mem;

/// An optional byte sequence that remembers whether it was ever set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NullableBytes {
    /// Never assigned or decoded
    #[default]
    Unset,
    /// Explicitly set to null
    Null,
    /// Present payload (may be empty)
    Value(Vec<u8>),
}

impl NullableBytes {
    /// Build from the historic `(bytes, valid, set)` triple.
    ///
    /// No validation is performed. A valid value is always considered set,
    /// and `bytes` is ignored when `valid` is false.
    pub fn new(bytes: Vec<u8>, valid: bool, set: bool) -> Self {
        match (valid, set) {
            (true, _) => NullableBytes::Value(bytes),
            (false, true) => NullableBytes::Null,
            (false, false) => NullableBytes::Unset,
        }
    }

    /// Valid iff `bytes` is present. Always set.
    ///
    /// `Some(vec![])` is a valid, zero-length value.
    pub fn from_bytes(bytes: Option<Vec<u8>>) -> Self {
        match bytes {
            Some(b) => NullableBytes::Value(b),
            None => NullableBytes::Null,
        }
    }

    /// Copy the referenced bytes if present. Always set.
    pub fn from_optional(bytes: Option<&[u8]>) -> Self {
        match bytes {
            Some(b) => NullableBytes::Value(b.to_vec()),
            None => NullableBytes::Null,
        }
    }

    /// Replace the payload and mark the value valid and set.
    pub fn set_valid(&mut self, bytes: Vec<u8>) {
        *self = NullableBytes::Value(bytes);
    }

    /// True if the value is present and not null
    pub fn is_valid(&self) -> bool {
        matches!(self, NullableBytes::Value(_))
    }

    /// True if the value was ever assigned or decoded
    pub fn is_set(&self) -> bool {
        !matches!(self, NullableBytes::Unset)
    }

    /// True only for an explicit null
    pub fn is_null(&self) -> bool {
        matches!(self, NullableBytes::Null)
    }

    /// True for null or unset values. Independent of the set flag.
    ///
    /// Usable as `#[serde(skip_serializing_if = "NullableBytes::is_zero")]`.
    pub fn is_zero(&self) -> bool {
        !self.is_valid()
    }

    /// Reference to the payload, or `None` if not valid
    pub fn as_option(&self) -> Option<&[u8]> {
        match self {
            NullableBytes::Value(b) => Some(b),
            _ => None,
        }
    }

    /// Mutable reference to the payload, or `None` if not valid
    pub fn as_option_mut(&mut self) -> Option<&mut Vec<u8>> {
        match self {
            NullableBytes::Value(b) => Some(b),
            _ => None,
        }
    }

    /// Consume into the payload, or `None` if not valid
    pub fn into_option(self) -> Option<Vec<u8>> {
        match self {
            NullableBytes::Value(b) => Some(b),
            _ => None,
        }
    }

    /// The payload, or an empty slice if not valid
    pub fn bytes(&self) -> &[u8] {
        self.as_option().unwrap_or(&[])
    }

    /// Move the value out, leaving `Unset` behind
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Mark the value as touched without changing its payload.
    ///
    /// `Unset` becomes `Null`; other states are unchanged.
    pub(crate) fn mark_set(&mut self) {
        if let NullableBytes::Unset = self {
            *self = NullableBytes::Null;
        }
    }

    /// Force the value valid, keeping any existing payload.
    pub(crate) fn force_valid(&mut self) {
        if !self.is_valid() {
            *self = NullableBytes::Value(Vec::new());
        }
    }
}

impl From<Vec<u8>> for NullableBytes {
    fn from(b: Vec<u8>) -> Self {
        NullableBytes::Value(b)
    }
}

impl From<&[u8]> for NullableBytes {
    fn from(b: &[u8]) -> Self {
        NullableBytes::Value(b.to_vec())
    }
}

impl From<Option<Vec<u8>>> for NullableBytes {
    fn from(b: Option<Vec<u8>>) -> Self {
        NullableBytes::from_bytes(b)
    }
}

impl From<NullableBytes> for Option<Vec<u8>> {
    fn from(b: NullableBytes) -> Self {
        b.into_option()
    }
}
