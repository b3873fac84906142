//! Fixture data generation
//!
//! Used by test-data generators that fill whole records. Carries no
//! production semantics.

use crate::bytes::NullableBytes;
use tracing::trace;

impl NullableBytes {
    /// Fill with a single pseudo-random byte, or clear to null.
    ///
    /// The byte is `next_int() % 256` truncated to `u8`, so negative
    /// generator output wraps. Clearing keeps the set flag: an `Unset` value
    /// stays `Unset`. `field_type` is only recorded in trace logs.
    pub fn randomize<F>(&mut self, mut next_int: F, field_type: &str, should_be_null: bool)
    where
        F: FnMut() -> i64,
    {
        if should_be_null {
            if self.is_set() {
                *self = NullableBytes::Null;
            }
        } else {
            *self = NullableBytes::Value(vec![(next_int() % 256) as u8]);
        }
        trace!(field_type, should_be_null, "randomized nullable bytes");
    }
}
