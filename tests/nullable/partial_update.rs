//! PATCH-style partial updates
//!
//! A record update only touches fields that were present in the request.
//! Omitted fields stay Unset; explicit nulls clear the stored value.

use crate::common::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    #[serde(default, skip_serializing_if = "NullableBytes::is_zero")]
    avatar: NullableBytes,
    #[serde(default, skip_serializing_if = "NullableBytes::is_zero")]
    signature: NullableBytes,
}

/// Apply only the fields the patch actually set
fn apply(stored: &mut Profile, patch: &Profile) {
    if patch.avatar.is_set() {
        stored.avatar = patch.avatar.clone();
    }
    if patch.signature.is_set() {
        stored.signature = patch.signature.clone();
    }
}

fn stored_profile() -> Profile {
    Profile {
        avatar: NullableBytes::from(vec![0xAAu8, 0xBB]),
        signature: NullableBytes::from(b"sig".to_vec()),
    }
}

#[test]
fn omitted_field_is_left_alone() {
    let mut stored = stored_profile();
    let patch: Profile = serde_json::from_str(r#"{"avatar":"AQI="}"#).unwrap();
    apply(&mut stored, &patch);

    assert_eq!(stored.avatar, NullableBytes::Value(vec![1, 2]));
    assert_eq!(stored.signature.bytes(), b"sig");
}

#[test]
fn explicit_null_clears_field() {
    let mut stored = stored_profile();
    let patch: Profile = serde_json::from_str(r#"{"signature":null}"#).unwrap();
    apply(&mut stored, &patch);

    assert_eq!(stored.avatar.bytes(), &[0xAA, 0xBB]);
    assert!(stored.signature.is_null());
}

#[test]
fn empty_patch_changes_nothing() {
    let mut stored = stored_profile();
    let patch: Profile = serde_json::from_str("{}").unwrap();
    apply(&mut stored, &patch);
    assert_eq!(stored, stored_profile());
}

#[test]
fn cleared_fields_are_omitted_on_output() {
    let mut stored = stored_profile();
    let patch: Profile = serde_json::from_str(r#"{"avatar":null}"#).unwrap();
    apply(&mut stored, &patch);

    let out = serde_json::to_string(&stored).unwrap();
    assert_eq!(out, r#"{"signature":"c2ln"}"#);
}

#[test]
fn database_row_feeds_patch_base() {
    let mut stored = Profile::default();
    stored.avatar.scan(&DriverValue::Bytes(vec![9])).unwrap();
    stored.signature.scan(&DriverValue::Null).unwrap();

    // A NULL column reads back as never set, so output omits it.
    assert!(!stored.signature.is_set());
    let out = serde_json::to_string(&stored).unwrap();
    assert_eq!(out, r#"{"avatar":"CQ=="}"#);
}
