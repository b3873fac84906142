//! Scenario tests for each conversion boundary

use crate::common::*;
use nullable::{ConversionError, DecodeError, NULL_LITERAL};
use std::collections::HashMap;

// ============================================================================
// Construction + JSON
// ============================================================================

#[test]
fn from_none_encodes_null() {
    init_tracing();
    let b = NullableBytes::from_bytes(None);
    assert!(!b.is_valid());
    assert!(b.is_set());
    assert_eq!(b.to_json(), NULL_LITERAL);
}

#[test]
fn from_empty_is_valid_but_encodes_null() {
    let b = NullableBytes::from_bytes(Some(Vec::new()));
    assert!(b.is_valid());
    assert!(b.is_set());
    assert_eq!(b.to_json(), NULL_LITERAL);
    assert_eq!(serde_json::to_string(&b).unwrap(), "null");
}

#[test]
fn json_null_decode_is_set_for_every_prior_state() {
    for mut b in all_states() {
        b.unmarshal_json(b"null").unwrap();
        assert!(!b.is_valid());
        assert!(b.is_set());
    }
}

#[test]
fn json_malformed_token_is_decode_error() {
    init_tracing();
    let mut b = NullableBytes::default();
    let err = b.unmarshal_json(br#"{"bytes":1}"#).unwrap_err();
    assert!(matches!(err, DecodeError::NotBytes { .. }));
    assert!(b.is_set());

    let err: nullable::Error = err.into();
    assert!(matches!(err, nullable::Error::Decode(_)));
}

#[test]
fn json_byte_array_decodes() {
    let mut b = NullableBytes::default();
    b.unmarshal_json(b"[1,2,3]").unwrap();
    assert_eq!(b, NullableBytes::Value(vec![1, 2, 3]));

    let err = b.unmarshal_json(b"[1,256]").unwrap_err();
    assert!(matches!(err, DecodeError::InvalidElement { index: 1, .. }));
    assert_eq!(b, NullableBytes::Value(vec![1, 2, 3]));
}

#[test]
fn json_base64_with_line_breaks_decodes() {
    let b = NullableBytes::from_json(br#""AQ\nID""#).unwrap();
    assert_eq!(b, NullableBytes::Value(vec![1, 2, 3]));
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn set_valid_then_text_encode() {
    let mut b = NullableBytes::default();
    b.set_valid(vec![1, 2, 3]);
    assert_eq!(b.marshal_text(), Some(&[1u8, 2, 3][..]));
}

#[test]
fn text_empty_is_null_and_encodes_absent() {
    let b = NullableBytes::from_text(b"");
    assert!(!b.is_valid());
    assert_eq!(b.marshal_text(), None);
}

// ============================================================================
// Database
// ============================================================================

#[test]
fn db_scan_null_is_unset() {
    let mut b = NullableBytes::from(vec![1u8]);
    b.scan(&DriverValue::Null).unwrap();
    assert!(!b.is_valid());
    assert!(!b.is_set());
}

#[test]
fn db_null_differs_from_json_null() {
    let mut from_db = NullableBytes::default();
    from_db.scan(&DriverValue::Null).unwrap();

    let mut from_json = NullableBytes::default();
    from_json.unmarshal_json(b"null").unwrap();

    assert_eq!(from_db.is_valid(), from_json.is_valid());
    assert_ne!(from_db.is_set(), from_json.is_set());
}

#[test]
fn db_scan_object_is_conversion_error() {
    init_tracing();
    let mut doc = HashMap::new();
    doc.insert("k".to_string(), DriverValue::Int(1));

    let mut b = NullableBytes::default();
    let err = b.scan(&DriverValue::Object(doc)).unwrap_err();
    assert!(matches!(err, ConversionError::Unsupported { source_type: "Object" }));
    assert!(b.is_valid());
    assert!(b.is_set());
}

#[test]
fn db_scan_from_json_document() {
    let json = serde_json::json!({"nested": true});
    let result = NullableBytes::from_driver(&DriverValue::from(json));
    assert!(result.is_err());

    let json_text = serde_json::json!("payload");
    let b = NullableBytes::from_driver(&DriverValue::from(json_text)).unwrap();
    assert_eq!(b.bytes(), b"payload");
}

#[test]
fn db_scan_timestamp() {
    use chrono::{TimeZone, Utc};
    let ts = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
    let b = NullableBytes::from_driver(&DriverValue::from(ts)).unwrap();
    assert_eq!(b.bytes(), b"2020-01-02T03:04:05Z");
}

#[test]
fn db_value_for_every_state() {
    for b in all_states() {
        match b.as_option() {
            Some(payload) => assert_eq!(b.value(), DriverValue::Bytes(payload.to_vec())),
            None => assert_eq!(b.value(), DriverValue::Null),
        }
    }
}

// ============================================================================
// Utility
// ============================================================================

#[test]
fn is_zero_and_as_option_agree_with_validity() {
    for b in all_states() {
        assert_eq!(b.is_zero(), !b.is_valid());
        assert_eq!(b.as_option().is_none(), !b.is_valid());
    }
}

#[test]
fn randomize_fills_fixture_rows() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(1234);
    let mut rows: Vec<NullableBytes> = (0..32).map(|_| NullableBytes::default()).collect();
    for (i, row) in rows.iter_mut().enumerate() {
        row.randomize(|| rng.gen(), "bytea", i % 4 == 0);
    }

    for (i, row) in rows.iter().enumerate() {
        if i % 4 == 0 {
            assert!(row.is_zero());
        } else {
            assert_eq!(row.bytes().len(), 1);
        }
    }
}
