//! End-to-end wire format tests: messages encoded with [`MessageEncoder`] and
//! compared byte-for-byte against known protobuf output.
//!
//! Expected bytes are kept as inline insta snapshots of the hex dump, so a
//! diff shows exactly which bytes moved.

use insta::assert_snapshot;
use pbc_encoder::{EncodeError, EncoderConfig, MessageEncoder, SizingMode};
use pbc_tests::{AllTypes, Point, Sample, hex_spaced};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn encode(message: &impl pbc_types::FieldAccess) -> String {
    init_logging();
    let bytes = MessageEncoder::new()
        .encode_to_vec(message)
        .unwrap_or_else(|e| panic!("encode failed: {e}"));
    hex_spaced(&bytes)
}

// ── Sample ────────────────────────────────────────────────────────────────────

#[test]
fn sample_with_absent_name() {
    let msg = Sample {
        id: Some(7),
        name: None,
        flags: Some(vec![true, false]),
    };
    assert_snapshot!(encode(&msg), @"08 07 18 01 18 00");
}

#[test]
fn sample_with_name() {
    let msg = Sample {
        id: Some(150),
        name: Some("hi".to_string()),
        flags: None,
    };
    assert_snapshot!(encode(&msg), @"08 96 01 12 02 68 69");
}

#[test]
fn sample_empty_name_is_still_written() {
    let msg = Sample {
        id: Some(1),
        name: Some(String::new()),
        flags: Some(Vec::new()),
    };
    assert_snapshot!(encode(&msg), @"08 01 12 00");
}

#[test]
fn sample_missing_id_fails_before_writing() {
    let msg = Sample {
        id: None,
        name: Some("x".to_string()),
        flags: Some(vec![true]),
    };
    let mut sink = Vec::new();
    let err = MessageEncoder::new()
        .encode_to_writer(&msg, &mut sink)
        .unwrap_err();

    match err {
        EncodeError::UninitializedMessage { missing } => assert_eq!(missing, vec!["id"]),
        other => panic!("expected UninitializedMessage, got {other:?}"),
    }
    assert!(sink.is_empty(), "no bytes may be written when validation fails");
}

#[test]
fn sample_negative_id_takes_ten_bytes() {
    let msg = Sample {
        id: Some(-1),
        ..Sample::default()
    };
    assert_snapshot!(encode(&msg), @"08 ff ff ff ff ff ff ff ff ff 01");
}

// ── Point (raw presence) ──────────────────────────────────────────────────────

#[test]
fn raw_zero_fields_are_written() {
    let msg = Point::default();
    assert_snapshot!(encode(&msg), @"08 00 10 00");
}

#[test]
fn raw_fields_zigzag() {
    let msg = Point {
        x: -1,
        y: 1,
        label: Some("a".to_string()),
    };
    assert_snapshot!(encode(&msg), @"08 01 10 02 1a 01 61");
}

// ── AllTypes ──────────────────────────────────────────────────────────────────

#[test]
fn empty_all_types_encodes_to_nothing() {
    let msg = AllTypes::default();
    let bytes = MessageEncoder::new().encode_to_vec(&msg).unwrap();
    assert!(bytes.is_empty());
}

#[test]
fn populated_all_types_exact_size_matches() {
    let msg = AllTypes::populated();
    let encoder = MessageEncoder::new();
    let bytes = encoder.encode_to_vec(&msg).unwrap();
    assert_eq!(encoder.encoded_len(&msg).unwrap(), bytes.len());
}

#[test]
fn repeated_multi_byte_tags() {
    let msg = AllTypes {
        tags: vec!["a".to_string()],
        deltas: vec![-1],
        ..AllTypes::default()
    };
    // field 16 LEN → 0x82 0x01; field 2048 VARINT → 0x80 0x80 0x01
    assert_snapshot!(encode(&msg), @"82 01 01 61 80 80 01 01");
}

// ── Legacy sizing ─────────────────────────────────────────────────────────────

#[test]
fn legacy_sizing_overestimates_small_repeated_varints() {
    let msg = AllTypes {
        deltas: vec![1, 2, 3],
        ..AllTypes::default()
    };
    let legacy = MessageEncoder::with_config(EncoderConfig {
        sizing: SizingMode::Legacy,
        ..EncoderConfig::default()
    });
    let exact = MessageEncoder::new();

    // legacy: 3 × (8 + 1); exact: 3 × (1 + 3)
    assert_eq!(legacy.encoded_len(&msg).unwrap(), 27);
    assert_eq!(exact.encoded_len(&msg).unwrap(), 12);

    // the bytes themselves do not depend on the sizing mode
    assert_eq!(
        legacy.encode_to_vec(&msg).unwrap(),
        exact.encode_to_vec(&msg).unwrap()
    );
}

#[test]
fn legacy_sizing_is_exact_for_scalar_fields() {
    let msg = Sample {
        id: Some(7),
        name: Some("abc".to_string()),
        flags: None,
    };
    let legacy = MessageEncoder::with_config(EncoderConfig {
        sizing: SizingMode::Legacy,
        ..EncoderConfig::default()
    });
    assert_eq!(legacy.encoded_len(&msg).unwrap(), 7);
}
