//! Integration tests: wire-format round-trips across every message variant.
//!
//! These exercise the public API end-to-end: build → sign → serialize →
//! deserialize → verify, plus the structural rejection paths a hostile or
//! broken peer can trigger.  No transport, no key storage — pure message
//! flow.
//!
//! Run with:
//!   cargo test --test wire_roundtrip

use proptest::prelude::*;
use srup_core::{
    peek_type, DataValue, KeyPair, MessageType, SrupAction, SrupActivate, SrupData, SrupError,
    SrupGeneric, SrupInitiate, SrupMessage, SrupResponse, StatusCode, SRUP_VERSION,
};

// ============================================================================
// Helpers
// ============================================================================

fn keys() -> KeyPair {
    KeyPair::generate()
}

/// Populate the header fields every signable message needs.
fn fill_header<M: SrupMessage>(msg: &mut M) {
    msg.set_token(b"TOKEN12345").expect("token fits the prefix");
    msg.set_sequence_id(0x1234567890ABCDEF);
    msg.set_sender_id(0x5F5F5F5F5F5F5F5F);
}

/// One signed wire buffer per variant.
fn signed_buffers(keys: &KeyPair) -> Vec<(MessageType, Vec<u8>)> {
    let mut out = Vec::new();

    let mut generic = SrupGeneric::new();
    fill_header(&mut generic);
    generic.sign(&keys.signing_key).unwrap();
    out.push((MessageType::Generic, generic.serialized().unwrap().to_vec()));

    let mut initiate = SrupInitiate::new();
    fill_header(&mut initiate);
    initiate.set_target(b"device-42").unwrap();
    initiate.set_url("https://updates.example/fw.bin").unwrap();
    initiate
        .set_digest(&SrupInitiate::digest_for(b"image"))
        .unwrap();
    initiate.sign(&keys.signing_key).unwrap();
    out.push((
        MessageType::Initiate,
        initiate.serialized().unwrap().to_vec(),
    ));

    let mut response = SrupResponse::new();
    fill_header(&mut response);
    response.set_status(StatusCode::UPDATE_SUCCESS);
    response.sign(&keys.signing_key).unwrap();
    out.push((
        MessageType::Response,
        response.serialized().unwrap().to_vec(),
    ));

    let mut activate = SrupActivate::new();
    fill_header(&mut activate);
    activate.sign(&keys.signing_key).unwrap();
    out.push((
        MessageType::Activate,
        activate.serialized().unwrap().to_vec(),
    ));

    let mut action = SrupAction::new();
    fill_header(&mut action);
    action.set_action_id(0x07);
    action.sign(&keys.signing_key).unwrap();
    out.push((MessageType::Action, action.serialized().unwrap().to_vec()));

    let mut data = SrupData::new();
    fill_header(&mut data);
    data.set_data_id(0xBEEF);
    data.set_uint64_data(123_456_789);
    data.sign(&keys.signing_key).unwrap();
    out.push((MessageType::Data, data.serialized().unwrap().to_vec()));

    out
}

fn is_mismatch(err: SrupError) -> bool {
    matches!(err, SrupError::TypeMismatch { .. })
}

// ============================================================================
// Round-trips
// ============================================================================

#[test]
fn test_every_variant_roundtrips_and_verifies() {
    let keys = keys();
    for (msgtype, buf) in signed_buffers(&keys) {
        assert_eq!(peek_type(&buf).unwrap(), msgtype);
        assert_eq!(buf[0], SRUP_VERSION);

        let verified = match msgtype {
            MessageType::Generic => SrupGeneric::from_wire(&buf)
                .unwrap()
                .verify(&keys.verifying_key()),
            MessageType::Initiate => SrupInitiate::from_wire(&buf)
                .unwrap()
                .verify(&keys.verifying_key()),
            MessageType::Response => SrupResponse::from_wire(&buf)
                .unwrap()
                .verify(&keys.verifying_key()),
            MessageType::Activate => SrupActivate::from_wire(&buf)
                .unwrap()
                .verify(&keys.verifying_key()),
            MessageType::Action => SrupAction::from_wire(&buf)
                .unwrap()
                .verify(&keys.verifying_key()),
            MessageType::Data => SrupData::from_wire(&buf)
                .unwrap()
                .verify(&keys.verifying_key()),
        };
        assert!(verified, "{msgtype:?} failed to verify after round-trip");
    }
}

#[test]
fn test_field_values_survive_roundtrip() {
    let keys = keys();
    let mut msg = SrupInitiate::new();
    fill_header(&mut msg);
    msg.set_target(b"sensor-cluster-3").unwrap();
    msg.set_url("https://c2.example/images/7af3.bin").unwrap();
    let digest = SrupInitiate::digest_for(b"the update image");
    msg.set_digest(&digest).unwrap();
    msg.sign(&keys.signing_key).unwrap();

    let decoded = SrupInitiate::from_wire(msg.serialized().unwrap()).unwrap();
    assert_eq!(decoded.version(), SRUP_VERSION);
    assert_eq!(decoded.token(), Some(&b"TOKEN12345"[..]));
    assert_eq!(decoded.sequence_id(), Some(0x1234567890ABCDEF));
    assert_eq!(decoded.sender_id(), Some(0x5F5F5F5F5F5F5F5F));
    assert_eq!(decoded.target(), Some(&b"sensor-cluster-3"[..]));
    assert_eq!(decoded.url(), Some("https://c2.example/images/7af3.bin"));
    assert_eq!(decoded.digest(), Some(&digest));
    assert_eq!(decoded.signature(), msg.signature());
}

// ============================================================================
// Tag fidelity
// ============================================================================

#[test]
fn test_decoding_as_wrong_variant_always_fails() {
    let keys = keys();
    for (msgtype, buf) in signed_buffers(&keys) {
        if msgtype != MessageType::Generic {
            assert!(is_mismatch(SrupGeneric::from_wire(&buf).unwrap_err()));
        }
        if msgtype != MessageType::Initiate {
            assert!(is_mismatch(SrupInitiate::from_wire(&buf).unwrap_err()));
        }
        if msgtype != MessageType::Response {
            assert!(is_mismatch(SrupResponse::from_wire(&buf).unwrap_err()));
        }
        if msgtype != MessageType::Activate {
            assert!(is_mismatch(SrupActivate::from_wire(&buf).unwrap_err()));
        }
        if msgtype != MessageType::Action {
            assert!(is_mismatch(SrupAction::from_wire(&buf).unwrap_err()));
        }
        if msgtype != MessageType::Data {
            assert!(is_mismatch(SrupData::from_wire(&buf).unwrap_err()));
        }
    }
}

#[test]
fn test_unknown_version_rejected() {
    let keys = keys();
    let (_, mut buf) = signed_buffers(&keys).remove(0);
    buf[0] = 0x02;
    assert!(matches!(
        SrupGeneric::from_wire(&buf),
        Err(SrupError::UnsupportedVersion(0x02))
    ));
}

// ============================================================================
// Optional fields
// ============================================================================

#[test]
fn test_absent_token_stays_absent() {
    let keys = keys();
    let mut msg = SrupGeneric::new();
    msg.set_sequence_id(1);
    msg.set_sender_id(2);
    msg.sign(&keys.signing_key).unwrap();

    let buf = msg.serialized().unwrap().to_vec();
    let decoded = SrupGeneric::from_wire(&buf).unwrap();

    // Absent, not empty-but-present.
    assert_eq!(decoded.token(), None);
    assert!(decoded.verify(&keys.verifying_key()));
}

#[test]
fn test_setting_empty_token_clears_it() {
    let mut msg = SrupGeneric::new();
    msg.set_token(b"TOKEN").unwrap();
    assert!(msg.token().is_some());
    msg.set_token(b"").unwrap();
    assert_eq!(msg.token(), None);
}

#[test]
fn test_absent_ids_decode_as_absent() {
    // An unsigned header-only buffer with both presence flags at zero:
    // version, tag, seq flag, sender flag, empty token, empty signature.
    let buf = [SRUP_VERSION, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    let decoded = SrupGeneric::from_wire(&buf).unwrap();

    assert_eq!(decoded.sequence_id(), None);
    assert_eq!(decoded.sender_id(), None);
    assert_eq!(decoded.token(), None);
    assert!(decoded.signature().is_none());
    // Unsigned: nothing to verify against.
    assert!(!decoded.verify(&keys().verifying_key()));
}

#[test]
fn test_bad_presence_flag_rejected() {
    let buf = [SRUP_VERSION, 0x00, 0x02];
    assert!(matches!(
        SrupGeneric::from_wire(&buf),
        Err(SrupError::InvalidFlag(0x02))
    ));
}

// ============================================================================
// Structural rejection
// ============================================================================

#[test]
fn test_truncated_buffers_rejected_at_every_length() {
    let keys = keys();
    for (msgtype, buf) in signed_buffers(&keys) {
        for cut in 0..buf.len() {
            let decoded_err = match msgtype {
                MessageType::Generic => SrupGeneric::from_wire(&buf[..cut]).is_err(),
                MessageType::Initiate => SrupInitiate::from_wire(&buf[..cut]).is_err(),
                MessageType::Response => SrupResponse::from_wire(&buf[..cut]).is_err(),
                MessageType::Activate => SrupActivate::from_wire(&buf[..cut]).is_err(),
                MessageType::Action => SrupAction::from_wire(&buf[..cut]).is_err(),
                MessageType::Data => SrupData::from_wire(&buf[..cut]).is_err(),
            };
            assert!(
                decoded_err,
                "{msgtype:?} accepted a buffer cut to {cut} bytes"
            );
        }
    }
}

#[test]
fn test_trailing_bytes_rejected() {
    let keys = keys();
    let (_, mut buf) = signed_buffers(&keys).remove(0);
    buf.push(0x00);
    assert!(matches!(
        SrupGeneric::from_wire(&buf),
        Err(SrupError::TrailingBytes(1))
    ));
}

#[test]
fn test_oversize_token_rejected_at_set_time() {
    let mut msg = SrupGeneric::new();
    let err = msg.set_token(&vec![0u8; 70_000]).unwrap_err();
    assert!(matches!(
        err,
        SrupError::FieldTooLong {
            field: "token",
            len: 70_000,
            ..
        }
    ));
    // Nothing stuck.
    assert_eq!(msg.token(), None);
}

#[test]
fn test_oversize_data_payload_rejected_at_set_time() {
    let mut msg = SrupData::new();
    assert!(matches!(
        msg.set_bytes_data(&vec![0u8; 70_000]),
        Err(SrupError::FieldTooLong { field: "data", .. })
    ));
    assert!(msg.bytes_data().is_none());
}

#[test]
fn test_peek_type_routes_and_rejects() {
    assert_eq!(
        peek_type(&[SRUP_VERSION, 0x05, 0x00]).unwrap(),
        MessageType::Data
    );
    assert!(matches!(
        peek_type(&[SRUP_VERSION, 0x3F]),
        Err(SrupError::UnknownType(0x3F))
    ));
    assert!(matches!(
        peek_type(&[SRUP_VERSION]),
        Err(SrupError::Truncated { needed: 1 })
    ));
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_generic_roundtrip(
        seq in any::<u64>(),
        sender in any::<u64>(),
        token in proptest::collection::vec(any::<u8>(), 1..64),
    ) {
        let keys = KeyPair::generate();
        let mut msg = SrupGeneric::new();
        msg.set_sequence_id(seq);
        msg.set_sender_id(sender);
        msg.set_token(&token).unwrap();
        msg.sign(&keys.signing_key).unwrap();

        let decoded = SrupGeneric::from_wire(msg.serialized().unwrap()).unwrap();
        prop_assert_eq!(decoded.sequence_id(), Some(seq));
        prop_assert_eq!(decoded.sender_id(), Some(sender));
        prop_assert_eq!(decoded.token(), Some(&token[..]));
        prop_assert!(decoded.verify(&keys.verifying_key()));
    }

    #[test]
    fn prop_data_payload_roundtrip(
        data_id in any::<u32>(),
        payload in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let keys = KeyPair::generate();
        let mut msg = SrupData::new();
        msg.set_sequence_id(1);
        msg.set_sender_id(2);
        msg.set_data_id(data_id);
        msg.set_bytes_data(&payload).unwrap();
        msg.sign(&keys.signing_key).unwrap();

        let decoded = SrupData::from_wire(msg.serialized().unwrap()).unwrap();
        prop_assert_eq!(decoded.data_id(), Some(data_id));
        prop_assert_eq!(decoded.value(), Some(&DataValue::Bytes(payload)));
        prop_assert!(decoded.verify(&keys.verifying_key()));
    }

    #[test]
    fn prop_double_data_roundtrip(data_id in any::<u32>(), value in any::<f64>()) {
        let keys = KeyPair::generate();
        let mut msg = SrupData::new();
        msg.set_sequence_id(1);
        msg.set_sender_id(2);
        msg.set_data_id(data_id);
        msg.set_double_data(value);
        msg.sign(&keys.signing_key).unwrap();

        let decoded = SrupData::from_wire(msg.serialized().unwrap()).unwrap();
        // Bit-pattern comparison, so NaN round-trips too.
        prop_assert_eq!(
            decoded.double_data().map(f64::to_bits),
            Some(value.to_bits())
        );
    }
}
