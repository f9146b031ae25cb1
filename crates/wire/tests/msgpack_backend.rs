//! Integration suite for the MessagePack backend.
//!
//! Exercises the same contract as the native suite. Byte layouts differ
//! from the native backend by design, so nothing here asserts exact
//! offsets — only the per-backend round-trip, size, append, and
//! truncation guarantees.

#![cfg(feature = "msgpack")]

use proptest::prelude::*;
use tessera_wire::{
    decode, marshal, marshal_append, Checksum, ChecksumAlgo, DataKey, EncryptionAlgo, Kv, KvList,
    ManifestChange, ManifestChangeSet, ManifestOp, Match, WireError, WireMessage,
};

fn sample_kv() -> Kv {
    Kv {
        key: b"test-key".to_vec(),
        value: b"test-value".to_vec(),
        user_meta: vec![0x01],
        version: 12345,
        expires_at: 67890,
        meta: vec![0x02],
        stream_id: 42,
        stream_done: true,
    }
}

fn roundtrip<M: WireMessage>(msg: &M) -> M {
    let bytes = marshal(msg).unwrap();
    assert_eq!(bytes.len(), msg.encoded_size(), "size must match marshal output");
    decode(&bytes).unwrap()
}

#[test]
fn test_roundtrip_every_type() {
    assert_eq!(roundtrip(&sample_kv()), sample_kv());
    assert_eq!(roundtrip(&Kv::default()), Kv::default());

    let mut list = KvList::new();
    list.push(sample_kv());
    list.push(Kv::default());
    list.alloc_ref = 999;
    assert_eq!(roundtrip(&list), list);

    let change = ManifestChange::create(1, 2, 3, 4);
    assert_eq!(roundtrip(&change), change);

    let mut set = ManifestChangeSet::new();
    set.push(change);
    set.push(ManifestChange::delete(9));
    assert_eq!(roundtrip(&set), set);

    let key = DataKey {
        key_id: 13,
        data: vec![0xAA; 32],
        iv: vec![0xBB; 12],
        created_at: -5,
    };
    assert_eq!(roundtrip(&key), key);

    let sum = Checksum::new(ChecksumAlgo::XXHASH64, u64::MAX);
    assert_eq!(roundtrip(&sum), sum);

    let m = Match {
        prefix: b"user/".to_vec(),
        ignore_bytes: vec![0xFF, 0x00, b'3'],
    };
    assert_eq!(roundtrip(&m), m);
}

#[test]
fn test_unknown_discriminants_roundtrip() {
    let change = ManifestChange {
        op: ManifestOp(0xDEAD),
        encryption_algo: EncryptionAlgo(0xBEEF),
        ..ManifestChange::default()
    };
    let decoded = roundtrip(&change);
    assert_eq!(decoded.op, ManifestOp(0xDEAD));
    assert_eq!(decoded.encryption_algo, EncryptionAlgo(0xBEEF));
}

#[test]
fn test_marshal_append_preserves_prefix() {
    let kv = Kv {
        version: 100,
        ..Kv::default()
    };
    let buf = marshal_append(b"prefix-".to_vec(), &kv).unwrap();
    assert_eq!(&buf[..7], b"prefix-");
    let decoded: Kv = decode(&buf[7..]).unwrap();
    assert_eq!(decoded.version, 100);
}

#[test]
fn test_marshal_to_short_buffer() {
    let kv = sample_kv();
    let mut buf = vec![0u8; kv.encoded_size() - 1];
    assert_eq!(kv.marshal_to(&mut buf), Err(WireError::BufferTooSmall));
}

#[test]
fn test_empty_input_is_too_small() {
    assert_eq!(decode::<Kv>(&[]), Err(WireError::BufferTooSmall));
    assert_eq!(decode::<Checksum>(&[]), Err(WireError::BufferTooSmall));
}

#[test]
fn test_truncated_input_never_decodes() {
    let mut list = KvList::new();
    list.push(sample_kv());
    list.alloc_ref = 7;
    let bytes = marshal(&list).unwrap();

    for k in 0..bytes.len() {
        let mut target = KvList::new();
        assert!(
            target.unmarshal(&bytes[..k]).is_err(),
            "prefix of {k} bytes out of {} must not decode",
            bytes.len()
        );
    }
}

proptest! {
    #[test]
    fn prop_kv_roundtrip(
        key in prop::collection::vec(any::<u8>(), 0..48),
        value in prop::collection::vec(any::<u8>(), 0..96),
        version in any::<u64>(),
        stream_done in any::<bool>(),
    ) {
        let kv = Kv { key, value, version, stream_done, ..Kv::default() };
        let bytes = marshal(&kv).unwrap();
        prop_assert_eq!(bytes.len(), kv.encoded_size());
        prop_assert_eq!(decode::<Kv>(&bytes).unwrap(), kv);
    }

    #[test]
    fn prop_checksum_roundtrip(algo in any::<u32>(), sum in any::<u64>()) {
        let c = Checksum::new(ChecksumAlgo(algo), sum);
        prop_assert_eq!(decode::<Checksum>(&marshal(&c).unwrap()).unwrap(), c);
    }
}
