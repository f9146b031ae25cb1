//! MessagePack backend.
//!
//! Compiled in place of the native layouts when the `msgpack` feature is
//! enabled; the whole [`WireMessage`] contract is delegated to `rmp-serde`.
//! Output bytes are not compatible with the native backend — only the
//! per-backend round-trip, size, and truncation contracts carry over.
//!
//! Truncated input surfaces as [`WireError::BufferTooSmall`]; any other
//! malformed marker or type data is [`WireError::InvalidData`]. Unknown
//! discriminant values still round-trip: the discriminant newtypes encode
//! as plain integers.

use std::io;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::WireError;
use crate::message::WireMessage;
use crate::records::{Checksum, DataKey, Kv, KvList, ManifestChange, ManifestChangeSet, Match};

/// `io::Write` sink that counts bytes without storing them, so
/// `encoded_size` needs no allocation.
#[derive(Default)]
struct ByteCounter {
    written: usize,
}

impl io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn counted_size<T: Serialize>(value: &T) -> usize {
    let mut counter = ByteCounter::default();
    // Plain integer and byte-vector fields cannot fail to serialize into
    // an infallible sink.
    match rmp_serde::encode::write(&mut counter, value) {
        Ok(()) => counter.written,
        Err(_) => 0,
    }
}

fn map_decode_error(err: rmp_serde::decode::Error) -> WireError {
    use rmp_serde::decode::Error;
    match err {
        Error::InvalidMarkerRead(ref io_err) | Error::InvalidDataRead(ref io_err)
            if io_err.kind() == io::ErrorKind::UnexpectedEof =>
        {
            WireError::BufferTooSmall
        }
        _ => WireError::InvalidData,
    }
}

fn marshal_into<T: Serialize>(value: &T, size: usize, buf: &mut [u8]) -> Result<usize, WireError> {
    if buf.len() < size {
        return Err(WireError::BufferTooSmall);
    }
    let mut out = &mut buf[..size];
    rmp_serde::encode::write(&mut out, value).map_err(|_| WireError::InvalidData)?;
    Ok(size)
}

fn unmarshal_from<T: DeserializeOwned>(data: &[u8]) -> Result<T, WireError> {
    rmp_serde::from_slice(data).map_err(map_decode_error)
}

macro_rules! msgpack_message {
    ($($ty:ty),* $(,)?) => {$(
        impl WireMessage for $ty {
            fn encoded_size(&self) -> usize {
                counted_size(self)
            }

            fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, WireError> {
                marshal_into(self, self.encoded_size(), buf)
            }

            fn unmarshal(&mut self, data: &[u8]) -> Result<(), WireError> {
                *self = unmarshal_from(data)?;
                Ok(())
            }
        }
    )*};
}

msgpack_message!(
    Kv,
    KvList,
    ManifestChange,
    ManifestChangeSet,
    DataKey,
    Checksum,
    Match,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ManifestOp;

    #[test]
    fn test_size_matches_marshal() {
        let kv = Kv {
            key: b"key".to_vec(),
            value: b"value".to_vec(),
            version: 9,
            ..Kv::default()
        };
        assert_eq!(kv.marshal().unwrap().len(), kv.encoded_size());
    }

    #[test]
    fn test_empty_input_is_too_small() {
        let mut kv = Kv::default();
        assert_eq!(kv.unmarshal(&[]), Err(WireError::BufferTooSmall));
    }

    #[test]
    fn test_garbage_input_is_invalid() {
        // 0xC1 is the one marker MessagePack reserves as never-used.
        let mut change = ManifestChange::default();
        assert_eq!(change.unmarshal(&[0xC1]), Err(WireError::InvalidData));
    }

    #[test]
    fn test_unknown_discriminant_roundtrips() {
        let change = ManifestChange {
            op: ManifestOp(999),
            ..ManifestChange::default()
        };
        let decoded: ManifestChange =
            crate::message::decode(&change.marshal().unwrap()).unwrap();
        assert_eq!(decoded.op, ManifestOp(999));
    }
}
