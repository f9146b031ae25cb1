//! Codec contract and generic dispatch.
//!
//! [`WireMessage`] is the seam between record types and encoding backends.
//! It is implemented once per record type by whichever backend is compiled
//! in: the native binary layouts by default, or MessagePack under the
//! `msgpack` feature. Callers that are generic over the contract never
//! observe which backend they got beyond the bytes themselves.

use std::fmt::Debug;

use crate::error::WireError;

/// Contract implemented by every wire record type.
///
/// # Thread Safety
///
/// Every operation is a pure transform over its inputs; no state survives
/// between calls. Distinct record instances may be encoded or decoded
/// concurrently without synchronization. A single instance mutated by one
/// thread while another encodes it is a data race the codec does not guard
/// against; callers that need to keep a record while handing its bytes to
/// an asynchronous writer sever aliasing with `clone()` first, which deep
/// copies every byte-holding field.
pub trait WireMessage: Clone + Debug + Default + PartialEq {
    /// Exact length of this record's encoding, computed without allocating.
    ///
    /// Checked invariant: `marshal()?.len() == encoded_size()` for every
    /// record state.
    fn encoded_size(&self) -> usize;

    /// Encodes into a fresh buffer of exactly [`encoded_size`] bytes.
    ///
    /// [`encoded_size`]: WireMessage::encoded_size
    fn marshal(&self) -> Result<Vec<u8>, WireError> {
        let mut buf = vec![0u8; self.encoded_size()];
        self.marshal_to(&mut buf)?;
        Ok(buf)
    }

    /// Encodes into a caller-supplied buffer, returning the bytes written.
    ///
    /// Fails with [`WireError::BufferTooSmall`] if `buf` is shorter than
    /// [`encoded_size`]. Composite encoders use this to write children
    /// directly into the parent's buffer without intermediate allocation.
    ///
    /// [`encoded_size`]: WireMessage::encoded_size
    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, WireError>;

    /// Decodes `data` into `self`.
    ///
    /// Every length-prefixed sub-read is checked against the remaining
    /// input before it is consumed; a read that would pass the end of
    /// `data` fails with [`WireError::BufferTooSmall`]. On error the
    /// receiver is not fully populated and must be discarded.
    fn unmarshal(&mut self, data: &[u8]) -> Result<(), WireError>;
}

/// Encodes a record. Equivalent to calling its own [`WireMessage::marshal`].
pub fn marshal<M: WireMessage>(msg: &M) -> Result<Vec<u8>, WireError> {
    msg.marshal()
}

/// Decodes `data` into an existing record.
pub fn unmarshal<M: WireMessage>(data: &[u8], msg: &mut M) -> Result<(), WireError> {
    msg.unmarshal(data)
}

/// Decodes `data` into a fresh record.
pub fn decode<M: WireMessage>(data: &[u8]) -> Result<M, WireError> {
    let mut msg = M::default();
    msg.unmarshal(data)?;
    Ok(msg)
}

/// Encoded length of a record.
pub fn encoded_size<M: WireMessage>(msg: &M) -> usize {
    msg.encoded_size()
}

/// Appends a record's encoding to `buf` and returns the combined buffer.
///
/// The existing content of `buf` is preserved byte-for-byte; the record's
/// encoding follows it directly. The record is encoded in place at the end
/// of the (possibly reallocated) buffer, so no intermediate buffer is
/// allocated.
pub fn marshal_append<M: WireMessage>(mut buf: Vec<u8>, msg: &M) -> Result<Vec<u8>, WireError> {
    let start = buf.len();
    buf.resize(start + msg.encoded_size(), 0);
    msg.marshal_to(&mut buf[start..])?;
    Ok(buf)
}
