//! Wire codec errors.

/// Errors produced by wire encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A decode would read past the end of the input, or an encode was
    /// handed a buffer smaller than the record's encoded size.
    ///
    /// Always recoverable: re-read with a larger buffer, or resize the
    /// output buffer. A receiver left behind by a failed decode is
    /// not fully populated and must be discarded.
    #[error("buffer too small for wire record")]
    BufferTooSmall,

    /// Structurally malformed input where length accounting cannot
    /// proceed at all.
    ///
    /// The native layouts carry no internal markers to invalidate, so
    /// their decoders never raise this; the MessagePack backend raises it
    /// for malformed marker or type data. Unrecognized enum discriminants
    /// are never an error under either backend.
    #[error("invalid wire data")]
    InvalidData,
}
