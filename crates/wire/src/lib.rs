//! Wire formats for Tessera storage records.
//!
//! This crate turns the engine's internal record types (key-value entries,
//! manifest change-log entries, encryption data keys, checksums, stream
//! lists, prefix-match descriptors) into compact byte sequences and back.
//! Encoding is deterministic, sizes are computed exactly before any buffer
//! is touched, and decoding of untrusted or truncated input is
//! bounds-checked on every read.
//!
//! Two interchangeable backends implement the same [`WireMessage`]
//! contract, selected at build time:
//!
//! - the native self-describing little-endian layouts (default)
//! - MessagePack via `rmp-serde` (`msgpack` feature)
//!
//! Exactly one backend is compiled in. Per-backend round-trip, size, and
//! truncation guarantees are identical; the two byte formats are not
//! compatible with each other.
//!
//! The codec holds no state between calls and performs no I/O or logging;
//! counters such as bytes written are the caller's concern.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod message;
pub mod records;

#[cfg(not(feature = "msgpack"))]
mod cursor;
#[cfg(feature = "msgpack")]
mod msgpack;
#[cfg(not(feature = "msgpack"))]
mod native;

pub use error::WireError;
pub use message::{decode, encoded_size, marshal, marshal_append, unmarshal, WireMessage};
pub use records::{
    Checksum, ChecksumAlgo, DataKey, EncryptionAlgo, Kv, KvList, ManifestChange,
    ManifestChangeSet, ManifestOp, Match,
};
