//! Record types carried over the wire.
//!
//! Each record is a plain value: constructed by a caller, handed to the
//! codec to encode, or produced fresh by a decode. Byte-holding fields are
//! owned, so `clone()` is always a deep copy and nothing is shared between
//! a record and its clone. Types compose only by containment (`KvList`
//! holds `Kv`, `ManifestChangeSet` holds `ManifestChange`).
//!
//! Empty byte fields are legal everywhere and are the representation of
//! absence; there is no separate null state.

mod checksum;
mod datakey;
mod kv;
mod manifest;
mod matcher;

pub use checksum::{Checksum, ChecksumAlgo};
pub use datakey::DataKey;
pub use kv::{Kv, KvList};
pub use manifest::{EncryptionAlgo, ManifestChange, ManifestChangeSet, ManifestOp};
pub use matcher::Match;
