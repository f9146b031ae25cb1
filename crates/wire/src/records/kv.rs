//! Key-value entry and batch records.

/// A single key-value entry.
///
/// All fields are always present; byte fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "msgpack", derive(serde::Serialize, serde::Deserialize))]
pub struct Kv {
    /// Entry key.
    pub key: Vec<u8>,
    /// Entry value.
    pub value: Vec<u8>,
    /// Caller-owned metadata stored alongside the value.
    pub user_meta: Vec<u8>,
    /// Commit version of the entry.
    pub version: u64,
    /// Expiry as seconds since the epoch; 0 means no expiry.
    pub expires_at: u64,
    /// Engine-internal metadata bits.
    pub meta: Vec<u8>,
    /// Stream the entry belongs to during a backup or restore.
    pub stream_id: u32,
    /// Marks the final entry of a stream.
    pub stream_done: bool,
}

/// An ordered batch of [`Kv`] entries.
///
/// Order is significant; the batch is replayed in sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "msgpack", derive(serde::Serialize, serde::Deserialize))]
pub struct KvList {
    /// Entries in batch order.
    pub kv: Vec<Kv>,
    /// Opaque correlation token for the allocator that produced the batch.
    /// The codec carries it; it never interprets it.
    pub alloc_ref: u64,
}

impl KvList {
    /// Create an empty batch.
    pub fn new() -> Self {
        KvList::default()
    }

    /// Create an empty batch with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        KvList {
            kv: Vec::with_capacity(capacity),
            alloc_ref: 0,
        }
    }

    /// Append an entry to the batch.
    pub fn push(&mut self, kv: Kv) {
        self.kv.push(kv);
    }

    /// Number of entries in the batch.
    pub fn len(&self) -> usize {
        self.kv.len()
    }

    /// Check if the batch holds no entries.
    pub fn is_empty(&self) -> bool {
        self.kv.is_empty()
    }
}
