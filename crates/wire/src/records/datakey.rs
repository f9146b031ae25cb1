//! Encryption data-key record.

/// A data key used for encryption at rest.
///
/// `data` is the raw key material and `iv` the initialization vector; their
/// lengths are independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "msgpack", derive(serde::Serialize, serde::Deserialize))]
pub struct DataKey {
    /// Identifier referenced from manifest entries.
    pub key_id: u64,
    /// Raw key material.
    pub data: Vec<u8>,
    /// Initialization vector.
    pub iv: Vec<u8>,
    /// Creation time, seconds since the epoch. Signed so callers may use
    /// sentinel epoch values.
    pub created_at: i64,
}
