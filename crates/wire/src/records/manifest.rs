//! Manifest change-log records.
//!
//! The manifest is an append-only log of table-level changes. Each entry is
//! fixed-size on the wire; a set of entries is one atomic log append.

/// Operation recorded by a [`ManifestChange`].
///
/// A raw `u32` discriminant rather than a closed enum: a value outside the
/// named set decodes and re-encodes unchanged, so manifests written by a
/// newer engine still round-trip through an older one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "msgpack", derive(serde::Serialize, serde::Deserialize))]
pub struct ManifestOp(pub u32);

impl ManifestOp {
    /// Table added at a level.
    pub const CREATE: ManifestOp = ManifestOp(0);
    /// Table removed.
    pub const DELETE: ManifestOp = ManifestOp(1);
}

/// Encryption algorithm discriminant.
///
/// Raw `u32` for the same forward-compatibility reason as [`ManifestOp`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "msgpack", derive(serde::Serialize, serde::Deserialize))]
pub struct EncryptionAlgo(pub u32);

impl EncryptionAlgo {
    /// AES encryption.
    pub const AES: EncryptionAlgo = EncryptionAlgo(0);
}

/// One entry in the manifest change log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "msgpack", derive(serde::Serialize, serde::Deserialize))]
pub struct ManifestChange {
    /// Table identifier the change applies to.
    pub id: u64,
    /// What happened to the table.
    pub op: ManifestOp,
    /// Level the table lives at.
    pub level: u32,
    /// Identifier of the data key encrypting the table; 0 when unencrypted.
    pub key_id: u64,
    /// Encryption algorithm used for the table.
    pub encryption_algo: EncryptionAlgo,
    /// Compression codec discriminant for the table.
    pub compression: u32,
}

impl ManifestChange {
    /// A CREATE entry for table `id` at `level`.
    pub fn create(id: u64, level: u32, key_id: u64, compression: u32) -> Self {
        ManifestChange {
            id,
            op: ManifestOp::CREATE,
            level,
            key_id,
            encryption_algo: EncryptionAlgo::AES,
            compression,
        }
    }

    /// A DELETE entry for table `id`.
    pub fn delete(id: u64) -> Self {
        ManifestChange {
            id,
            op: ManifestOp::DELETE,
            ..ManifestChange::default()
        }
    }
}

/// An ordered set of manifest changes appended atomically.
///
/// Order is significant: replaying the log entry by entry reconstructs the
/// manifest state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "msgpack", derive(serde::Serialize, serde::Deserialize))]
pub struct ManifestChangeSet {
    /// Changes in log order.
    pub changes: Vec<ManifestChange>,
}

impl ManifestChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        ManifestChangeSet::default()
    }

    /// Append a change to the set.
    pub fn push(&mut self, change: ManifestChange) {
        self.changes.push(change);
    }

    /// Number of changes in the set.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Check if the set holds no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_helper() {
        let change = ManifestChange::create(9, 3, 77, 1);
        assert_eq!(change.op, ManifestOp::CREATE);
        assert_eq!(change.level, 3);
        assert_eq!(change.key_id, 77);
        assert_eq!(change.encryption_algo, EncryptionAlgo::AES);
    }

    #[test]
    fn test_delete_helper() {
        let change = ManifestChange::delete(9);
        assert_eq!(change.id, 9);
        assert_eq!(change.op, ManifestOp::DELETE);
        assert_eq!(change.level, 0);
    }

    #[test]
    fn test_unknown_op_is_representable() {
        let change = ManifestChange {
            op: ManifestOp(42),
            ..ManifestChange::default()
        };
        assert_ne!(change.op, ManifestOp::CREATE);
        assert_ne!(change.op, ManifestOp::DELETE);
        assert_eq!(change.op.0, 42);
    }
}
