//! Block checksum record.

/// Checksum algorithm discriminant.
///
/// Raw `u32`; unrecognized values round-trip unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "msgpack", derive(serde::Serialize, serde::Deserialize))]
pub struct ChecksumAlgo(pub u32);

impl ChecksumAlgo {
    /// CRC32 with the Castagnoli polynomial.
    pub const CRC32C: ChecksumAlgo = ChecksumAlgo(0);
    /// 64-bit xxHash.
    pub const XXHASH64: ChecksumAlgo = ChecksumAlgo(1);
}

/// A checksum over a block of data, tagged with its algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "msgpack", derive(serde::Serialize, serde::Deserialize))]
pub struct Checksum {
    /// Algorithm that produced the sum.
    pub algo: ChecksumAlgo,
    /// The checksum value, zero-extended to 64 bits.
    pub sum: u64,
}

impl Checksum {
    /// A checksum record for `sum` computed with `algo`.
    pub fn new(algo: ChecksumAlgo, sum: u64) -> Self {
        Checksum { algo, sum }
    }
}
