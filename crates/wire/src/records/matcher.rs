//! Prefix-match descriptor record.

/// Describes a key-prefix match with positions to skip while comparing.
///
/// `ignore_bytes` is a textual pattern (e.g. `"2, 5-8"`) naming byte
/// positions of the key to ignore. The codec stores it as raw bytes and
/// performs no encoding validation; callers that interpret it as text
/// convert at the edge. That keeps arbitrary stored bytes round-tripping
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "msgpack", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// Key prefix to match against.
    pub prefix: Vec<u8>,
    /// Byte positions to skip, as an uninterpreted textual pattern.
    pub ignore_bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_deep() {
        let mut m = Match {
            prefix: b"user/".to_vec(),
            ignore_bytes: b"2, 5-8".to_vec(),
        };
        let snapshot = m.clone();

        m.prefix[0] = b'X';
        m.ignore_bytes.clear();

        assert_eq!(snapshot.prefix, b"user/");
        assert_eq!(snapshot.ignore_bytes, b"2, 5-8");
    }
}
