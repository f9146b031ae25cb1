//! Native binary layouts.
//!
//! The default backend: self-describing little-endian layouts with 4-byte
//! length prefixes on every variable field. These byte layouts are part of
//! the persisted format contract; any change is a breaking format change.
//!
//! # Format
//!
//! ```text
//! Kv:                [keyLen:4][key][valueLen:4][value][userMetaLen:4][userMeta]
//!                    [version:8][expiresAt:8][metaLen:4][meta][streamId:4][streamDone:1]
//! KvList:            [count:4] count x ([frameLen:4][Kv bytes]) [allocRef:8]
//! ManifestChange:    [id:8][op:4][level:4][keyId:8][encryptionAlgo:4][compression:4]
//! ManifestChangeSet: [count:4] count x ([frameLen:4][ManifestChange:32])
//! DataKey:           [keyId:8][dataLen:4][data][ivLen:4][iv][createdAt:8]
//! Checksum:          [algo:4][sum:8]
//! Match:             [prefixLen:4][prefix][ignoreLen:4][ignoreBytes]
//! ```
//!
//! Note `KvList` places `allocRef` after all entries: a decoder reads all
//! `count` frames before the trailing token.
//!
//! Decoders never validate discriminant values; unknown ops and algorithms
//! are carried as raw integers so data from a newer engine round-trips.

use crate::cursor::{ReadCursor, WriteCursor};
use crate::error::WireError;
use crate::message::WireMessage;
use crate::records::{
    Checksum, ChecksumAlgo, DataKey, EncryptionAlgo, Kv, KvList, ManifestChange,
    ManifestChangeSet, ManifestOp, Match,
};

/// Fixed portion of a `Kv` encoding: four length prefixes, version,
/// expires_at, stream_id, stream_done. Also the minimum decodable length.
const KV_FIXED_LEN: usize = 4 + 4 + 4 + 8 + 8 + 4 + 4 + 1;

/// Every `ManifestChange` encodes to exactly this many bytes.
const MANIFEST_CHANGE_LEN: usize = 8 + 4 + 4 + 8 + 4 + 4;

/// Fixed portion of a `DataKey` encoding.
const DATA_KEY_FIXED_LEN: usize = 8 + 4 + 4 + 8;

/// Every `Checksum` encodes to exactly this many bytes.
const CHECKSUM_LEN: usize = 4 + 8;

/// Fixed portion of a `KvList` encoding: count plus trailing alloc_ref.
const KV_LIST_FIXED_LEN: usize = 4 + 8;

/// Fixed portion of a `Match` encoding: two length prefixes.
const MATCH_FIXED_LEN: usize = 4 + 4;

impl WireMessage for Kv {
    fn encoded_size(&self) -> usize {
        KV_FIXED_LEN + self.key.len() + self.value.len() + self.user_meta.len() + self.meta.len()
    }

    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, WireError> {
        if buf.len() < self.encoded_size() {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = WriteCursor::new(buf);
        cur.put_len_prefixed(&self.key);
        cur.put_len_prefixed(&self.value);
        cur.put_len_prefixed(&self.user_meta);
        cur.put_u64(self.version);
        cur.put_u64(self.expires_at);
        cur.put_len_prefixed(&self.meta);
        cur.put_u32(self.stream_id);
        cur.put_u8(u8::from(self.stream_done));
        Ok(cur.written())
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), WireError> {
        if data.len() < KV_FIXED_LEN {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = ReadCursor::new(data);
        self.key = cur.read_len_prefixed()?.to_vec();
        self.value = cur.read_len_prefixed()?.to_vec();
        self.user_meta = cur.read_len_prefixed()?.to_vec();
        self.version = cur.read_u64()?;
        self.expires_at = cur.read_u64()?;
        self.meta = cur.read_len_prefixed()?.to_vec();
        self.stream_id = cur.read_u32()?;
        self.stream_done = cur.read_u8()? != 0;
        Ok(())
    }
}

impl WireMessage for KvList {
    fn encoded_size(&self) -> usize {
        let mut size = KV_LIST_FIXED_LEN;
        for kv in &self.kv {
            size += 4 + kv.encoded_size();
        }
        size
    }

    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, WireError> {
        if buf.len() < self.encoded_size() {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = WriteCursor::new(buf);
        cur.put_u32(self.kv.len() as u32);
        for kv in &self.kv {
            let frame_len = kv.encoded_size();
            cur.put_u32(frame_len as u32);
            kv.marshal_to(cur.frame(frame_len))?;
        }
        cur.put_u64(self.alloc_ref);
        Ok(cur.written())
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), WireError> {
        if data.len() < KV_LIST_FIXED_LEN {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = ReadCursor::new(data);
        let count = cur.read_u32()? as usize;
        // Each entry costs at least a 4-byte frame prefix, so a count
        // claiming more entries than the input can hold never reserves
        // more than the input's own length.
        let mut kvs = Vec::with_capacity(count.min(cur.remaining() / 4));
        for _ in 0..count {
            let frame = cur.read_len_prefixed()?;
            let mut kv = Kv::default();
            kv.unmarshal(frame)?;
            kvs.push(kv);
        }
        self.alloc_ref = cur.read_u64()?;
        self.kv = kvs;
        Ok(())
    }
}

impl WireMessage for ManifestChange {
    fn encoded_size(&self) -> usize {
        MANIFEST_CHANGE_LEN
    }

    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, WireError> {
        if buf.len() < MANIFEST_CHANGE_LEN {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = WriteCursor::new(buf);
        cur.put_u64(self.id);
        cur.put_u32(self.op.0);
        cur.put_u32(self.level);
        cur.put_u64(self.key_id);
        cur.put_u32(self.encryption_algo.0);
        cur.put_u32(self.compression);
        Ok(cur.written())
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), WireError> {
        if data.len() < MANIFEST_CHANGE_LEN {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = ReadCursor::new(data);
        self.id = cur.read_u64()?;
        self.op = ManifestOp(cur.read_u32()?);
        self.level = cur.read_u32()?;
        self.key_id = cur.read_u64()?;
        self.encryption_algo = EncryptionAlgo(cur.read_u32()?);
        self.compression = cur.read_u32()?;
        Ok(())
    }
}

impl WireMessage for ManifestChangeSet {
    fn encoded_size(&self) -> usize {
        4 + self.changes.len() * (4 + MANIFEST_CHANGE_LEN)
    }

    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, WireError> {
        if buf.len() < self.encoded_size() {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = WriteCursor::new(buf);
        cur.put_u32(self.changes.len() as u32);
        for change in &self.changes {
            cur.put_u32(MANIFEST_CHANGE_LEN as u32);
            change.marshal_to(cur.frame(MANIFEST_CHANGE_LEN))?;
        }
        Ok(cur.written())
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), WireError> {
        if data.len() < 4 {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = ReadCursor::new(data);
        let count = cur.read_u32()? as usize;
        let mut changes = Vec::with_capacity(count.min(cur.remaining() / 4));
        for _ in 0..count {
            let frame = cur.read_len_prefixed()?;
            let mut change = ManifestChange::default();
            change.unmarshal(frame)?;
            changes.push(change);
        }
        self.changes = changes;
        Ok(())
    }
}

impl WireMessage for DataKey {
    fn encoded_size(&self) -> usize {
        DATA_KEY_FIXED_LEN + self.data.len() + self.iv.len()
    }

    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, WireError> {
        if buf.len() < self.encoded_size() {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = WriteCursor::new(buf);
        cur.put_u64(self.key_id);
        cur.put_len_prefixed(&self.data);
        cur.put_len_prefixed(&self.iv);
        cur.put_i64(self.created_at);
        Ok(cur.written())
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), WireError> {
        if data.len() < DATA_KEY_FIXED_LEN {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = ReadCursor::new(data);
        self.key_id = cur.read_u64()?;
        self.data = cur.read_len_prefixed()?.to_vec();
        self.iv = cur.read_len_prefixed()?.to_vec();
        self.created_at = cur.read_i64()?;
        Ok(())
    }
}

impl WireMessage for Checksum {
    fn encoded_size(&self) -> usize {
        CHECKSUM_LEN
    }

    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, WireError> {
        if buf.len() < CHECKSUM_LEN {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = WriteCursor::new(buf);
        cur.put_u32(self.algo.0);
        cur.put_u64(self.sum);
        Ok(cur.written())
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), WireError> {
        if data.len() < CHECKSUM_LEN {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = ReadCursor::new(data);
        self.algo = ChecksumAlgo(cur.read_u32()?);
        self.sum = cur.read_u64()?;
        Ok(())
    }
}

impl WireMessage for Match {
    fn encoded_size(&self) -> usize {
        MATCH_FIXED_LEN + self.prefix.len() + self.ignore_bytes.len()
    }

    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, WireError> {
        if buf.len() < self.encoded_size() {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = WriteCursor::new(buf);
        cur.put_len_prefixed(&self.prefix);
        cur.put_len_prefixed(&self.ignore_bytes);
        Ok(cur.written())
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), WireError> {
        if data.len() < MATCH_FIXED_LEN {
            return Err(WireError::BufferTooSmall);
        }
        let mut cur = ReadCursor::new(data);
        self.prefix = cur.read_len_prefixed()?.to_vec();
        self.ignore_bytes = cur.read_len_prefixed()?.to_vec();
        Ok(())
    }
}
