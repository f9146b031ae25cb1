//! Bounds-checked cursors over wire buffers.
//!
//! Every native decode path reads through [`ReadCursor`], which checks the
//! remaining length before each read. Centralizing the check here is what
//! makes truncated input fail uniformly with
//! [`WireError::BufferTooSmall`] across all record types instead of each
//! decoder repeating its own offset arithmetic.
//!
//! [`WriteCursor`] assumes its buffer was pre-sized to the record's
//! `encoded_size()`; encoders verify that once up front, so the write side
//! carries no per-field checks.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::WireError;

/// Read position over an input buffer.
pub(crate) struct ReadCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ReadCursor { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if n > self.remaining() {
            return Err(WireError::BufferTooSmall);
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64, WireError> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    pub fn read_i64(&mut self) -> Result<i64, WireError> {
        Ok(LittleEndian::read_i64(self.take(8)?))
    }

    /// Reads a `u32` length prefix followed by that many raw bytes.
    ///
    /// The prefix itself is bounds-checked before the payload read is
    /// attempted, so a prefix pointing past the end of the buffer fails
    /// without consuming anything beyond it.
    pub fn read_len_prefixed(&mut self) -> Result<&'a [u8], WireError> {
        let len = self.read_u32()? as usize;
        self.take(len)
    }
}

/// Write position over a pre-sized output buffer.
pub(crate) struct WriteCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WriteCursor<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        WriteCursor { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.pos
    }

    pub fn put_u8(&mut self, v: u8) {
        self.buf[self.pos] = v;
        self.pos += 1;
    }

    pub fn put_u32(&mut self, v: u32) {
        LittleEndian::write_u32(&mut self.buf[self.pos..], v);
        self.pos += 4;
    }

    pub fn put_u64(&mut self, v: u64) {
        LittleEndian::write_u64(&mut self.buf[self.pos..], v);
        self.pos += 8;
    }

    pub fn put_i64(&mut self, v: i64) {
        LittleEndian::write_i64(&mut self.buf[self.pos..], v);
        self.pos += 8;
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
    }

    /// Writes a `u32` length prefix followed by the raw bytes.
    pub fn put_len_prefixed(&mut self, bytes: &[u8]) {
        self.put_u32(bytes.len() as u32);
        self.put_bytes(bytes);
    }

    /// Reserves the next `len` bytes as a frame for a nested record to
    /// encode into.
    pub fn frame(&mut self, len: usize) -> &mut [u8] {
        let start = self.pos;
        self.pos += len;
        &mut self.buf[start..self.pos]
    }
}
