//! Byte-level reader with bounded operations.

use crate::error::{ByteError, ByteResult};
use crate::varint::{unzigzag32, unzigzag64, VARINT32_MAX_BYTES, VARINT64_MAX_BYTES};

/// A byte cursor for decoding packet payloads.
///
/// All read operations are bounds-checked and return errors on failure.
/// A failed read leaves the cursor where it was, and the reader never
/// panics on malformed input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unread tail of the buffer without consuming it.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> ByteResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16_le(&mut self) -> ByteResult<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32_le(&mut self) -> ByteResult<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32_le(&mut self) -> ByteResult<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    /// Reads a little-endian `u64`.
    pub fn read_u64_le(&mut self) -> ByteResult<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Reads a little-endian IEEE 754 `f32`.
    pub fn read_f32_le(&mut self) -> ByteResult<f32> {
        self.read_array().map(f32::from_le_bytes)
    }

    /// Reads `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> ByteResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Reads a varuint32 (at most 5 bytes).
    pub fn read_varu32(&mut self) -> ByteResult<u32> {
        let value = self.read_varint(VARINT32_MAX_BYTES)?;
        // The fifth group carries 4 significant bits; extra high bits are dropped.
        Ok(value as u32)
    }

    /// Reads a varuint64 (at most 10 bytes).
    pub fn read_varu64(&mut self) -> ByteResult<u64> {
        self.read_varint(VARINT64_MAX_BYTES)
    }

    /// Reads a zig-zag varint32.
    pub fn read_vari32(&mut self) -> ByteResult<i32> {
        self.read_varu32().map(unzigzag32)
    }

    /// Reads a zig-zag varint64.
    pub fn read_vari64(&mut self) -> ByteResult<i64> {
        self.read_varu64().map(unzigzag64)
    }

    fn read_varint(&mut self, max_bytes: usize) -> ByteResult<u64> {
        let mut value = 0u64;
        let mut offset = self.pos;
        for idx in 0..max_bytes {
            let Some(&byte) = self.data.get(offset) else {
                return Err(ByteError::UnexpectedEof {
                    requested: idx + 1,
                    available: self.remaining(),
                });
            };
            offset += 1;
            value |= u64::from(byte & 0x7F) << (7 * idx);
            if byte & 0x80 == 0 {
                self.pos = offset;
                return Ok(value);
            }
        }
        Err(ByteError::InvalidVarint { max_bytes })
    }

    fn ensure_bytes(&self, len: usize) -> ByteResult<()> {
        let available = self.remaining();
        if len > available {
            return Err(ByteError::UnexpectedEof {
                requested: len,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> ByteResult<[u8; N]> {
        self.ensure_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}
