//! # Byte cursor
//!
//! A growable byte store with separate write and read positions.
//!
//! Writes land at the write position, overwriting or extending the storage. Reads start
//! at the read position and are bounded by [`ByteCursor::len`], which is the larger of
//! the write position and the limit. Before a [`flip`](ByteCursor::flip) the write
//! position is the content length; afterwards the limit is.
//!
//! # Example
//!
//! ```
//! use vblob::cursor::ByteCursor;
//!
//! let mut cur = ByteCursor::new();
//! cur.put_varint(300);
//! cur.put_u8(7);
//!
//! assert_eq!(cur.as_slice(), &[0xac, 0x02, 0x07]);
//! assert_eq!(cur.read_varint().unwrap(), 300);
//! assert_eq!(cur.read_u8().unwrap(), 7);
//! assert!(cur.read_u8().is_err());
//! ```

use crate::{encoding::constants::*, errors::PackError};
use bytes::{Bytes, BytesMut};
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Default)]
pub struct ByteCursor {
    storage: BytesMut,
    write_pos: usize,
    read_pos: usize,
    limit: usize,
}

impl ByteCursor {
    /// Creates an empty cursor.
    pub fn new() -> Self { Self::default() }

    /// Creates a cursor holding `len` zero bytes, ready to be written over.
    ///
    /// # Arguments
    ///
    /// * `len: usize` - The number of bytes to pre-allocate.
    pub fn with_len(len: usize) -> Self {
        ByteCursor {
            storage: BytesMut::zeroed(len),
            write_pos: 0,
            read_pos: 0,
            limit: len,
        }
    }

    /// Creates an empty cursor that can take `cap` bytes before reallocating.
    pub fn with_capacity(cap: usize) -> Self {
        ByteCursor {
            storage: BytesMut::with_capacity(cap),
            ..Self::default()
        }
    }

    /// Creates a cursor holding a copy of `bytes`. Further writes append after them.
    pub fn from_slice(bytes: &[u8]) -> Self {
        ByteCursor {
            storage: BytesMut::from(bytes),
            write_pos: bytes.len(),
            read_pos: 0,
            limit: bytes.len(),
        }
    }

    /// Parses a hex string, with or without a leading `0x`.
    ///
    /// # Example
    ///
    /// ```
    /// use vblob::cursor::ByteCursor;
    ///
    /// let cur = ByteCursor::from_hex("0x00ff").unwrap();
    /// assert_eq!(cur.as_slice(), &[0x00, 0xff]);
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, PackError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        Ok(Self::from_slice(&hex::decode(digits)?))
    }

    /// The number of meaningful bytes, whether or not the cursor has been flipped.
    pub fn len(&self) -> usize { self.write_pos.max(self.limit) }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn capacity(&self) -> usize { self.storage.len() }

    pub fn write_position(&self) -> usize { self.write_pos }

    pub fn read_position(&self) -> usize { self.read_pos }

    pub fn limit(&self) -> usize { self.limit }

    /// Bytes left between the read position and the end of the content.
    pub fn remaining(&self) -> usize { self.len().saturating_sub(self.read_pos) }

    /// The meaningful bytes, `[0, len())`.
    pub fn as_slice(&self) -> &[u8] { &self.storage[..self.len()] }

    /// The bytes left to read.
    pub fn unread(&self) -> &[u8] { &self.storage[self.read_pos.min(self.len())..self.len()] }

    pub fn to_hex(&self) -> String { hex::encode(self.as_slice()) }

    /// Consumes the cursor, returning its meaningful bytes.
    pub fn into_bytes(mut self) -> Bytes {
        let len = self.len();
        self.storage.truncate(len);
        self.storage.freeze()
    }

    /// Switches from writing to reading: the limit becomes the write position and both
    /// positions go back to the start. Writes after a flip start over at offset zero.
    pub fn flip(&mut self) -> &mut Self {
        self.limit = self.write_pos;
        self.write_pos = 0;
        self.read_pos = 0;
        self
    }

    /// Moves the read position back to the start.
    pub fn rewind(&mut self) -> &mut Self {
        self.read_pos = 0;
        self
    }

    pub fn put_u8(&mut self, u: u8) { self.put_slice(&[u]) }

    pub fn put_slice(&mut self, src: &[u8]) {
        let end = self.write_pos + src.len();
        if end > self.storage.len() {
            self.storage.resize(end, 0);
        }
        self.storage[self.write_pos..end].copy_from_slice(src);
        self.write_pos = end;
    }

    /// Writes `u` as a base-128 varint, least significant group first.
    pub fn put_varint(&mut self, mut u: u64) {
        let mut groups: SmallVec<[u8; MAX_VARINT_LEN]> = SmallVec::new();
        loop {
            let byte = u as u8 & VARINT_PAYLOAD;
            u >>= VARINT_SHIFT;
            if u == 0 {
                groups.push(byte);
                break;
            }
            groups.push(byte | VARINT_CONTINUE);
        }
        self.put_slice(&groups);
    }

    /// Runs `f`, putting the read position back where it was if `f` fails.
    pub(crate) fn restoring<T, F>(&mut self, f: F) -> Result<T, PackError>
    where
        F: FnOnce(&mut Self) -> Result<T, PackError>,
    {
        let start = self.read_pos;
        let res = f(self);
        if res.is_err() {
            self.read_pos = start;
        }
        res
    }

    /// Reads `len` bytes, failing without moving if fewer remain.
    #[inline]
    pub fn read_many(&mut self, len: usize) -> Result<&[u8], PackError> {
        let remaining = self.remaining();
        if remaining < len {
            return Err(PackError::eof(len, remaining));
        }
        let start = self.read_pos;
        self.read_pos += len;
        Ok(&self.storage[start..start + len])
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, PackError> { Ok(self.read_many(1)?[0]) }

    /// Reads a base-128 varint.
    pub fn read_varint(&mut self) -> Result<u64, PackError> {
        self.restoring(|cur| {
            let mut value = 0u64;
            for i in 0..MAX_VARINT_LEN {
                let byte = cur.read_u8()?;
                value |= u64::from(byte & VARINT_PAYLOAD) << (VARINT_SHIFT * i as u32);
                if byte & VARINT_CONTINUE == 0 {
                    return Ok(value);
                }
            }
            Err(PackError::MalformedVarint(MAX_VARINT_LEN))
        })
    }
}

impl From<&[u8]> for ByteCursor {
    fn from(bytes: &[u8]) -> Self { Self::from_slice(bytes) }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(bytes: Vec<u8>) -> Self { Self::from_slice(&bytes) }
}

impl fmt::Debug for ByteCursor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ByteCursor")
            .field("bytes", &self.to_hex())
            .field("write_pos", &self.write_pos)
            .field("read_pos", &self.read_pos)
            .field("limit", &self.limit)
            .finish()
    }
}
