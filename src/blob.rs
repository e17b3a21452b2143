//! # Variable blobs
//!
//! A [`VariableBlob`] is a byte container that knows how to frame itself as
//! `[varint length][bytes]` and how to cut such a frame back out of a larger buffer.
//!
//! # Example
//!
//! ```
//! use vblob::prelude::*;
//!
//! let payload = VariableBlob::from(&b"hello"[..]);
//!
//! // a standalone frame
//! let framed = payload.frame();
//! assert_eq!(framed.to_hex(), "0568656c6c6f");
//!
//! // or appended after other data
//! let mut out = VariableBlob::new();
//! out.put(&7u8).unwrap();
//! payload.frame_into(&mut out);
//! assert_eq!(out.len(), 7);
//!
//! let mut src = out;
//! assert_eq!(src.take::<u8>().unwrap(), 7);
//! assert_eq!(src.unframe().unwrap(), payload);
//! ```

use crate::{
    cursor::ByteCursor,
    encoding::{De, Ser},
    errors::PackError,
};
use bytes::Bytes;
use std::{fmt, str::FromStr};

/// Writes `[varint length][bytes]`.
pub(crate) fn put_frame(cur: &mut ByteCursor, bytes: &[u8]) {
    cur.put_varint(bytes.len() as u64);
    cur.put_slice(bytes);
}

/// Reads a `[varint length][bytes]` frame, returning the payload. The caller restores
/// the read position on failure.
pub(crate) fn read_frame(cur: &mut ByteCursor) -> Result<&[u8], PackError> {
    let size = cur.read_varint()?;
    if (size as i64) < 0 {
        return Err(PackError::NegativeLength);
    }
    let remaining = cur.remaining();
    if (remaining as u64) < size {
        return Err(PackError::eof(size as usize, remaining));
    }
    cur.read_many(size as usize)
}

/// How many [`VariableBlob::nested`] decodes may be open at once.
pub const MAX_DEPTH: usize = 64;

#[derive(Clone, Default)]
pub struct VariableBlob {
    cursor: ByteCursor,
    depth: usize,
}

impl VariableBlob {
    /// Creates an empty blob.
    pub fn new() -> Self { Self::default() }

    /// Creates a blob of `len` zero bytes to be written over.
    pub fn with_len(len: usize) -> Self {
        VariableBlob {
            cursor: ByteCursor::with_len(len),
            depth: 0,
        }
    }

    /// Creates an empty blob with room for `cap` bytes.
    pub fn with_capacity(cap: usize) -> Self {
        VariableBlob {
            cursor: ByteCursor::with_capacity(cap),
            depth: 0,
        }
    }

    /// Parses a hex string, with or without a leading `0x`.
    pub fn from_hex(s: &str) -> Result<Self, PackError> {
        Ok(VariableBlob {
            cursor: ByteCursor::from_hex(s)?,
            depth: 0,
        })
    }

    /// The number of meaningful bytes, independent of flip state.
    pub fn len(&self) -> usize { self.cursor.len() }

    pub fn is_empty(&self) -> bool { self.cursor.is_empty() }

    pub fn as_slice(&self) -> &[u8] { self.cursor.as_slice() }

    pub fn cursor(&self) -> &ByteCursor { &self.cursor }

    pub fn cursor_mut(&mut self) -> &mut ByteCursor { &mut self.cursor }

    pub fn to_hex(&self) -> String { self.cursor.to_hex() }

    pub fn into_bytes(self) -> Bytes { self.cursor.into_bytes() }

    pub fn flip(&mut self) -> &mut Self {
        self.cursor.flip();
        self
    }

    pub fn rewind(&mut self) -> &mut Self {
        self.cursor.rewind();
        self
    }

    /// Frames this blob into a new standalone blob.
    pub fn frame(&self) -> VariableBlob {
        let mut out = VariableBlob::with_capacity(self.len() + 1);
        self.frame_into(&mut out);
        out
    }

    /// Appends this blob's frame to `target`, returning `target`.
    pub fn frame_into<'a>(&self, target: &'a mut VariableBlob) -> &'a mut VariableBlob {
        put_frame(&mut target.cursor, self.as_slice());
        target
    }

    /// Reads one frame starting at the read position, returning its payload as a new
    /// blob. On failure the read position is left where it was.
    ///
    /// # Errors
    ///
    /// * [`PackError::NegativeLength`] if the length prefix is negative as an `i64`.
    /// * [`PackError::EndOfBuffer`] if the payload runs past the end of the content.
    pub fn unframe(&mut self) -> Result<VariableBlob, PackError> {
        self.cursor
            .restoring(|cur| read_frame(cur).map(VariableBlob::from))
    }

    /// Appends `value`'s encoding to this blob.
    pub fn put<T: Ser + ?Sized>(&mut self, value: &T) -> Result<&mut Self, PackError> {
        value.serialize(self)
    }

    /// Reads a `T` from the read position.
    pub fn take<T: De>(&mut self) -> Result<T, PackError> { T::deserialize(self) }

    /// Runs `f` one nesting level deeper. Decoders of recursive containers go through
    /// here so hostile input cannot recurse without bound.
    ///
    /// # Errors
    ///
    /// * [`PackError::DepthExceeded`] if [`MAX_DEPTH`] levels are already open.
    pub fn nested<T, F>(&mut self, f: F) -> Result<T, PackError>
    where
        F: FnOnce(&mut Self) -> Result<T, PackError>,
    {
        if self.depth >= MAX_DEPTH {
            return Err(PackError::DepthExceeded(MAX_DEPTH));
        }
        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }
}

impl PartialEq for VariableBlob {
    fn eq(&self, other: &Self) -> bool { self.as_slice() == other.as_slice() }
}

impl Eq for VariableBlob {}

impl AsRef<[u8]> for VariableBlob {
    fn as_ref(&self) -> &[u8] { self.as_slice() }
}

impl From<&[u8]> for VariableBlob {
    fn from(bytes: &[u8]) -> Self {
        VariableBlob {
            cursor: ByteCursor::from_slice(bytes),
            depth: 0,
        }
    }
}

impl From<Vec<u8>> for VariableBlob {
    fn from(bytes: Vec<u8>) -> Self { Self::from(&bytes[..]) }
}

impl From<ByteCursor> for VariableBlob {
    fn from(cursor: ByteCursor) -> Self { VariableBlob { cursor, depth: 0 } }
}

impl FromStr for VariableBlob {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, PackError> { Self::from_hex(s) }
}

impl fmt::Display for VariableBlob {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "0x{}", self.to_hex()) }
}

impl fmt::Debug for VariableBlob {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("VariableBlob").field(&self.cursor).finish()
    }
}

impl Ser for VariableBlob {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        Ok(self.frame_into(target))
    }
}

impl De for VariableBlob {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> { source.unframe() }
}
