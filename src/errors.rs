use failure::Fail;
use std::fmt;

/// Which access rule an [`Opaque`](crate::opaque::Opaque) refused.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StateError {
    /// Only the encoding is held; the native value has not been materialized.
    NotUnboxed,
    /// An encoding is cached alongside the native value, so it may not be mutated.
    NotMutable,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StateError::NotUnboxed => write!(f, "opaque value is not unboxed"),
            StateError::NotMutable => write!(f, "opaque value is not mutable"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Fail)]
/// An error encountered while encoding or decoding.
pub enum PackError {
    /// A read needed more bytes than the buffer holds past the read position.
    #[fail(
        display = "unexpected end of buffer: needed {} bytes, {} remaining",
        needed, remaining
    )]
    EndOfBuffer { needed: usize, remaining: usize },

    /// A length prefix decoded to a negative number.
    #[fail(display = "could not deserialize variable blob: negative length")]
    NegativeLength,

    /// A varint ran past its maximum length without terminating.
    #[fail(display = "malformed varint: no terminal byte within {} bytes", _0)]
    MalformedVarint(usize),

    /// A value falls outside of the range of the type it is converted to.
    #[fail(display = "{} is out of bounds for {}", value, type_name)]
    RangeError {
        type_name: &'static str,
        value: String,
    },

    /// A boolean byte was neither `0` nor `1`.
    #[fail(display = "boolean must be 0 or 1, found {}", _0)]
    InvalidBoolean(u8),

    /// A string payload was not valid UTF-8.
    #[fail(display = "string is not UTF-8 encoded")]
    InvalidUtf8,

    /// A hex string could not be parsed.
    #[fail(display = "invalid hex string: {}", _0)]
    InvalidHex(String),

    /// Elements that must share a size did not.
    #[fail(display = "size mismatch: expected {}, found {}", expected, found)]
    LengthMismatch { expected: usize, found: usize },

    /// An item count larger than the remaining bytes, beyond what zero-width items
    /// are allowed.
    #[fail(display = "{} items cannot be read from {} remaining bytes", count, remaining)]
    TooManyItems { count: u64, remaining: usize },

    /// Nested values went deeper than [`MAX_DEPTH`](crate::blob::MAX_DEPTH).
    #[fail(display = "nesting deeper than {} levels", _0)]
    DepthExceeded(usize),

    /// A variant index with no matching alternative.
    #[fail(display = "variant index {} out of range for {} variants", index, variants)]
    UnknownVariant { index: u64, variants: u64 },

    /// An [`Opaque`](crate::opaque::Opaque) was accessed in the wrong state.
    #[fail(display = "invalid state: {}", _0)]
    InvalidState(StateError),
}

impl PackError {
    /// Creates a [`PackError::RangeError`].
    ///
    /// # Arguments
    ///
    /// * `type_name: &'static str` - The name of the target type.
    /// * `value: impl Display` - The offending value.
    pub fn range<V: fmt::Display>(type_name: &'static str, value: V) -> Self {
        PackError::RangeError {
            type_name,
            value: value.to_string(),
        }
    }

    pub(crate) fn eof(needed: usize, remaining: usize) -> Self {
        PackError::EndOfBuffer { needed, remaining }
    }
}

impl From<hex::FromHexError> for PackError {
    fn from(e: hex::FromHexError) -> Self { PackError::InvalidHex(e.to_string()) }
}
