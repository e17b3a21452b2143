/// Varint payload bits, 0x7f
pub(crate) const VARINT_PAYLOAD: u8 = 0b0111_1111;
/// Varint continuation bit, 0x80
pub(crate) const VARINT_CONTINUE: u8 = 0b1000_0000;
/// Payload bits carried by each varint byte.
pub(crate) const VARINT_SHIFT: u32 = 7;
/// A `u64` never needs more than ten varint bytes.
pub(crate) const MAX_VARINT_LEN: usize = 10;

/// `false` byte.
pub(crate) const BOOL_FALSE: u8 = 0b0000_0000;
/// `true` byte.
pub(crate) const BOOL_TRUE: u8 = 0b0000_0001;

/// Sign-extension byte for negative big-endian two's complement.
pub(crate) const SIGN_FILL: u8 = 0b1111_1111;

/// Items a container may hold beyond its remaining byte count. Only zero-width items
/// can do that.
pub(crate) const MAX_ZERO_WIDTH_ITEMS: u64 = 1 << 16;
