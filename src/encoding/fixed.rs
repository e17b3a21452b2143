use super::*;
use crate::cursor::ByteCursor;
use bytes::Buf;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Integers with a fixed-width, big-endian, two's complement encoding.
pub trait FixedWidth: Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;
    /// Name used in range errors.
    const NAME: &'static str;

    /// Writes exactly [`Self::WIDTH`] bytes.
    fn encode_fixed(&self, out: &mut ByteCursor);

    /// Reads exactly [`Self::WIDTH`] bytes, failing with
    /// [`PackError::EndOfBuffer`] if fewer remain.
    fn decode_fixed(src: &mut ByteCursor) -> Result<Self, PackError>;

    /// Narrows an arbitrary-precision integer, failing with [`PackError::RangeError`]
    /// when it does not fit.
    fn from_bigint(n: &BigInt) -> Result<Self, PackError>;

    /// Range-checked conversion from any integer.
    ///
    /// # Example
    ///
    /// ```
    /// use vblob::prelude::*;
    ///
    /// assert_eq!(i16::checked(-32768).unwrap(), i16::MIN);
    /// assert!(i16::checked(32768).is_err());
    /// assert!(u64::checked(-1).is_err());
    /// ```
    fn checked<N: Into<BigInt>>(n: N) -> Result<Self, PackError> { Self::from_bigint(&n.into()) }
}

/// Validates `n` against `T`'s range, then appends its encoding to `out`.
///
/// # Arguments
///
/// * `n` - Any integer.
/// * `out: &mut VariableBlob` - Where the encoding is appended.
pub fn encode_checked<T, N>(n: N, out: &mut VariableBlob) -> Result<&mut VariableBlob, PackError>
where
    T: FixedWidth + Ser,
    N: Into<BigInt>,
{
    T::checked(n)?.serialize(out)
}

macro_rules! fixed_width {
    ($typ:ty, $get:ident, $narrow:ident) => {
        impl FixedWidth for $typ {
            const WIDTH: usize = std::mem::size_of::<$typ>();
            const NAME: &'static str = stringify!($typ);

            #[inline]
            fn encode_fixed(&self, out: &mut ByteCursor) { out.put_slice(&self.to_be_bytes()) }

            #[inline]
            fn decode_fixed(src: &mut ByteCursor) -> Result<Self, PackError> {
                Ok(src.read_many(Self::WIDTH)?.$get())
            }

            fn from_bigint(n: &BigInt) -> Result<Self, PackError> {
                n.$narrow().ok_or_else(|| PackError::range(Self::NAME, n))
            }
        }

        impl Ser for $typ {
            fn serialize<'a>(
                &self,
                target: &'a mut VariableBlob,
            ) -> Result<&'a mut VariableBlob, PackError> {
                self.encode_fixed(target.cursor_mut());
                Ok(target)
            }
        }

        impl De for $typ {
            fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
                Self::decode_fixed(source.cursor_mut())
            }
        }
    };
}

// 8-bit ints
fixed_width!(i8, get_i8, to_i8);
fixed_width!(u8, get_u8, to_u8);

// 16-bit ints
fixed_width!(i16, get_i16, to_i16);
fixed_width!(u16, get_u16, to_u16);

// 32-bit ints
fixed_width!(i32, get_i32, to_i32);
fixed_width!(u32, get_u32, to_u32);

// 64-bit ints
fixed_width!(i64, get_i64, to_i64);
fixed_width!(u64, get_u64, to_u64);

// 128-bit ints
fixed_width!(i128, get_i128, to_i128);
fixed_width!(u128, get_u128, to_u128);
