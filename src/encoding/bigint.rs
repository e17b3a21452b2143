//! Fixed-width integers wider than any native Rust integer.
//!
//! `Int160`, `Uint160`, `Int256` and `Uint256` wrap [`BigInt`]/[`BigUint`] and can only
//! be built from values inside their range, so encoding never fails. They encode to
//! exactly 20 or 32 big-endian bytes, sign-extended for the signed types.
//!
//! ```
//! use vblob::prelude::*;
//!
//! let n: Uint160 = "1461501637330902918203684832716283019655932542975".parse().unwrap();
//! assert_eq!(n, Uint160::max_value());
//!
//! let out = encode_full(&n).unwrap();
//! assert_eq!(out.as_slice(), &[0xff; 20][..]);
//!
//! let m = Int256::from(-1i64);
//! assert_eq!(encode_full(&m).unwrap().as_slice(), &[0xff; 32][..]);
//! ```

use super::{constants::SIGN_FILL, *};
use crate::{cursor::ByteCursor, from_fn};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use std::{convert::TryFrom, fmt, str::FromStr};

/// Left-pads a big-endian digit string to `width` bytes.
fn put_padded(out: &mut ByteCursor, digits: &[u8], fill: u8, width: usize) {
    debug_assert!(digits.len() <= width);
    for _ in digits.len()..width {
        out.put_u8(fill);
    }
    out.put_slice(digits);
}

macro_rules! big_codec {
    ($name:ident) => {
        impl Ser for $name {
            fn serialize<'a>(
                &self,
                target: &'a mut VariableBlob,
            ) -> Result<&'a mut VariableBlob, PackError> {
                self.encode_fixed(target.cursor_mut());
                Ok(target)
            }
        }

        impl De for $name {
            fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
                Self::decode_fixed(source.cursor_mut())
            }
        }
    };
}

macro_rules! big_unsigned {
    ($name:ident, $bits:expr) => {
        #[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub struct $name(BigUint);

        impl $name {
            pub const BITS: u64 = $bits;

            /// Wraps `n`, failing with [`PackError::RangeError`] if it needs more than
            /// [`Self::BITS`] bits.
            pub fn new(n: BigUint) -> Result<Self, PackError> {
                if n.bits() > Self::BITS {
                    Err(PackError::range(Self::NAME, n))
                } else {
                    Ok($name(n))
                }
            }

            pub fn max_value() -> Self { $name((BigUint::one() << Self::BITS) - 1u8) }

            pub fn min_value() -> Self { $name(BigUint::zero()) }

            pub fn value(&self) -> &BigUint { &self.0 }

            pub fn into_inner(self) -> BigUint { self.0 }
        }

        impl FixedWidth for $name {
            const WIDTH: usize = $bits / 8;
            const NAME: &'static str = stringify!($name);

            fn encode_fixed(&self, out: &mut ByteCursor) {
                put_padded(out, &self.0.to_bytes_be(), 0, Self::WIDTH)
            }

            fn decode_fixed(src: &mut ByteCursor) -> Result<Self, PackError> {
                Ok($name(BigUint::from_bytes_be(src.read_many(Self::WIDTH)?)))
            }

            fn from_bigint(n: &BigInt) -> Result<Self, PackError> {
                match n.to_biguint() {
                    Some(u) => Self::new(u),
                    None => Err(PackError::range(Self::NAME, n)),
                }
            }
        }

        impl FromStr for $name {
            type Err = PackError;

            /// Parses a decimal string. Unparsable input is reported as a range error.
            fn from_str(s: &str) -> Result<Self, PackError> {
                match BigUint::from_str(s) {
                    Ok(n) => Self::new(n),
                    Err(_) => Err(PackError::range(Self::NAME, s)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
        }

        impl TryFrom<BigUint> for $name {
            type Error = PackError;

            fn try_from(n: BigUint) -> Result<Self, PackError> { Self::new(n) }
        }

        from_fn!($name, u8, |u| $name(BigUint::from(u)));
        from_fn!($name, u16, |u| $name(BigUint::from(u)));
        from_fn!($name, u32, |u| $name(BigUint::from(u)));
        from_fn!($name, u64, |u| $name(BigUint::from(u)));
        from_fn!($name, u128, |u| $name(BigUint::from(u)));

        big_codec!($name);
    };
}

macro_rules! big_signed {
    ($name:ident, $bits:expr) => {
        #[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub struct $name(BigInt);

        impl $name {
            pub const BITS: u64 = $bits;

            /// Wraps `n`, failing with [`PackError::RangeError`] if it does not fit in
            /// [`Self::BITS`] bits of two's complement.
            pub fn new(n: BigInt) -> Result<Self, PackError> {
                if n < *Self::min_value().value() || n > *Self::max_value().value() {
                    Err(PackError::range(Self::NAME, n))
                } else {
                    Ok($name(n))
                }
            }

            pub fn max_value() -> Self { $name((BigInt::one() << (Self::BITS - 1)) - 1) }

            pub fn min_value() -> Self { $name(-(BigInt::one() << (Self::BITS - 1))) }

            pub fn value(&self) -> &BigInt { &self.0 }

            pub fn into_inner(self) -> BigInt { self.0 }
        }

        impl FixedWidth for $name {
            const WIDTH: usize = $bits / 8;
            const NAME: &'static str = stringify!($name);

            fn encode_fixed(&self, out: &mut ByteCursor) {
                let fill = if self.0.sign() == Sign::Minus { SIGN_FILL } else { 0 };
                put_padded(out, &self.0.to_signed_bytes_be(), fill, Self::WIDTH)
            }

            fn decode_fixed(src: &mut ByteCursor) -> Result<Self, PackError> {
                Ok($name(BigInt::from_signed_bytes_be(src.read_many(Self::WIDTH)?)))
            }

            fn from_bigint(n: &BigInt) -> Result<Self, PackError> { Self::new(n.clone()) }
        }

        impl FromStr for $name {
            type Err = PackError;

            /// Parses a decimal string. Unparsable input is reported as a range error.
            fn from_str(s: &str) -> Result<Self, PackError> {
                match BigInt::from_str(s) {
                    Ok(n) => Self::new(n),
                    Err(_) => Err(PackError::range(Self::NAME, s)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
        }

        impl TryFrom<BigInt> for $name {
            type Error = PackError;

            fn try_from(n: BigInt) -> Result<Self, PackError> { Self::new(n) }
        }

        from_fn!($name, i8, |i| $name(BigInt::from(i)));
        from_fn!($name, i16, |i| $name(BigInt::from(i)));
        from_fn!($name, i32, |i| $name(BigInt::from(i)));
        from_fn!($name, i64, |i| $name(BigInt::from(i)));
        from_fn!($name, i128, |i| $name(BigInt::from(i)));

        big_codec!($name);
    };
}

big_unsigned!(Uint160, 160);
big_signed!(Int160, 160);
big_unsigned!(Uint256, 256);
big_signed!(Int256, 256);
