//! # vblob
//!
//! The binary runtime underneath generated blockchain types: length-prefixed byte
//! blobs, fixed-width big-endian integers, and lazily boxed values.
//!
//! # Usage
//!
//! Everything that goes over the wire implements [`Ser`](encoding::Ser) and
//! [`De`](encoding::De). Scalars and the built-in containers already do, and structs
//! get both from [`impl_encodable!`], enums of single-value variants from
//! [`impl_variant!`].
//!
//! ```
//! use vblob::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Block {
//!     height: u64,
//!     previous: Multihash,
//!     payload: VariableBlob,
//! }
//!
//! impl_encodable!(Block { height, previous, payload });
//!
//! let block = Block {
//!     height: 3,
//!     previous: Multihash::new(0x12, vec![0xab; 4]),
//!     payload: VariableBlob::from(&b"tx"[..]),
//! };
//!
//! let enc = encode_full(&block).unwrap();
//! assert_eq!(enc.to_hex(), "00000000000000031204abababab027478");
//!
//! let dec: Block = decode_full(&enc).unwrap();
//! assert_eq!(dec, block);
//! ```
//!
//! # Wire format
//!
//! ## Varints
//!
//! Lengths and counts are unsigned base-128 varints: seven payload bits per byte, least
//! significant group first, with the high bit set on every byte but the last. A varint
//! is at most 10 bytes long.
//!
//! ## Variable blobs
//!
//! A [`VariableBlob`](blob::VariableBlob) is written as `[varint length][bytes]`. A
//! length that is negative when read as an `i64` is rejected.
//!
//! | Payload           | Encoding              |
//! | ---               | ---                   |
//! | empty             | `00`                  |
//! | `68 69`           | `02 68 69`            |
//! | 200 bytes of `5a` | `c8 01 5a 5a ... 5a`  |
//!
//! ## Fixed-width integers
//!
//! Integers of 8 to 256 bits are written in exactly `bits / 8` bytes, big-endian, in
//! two's complement for the signed types. See [`FixedWidth`](encoding::FixedWidth).
//!
//! ## Everything else
//!
//! * `bool` is a single `00` or `01` byte. Anything else fails to decode.
//! * Strings are framed like blobs and must be UTF-8.
//! * `Vec<T>` is a varint count followed by the items.
//! * `Option<T>` is a `bool` followed by the value if present.
//! * An enum from [`impl_variant!`] is the varint index of its variant followed by the
//!   wrapped value.
//! * `[u8; N]` is written raw.
//! * [`Opaque<T>`](opaque::Opaque) is written as the framed encoding of its `T`.
//!
//! ## Hostile input
//!
//! Decoders never trust a count to size an allocation, and `Option`, `Vec` and variant
//! values may nest at most [`MAX_DEPTH`](blob::MAX_DEPTH) levels deep before decoding
//! fails with [`PackError::DepthExceeded`].

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::len_without_is_empty)]

pub mod blob;
pub mod cursor;
pub mod encoding;
pub mod errors;
pub mod multihash;
pub mod opaque;
pub mod prelude;
mod rentable;
pub mod util;

pub use blob::VariableBlob;
pub use errors::PackError;
pub use opaque::Opaque;
