//! # Binary encoder and decoder
//!
//! Every value that goes over the wire implements [`Ser`] and [`De`]. A
//! [`VariableBlob`] frames itself; scalars write fixed-width big-endian bytes; domain
//! types write their fields in order, using the blob only as a byte sink and source.
//!
//! # Example
//!
//! ```
//! use vblob::prelude::*;
//!
//! // a struct that will store some data
//! #[derive(Debug, Default, PartialEq)]
//! struct SomeData {
//!     x: u32,
//!     y: i16,
//!     tag: VariableBlob,
//! }
//!
//! impl_encodable!(SomeData { x, y, tag });
//!
//! // here it is storing some data
//! let some_data = SomeData {
//!     x: 1,
//!     y: -2,
//!     tag: VariableBlob::from(&b"hi"[..]),
//! };
//!
//! // and we've encoded it
//! let enc_full = encode_full(&some_data).unwrap();
//! assert_eq!(enc_full.to_hex(), "00000001fffe026869");
//!
//! // let's encode it a different way too
//! let mut out = VariableBlob::new();
//! encode(&some_data, &mut out).unwrap();
//!
//! // but they are equivalent
//! assert_eq!(out, enc_full);
//!
//! // Note: decoding returns a `Result`
//! let dec: SomeData = decode_full(enc_full.as_slice()).unwrap();
//! assert_eq!(dec, some_data);
//! ```

use crate::{blob::VariableBlob, errors::PackError};

pub(crate) mod constants;
pub mod fixed;
pub use fixed::*;
pub mod bigint;
pub use bigint::*;
pub mod misc;
pub use misc::*;

/// Values that can be written into a [`VariableBlob`].
pub trait Ser {
    /// Appends this value's encoding to `target` and returns `target`.
    ///
    /// # Arguments
    ///
    /// * `target: &mut VariableBlob` - The blob to append to.
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError>;
}

/// Values that can be read out of a [`VariableBlob`].
pub trait De: Sized {
    /// Consumes exactly this value's encoding from `source`'s read position.
    ///
    /// # Arguments
    ///
    /// * `source: &mut VariableBlob` - The blob to read from.
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError>;
}

/// Values that go both ways.
pub trait Encodable: Ser + De {}

impl<T: Ser + De> Encodable for T {}

impl<T: Ser + ?Sized> Ser for &T {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        (**self).serialize(target)
    }
}

impl<T: Ser + ?Sized> Ser for Box<T> {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        (**self).serialize(target)
    }
}

impl<T: De> De for Box<T> {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
        T::deserialize(source).map(Box::new)
    }
}

/// Encode `t`, appending the output to `out`.
///
/// # Arguments
///
/// * `t: &T` - The value to be encoded.
/// * `out: &mut VariableBlob` - Where the encoder output will be stored.
///
/// # Example
///
/// ```
/// use vblob::prelude::*;
///
/// // output buffer
/// let out = &mut VariableBlob::new();
///
/// // encode some values
/// encode(&1u16, out).unwrap();
/// encode(&true, out).unwrap();
///
/// assert_eq!(out.to_hex(), "000101");
/// ```
pub fn encode<'a, T: Ser + ?Sized>(
    t: &T,
    out: &'a mut VariableBlob,
) -> Result<&'a mut VariableBlob, PackError> {
    t.serialize(out)
}

/// Encodes `t` into a new blob.
pub fn encode_full<T: Ser + ?Sized>(t: &T) -> Result<VariableBlob, PackError> {
    let mut out = VariableBlob::new();
    t.serialize(&mut out)?;
    Ok(out)
}

/// Reads a `T` from `data`'s read position.
///
/// # Example
///
/// ```
/// use vblob::prelude::*;
///
/// let mut data = VariableBlob::from_hex("0x7fff8000").unwrap();
///
/// let a: i16 = decode(&mut data).unwrap();
/// let b: i16 = decode(&mut data).unwrap();
///
/// assert_eq!((a, b), (i16::MAX, i16::MIN));
/// ```
pub fn decode<T: De>(data: &mut VariableBlob) -> Result<T, PackError> { T::deserialize(data) }

/// Decodes a `T` from the start of `bs`. Trailing bytes are ignored.
pub fn decode_full<B: AsRef<[u8]>, T: De>(bs: B) -> Result<T, PackError> {
    decode(&mut VariableBlob::from(bs.as_ref()))
}
