//! # Opaque values
//!
//! An [`Opaque<T>`] holds a `T`, its encoding, or both, and only converts between the
//! two when asked. A value that is passed along without being looked at is never
//! decoded, and a value that was decoded but not modified is never re-encoded.
//!
//! Only a value without a cached encoding can be mutated, so the encoding can never go
//! stale.
//!
//! # Example
//!
//! ```
//! use vblob::prelude::*;
//!
//! let mut op = Opaque::new(5u32);
//! assert!(op.is_mutable());
//! *op.native_mut().unwrap() += 1;
//!
//! // cache the encoding
//! op.make_immutable().unwrap();
//! assert_eq!(op.encoding().unwrap().as_slice(), &[0, 0, 0, 6]);
//! assert!(op.native_mut().is_err());
//!
//! // drop the native value, keep the bytes
//! op.box_up().unwrap();
//! assert!(!op.is_unboxed());
//!
//! // and get it back
//! op.make_mutable().unwrap();
//! assert_eq!(*op.native_mut().unwrap(), 6);
//! ```

use crate::{
    blob::VariableBlob,
    encoding::{encode_full, De, Encodable, Ser},
    errors::{PackError, StateError},
    rentable::Rentable,
};
use tracing::trace;

/// Which representations an [`Opaque`] currently holds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum State {
    /// Only the native value; it may be mutated.
    Mutable,
    /// Only the encoding.
    Boxed,
    /// Both, and they agree.
    Cached,
}

#[derive(Clone, Debug)]
enum Repr<T> {
    Mutable(T),
    Boxed(VariableBlob),
    Cached(T, VariableBlob),
}

use Repr::*;

#[derive(Clone, Debug)]
pub struct Opaque<T> {
    repr: Rentable<Repr<T>>,
}

impl<T> Opaque<T> {
    /// Wraps a native value. The result is mutable.
    pub fn new(native: T) -> Self {
        Opaque {
            repr: Rentable::new(Mutable(native)),
        }
    }

    /// Wraps an encoding. Nothing is decoded until the value is unboxed.
    pub fn from_blob(blob: VariableBlob) -> Self {
        Opaque {
            repr: Rentable::new(Boxed(blob)),
        }
    }

    pub fn state(&self) -> State {
        match &*self.repr {
            Mutable(_) => State::Mutable,
            Boxed(_) => State::Boxed,
            Cached(..) => State::Cached,
        }
    }

    /// Is the native value present?
    pub fn is_unboxed(&self) -> bool { self.state() != State::Boxed }

    /// Is the native value present without a cached encoding?
    pub fn is_mutable(&self) -> bool { self.state() == State::Mutable }

    /// Read-only view of the native value, if it is present.
    pub fn native(&self) -> Option<&T> {
        match &*self.repr {
            Mutable(t) | Cached(t, _) => Some(t),
            Boxed(_) => None,
        }
    }

    /// The native value, for mutation.
    ///
    /// # Errors
    ///
    /// * [`StateError::NotUnboxed`] if only the encoding is held.
    /// * [`StateError::NotMutable`] if an encoding is cached.
    pub fn native_mut(&mut self) -> Result<&mut T, PackError> {
        match &mut *self.repr {
            Mutable(t) => Ok(t),
            Boxed(_) => Err(PackError::InvalidState(StateError::NotUnboxed)),
            Cached(..) => Err(PackError::InvalidState(StateError::NotMutable)),
        }
    }
}

impl<T: Encodable> Opaque<T> {
    fn encode_native(native: &T) -> Result<VariableBlob, PackError> {
        let blob = encode_full(native)?;
        trace!(bytes = blob.len(), "encoded opaque value");
        Ok(blob)
    }

    /// Decodes the encoding if the native value is missing, keeping the encoding.
    pub fn unbox(&mut self) -> Result<(), PackError> {
        let native = match &mut *self.repr {
            Boxed(blob) => {
                blob.rewind();
                let native = T::deserialize(blob);
                blob.rewind();
                let native = native?;
                trace!(bytes = blob.len(), "unboxed opaque value");
                native
            }
            _ => return Ok(()),
        };
        self.repr.update(|repr| match repr {
            Boxed(blob) => Cached(native, blob),
            other => other,
        });
        Ok(())
    }

    /// Makes sure an encoding exists, then drops the native value.
    pub fn box_up(&mut self) -> Result<(), PackError> {
        let fresh = match &*self.repr {
            Mutable(t) => Some(Self::encode_native(t)?),
            _ => None,
        };
        self.repr.update(|repr| match (repr, fresh) {
            (Mutable(_), Some(blob)) | (Cached(_, blob), _) => Boxed(blob),
            (other, _) => other,
        });
        Ok(())
    }

    /// Caches the encoding of a mutable value, so both representations are held.
    pub fn make_immutable(&mut self) -> Result<(), PackError> {
        let fresh = match &*self.repr {
            Mutable(t) => Self::encode_native(t)?,
            _ => return Ok(()),
        };
        self.repr.update(|repr| match repr {
            Mutable(t) => Cached(t, fresh),
            other => other,
        });
        Ok(())
    }

    /// Unboxes if needed, then drops the cached encoding.
    pub fn make_mutable(&mut self) -> Result<(), PackError> {
        self.unbox()?;
        self.repr.update(|repr| match repr {
            Cached(t, _) => Mutable(t),
            other => other,
        });
        Ok(())
    }

    /// The encoding, computed and cached first if only the native value is held.
    pub fn encoding(&mut self) -> Result<&VariableBlob, PackError> {
        self.make_immutable()?;
        match &*self.repr {
            Boxed(blob) | Cached(_, blob) => Ok(blob),
            Mutable(_) => unreachable!("make_immutable leaves an encoding behind"),
        }
    }

    /// Consumes the wrapper, decoding if needed.
    pub fn into_native(mut self) -> Result<T, PackError> {
        self.unbox()?;
        match self.repr.into_inner() {
            Mutable(t) | Cached(t, _) => Ok(t),
            Boxed(_) => unreachable!("unbox leaves a native value behind"),
        }
    }

    /// Consumes the wrapper, encoding if needed.
    pub fn into_encoding(self) -> Result<VariableBlob, PackError> {
        match self.repr.into_inner() {
            Mutable(t) => Self::encode_native(&t),
            Boxed(blob) | Cached(_, blob) => Ok(blob),
        }
    }
}

impl<T: Default> Default for Opaque<T> {
    fn default() -> Self { Opaque::new(T::default()) }
}

/// An opaque value goes over the wire as a framed blob of its encoding.
impl<T: Ser> Ser for Opaque<T> {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        match &*self.repr {
            Boxed(blob) | Cached(_, blob) => blob.serialize(target),
            Mutable(t) => encode_full(t)?.serialize(target),
        }
    }
}

/// Reading an opaque value only cuts out its frame; the payload stays boxed.
impl<T> De for Opaque<T> {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
        source.unframe().map(Opaque::from_blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::decode_full;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Pair {
        a: u16,
        b: String,
    }

    crate::impl_encodable!(Pair { a, b });

    fn pair() -> Pair {
        Pair {
            a: 0x0102,
            b: "xy".into(),
        }
    }

    #[test]
    fn lifecycle() {
        let mut op = Opaque::new(pair());
        assert!(op.is_mutable());
        assert!(op.is_unboxed());

        op.make_immutable().unwrap();
        assert!(!op.is_mutable());
        assert_eq!(op.state(), State::Cached);
        let direct = encode_full(&pair()).unwrap();
        assert_eq!(op.encoding().unwrap(), &direct);

        op.box_up().unwrap();
        assert!(!op.is_unboxed());
        assert_eq!(op.native(), None);

        op.unbox().unwrap();
        assert!(op.is_unboxed());
        assert_eq!(
            op.native_mut().unwrap_err(),
            PackError::InvalidState(StateError::NotMutable)
        );

        op.make_mutable().unwrap();
        op.native_mut().unwrap().a = 7;
        assert_eq!(op.encoding().unwrap().to_hex(), "0007027879");
    }

    #[test]
    fn boxed_native_access() {
        let mut op = Opaque::<Pair>::from_blob(encode_full(&pair()).unwrap());
        assert_eq!(op.state(), State::Boxed);
        assert_eq!(
            op.native_mut().unwrap_err(),
            PackError::InvalidState(StateError::NotUnboxed)
        );
    }

    #[test]
    fn no_ops() {
        // unbox and make_immutable leave a mutable value alone
        let mut op = Opaque::new(3u8);
        op.unbox().unwrap();
        assert_eq!(op.state(), State::Mutable);

        // boxing twice keeps the same bytes
        op.box_up().unwrap();
        op.box_up().unwrap();
        assert_eq!(op.state(), State::Boxed);
        op.make_immutable().unwrap();
        assert_eq!(op.state(), State::Boxed);
        assert_eq!(op.encoding().unwrap().as_slice(), &[3]);
    }

    #[test]
    fn encoding_keeps_native() {
        let mut op = Opaque::new(9u8);
        op.encoding().unwrap();
        assert_eq!(op.state(), State::Cached);
        assert_eq!(op.native(), Some(&9));
    }

    #[test]
    fn make_mutable_from_boxed() {
        let mut op = Opaque::<u16>::from_blob(VariableBlob::from(&[1, 0][..]));
        op.make_mutable().unwrap();
        assert_eq!(op.state(), State::Mutable);
        assert_eq!(*op.native_mut().unwrap(), 256);
    }

    #[test]
    fn failed_unbox_stays_boxed() {
        let mut op = Opaque::<u32>::from_blob(VariableBlob::from(&[1, 2][..]));
        assert!(op.unbox().is_err());
        assert_eq!(op.state(), State::Boxed);
        assert!(op.make_mutable().is_err());
        assert_eq!(op.into_encoding().unwrap().as_slice(), &[1, 2]);
    }

    #[test]
    fn unbox_twice() {
        let mut op = Opaque::<Pair>::from_blob(encode_full(&pair()).unwrap());
        op.unbox().unwrap();
        op.box_up().unwrap();
        op.unbox().unwrap();
        assert_eq!(op.native(), Some(&pair()));
    }

    #[test]
    fn default_is_mutable() {
        let op: Opaque<Pair> = Opaque::default();
        assert!(op.is_mutable());
        assert_eq!(op.native(), Some(&Pair::default()));
    }

    #[test]
    fn wire_format_is_framed() {
        let op = Opaque::new(0xabcdu16);
        let out = encode_full(&op).unwrap();
        assert_eq!(out.as_slice(), &[2, 0xab, 0xcd]);

        // the same bytes whatever the state
        let mut boxed = op.clone();
        boxed.box_up().unwrap();
        assert_eq!(encode_full(&boxed).unwrap(), out);

        let back: Opaque<u16> = decode_full(&out).unwrap();
        assert_eq!(back.state(), State::Boxed);
        assert_eq!(back.into_native().unwrap(), 0xabcd);
    }

    #[test]
    fn into_native_decodes() {
        let op = Opaque::<String>::from_blob(encode_full("hey").unwrap());
        assert_eq!(op.into_native().unwrap(), "hey");
    }
}
