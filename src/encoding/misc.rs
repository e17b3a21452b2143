use super::{constants::*, *};
use crate::{
    blob::{put_frame, read_frame},
    util::{zigzag_decode, zigzag_encode},
};

// Misc

impl Ser for bool {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        target
            .cursor_mut()
            .put_u8(if *self { BOOL_TRUE } else { BOOL_FALSE });
        Ok(target)
    }
}

impl De for bool {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
        source.cursor_mut().restoring(|cur| match cur.read_u8()? {
            BOOL_FALSE => Ok(false),
            BOOL_TRUE => Ok(true),
            other => Err(PackError::InvalidBoolean(other)),
        })
    }
}

impl Ser for str {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        put_frame(target.cursor_mut(), self.as_bytes());
        Ok(target)
    }
}

impl Ser for String {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        self.as_str().serialize(target)
    }
}

impl De for String {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
        source.cursor_mut().restoring(|cur| {
            let bytes = read_frame(cur)?;
            match std::str::from_utf8(bytes) {
                Ok(s) => Ok(s.to_owned()),
                Err(_) => Err(PackError::InvalidUtf8),
            }
        })
    }
}

/// An unsigned integer written as a plain varint.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct UnsignedInt(pub u64);

/// A signed integer written as a zig-zag varint.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SignedInt(pub i64);

impl Ser for UnsignedInt {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        target.cursor_mut().put_varint(self.0);
        Ok(target)
    }
}

impl De for UnsignedInt {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
        source.cursor_mut().read_varint().map(UnsignedInt)
    }
}

impl Ser for SignedInt {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        target.cursor_mut().put_varint(zigzag_encode(self.0));
        Ok(target)
    }
}

impl De for SignedInt {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
        let u = source.cursor_mut().read_varint()?;
        Ok(SignedInt(zigzag_decode(u)))
    }
}

// Containers

impl<T: Ser> Ser for [T] {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        target.cursor_mut().put_varint(self.len() as u64);
        for item in self {
            item.serialize(target)?;
        }
        Ok(target)
    }
}

impl<T: Ser> Ser for Vec<T> {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        self.as_slice().serialize(target)
    }
}

impl<T: De> De for Vec<T> {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
        let len = source.cursor_mut().read_varint()?;
        // only zero-width items outnumber the bytes left, and only so many of those
        let remaining = source.cursor().remaining();
        if len > remaining as u64 && len > MAX_ZERO_WIDTH_ITEMS {
            return Err(PackError::TooManyItems {
                count: len,
                remaining,
            });
        }
        source.nested(|source| {
            let mut out = Vec::with_capacity(len.min(remaining as u64) as usize);
            for _ in 0..len {
                out.push(T::deserialize(source)?);
            }
            Ok(out)
        })
    }
}

impl<T: Ser> Ser for Option<T> {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        match self {
            None => false.serialize(target),
            Some(t) => {
                true.serialize(target)?;
                t.serialize(target)
            }
        }
    }
}

impl<T: De> De for Option<T> {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
        if bool::deserialize(source)? {
            source.nested(T::deserialize).map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Fixed blobs are written raw, without a length prefix.
impl<const N: usize> Ser for [u8; N] {
    fn serialize<'a>(
        &self,
        target: &'a mut VariableBlob,
    ) -> Result<&'a mut VariableBlob, PackError> {
        target.cursor_mut().put_slice(self);
        Ok(target)
    }
}

impl<const N: usize> De for [u8; N] {
    fn deserialize(source: &mut VariableBlob) -> Result<Self, PackError> {
        let mut out = [0u8; N];
        out.copy_from_slice(source.cursor_mut().read_many(N)?);
        Ok(out)
    }
}
