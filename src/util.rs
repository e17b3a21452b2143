/// Maps a signed integer onto the unsigned integers so that small magnitudes stay
/// small: `0, -1, 1, -2, ...` become `0, 1, 2, 3, ...`.
///
/// # Arguments
///
/// * `i: i64` - The integer to be mapped.
///
/// # Example
///
/// ```
/// use vblob::util::zigzag_encode;
///
/// assert_eq!(zigzag_encode(0), 0);
/// assert_eq!(zigzag_encode(-1), 1);
/// assert_eq!(zigzag_encode(1), 2);
/// assert_eq!(zigzag_encode(i64::MIN), u64::MAX);
/// ```
pub fn zigzag_encode(i: i64) -> u64 { ((i << 1) ^ (i >> 63)) as u64 }

/// Inverse of [`zigzag_encode`].
pub fn zigzag_decode(u: u64) -> i64 { ((u >> 1) as i64) ^ -((u & 1) as i64) }

#[macro_export]
/// Helper macro to make implementing `From` easier.
macro_rules! from_fn {
    ($to:ty, $from:ty, $fn:expr) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $fn(f) }
        }
    };
}

#[macro_export]
/// Implements [`Ser`](crate::encoding::Ser) and [`De`](crate::encoding::De) for a
/// struct by writing its fields one after another in the order they are listed.
///
/// Every listed field must itself be `Ser + De`, and every field of the struct must be
/// listed.
///
/// # Example
///
/// ```
/// use vblob::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Transfer {
///     from: String,
///     to: String,
///     amount: u64,
///     memo: Option<String>,
/// }
///
/// impl_encodable!(Transfer { from, to, amount, memo });
///
/// let t = Transfer {
///     from: "alice".into(),
///     to: "bob".into(),
///     amount: 10,
///     memo: None,
/// };
///
/// let enc = encode_full(&t).unwrap();
/// assert_eq!(decode_full::<_, Transfer>(&enc).unwrap(), t);
/// ```
macro_rules! impl_encodable {
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl $crate::encoding::Ser for $name {
            fn serialize<'a>(
                &self,
                target: &'a mut $crate::blob::VariableBlob,
            ) -> ::core::result::Result<&'a mut $crate::blob::VariableBlob, $crate::errors::PackError>
            {
                $( $crate::encoding::Ser::serialize(&self.$field, target)?; )*
                ::core::result::Result::Ok(target)
            }
        }

        impl $crate::encoding::De for $name {
            fn deserialize(
                source: &mut $crate::blob::VariableBlob,
            ) -> ::core::result::Result<Self, $crate::errors::PackError> {
                ::core::result::Result::Ok($name {
                    $( $field: $crate::encoding::De::deserialize(source)?, )*
                })
            }
        }
    };
}

#[macro_export]
/// Implements [`Ser`](crate::encoding::Ser) and [`De`](crate::encoding::De) for an enum
/// whose variants each wrap a single value.
///
/// A value is written as the varint index of its variant, counted from zero in the
/// order listed, followed by the wrapped value. Every variant must be listed; a missing
/// one is a compile error.
///
/// # Example
///
/// ```
/// use vblob::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// enum Payload {
///     Transfer(u64),
///     Note(String),
/// }
///
/// impl_variant!(Payload { Transfer, Note });
///
/// let enc = encode_full(&Payload::Note("hi".into())).unwrap();
/// assert_eq!(enc.to_hex(), "01026869");
/// assert_eq!(decode_full::<_, Payload>(&enc).unwrap(), Payload::Note("hi".into()));
///
/// assert!(decode_full::<_, Payload>(&[2, 0][..]).is_err());
/// ```
macro_rules! impl_variant {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::encoding::Ser for $name {
            #[allow(unused_assignments, irrefutable_let_patterns)]
            fn serialize<'a>(
                &self,
                target: &'a mut $crate::blob::VariableBlob,
            ) -> ::core::result::Result<&'a mut $crate::blob::VariableBlob, $crate::errors::PackError>
            {
                let mut index: u64 = 0;
                $(
                    if let $name::$variant(value) = self {
                        target.cursor_mut().put_varint(index);
                        return $crate::encoding::Ser::serialize(value, target);
                    }
                    index += 1;
                )+
                match *self {
                    $( $name::$variant(_) => ::core::unreachable!(), )+
                }
            }
        }

        impl $crate::encoding::De for $name {
            fn deserialize(
                source: &mut $crate::blob::VariableBlob,
            ) -> ::core::result::Result<Self, $crate::errors::PackError> {
                let found = source.cursor_mut().read_varint()?;
                source.nested(|source| {
                    let mut index: u64 = 0;
                    $(
                        if found == index {
                            return ::core::result::Result::Ok($name::$variant(
                                $crate::encoding::De::deserialize(source)?,
                            ));
                        }
                        index += 1;
                    )+
                    ::core::result::Result::Err($crate::errors::PackError::UnknownVariant {
                        index: found,
                        variants: index,
                    })
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encoding::{decode_full, encode_full},
        errors::PackError,
        multihash::Multihash,
    };

    #[derive(Debug, PartialEq)]
    enum Record {
        Height(u64),
        Hash(Multihash),
        Children(Vec<Record>),
    }

    crate::impl_variant!(Record {
        Height,
        Hash,
        Children,
    });

    #[derive(Debug, PartialEq)]
    struct Node {
        value: u8,
        next: Option<Box<Node>>,
    }

    crate::impl_encodable!(Node { value, next });

    fn chain(len: usize) -> Node {
        (1..len).fold(Node { value: 0, next: None }, |next, value| Node {
            value: value as u8,
            next: Some(Box::new(next)),
        })
    }

    #[test]
    fn variant_layout() {
        let out = encode_full(&Record::Height(5)).unwrap();
        assert_eq!(out.to_hex(), "000000000000000005");

        let out = encode_full(&Record::Hash(Multihash::new(0x12, vec![0xee]))).unwrap();
        assert_eq!(out.to_hex(), "011201ee");
    }

    #[test]
    fn variant_round_trip() {
        let rec = Record::Children(vec![
            Record::Height(1),
            Record::Children(vec![]),
            Record::Hash(Multihash::new(7, vec![1, 2, 3])),
        ]);
        let out = encode_full(&rec).unwrap();
        assert_eq!(decode_full::<_, Record>(&out).unwrap(), rec);
    }

    #[test]
    fn unknown_variant() {
        assert_eq!(
            decode_full::<_, Record>(&[3][..]),
            Err(PackError::UnknownVariant {
                index: 3,
                variants: 3
            })
        );
    }

    #[test]
    fn shallow_chain() {
        let node = chain(20);
        let out = encode_full(&node).unwrap();
        assert_eq!(decode_full::<_, Node>(&out).unwrap(), node);
    }

    #[test]
    fn endless_chain() {
        // every node says "one more follows", forever
        let hostile = vec![0x01; 100_000];
        assert_eq!(
            decode_full::<_, Node>(&hostile),
            Err(PackError::DepthExceeded(crate::blob::MAX_DEPTH))
        );

        // same through an enum
        let hostile = vec![0x02, 0x01].repeat(50_000);
        assert_eq!(
            decode_full::<_, Record>(&hostile),
            Err(PackError::DepthExceeded(crate::blob::MAX_DEPTH))
        );
    }

    #[test]
    fn zigzag_inverse() {
        for &i in &[0, 1, -1, 2, -2, 1 << 40, i64::MAX, i64::MIN] {
            assert_eq!(zigzag_decode(zigzag_encode(i)), i);
        }
        assert_eq!(zigzag_encode(-2), 3);
        assert_eq!(zigzag_encode(i64::MAX), u64::MAX - 1);
    }
}
