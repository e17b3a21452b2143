pub use crate::{
    blob::VariableBlob,
    cursor::ByteCursor,
    encoding::{
        decode, decode_full, encode, encode_checked, encode_full, De, Encodable, FixedWidth,
        Int160, Int256, Ser, SignedInt, Uint160, Uint256, UnsignedInt,
    },
    errors::{PackError, StateError},
    impl_encodable, impl_variant,
    multihash::{Multihash, MultihashVector},
    opaque::{Opaque, State},
};
pub use num_bigint::{BigInt, BigUint};
pub use std::{convert::TryFrom, str::FromStr};
