use num_bigint::{BigInt, BigUint};
use num_traits::Num;
use proptest::{prelude::*, string::string_regex};
use vblob::prelude::*;

/// arbitrary byte payloads, biased towards the one/two byte varint boundary
pub fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..8),
        prop::collection::vec(any::<u8>(), 120..140),
        prop::collection::vec(any::<u8>(), 0..2048),
    ]
}

/// arbitrary VariableBlob for use with proptest
pub fn arb_blob() -> impl Strategy<Value = VariableBlob> { arb_bytes().prop_map(VariableBlob::from) }

/// arbitrary unsigned integer of at most `bits` bits
pub fn arb_biguint(bits: usize) -> impl Strategy<Value = BigUint> {
    string_regex(&format!("[0-1]{{1,{}}}", bits))
        .unwrap()
        .prop_map(|n| -> BigUint { BigUint::from_str_radix(&n, 2).unwrap() })
}

/// arbitrary two's complement integer of `bits` bits
pub fn arb_bigint(bits: usize) -> impl Strategy<Value = BigInt> {
    string_regex(&format!("-?[0-1]{{1,{}}}", bits - 1))
        .unwrap()
        .prop_map(|n| -> BigInt { BigInt::from_str_radix(&n, 2).unwrap() })
}

pub fn arb_uint160() -> impl Strategy<Value = Uint160> {
    arb_biguint(160).prop_map(|n| Uint160::new(n).unwrap())
}

pub fn arb_int160() -> impl Strategy<Value = Int160> {
    prop_oneof![
        arb_bigint(160).prop_map(|n| Int160::new(n).unwrap()),
        Just(Int160::min_value()),
        Just(Int160::max_value()),
    ]
}

pub fn arb_uint256() -> impl Strategy<Value = Uint256> {
    arb_biguint(256).prop_map(|n| Uint256::new(n).unwrap())
}

pub fn arb_int256() -> impl Strategy<Value = Int256> {
    prop_oneof![
        arb_bigint(256).prop_map(|n| Int256::new(n).unwrap()),
        Just(Int256::min_value()),
        Just(Int256::max_value()),
    ]
}

/// arbitrary Multihash for use with proptest
pub fn arb_multihash() -> impl Strategy<Value = Multihash> {
    (any::<u64>(), prop::collection::vec(any::<u8>(), 0..64))
        .prop_map(|(id, digest)| Multihash::new(id, digest))
}

/// arbitrary MultihashVector, every digest the same size
pub fn arb_multihash_vector() -> impl Strategy<Value = MultihashVector> {
    (any::<u64>(), 0usize..48, 0usize..16).prop_flat_map(|(id, size, count)| {
        prop::collection::vec(prop::collection::vec(any::<u8>(), size), count).prop_map(
            move |digests| {
                MultihashVector::new(id, digests.into_iter().map(VariableBlob::from).collect())
            },
        )
    })
}
