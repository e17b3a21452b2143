use proptest::prelude::*;
use vblob::prelude::*;
use vblob_strategy::*;

macro_rules! round_trip {
    ($name:ident, $typ:ty) => {
        proptest! {
            #[test]
            fn $name(n in any::<$typ>()) {
                let enc = encode_full(&n).unwrap();
                prop_assert_eq!(enc.len(), <$typ as FixedWidth>::WIDTH);
                prop_assert_eq!(enc.as_slice(), &n.to_be_bytes()[..]);
                prop_assert_eq!(decode_full::<_, $typ>(&enc).unwrap(), n);
            }
        }
    };
}

round_trip!(i8_round_trip, i8);
round_trip!(u8_round_trip, u8);
round_trip!(i16_round_trip, i16);
round_trip!(u16_round_trip, u16);
round_trip!(i32_round_trip, i32);
round_trip!(u32_round_trip, u32);
round_trip!(i64_round_trip, i64);
round_trip!(u64_round_trip, u64);
round_trip!(i128_round_trip, i128);
round_trip!(u128_round_trip, u128);

proptest! {
    #![proptest_config(ProptestConfig { cases: 500, ..ProptestConfig::default() })]

    #[test]
    fn wide_round_trip(
        a in arb_uint160(),
        b in arb_int160(),
        c in arb_uint256(),
        d in arb_int256(),
    ) {
        let mut out = VariableBlob::new();
        out.put(&a).unwrap().put(&b).unwrap().put(&c).unwrap().put(&d).unwrap();
        prop_assert_eq!(out.len(), 20 + 20 + 32 + 32);

        prop_assert_eq!(out.take::<Uint160>().unwrap(), a);
        prop_assert_eq!(out.take::<Int160>().unwrap(), b);
        prop_assert_eq!(out.take::<Uint256>().unwrap(), c);
        prop_assert_eq!(out.take::<Int256>().unwrap(), d);
    }

    #[test]
    fn checked_matches_native(n in any::<i64>()) {
        prop_assert_eq!(i32::checked(n).is_ok(), i32::try_from(n).is_ok());
        prop_assert_eq!(u16::checked(n).is_ok(), u16::try_from(n).is_ok());
        prop_assert_eq!(u64::checked(n).is_ok(), n >= 0);
    }

    #[test]
    fn truncated_decode(n in any::<u64>(), keep in 0usize..8) {
        let enc = encode_full(&n).unwrap();
        let err = decode_full::<_, u64>(&enc.as_slice()[..keep]).unwrap_err();
        prop_assert_eq!(err, PackError::EndOfBuffer { needed: 8, remaining: keep });
    }
}

#[test]
fn int16_bounds() {
    let mut out = VariableBlob::new();
    encode_checked::<i16, _>(-32768, &mut out).unwrap();
    assert_eq!(out.as_slice(), &[0x80, 0x00]);

    let err = encode_checked::<i16, _>(32768, &mut out).unwrap_err();
    assert_eq!(
        err,
        PackError::RangeError {
            type_name: "i16",
            value: "32768".into()
        }
    );
    assert_eq!(out.len(), 2);
}

#[test]
fn wide_out_of_range() {
    let two_160 = BigUint::from(1u8) << 160u32;
    assert!(Uint160::new(two_160.clone()).is_err());
    assert!(Uint256::new(two_160).is_ok());
    assert!(Int256::checked(BigInt::from(1u8) << 255u32).is_err());
}
