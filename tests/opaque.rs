use proptest::prelude::*;
use vblob::prelude::*;
use vblob_strategy::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct Header {
    height: u64,
    previous: Multihash,
    signers: Vec<VariableBlob>,
    note: Option<String>,
}

impl_encodable!(Header {
    height,
    previous,
    signers,
    note
});

#[derive(Clone, Debug, Default)]
struct Block {
    id: Multihash,
    header: Opaque<Header>,
}

impl_encodable!(Block { id, header });

fn arb_header() -> impl Strategy<Value = Header> {
    (
        any::<u64>(),
        arb_multihash(),
        prop::collection::vec(arb_blob(), 0..4),
        any::<Option<String>>(),
    )
        .prop_map(|(height, previous, signers, note)| Header {
            height,
            previous,
            signers,
            note,
        })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 200, ..ProptestConfig::default() })]

    #[test]
    fn encoding_is_state_independent(h in arb_header()) {
        let direct = encode_full(&h).unwrap();

        let mut op = Opaque::new(h.clone());
        prop_assert_eq!(op.encoding().unwrap(), &direct);

        op.box_up().unwrap();
        prop_assert_eq!(op.encoding().unwrap(), &direct);

        op.make_mutable().unwrap();
        prop_assert_eq!(op.native(), Some(&h));
        prop_assert_eq!(op.into_encoding().unwrap(), direct);
    }

    #[test]
    fn nested_opaque_stays_boxed(id in arb_multihash(), h in arb_header()) {
        let block = Block { id, header: Opaque::new(h.clone()) };
        let enc = encode_full(&block).unwrap();

        let dec: Block = decode_full(&enc).unwrap();
        prop_assert_eq!(dec.header.state(), State::Boxed);
        prop_assert_eq!(&dec.id, &block.id);

        // re-encoding a boxed header copies its bytes through
        prop_assert_eq!(encode_full(&dec).unwrap(), enc);
        prop_assert_eq!(dec.header.into_native().unwrap(), h);
    }
}

#[test]
fn transitions() {
    let mut op = Opaque::new(Header::default());
    assert!(op.is_mutable());

    op.make_immutable().unwrap();
    assert!(!op.is_mutable());
    assert_eq!(
        op.encoding().unwrap(),
        &encode_full(&Header::default()).unwrap()
    );

    op.box_up().unwrap();
    assert!(!op.is_unboxed());
    assert_eq!(
        op.native_mut().unwrap_err(),
        PackError::InvalidState(StateError::NotUnboxed)
    );

    op.unbox().unwrap();
    assert!(op.is_unboxed());
    assert_eq!(
        op.native_mut().unwrap_err(),
        PackError::InvalidState(StateError::NotMutable)
    );

    op.make_mutable().unwrap();
    op.native_mut().unwrap().height = 9;
    assert_eq!(op.into_native().unwrap().height, 9);
}

#[test]
fn corrupt_payload_fails_on_unbox() {
    // a frame holding one byte, too short for a header
    let block_bytes = {
        let mut out = VariableBlob::new();
        out.put(&Multihash::default()).unwrap();
        out.put(&VariableBlob::from(&[1][..])).unwrap();
        out
    };

    let mut block: Block = decode_full(&block_bytes).unwrap();
    assert!(block.header.unbox().is_err());
    assert_eq!(block.header.state(), State::Boxed);
}
