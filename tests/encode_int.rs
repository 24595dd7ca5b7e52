use poculum::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn encode_decode_i64(i in proptest::num::i64::ANY) {
        let enc = encode_full(&Poculum::from(i)).unwrap();
        let dec: i64 = decode_full(&enc).unwrap().into_rep().unwrap();
        prop_assert_eq!(dec, i);
    }

    #[test]
    fn encode_decode_u64(u in proptest::num::u64::ANY) {
        let enc = encode_full(&Poculum::from(u)).unwrap();
        let dec: u64 = decode_full(&enc).unwrap().into_rep().unwrap();
        prop_assert_eq!(dec, u);
    }
}

fn enc(val: impl Into<Poculum>) -> Vec<u8> {
    encode_full(&val.into()).unwrap()
}

#[test]
fn unsigned_size_classes() {
    assert_eq!(enc(0u64), [0x01, 0x00]);
    assert_eq!(enc(255u64), [0x01, 0xff]);

    assert_eq!(enc(256u64), [0x02, 0x01, 0x00]);
    assert_eq!(enc(0xffffu64), [0x02, 0xff, 0xff]);

    assert_eq!(enc(0x1_0000u64), [0x03, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(enc(0xffff_ffffu64), [0x03, 0xff, 0xff, 0xff, 0xff]);

    assert_eq!(
        enc(0x1_0000_0000u64),
        [0x04, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        enc(u64::MAX),
        [0x04, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn signed_size_classes() {
    assert_eq!(enc(-1i64), [0x11, 0xff]);
    assert_eq!(enc(-128i64), [0x11, 0x80]);

    assert_eq!(enc(-129i64), [0x12, 0xff, 0x7f]);
    assert_eq!(enc(-32768i64), [0x12, 0x80, 0x00]);

    assert_eq!(enc(-32769i64), [0x13, 0xff, 0xff, 0x7f, 0xff]);
    assert_eq!(
        enc(i64::from(i32::MIN)),
        [0x13, 0x80, 0x00, 0x00, 0x00]
    );

    assert_eq!(
        enc(i64::from(i32::MIN) - 1),
        [0x14, 0xff, 0xff, 0xff, 0xff, 0x7f, 0xff, 0xff, 0xff]
    );
    assert_eq!(
        enc(i64::MIN),
        [0x14, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn non_negative_inputs_use_unsigned_tags() {
    // A positive quantity reaches the encoder as unsigned no matter which
    // Rust width it started as.
    assert_eq!(enc(5i64), [0x01, 0x05]);
    assert_eq!(enc(5i8), [0x01, 0x05]);
    assert_eq!(enc(0i64), [0x01, 0x00]);
}
