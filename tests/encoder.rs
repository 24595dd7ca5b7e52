use poculum::prelude::*;
use poculum_strategy::arb_poculum;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn encode_decode(val in arb_poculum()) {
        let enc = encode_full(&val).unwrap();
        let dec = decode_full(&enc).unwrap();
        prop_assert_eq!(dec, val);
    }

    // One round trip lands on the canonical form; a second changes nothing.
    #[test]
    fn canonical_after_round_trip(val in arb_poculum()) {
        let enc = encode_full(&val).unwrap();
        let dec = decode_full(&enc).unwrap();
        prop_assert_eq!(encode_full(&dec).unwrap(), enc);
    }

    #[test]
    fn truncation_never_yields_a_value(val in arb_poculum()) {
        let enc = encode_full(&val).unwrap();
        for cut in 0..enc.len() {
            match decode(&enc[..cut]) {
                Err(DecodeError::Truncated { .. }) => {}
                other => prop_assert!(false, "prefix of len {} gave {:?}", cut, other),
            }
        }
    }

    #[test]
    fn prefix_decode_reports_consumption(val in arb_poculum()) {
        let mut enc = encode_full(&val).unwrap();
        let root_len = enc.len();
        enc.extend_from_slice(b"extra");

        let (dec, used) = decode(&enc).unwrap();
        prop_assert_eq!(dec, val);
        prop_assert_eq!(used, root_len);

        prop_assert!(matches!(
            decode_full(&enc),
            Err(DecodeError::TrailingBytes { trailing: 5, .. })
        ), "expected TrailingBytes{{ trailing: 5 }}");
    }
}
