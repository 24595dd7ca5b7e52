use poculum::{vecmap::VecMap, Bytes, Poculum};
use proptest::prelude::*;

/// arbitrary Bytes for use with proptest
pub fn arb_bytes() -> impl Strategy<Value = Bytes> {
    prop::collection::vec(any::<u8>(), 0..64).prop_map(Bytes::from)
}

/// arbitrary Poculum for use with proptest
///
/// Booleans are left out: the wire carries them as the integers one and
/// zero, so a generated `Bool` would come back as an integer and fail naive
/// equality. Boolean behavior is covered by dedicated tests.
pub fn arb_poculum() -> impl Strategy<Value = Poculum> {
    let leaf = prop_oneof![
        Just(Poculum::Null),
        // small integers keep every size class in play
        any::<u8>().prop_map(Poculum::from),
        any::<i8>().prop_map(Poculum::from),
        // full-width integers
        any::<u64>().prop_map(Poculum::from),
        any::<i64>().prop_map(Poculum::from),
        // floats
        any::<f64>().prop_map(Poculum::from),
        // strings
        ".*".prop_map(Poculum::from),
        // bytestrings
        arb_bytes().prop_map(Poculum::from),
    ];
    leaf.prop_recursive(
        8,   // max depth
        128, // max nodes
        10,  // max items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..10).prop_map(Poculum::from),
                prop::collection::vec((".{0,8}", inner), 0..10)
                    .prop_map(|entries| Poculum::Map(VecMap::from_entries(entries)))
            ]
        },
    )
}
