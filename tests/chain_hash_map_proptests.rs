// ChainHashMap property tests (consolidated, public API only).
//
// Property 1: round-trip over arbitrary printable keys.
//  - Invariant: after setting every pair in order, each key reads back the
//    last value written for it, and len() equals the number of distinct
//    keys.
//
// Property 2: set/remove interleavings against a std::collections::HashMap
//  model.
//  - Invariant: final occupancy, membership, and per-key values match the
//    model; keys() agrees with the model's key set.
use chain_hashmap::ChainHashMap;
use proptest::prelude::*;
use std::collections::HashMap;

// Property 1: last write wins for every key, including unicode and the
// empty string.
proptest! {
    #[test]
    fn prop_round_trip_arbitrary_keys(pairs in proptest::collection::vec(("\\PC{0,8}", any::<u32>()), 0..40)) {
        let mut m: ChainHashMap<u32> = ChainHashMap::new();
        let mut model: HashMap<String, u32> = HashMap::new();

        for (k, v) in pairs {
            m.set(k.clone(), v);
            model.insert(k, v);
        }

        prop_assert_eq!(m.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(m.get(k), Some(v));
        }
    }
}

// Property 2: random set/remove interleavings over a small key space so
// removals actually hit, checked against the model at the end.
proptest! {
    #[test]
    fn prop_set_remove_matches_model(ops in proptest::collection::vec((0u8..=1u8, 0usize..12usize, any::<i64>()), 1..120)) {
        let mut m: ChainHashMap<i64> = ChainHashMap::new();
        let mut model: HashMap<String, i64> = HashMap::new();

        for (op, raw_k, v) in ops {
            let key = format!("k{}", raw_k);
            match op {
                0 => {
                    m.set(key.clone(), v);
                    model.insert(key, v);
                }
                1 => {
                    prop_assert_eq!(m.remove(&key), model.remove(&key));
                }
                _ => unreachable!(),
            }
        }

        prop_assert_eq!(m.len(), model.len());
        let mut keys: Vec<&str> = m.keys();
        keys.sort_unstable();
        let mut model_keys: Vec<&str> = model.keys().map(String::as_str).collect();
        model_keys.sort_unstable();
        prop_assert_eq!(keys, model_keys);
        for (k, v) in &model {
            prop_assert_eq!(m.get(k), Some(v));
        }
    }
}
