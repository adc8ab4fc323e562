#![cfg(test)]

// Property tests for ChainHashMap kept inside the crate so they sit next
// to the unit suite and can reach internal observers if they ever need to.

use crate::ChainHashMap;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Enumerate,
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Set(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Get),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => Just(OpI::Enumerate),
            1 => Just(OpI::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `set` inserts new keys and overwrites existing ones; occupancy matches
//   the model after every op.
// - `get`/`contains_key` parity for present and absent keys, including the
//   empty-string key the pool can produce.
// - `remove` returns the evicted value exactly when the model holds one,
//   and is a no-op otherwise.
// - Enumeration is complete: keys/values/entries lengths equal `len()`,
//   every listed pair agrees with `get`, and the three views line up
//   index-by-index.
// - `clear` empties the table without touching capacity.
// - Capacity only ever grows, by doubling from 16.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: ChainHashMap<i32> = ChainHashMap::new();
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut last_capacity = sut.capacity();

        for op in ops {
            match op {
                OpI::Set(i, v) => {
                    let k = pool[i].clone();
                    sut.set(k.clone(), v);
                    model.insert(k, v);
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(k));
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k.as_str()));
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(k.as_str()));
                }
                OpI::Contains(k) => {
                    prop_assert_eq!(sut.contains_key(&k), model.contains_key(k.as_str()));
                }
                OpI::Enumerate => {
                    let entries = sut.entries();
                    prop_assert_eq!(entries.len(), model.len());
                    prop_assert_eq!(sut.keys().len(), entries.len());
                    prop_assert_eq!(sut.values().len(), entries.len());
                    for (at, (k, v)) in entries.iter().enumerate() {
                        prop_assert_eq!(sut.get(k), Some(*v));
                        prop_assert_eq!(model.get(*k), Some(*v));
                        prop_assert_eq!(sut.keys()[at], *k);
                        prop_assert_eq!(sut.values()[at], *v);
                    }
                }
                OpI::Clear => {
                    let capacity = sut.capacity();
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.capacity(), capacity);
                }
            }

            // Post-conditions after each op.
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert!(sut.capacity() >= last_capacity, "capacity must never shrink");
            last_capacity = sut.capacity();
        }
    }
}

// Property: growth discipline under distinct-key insert storms. Capacity
// is always 16 doubled some number of times, never shrinks, and every key
// keeps its latest value across every rehash.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_growth_keeps_all_entries(n in 1usize..200) {
        let mut m: ChainHashMap<usize> = ChainHashMap::new();
        let mut last_capacity = m.capacity();

        for i in 0..n {
            m.set(format!("key-{i}"), i);
            let capacity = m.capacity();
            prop_assert!(capacity == last_capacity || capacity == last_capacity * 2);
            prop_assert!(capacity.is_power_of_two());
            last_capacity = capacity;
        }

        prop_assert_eq!(m.len(), n);
        for i in 0..n {
            prop_assert_eq!(m.get(&format!("key-{i}")), Some(&i));
        }
    }
}
