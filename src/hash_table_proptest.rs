#![cfg(test)]

// Property tests for HashTable kept inside the crate, next to the module
// they exercise.

use crate::error::KeyNotFound;
use crate::hash::SlotHasher;
use crate::hash_table::HashTable;
use crate::prime::is_prime;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Delete(usize),
    Search(usize),
    Mutate(usize, i32),
    Contains(String),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=24).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Delete),
            2 => idx.clone().prop_map(OpI::Search),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run_state_machine<S: SlotHasher>(
    mut sut: HashTable<i32, S>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        let capacity_before = sut.capacity();
        match op {
            OpI::Insert(i, v) => {
                let k = &pool[i];
                let prev = sut.insert(k.as_str(), v);
                prop_assert_eq!(prev, model.insert(k.clone(), v));
                prop_assert_eq!(sut.search(k), Ok(&v));
            }
            OpI::Delete(i) => {
                let k = &pool[i];
                match model.remove(k) {
                    Some(mv) => prop_assert_eq!(sut.delete(k), Ok(mv)),
                    None => {
                        prop_assert_eq!(sut.delete(k), Err(KeyNotFound::new(k.as_str())));
                        prop_assert_eq!(sut.capacity(), capacity_before);
                    }
                }
                prop_assert!(!sut.contains_key(k));
            }
            OpI::Search(i) => {
                let k = &pool[i];
                match model.get(k) {
                    Some(mv) => prop_assert_eq!(sut.search(k), Ok(mv)),
                    None => prop_assert!(sut.search(k).is_err()),
                }
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.search_mut(k), model.get_mut(k)) {
                    (Ok(sv), Some(mv)) => {
                        *sv = sv.saturating_add(d);
                        *mv = mv.saturating_add(d);
                    }
                    (Err(_), None) => {}
                    (s, m) => prop_assert!(false, "presence mismatch: {:?} vs {:?}", s, m),
                }
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Iterate => {
                let s_pairs: BTreeMap<String, i32> =
                    sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                let m_pairs: BTreeMap<String, i32> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(s_pairs, m_pairs);
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.count(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(is_prime(sut.capacity()));
        prop_assert!(sut.capacity() >= capacity_before, "tables never shrink");
        prop_assert!(sut.count() * 4 < sut.capacity() * 3);
        let chained: usize = (0..sut.capacity())
            .map(|i| sut.chain(i).map(|c| c.len()).unwrap_or(0))
            .sum();
        prop_assert_eq!(chained, sut.count());
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `insert` returns the displaced value exactly when the model had one.
// - `search`/`delete` agree with the model; misses never change capacity.
// - `count` equals the model length and the sum of chain lengths.
// - Capacity stays prime, never shrinks, and keeps the 3/4 load bound.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_state_machine(HashTable::new(), &pool, ops)?;
    }
}

// Sends every key to slot 0.
#[derive(Clone, Copy, Default)]
struct ConstSlot;

impl SlotHasher for ConstSlot {
    fn slot(&self, _key: &str, _capacity: usize) -> usize {
        0
    }
}

// Property: Same invariants under worst-case collisions, where every entry
// shares a single chain. This stresses head/middle/tail unlinking.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_state_machine(HashTable::with_hasher(ConstSlot), &pool, ops)?;
    }
}

// Property: small capacity hints still yield prime tables that grow through
// several resizes without losing entries.
proptest! {
    #[test]
    fn prop_growth_from_any_hint(hint in 0usize..64, n in 0usize..300) {
        let mut t = HashTable::with_capacity(hint);
        prop_assert!(is_prime(t.capacity()));
        prop_assert!(t.capacity() >= hint);
        for i in 0..n {
            t.insert(format!("key-{}", i), i);
        }
        prop_assert_eq!(t.count(), n);
        for i in 0..n {
            prop_assert_eq!(t.search(&format!("key-{}", i)), Ok(&i));
        }
    }
}
