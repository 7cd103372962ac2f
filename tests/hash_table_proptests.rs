use chained_hashtable::prime::is_prime;
use chained_hashtable::HashTable;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

// Property: inserting distinct keys yields a count equal to the number of
// keys, keeps every value retrievable, and holds the sizing invariants.
proptest! {
    #[test]
    fn prop_distinct_inserts(keys in proptest::collection::hash_set("[a-zA-Z0-9_-]{1,12}", 0..200)) {
        let mut t = HashTable::new();
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(t.insert(k.as_str(), i), None);
            prop_assert!(is_prime(t.capacity()));
            prop_assert!(t.count() * 4 < t.capacity() * 3);
        }
        prop_assert_eq!(t.count(), keys.len());
        for (i, k) in keys.iter().enumerate() {
            prop_assert_eq!(t.search(k), Ok(&i));
        }
    }
}

// Property: with repeated keys the last write wins and the count equals the
// number of distinct keys.
proptest! {
    #[test]
    fn prop_last_write_wins(pairs in proptest::collection::vec(("[a-e]{1,2}", any::<u16>()), 0..150)) {
        let mut t = HashTable::new();
        let mut model = BTreeMap::new();
        for (k, v) in &pairs {
            t.insert(k.as_str(), *v);
            model.insert(k.clone(), *v);
        }
        prop_assert_eq!(t.count(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(t.search(k), Ok(v));
        }
    }
}

// Property: deleting a subset removes exactly that subset.
proptest! {
    #[test]
    fn prop_delete_subset(
        keys in proptest::collection::hash_set("[a-z]{1,8}", 1..120),
        mask in proptest::collection::vec(any::<bool>(), 120),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut t = HashTable::new();
        for k in &keys {
            t.insert(k.as_str(), k.len());
        }
        let capacity = t.capacity();
        let mut removed = HashSet::new();
        for (k, &drop_it) in keys.iter().zip(mask.iter()) {
            if drop_it {
                prop_assert_eq!(t.delete(k), Ok(k.len()));
                removed.insert(k.clone());
            }
        }
        prop_assert_eq!(t.capacity(), capacity);
        prop_assert_eq!(t.count(), keys.len() - removed.len());
        for k in &keys {
            prop_assert_eq!(t.contains_key(k), !removed.contains(k));
        }
    }
}
