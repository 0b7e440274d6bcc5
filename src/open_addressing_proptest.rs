#![cfg(test)]

// Property tests for OpenAddressingTable kept inside the crate so they can
// use the gcd helper and slot inspection.

use crate::hash::{BuildHasherStrategy, ModuloHash};
use crate::open_addressing::{OpenAddressingTable, SlotState};
use crate::probe::{gcd, LinearProbe, QuadraticProbe};
use proptest::prelude::*;
use std::collections::HashSet;

fn occupied<K, V, H, P>(t: &OpenAddressingTable<K, V, H, P>) -> usize {
    (0..t.capacity())
        .filter(|&i| t.slot_state(i) == Some(SlotState::Occupied))
        .count()
}

fn arb_setup() -> impl Strategy<Value = (usize, usize, f64)> {
    (
        proptest::sample::select(vec![1usize, 3, 5, 7]),
        1usize..32,
        0.1f64..1.0,
    )
        .prop_filter("stride must be coprime to capacity", |(stride, capacity, _)| {
            gcd(*stride, *capacity) == 1
        })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    // Property: distinct keys are all found with their values, and no insert
    // leaves the load factor above the maximum.
    #[test]
    fn prop_distinct_inserts_are_found(
        (stride, capacity, max_lf) in arb_setup(),
        keys in proptest::collection::hash_set(0u32..10_000, 0..120),
    ) {
        let probe = LinearProbe::new(stride, 0);
        let mut sut = OpenAddressingTable::new(capacity, ModuloHash, probe, max_lf);
        for &k in &keys {
            sut.insert(k, k.wrapping_mul(7)).unwrap();
            prop_assert!(sut.load_factor() <= max_lf);
        }
        prop_assert_eq!(sut.len(), keys.len());
        prop_assert_eq!(sut.tombstones(), 0);
        prop_assert_eq!(occupied(&sut), keys.len());
        for &k in &keys {
            let expected = k.wrapping_mul(7);
            prop_assert_eq!(sut.get(&k), Some(&expected));
        }
    }

    // Property: removal hides the key, is idempotent, leaves the count alone,
    // and a resize drops every tombstone.
    #[test]
    fn prop_remove_then_resize(
        (stride, capacity, max_lf) in arb_setup(),
        keys in proptest::collection::vec(0u32..10_000, 0..100),
        remove_mask in proptest::collection::vec(any::<bool>(), 100),
    ) {
        let keys: Vec<u32> = {
            let mut seen = HashSet::new();
            keys.into_iter().filter(|k| seen.insert(*k)).collect()
        };
        let probe = LinearProbe::new(stride, 0);
        let mut sut = OpenAddressingTable::new(capacity, ModuloHash, probe, max_lf);
        for &k in &keys {
            sut.insert(k, k).unwrap();
        }

        let mut removed = HashSet::new();
        for (&k, _) in keys.iter().zip(&remove_mask).filter(|&(_, &m)| m) {
            let before = sut.len();
            if sut.remove(&k) {
                removed.insert(k);
                prop_assert!(!sut.remove(&k));
            }
            prop_assert!(sut.find(&k).is_none());
            prop_assert_eq!(sut.len(), before);
        }

        let capacity = sut.capacity();
        sut.resize(capacity);
        prop_assert_eq!(sut.tombstones(), 0);
        prop_assert_eq!(sut.len(), keys.len() - removed.len());
        prop_assert_eq!(occupied(&sut), sut.len());
        for &k in &keys {
            if removed.contains(&k) {
                prop_assert!(sut.get(&k).is_none());
            } else {
                prop_assert_eq!(sut.get(&k), Some(&k));
            }
        }
    }

    // Property: after growing through many inserts with tombstones in play,
    // a fresh resize leaves no tombstones and exactly `len` occupied slots.
    #[test]
    fn prop_growth_with_churn(
        ops in proptest::collection::vec((any::<bool>(), "[a-z]{1,4}"), 1..150),
    ) {
        let mut sut = OpenAddressingTable::new(
            4,
            BuildHasherStrategy::new(),
            QuadraticProbe::triangular(),
            0.5,
        );
        for (insert, key) in ops {
            if insert {
                sut.insert(key, ()).unwrap();
                prop_assert!(sut.load_factor() <= 0.5);
            } else {
                let before = sut.len();
                let _ = sut.remove(&key);
                prop_assert_eq!(sut.len(), before);
            }
        }
        let capacity = sut.capacity();
        sut.resize(capacity);
        prop_assert_eq!(sut.tombstones(), 0);
        prop_assert_eq!(occupied(&sut), sut.len());
    }
}
