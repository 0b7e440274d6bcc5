#![cfg(test)]

// Property tests for ChainedHashTable kept inside the crate so they can
// inspect chains directly.

use crate::chained::ChainedHashTable;
use crate::config::ChainedConfig;
use crate::error::InsertError;
use crate::hash::{HashStrategy, ModuloHash};
use crate::table::KeyPolicy;
use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};

#[derive(Clone, Debug)]
enum Op {
    Insert(u32, i32),
    Remove(u32),
    Find(u32),
    Mutate(u32, i32),
}

// Small key space so that duplicates and collisions are common.
fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let key = 0u32..24;
    let op = prop_oneof![
        (key.clone(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        key.clone().prop_map(Op::Remove),
        key.clone().prop_map(Op::Find),
        (key, any::<i32>()).prop_map(|(k, d)| Op::Mutate(k, d)),
    ];
    proptest::collection::vec(op, 1..80)
}

// Model: each key maps to the values of its live entries in insertion order.
// Lookups and removals act on the oldest one.
fn run_against_multimap<H>(capacity: usize, hasher: H, ops: Vec<Op>) -> Result<(), TestCaseError>
where
    H: HashStrategy<u32> + Clone,
{
    let mut sut = ChainedHashTable::new(capacity, hasher.clone());
    let mut model: HashMap<u32, VecDeque<i32>> = HashMap::new();

    for op in ops {
        match op {
            Op::Insert(k, v) => {
                prop_assert!(sut.insert(k, v).is_ok(), "duplicates are allowed");
                model.entry(k).or_default().push_back(v);
            }
            Op::Remove(k) => {
                let expected = model.get_mut(&k).and_then(VecDeque::pop_front);
                let removed = sut.remove_entry(&k).map(|e| *e.value());
                prop_assert_eq!(removed, expected);
                let next = model.get(&k).and_then(|q| q.front().copied());
                prop_assert_eq!(sut.find(&k).map(|f| *f.value()), next);
            }
            Op::Find(k) => {
                let expected = model.get(&k).and_then(|q| q.front());
                prop_assert_eq!(sut.get(&k), expected);
                if let Some(found) = sut.find(&k) {
                    prop_assert_eq!(found.location.bucket, hasher.bucket(&k, capacity));
                    prop_assert!(found.location.index < sut.chain_len(found.location.bucket));
                }
            }
            Op::Mutate(k, d) => {
                if let Some(v) = sut.get_mut(&k) {
                    *v = v.wrapping_add(d);
                }
                if let Some(front) = model.get_mut(&k).and_then(|q| q.front_mut()) {
                    *front = front.wrapping_add(d);
                }
            }
        }

        // Post-conditions after each op
        // 1) Count parity with the model
        let total: usize = model.values().map(VecDeque::len).sum();
        prop_assert_eq!(sut.len(), total);
        prop_assert_eq!(sut.is_empty(), total == 0);
        // 2) Every chained entry hashes to the bucket holding it
        let mut chained = 0;
        for bucket in 0..capacity {
            for entry in sut.chain(bucket) {
                prop_assert_eq!(hasher.bucket(entry.key(), capacity), bucket);
                chained += 1;
            }
        }
        prop_assert_eq!(chained, total);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_multimap_equivalence(capacity in 1usize..8, ops in arb_ops()) {
        run_against_multimap(capacity, ModuloHash, ops)?;
    }

    // Worst case: every key lands in bucket zero.
    #[test]
    fn prop_multimap_equivalence_single_chain(capacity in 1usize..8, ops in arb_ops()) {
        run_against_multimap(capacity, |_: &u32, _: usize| 0usize, ops)?;
    }

    // Property: with duplicates rejected the table behaves like a map.
    #[test]
    fn prop_strict_policy_matches_map(capacity in 1usize..8, ops in arb_ops()) {
        let config = ChainedConfig { capacity, key_policy: KeyPolicy::RejectDuplicates };
        let mut sut = ChainedHashTable::with_config(config, ModuloHash).unwrap();
        let mut model: HashMap<u32, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => match sut.insert(k, v) {
                    Ok(_) => {
                        prop_assert!(model.insert(k, v).is_none());
                    }
                    Err(InsertError::DuplicateKey) => {
                        prop_assert!(model.contains_key(&k));
                    }
                },
                Op::Remove(k) => {
                    prop_assert_eq!(sut.remove(&k), model.remove(&k).is_some());
                    prop_assert!(!sut.remove(&k));
                }
                Op::Find(k) => {
                    prop_assert_eq!(sut.get(&k), model.get(&k));
                }
                Op::Mutate(k, d) => {
                    if let Some(v) = sut.get_mut(&k) {
                        *v = v.wrapping_add(d);
                    }
                    if let Some(v) = model.get_mut(&k) {
                        *v = v.wrapping_add(d);
                    }
                }
            }
            prop_assert_eq!(sut.len(), model.len());
        }
    }
}
