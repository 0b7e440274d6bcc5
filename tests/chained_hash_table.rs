use collide::{
    ChainedConfig, ChainedHashTable, Handle, HashTable, InsertError, KeyPolicy, Location,
    ModuloHash,
};
use std::collections::{LinkedList, VecDeque};

fn keys_in_chain<H, C>(t: &ChainedHashTable<u32, &str, H, C>, bucket: usize) -> Vec<u32>
where
    H: collide::HashStrategy<u32>,
    C: collide::Chain<Handle>,
{
    t.chain(bucket).map(|e| *e.key()).collect()
}

#[test]
fn colliding_keys_share_a_chain_in_insertion_order() {
    let mut t = ChainedHashTable::new(5, ModuloHash);
    t.insert(1u32, "one").unwrap();
    t.insert(6, "six").unwrap();
    t.insert(11, "eleven").unwrap();
    assert_eq!(t.len(), 3);
    assert_eq!(keys_in_chain(&t, 1), vec![1, 6, 11]);

    let found = t.find(&11).expect("found");
    assert_eq!(found.location, Location { bucket: 1, index: 2 });
    assert_eq!(found.value(), &"eleven");

    assert!(t.remove(&6));
    assert_eq!(keys_in_chain(&t, 1), vec![1, 11]);
    assert_eq!(t.find(&11).unwrap().location.index, 1);
    assert!(!t.remove(&6));
    assert_eq!(t.len(), 2);
}

#[test]
fn lookups_stay_within_the_home_bucket() {
    let mut t = ChainedHashTable::new(5, ModuloHash);
    t.insert(2u32, "two").unwrap();
    assert!(t.find(&7).is_none());
    assert!(t.find(&3).is_none());
    assert_eq!(t.chain_len(3), 0);
}

#[test]
fn linked_list_chains_with_custom_hash() {
    // bucket from the word length, so many words collide
    let hash = |s: &String, capacity: usize| (s.len() * s.len() + 3) % capacity;
    let mut t: ChainedHashTable<String, usize, _, LinkedList<Handle>> =
        ChainedHashTable::with_chains(10, hash);

    let subjects = [
        "algebra", "biology", "chemistry", "drama", "english", "french", "geography", "history",
        "italian", "japanese", "latin", "music",
    ];
    for (i, s) in subjects.iter().enumerate() {
        t.insert(s.to_string(), i).unwrap();
    }
    assert_eq!(t.len(), subjects.len());
    assert!((t.load_factor() - 1.2).abs() < 1e-9);

    for (i, s) in subjects.iter().enumerate() {
        let found = t.find(&s.to_string()).expect("subject present");
        assert_eq!(found.location.bucket, hash(&s.to_string(), 10));
        assert_eq!(*found.value(), i);
    }

    // "drama", "latin" and "music" all have five letters
    assert_eq!(t.chain_len(8), 3);
    assert!(t.remove(&"latin".to_string()));
    let music = t.find(&"music".to_string()).unwrap();
    assert_eq!(music.location, Location { bucket: 8, index: 1 });
    assert_eq!(t.len(), subjects.len() - 1);
}

#[test]
fn handles_outlive_neighbouring_removals() {
    let mut t: ChainedHashTable<u32, &str, _, VecDeque<Handle>> =
        ChainedHashTable::with_chains(3, ModuloHash);
    let a = t.insert(0, "a").unwrap();
    let b = t.insert(3, "b").unwrap();
    assert!(t.remove(&0));
    assert_eq!(a.value(&t), None);
    assert_eq!(b.key(&t), Some(&3));
    if let Some(v) = b.value_mut(&mut t) {
        *v = "bb";
    }
    assert_eq!(t.get(&3), Some(&"bb"));
}

#[test]
fn strict_policy_through_config() {
    let config = ChainedConfig {
        key_policy: KeyPolicy::RejectDuplicates,
        ..ChainedConfig::with_capacity(4)
    };
    let mut t = ChainedHashTable::with_config(config, ModuloHash).unwrap();
    t.insert(1u32, 10).unwrap();
    assert!(matches!(t.insert(5, 50), Ok(_)));
    assert!(matches!(t.insert(1, 11), Err(InsertError::DuplicateKey)));
    assert_eq!(t.get(&1), Some(&10));
    assert_eq!(t.len(), 2);
}

fn fill<T: HashTable<u32, u32>>(t: &mut T, keys: &[u32]) {
    for &k in keys {
        t.insert(k, k * 10).unwrap();
    }
}

#[test]
fn usable_through_the_shared_trait() {
    let mut t = ChainedHashTable::new(4, ModuloHash);
    fill(&mut t, &[0, 4, 8, 1]);
    let table: &mut dyn HashTable<u32, u32> = &mut t;
    assert_eq!(table.capacity(), 4);
    assert_eq!(table.len(), 4);
    assert_eq!(table.load_factor(), 1.0);
    assert_eq!(table.locate(&8), Some(Location { bucket: 0, index: 2 }));
    assert_eq!(table.get(&4), Some(&40));
    assert!(table.remove(&4));
    assert!(!table.contains_key(&4));
    assert_eq!(table.len(), 3);
}

#[test]
fn display_lists_every_chain() {
    let mut t = ChainedHashTable::new(3, ModuloHash);
    t.insert(1u32, "a").unwrap();
    t.insert(4, "b").unwrap();
    t.insert(2, "c").unwrap();
    assert_eq!(t.to_string(), "[0]\n[1] 1 -> a 4 -> b\n[2] 2 -> c\n");
}
