//! ChainedHashTable: separate chaining over a pluggable chain container.
//!
//! Entries live in a generational arena; each bucket's chain stores
//! `Handle`s into it. The bucket count never changes after construction.

use crate::chain::Chain;
use crate::config::ChainedConfig;
use crate::entry::{Entry, Found, Location};
use crate::error::{ConfigError, InsertError};
use crate::hash::HashStrategy;
use crate::table::{HashTable, KeyPolicy};
use core::fmt;
use slotmap::{DefaultKey, SlotMap};
use tracing::trace;

/// Stable reference to one entry of a [`ChainedHashTable`]. Stays valid until
/// that entry is removed and never resolves to a later entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle(DefaultKey);

impl Handle {
    pub(crate) fn new(k: DefaultKey) -> Self {
        Handle(k)
    }
    pub(crate) fn raw_handle(&self) -> DefaultKey {
        self.0
    }

    pub fn key<'a, K, V, H, C>(&self, table: &'a ChainedHashTable<K, V, H, C>) -> Option<&'a K> {
        table.handle_entry(*self).map(Entry::key)
    }

    pub fn value<'a, K, V, H, C>(&self, table: &'a ChainedHashTable<K, V, H, C>) -> Option<&'a V> {
        table.handle_entry(*self).map(Entry::value)
    }

    pub fn value_mut<'a, K, V, H, C>(
        &self,
        table: &'a mut ChainedHashTable<K, V, H, C>,
    ) -> Option<&'a mut V> {
        table
            .entries
            .get_mut(self.raw_handle())
            .map(Entry::value_mut)
    }
}

pub struct ChainedHashTable<K, V, H, C = Vec<Handle>> {
    hasher: H,
    buckets: Vec<C>,
    entries: SlotMap<DefaultKey, Entry<K, V>>, // chains hold handles into this arena
    policy: KeyPolicy,
}

impl<K, V, H> ChainedHashTable<K, V, H>
where
    K: Eq,
    H: HashStrategy<K>,
{
    /// Table with `capacity` buckets chained through `Vec`s.
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, hasher: H) -> Self {
        Self::with_chains(capacity, hasher)
    }

    pub fn with_config(config: ChainedConfig, hasher: H) -> Result<Self, ConfigError> {
        Self::with_chain_config(config, hasher)
    }
}

impl<K, V, H, C> ChainedHashTable<K, V, H, C> {
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    pub fn key_policy(&self) -> KeyPolicy {
        self.policy
    }

    fn handle_entry(&self, h: Handle) -> Option<&Entry<K, V>> {
        self.entries.get(h.raw_handle())
    }
}

impl<K, V, H, C> ChainedHashTable<K, V, H, C>
where
    K: Eq,
    H: HashStrategy<K>,
    C: Chain<Handle>,
{
    /// Table with `capacity` buckets and a caller-chosen chain container.
    ///
    /// Panics if `capacity` is zero.
    pub fn with_chains(capacity: usize, hasher: H) -> Self {
        match Self::with_chain_config(ChainedConfig::with_capacity(capacity), hasher) {
            Ok(table) => table,
            Err(e) => panic!("invalid chained table: {e}"),
        }
    }

    pub fn with_chain_config(config: ChainedConfig, hasher: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            hasher,
            buckets: (0..config.capacity).map(|_| C::default()).collect(),
            entries: SlotMap::with_key(),
            policy: config.key_policy,
        })
    }

    fn bucket_of(&self, key: &K) -> usize {
        let capacity = self.capacity();
        let bucket = self.hasher.bucket(key, capacity);
        assert!(
            bucket < capacity,
            "hash strategy returned bucket {bucket} for capacity {capacity}"
        );
        bucket
    }

    // First entry in chain order whose key matches.
    fn scan(&self, key: &K) -> Option<(Location, Handle)> {
        let bucket = self.bucket_of(key);
        let chain = &self.buckets[bucket];
        (0..chain.len()).find_map(|index| {
            let handle = *chain.get(index)?;
            let entry = self.entries.get(handle.raw_handle())?;
            (entry.key() == key).then_some((Location { bucket, index }, handle))
        })
    }

    pub fn find(&self, key: &K) -> Option<Found<'_, K, V>> {
        let (location, handle) = self.scan(key)?;
        let entry = self.handle_entry(handle)?;
        Some(Found { location, entry })
    }

    pub fn find_handle(&self, key: &K) -> Option<Handle> {
        self.scan(key).map(|(_, handle)| handle)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|found| found.value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let handle = self.find_handle(key)?;
        handle.value_mut(self)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.scan(key).is_some()
    }

    /// Append a new entry to the key's chain.
    ///
    /// Under [`KeyPolicy::AllowDuplicates`] an existing entry with the same
    /// key is left in place and the new one sits behind it in the chain.
    pub fn insert(&mut self, key: K, value: V) -> Result<Handle, InsertError> {
        if self.policy == KeyPolicy::RejectDuplicates && self.scan(&key).is_some() {
            return Err(InsertError::DuplicateKey);
        }
        let bucket = self.bucket_of(&key);
        let handle = Handle::new(self.entries.insert(Entry::new(key, value)));
        let chain = &mut self.buckets[bucket];
        trace!(bucket, chain_len = chain.len(), "insert");
        chain.append(handle);
        Ok(handle)
    }

    /// Unlink and return the first entry for `key`.
    pub fn remove_entry(&mut self, key: &K) -> Option<Entry<K, V>> {
        let (location, handle) = self.scan(key)?;
        let unlinked = self.buckets[location.bucket].remove(location.index);
        debug_assert_eq!(unlinked, Some(handle));
        trace!(bucket = location.bucket, index = location.index, "remove");
        self.entries.remove(handle.raw_handle())
    }

    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Number of entries chained in `bucket` (zero when out of range).
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.buckets.get(bucket).map_or(0, |chain| chain.len())
    }

    /// Entries of `bucket` in chain order.
    pub fn chain(&self, bucket: usize) -> impl Iterator<Item = &Entry<K, V>> + '_ {
        let chain = self.buckets.get(bucket);
        let len = chain.map_or(0, |c| c.len());
        (0..len).filter_map(move |index| {
            let handle = chain?.get(index)?;
            self.handle_entry(*handle)
        })
    }
}

impl<K, V, H, C> HashTable<K, V> for ChainedHashTable<K, V, H, C>
where
    K: Eq,
    H: HashStrategy<K>,
    C: Chain<Handle>,
{
    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), InsertError> {
        ChainedHashTable::insert(self, key, value).map(drop)
    }

    fn remove(&mut self, key: &K) -> bool {
        ChainedHashTable::remove(self, key)
    }

    fn locate(&mut self, key: &K) -> Option<Location> {
        self.scan(key).map(|(location, _)| location)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        ChainedHashTable::get(self, key)
    }
}

impl<K, V, H, C> fmt::Display for ChainedHashTable<K, V, H, C>
where
    K: fmt::Display,
    V: fmt::Display,
    C: Chain<Handle>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (bucket, chain) in self.buckets.iter().enumerate() {
            write!(f, "[{bucket}]")?;
            for index in 0..chain.len() {
                if let Some(entry) = chain.get(index).and_then(|h| self.handle_entry(*h)) {
                    write!(f, " {} -> {}", entry.key(), entry.value())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
