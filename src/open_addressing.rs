//! OpenAddressingTable: entries stored inline, collisions resolved by probing.
//!
//! Slot lifecycle: `Empty -> Occupied -> Tombstone -> Occupied (reused)`, and
//! back to `Empty` only when a resize rebuilds the slot array or a lookup
//! relocates an entry into an earlier tombstone.
//!
//! Entry count follows physical occupancy rather than liveness: removal
//! leaves it unchanged (the tombstone still occupies its slot) and reusing a
//! tombstone does not increment it. Only a resize, which drops every
//! tombstone, brings it back down to the number of live entries.

use crate::config::OpenAddressingConfig;
use crate::entry::{Entry, Found, Location};
use crate::error::{ConfigError, InsertError};
use crate::hash::HashStrategy;
use crate::probe::ProbeStrategy;
use crate::table::{HashTable, KeyPolicy};
use core::fmt;
use core::mem;
use tracing::{debug, trace};

/// Observable state of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotState {
    Empty,
    Occupied,
    Tombstone,
}

#[derive(Debug, Clone)]
enum Slot<K, V> {
    Empty,
    Occupied(Entry<K, V>),
    // removed entry, kept until reused or reclaimed by resize
    Tombstone(Entry<K, V>),
}

impl<K, V> Slot<K, V> {
    fn state(&self) -> SlotState {
        match self {
            Slot::Empty => SlotState::Empty,
            Slot::Occupied(_) => SlotState::Occupied,
            Slot::Tombstone(_) => SlotState::Tombstone,
        }
    }

    fn live(&self) -> Option<&Entry<K, V>> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    fn live_mut(&mut self) -> Option<&mut Entry<K, V>> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    fn into_live(self) -> Option<Entry<K, V>> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    fn bury(&mut self) {
        *self = match mem::replace(self, Slot::Empty) {
            Slot::Occupied(entry) => Slot::Tombstone(entry),
            other => other,
        };
    }
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    (0..capacity).map(|_| Slot::Empty).collect()
}

pub struct OpenAddressingTable<K, V, H, P> {
    hasher: H,
    probe: P,
    slots: Vec<Slot<K, V>>,
    count: usize,
    max_load_factor: f64,
    policy: KeyPolicy,
}

impl<K, V, H, P> OpenAddressingTable<K, V, H, P> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Entry count, tombstones included until the next resize.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    pub fn key_policy(&self) -> KeyPolicy {
        self.policy
    }

    pub fn slot_state(&self, index: usize) -> Option<SlotState> {
        self.slots.get(index).map(Slot::state)
    }

    /// The live entry stored at `index`, if any.
    pub fn slot(&self, index: usize) -> Option<&Entry<K, V>> {
        self.slots.get(index).and_then(Slot::live)
    }

    pub fn tombstones(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| s.state() == SlotState::Tombstone)
            .count()
    }
}

impl<K, V, H, P> OpenAddressingTable<K, V, H, P>
where
    K: Eq,
    H: HashStrategy<K>,
    P: ProbeStrategy,
{
    /// Panics if `capacity` is zero or `max_load_factor` is outside `(0, 1]`.
    pub fn new(capacity: usize, hasher: H, probe: P, max_load_factor: f64) -> Self {
        let config = OpenAddressingConfig::new(capacity, max_load_factor);
        match Self::with_config(config, hasher, probe) {
            Ok(table) => table,
            Err(e) => panic!("invalid open addressing table: {e}"),
        }
    }

    pub fn with_config(
        config: OpenAddressingConfig,
        hasher: H,
        probe: P,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            hasher,
            probe,
            slots: empty_slots(config.capacity),
            count: 0,
            max_load_factor: config.max_load_factor,
            policy: config.key_policy,
        })
    }

    fn home(&self, key: &K) -> usize {
        let capacity = self.capacity();
        let bucket = self.hasher.bucket(key, capacity);
        assert!(
            bucket < capacity,
            "hash strategy returned bucket {bucket} for capacity {capacity}"
        );
        bucket
    }

    fn next_slot(&mut self, bucket: usize, capacity: usize) -> usize {
        (bucket + self.probe.increment(capacity) % capacity) % capacity
    }

    /// Walks the probe sequence for `key`. If a tombstone was passed before
    /// the live match, the entry is moved into the first such tombstone and
    /// its old slot becomes empty; the returned location is the new one.
    fn probe_for(&mut self, key: &K) -> Option<Location> {
        let capacity = self.capacity();
        let bucket = self.home(key);
        self.probe.reset();
        let mut index = bucket;
        let mut first_tombstone = None;
        for _ in 0..=capacity {
            let matched = match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(entry) => entry.key() == key,
                Slot::Tombstone(_) => {
                    first_tombstone.get_or_insert(index);
                    false
                }
            };
            if matched {
                return Some(match first_tombstone {
                    Some(target) => {
                        trace!(bucket, from = index, to = target, "relocate into tombstone");
                        let moved = mem::replace(&mut self.slots[index], Slot::Empty);
                        self.slots[target] = moved;
                        Location {
                            bucket,
                            index: target,
                        }
                    }
                    None => Location { bucket, index },
                });
            }
            index = self.next_slot(bucket, capacity);
        }
        None
    }

    /// Locate the live entry for `key`, compacting it into an earlier
    /// tombstone on the way if the probe walk passed one.
    pub fn find(&mut self, key: &K) -> Option<Found<'_, K, V>> {
        let location = self.probe_for(key)?;
        let entry = self.slots[location.index].live()?;
        Some(Found { location, entry })
    }

    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.find(key).map(|found| found.value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let location = self.probe_for(key)?;
        self.slots[location.index].live_mut().map(Entry::value_mut)
    }

    pub fn contains_key(&mut self, key: &K) -> bool {
        self.probe_for(key).is_some()
    }

    /// Place `key` at the first empty or tombstoned slot of its probe
    /// sequence, doubling capacity first if the insert would push the load
    /// factor above the maximum.
    ///
    /// Under [`KeyPolicy::AllowDuplicates`] no search for an existing entry
    /// is made, so a live entry with the same key further along the sequence
    /// is neither found nor replaced.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), InsertError> {
        if self.policy == KeyPolicy::RejectDuplicates && self.probe_for(&key).is_some() {
            return Err(InsertError::DuplicateKey);
        }
        self.reserve_one();
        self.place(key, value);
        Ok(())
    }

    fn reserve_one(&mut self) {
        while (self.count + 1) as f64 / self.capacity() as f64 > self.max_load_factor {
            let target = self
                .capacity()
                .checked_mul(2)
                .expect("capacity overflow while growing table");
            self.resize(target);
        }
    }

    fn place(&mut self, key: K, value: V) {
        let capacity = self.capacity();
        let bucket = self.home(&key);
        self.probe.reset();
        let mut index = bucket;
        for _ in 0..=capacity {
            match self.slots[index].state() {
                SlotState::Empty => {
                    trace!(bucket, slot = index, "insert into empty slot");
                    self.slots[index] = Slot::Occupied(Entry::new(key, value));
                    self.count += 1;
                    return;
                }
                SlotState::Tombstone => {
                    trace!(bucket, slot = index, "insert over tombstone");
                    self.slots[index] = Slot::Occupied(Entry::new(key, value));
                    return;
                }
                SlotState::Occupied => {
                    trace!(bucket, slot = index, "collision");
                    index = self.next_slot(bucket, capacity);
                }
            }
        }
        panic!(
            "probe sequence from bucket {bucket} did not reach a free slot within {capacity} steps"
        );
    }

    /// Mark the live entry for `key` as a tombstone. Entry count is left
    /// unchanged; the slot is reclaimed at the next resize.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(location) = self.probe_for(key) else {
            return false;
        };
        trace!(bucket = location.bucket, slot = location.index, "remove");
        self.slots[location.index].bury();
        true
    }

    /// Rebuild the slot array with `new_capacity` slots, dropping every
    /// tombstone and re-placing live entries against the new capacity.
    ///
    /// Panics if `new_capacity` is zero or smaller than the entry count.
    pub fn resize(&mut self, new_capacity: usize) {
        assert!(new_capacity > 0, "capacity must be at least 1");
        assert!(
            new_capacity >= self.count,
            "cannot resize to {new_capacity} slots while holding {} entries",
            self.count
        );
        let old = mem::replace(&mut self.slots, empty_slots(new_capacity));
        let old_capacity = old.len();
        let live: Vec<Entry<K, V>> = old.into_iter().filter_map(Slot::into_live).collect();
        debug!(old_capacity, new_capacity, live = live.len(), "resize");
        self.count = 0;
        for entry in live {
            let (key, value) = entry.into_parts();
            self.place(key, value);
        }
    }
}

impl<K, V, H, P> HashTable<K, V> for OpenAddressingTable<K, V, H, P>
where
    K: Eq,
    H: HashStrategy<K>,
    P: ProbeStrategy,
{
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn len(&self) -> usize {
        self.count
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), InsertError> {
        OpenAddressingTable::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> bool {
        OpenAddressingTable::remove(self, key)
    }

    fn locate(&mut self, key: &K) -> Option<Location> {
        self.probe_for(key)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        OpenAddressingTable::get(self, key)
    }
}

impl<K, V, H, P> fmt::Display for OpenAddressingTable<K, V, H, P>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "[{index}]")?,
                Slot::Occupied(entry) => {
                    writeln!(f, "[{index}] {} -> {}", entry.key(), entry.value())?
                }
                Slot::Tombstone(_) => writeln!(f, "[{index}] <tombstone>")?,
            }
        }
        Ok(())
    }
}
