//! Contract shared by both collision-resolution strategies.

use crate::entry::Location;
use crate::error::InsertError;

/// How `insert` treats a key that already has a live entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyPolicy {
    /// Place the new entry without looking for an existing one. Separate
    /// chaining then holds both entries in the same chain; open addressing
    /// holds both until one is removed. Lookups return the first match.
    #[default]
    AllowDuplicates,
    /// Look the key up first and fail with
    /// [`InsertError::DuplicateKey`] if a live entry holds it.
    RejectDuplicates,
}

/// Operations common to [`ChainedHashTable`](crate::ChainedHashTable) and
/// [`OpenAddressingTable`](crate::OpenAddressingTable).
///
/// Lookups take `&mut self` because open addressing may relocate the entry it
/// finds into an earlier tombstone.
pub trait HashTable<K, V> {
    /// Number of buckets.
    fn capacity(&self) -> usize;

    /// Entry count. For open addressing this tracks physical occupancy and
    /// includes tombstones that have not yet been reclaimed by a resize.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), InsertError>;

    /// Remove the live entry for `key`. Returns `false` if there is none.
    fn remove(&mut self, key: &K) -> bool;

    /// Where the live entry for `key` is stored, if any.
    fn locate(&mut self, key: &K) -> Option<Location>;

    fn get(&mut self, key: &K) -> Option<&V>;

    fn contains_key(&mut self, key: &K) -> bool {
        self.locate(key).is_some()
    }
}
