//! Hash strategies: map a key to a bucket index for the current capacity.
//!
//! The table calls the strategy on every operation and asserts that the
//! returned index lies in `[0, capacity)`. Strategies must be deterministic
//! for a given `(key, capacity)` pair.

use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;

/// Maps `(key, capacity)` to a bucket index in `[0, capacity)`.
pub trait HashStrategy<K: ?Sized> {
    fn bucket(&self, key: &K, capacity: usize) -> usize;
}

impl<K, F> HashStrategy<K> for F
where
    K: ?Sized,
    F: Fn(&K, usize) -> usize,
{
    #[inline]
    fn bucket(&self, key: &K, capacity: usize) -> usize {
        self(key, capacity)
    }
}

/// `key mod capacity` for unsigned integer keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuloHash;

macro_rules! modulo_hash {
    ($($t:ty),*) => {$(
        impl HashStrategy<$t> for ModuloHash {
            #[inline]
            fn bucket(&self, key: &$t, capacity: usize) -> usize {
                (u128::from(*key) % capacity as u128) as usize
            }
        }
    )*};
}

modulo_hash!(u8, u16, u32, u64);

impl HashStrategy<usize> for ModuloHash {
    #[inline]
    fn bucket(&self, key: &usize, capacity: usize) -> usize {
        *key % capacity
    }
}

/// Adapts any `BuildHasher` into a bucket selector by reducing the 64-bit
/// hash modulo the capacity.
#[derive(Debug, Clone, Default)]
pub struct BuildHasherStrategy<S = DefaultHashBuilder> {
    hasher: S,
}

impl BuildHasherStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> BuildHasherStrategy<S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self { hasher }
    }
}

impl<K, S> HashStrategy<K> for BuildHasherStrategy<S>
where
    K: ?Sized + Hash,
    S: BuildHasher,
{
    #[inline]
    fn bucket(&self, key: &K, capacity: usize) -> usize {
        (self.hasher.hash_one(key) % capacity as u64) as usize
    }
}
