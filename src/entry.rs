//! Stored key/value unit and the descriptor returned by lookups.

/// A key/value pair owned by a table. The key is fixed once the entry is
/// created; the value may be updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Where a lookup found its entry.
///
/// `bucket` is the home bucket chosen by the hash strategy. `index` is the
/// position inside that bucket's chain for separate chaining, and the
/// physical slot for open addressing (which differs from `bucket` whenever
/// the entry was placed by probing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub bucket: usize,
    pub index: usize,
}

/// Located-entry descriptor returned by `find`.
#[derive(Debug)]
pub struct Found<'a, K, V> {
    pub location: Location,
    pub entry: &'a Entry<K, V>,
}

impl<'a, K, V> Found<'a, K, V> {
    pub fn key(&self) -> &'a K {
        self.entry.key()
    }

    pub fn value(&self) -> &'a V {
        self.entry.value()
    }
}
