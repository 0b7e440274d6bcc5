//! collide: hash tables with pluggable collision resolution.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: two classic collision-resolution strategies behind one small
//!   contract, with every policy decision (bucket selection, probing, chain
//!   container) injected by the caller.
//! - Variants:
//!   - ChainedHashTable<K, V, H, C>: separate chaining. A fixed array of
//!     chains; each chain holds `Handle`s into a generational entry arena.
//!     `C` is any container implementing `Chain` (Vec, VecDeque, LinkedList).
//!   - OpenAddressingTable<K, V, H, P>: entries stored inline in a flat slot
//!     array, collisions resolved by a `ProbeStrategy`, deletions marked with
//!     tombstones, capacity doubled when an insert would exceed the maximum
//!     load factor.
//! - Both implement `HashTable<K, V>` (capacity, len, load factor, insert,
//!   remove, locate, get).
//!
//! Constraints
//! - Single-threaded and synchronous. Tables are plain owned data; share them
//!   across threads only behind external synchronization (e.g. a `Mutex`).
//! - Hashing is external: a `HashStrategy` maps `(key, capacity)` to a bucket.
//!   A bucket outside `[0, capacity)` is a contract violation and panics.
//! - Probing must reach every slot within one cycle; a placement that fails
//!   to find a free slot within `capacity` steps panics.
//!
//! Duplicate keys
//! - The default `KeyPolicy::AllowDuplicates` inserts without searching for
//!   an existing entry. Chaining appends behind it; open addressing places
//!   the new entry at the first free or tombstoned slot. Lookups return the
//!   first match along the chain or probe sequence.
//! - `KeyPolicy::RejectDuplicates` looks the key up first and returns
//!   `InsertError::DuplicateKey`.
//!
//! Open addressing accounting
//! - `len()` counts physically occupied slots: `remove` leaves it unchanged
//!   and reusing a tombstone does not increment it. `resize` drops every
//!   tombstone and resets it to the number of live entries.
//! - A lookup that passes a tombstone before its match moves the entry into
//!   the first tombstone and frees the old slot.
//!
//! Notes and non-goals
//! - No iteration over entries; chaining exposes per-bucket inspection and
//!   open addressing per-slot inspection.
//! - Chaining never resizes.

mod chain;
mod chained;
mod chained_proptest;
mod config;
mod entry;
mod error;
mod hash;
mod open_addressing;
mod open_addressing_proptest;
mod probe;
mod table;

// Public surface
pub use chain::Chain;
pub use chained::{ChainedHashTable, Handle};
pub use config::{
    ChainedConfig, OpenAddressingConfig, DEFAULT_CAPACITY, DEFAULT_MAX_LOAD_FACTOR,
};
pub use entry::{Entry, Found, Location};
pub use error::{ConfigError, InsertError};
pub use hash::{BuildHasherStrategy, HashStrategy, ModuloHash};
pub use open_addressing::{OpenAddressingTable, SlotState};
pub use probe::{LinearProbe, ProbeStrategy, QuadraticProbe};
pub use table::{HashTable, KeyPolicy};
