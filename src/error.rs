//! Recoverable failures. Absence of a key is never an error here; lookups
//! return `Option` and removals return `bool`.

use thiserror::Error;

/// Returned by `insert` when the table runs with
/// [`KeyPolicy::RejectDuplicates`](crate::KeyPolicy::RejectDuplicates) and a
/// live entry already holds the key.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    #[error("a live entry with this key is already present")]
    DuplicateKey,
}

/// Invalid construction parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    #[error("maximum load factor {0} is outside (0, 1]")]
    InvalidLoadFactor(f64),
}
