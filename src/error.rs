//! Errors returned by fallible [`OrderedMap`][crate::OrderedMap] operations.

use thiserror::Error;

/// The ways an [`OrderedMap`][crate::OrderedMap] operation can fail. None of these leave the map
/// modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum TreemapError {
    /// The operation needs at least one entry but the map is empty.
    #[error("operation requires a non-empty map")]
    EmptyContainer,
    /// An entry with an equal key is already in the map.
    #[error("key is already present in the map")]
    DuplicateKey,
    /// No entry has the requested key.
    #[error("key not found")]
    KeyNotFound,
    /// No key in the map is on the requested side of the query key.
    #[error("no key in the map satisfies the requested bound")]
    KeyOutOfRange,
}

/// Shorthand for results of map operations.
pub type Result<T> = std::result::Result<T, TreemapError>;
