//! Errors reported by [`Tree`][crate::Tree] operations.
//!
//! Most lookups report a miss with `None`. Only [`Tree::remove`][crate::Tree::remove] treats a
//! missing item as an error since the caller asked for something to be taken out that was never
//! put in.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when mutating a [`Tree`][crate::Tree].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The item asked to be removed is not stored in the tree. Nothing was changed.
    #[error("item not in tree")]
    KeyNotPresent,
}
