use std::collections::TryReserveError;

/// Errors that can occur while modifying a [`Tree`][crate::Tree].
///
/// Failing to find a payload is not an error: lookups and removals report it
/// with `None` or `false`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// There was no memory for a new node. The tree is left as it was.
    #[error("could not allocate a tree node (error: {0})")]
    Alloc(#[from] TryReserveError),
}
