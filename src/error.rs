use thiserror::Error;

/// Errors surfaced by [`Tree`][crate::Tree] and its traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation needs at least one node but the tree has none.
    #[error("the tree is empty")]
    EmptyTree,
    /// A traversal was advanced past its last element.
    #[error("the iterator is exhausted")]
    IteratorExhausted,
}
