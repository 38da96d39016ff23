use thiserror::Error;

/// Errors that can occur when working with AVL trees and the queues built on
/// top of them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAvlTreeError {
    /// A raw insertion used a key that is already present in the tree.
    #[error("Attempted to insert a key that is already present")]
    DuplicateKey,

    /// A lookup or removal used a key that is not present in the tree.
    #[error("Key is not present in the tree")]
    KeyNotFound,

    /// An operation that needs at least one entry was invoked on an empty
    /// tree.
    #[error("Operation requires a non-empty tree")]
    EmptyTree,

    /// An operation that needs at least one entry was invoked on an empty
    /// priority queue.
    #[error("Operation requires a non-empty queue")]
    EmptyQueue,
}
