//! Structural checks for tests and debugging.
//!
//! Enabled for this crate's own tests and, through the `helpers` feature, for
//! downstream test suites that want to assert on the shape of a [`Tree`].

use thiserror::Error;

use crate::{Node, Tree};

/// A structural property of a [`Tree`] that does not hold.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The subtree heights below a node differ by more than one.
    #[error("Node at depth {depth} has a balance factor of {factor}")]
    Unbalanced {
        /// Distance of the offending node from the root.
        depth: usize,
        /// Right subtree height minus left subtree height.
        factor: isize,
    },

    /// A node's stored height does not match the height of its subtree.
    #[error("Node at depth {depth} stores height {stored} but measures {actual}")]
    StaleHeight {
        /// Distance of the offending node from the root.
        depth: usize,
        /// The height recorded in the node.
        stored: usize,
        /// The height of the subtree as measured.
        actual: usize,
    },

    /// An in-order walk produced keys that are not strictly ascending.
    #[error("Keys are out of order at in-order position {position}")]
    Unordered {
        /// Index of the first key that does not exceed its predecessor.
        position: usize,
    },

    /// The recorded entry count disagrees with the number of nodes.
    #[error("Tree records {recorded} entries but holds {actual}")]
    SizeMismatch {
        /// The count reported by [`Tree::len`].
        recorded: usize,
        /// The number of reachable nodes.
        actual: usize,
    },
}

impl<K, V> Tree<K, V>
where
    K: Ord,
{
    /// Verifies that the tree is ordered, balanced, carries accurate heights
    /// and reports an accurate size.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut keys = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            measure(root, 0, &mut keys)?;
        }

        if let Some(position) = keys.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(InvariantViolation::Unordered {
                position: position + 1,
            });
        }

        if keys.len() != self.len() {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.len(),
                actual: keys.len(),
            });
        }

        Ok(())
    }
}

/// Collects the keys below `node` in order, returning the measured height.
fn measure<'a, K, V>(
    node: &'a Node<K, V>,
    depth: usize,
    keys: &mut Vec<&'a K>,
) -> Result<usize, InvariantViolation> {
    let left = match node.left() {
        Some(left) => measure(left, depth + 1, keys)?,
        None => 0,
    };
    keys.push(node.key());
    let right = match node.right() {
        Some(right) => measure(right, depth + 1, keys)?,
        None => 0,
    };

    let actual = 1 + left.max(right);
    if node.height() != actual {
        return Err(InvariantViolation::StaleHeight {
            depth,
            stored: node.height(),
            actual,
        });
    }

    let factor = right as isize - left as isize;
    if factor.abs() > 1 {
        return Err(InvariantViolation::Unbalanced { depth, factor });
    }

    Ok(actual)
}
