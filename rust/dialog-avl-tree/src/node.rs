use tracing::trace;

/// An exclusively owned, possibly absent subtree.
pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// The storage cell of a [`Tree`](crate::Tree).
///
/// A node owns its key, its value and both of its child subtrees. Dropping a
/// node drops everything beneath it; cloning a node deep-copies everything
/// beneath it.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) height: usize,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a new leaf node.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The height of the subtree rooted at this node (a leaf has height 1).
    pub fn height(&self) -> usize {
        self.height
    }

    /// The left subtree, holding keys that order before this node's key.
    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    /// The right subtree, holding keys that order after this node's key.
    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    /// Consumes the node, returning its entry and both subtrees.
    pub(crate) fn into_parts(self) -> ((K, V), Link<K, V>, Link<K, V>) {
        ((self.key, self.value), self.left, self.right)
    }

    /// Recomputes this node's height from its children's heights.
    ///
    /// The children must already carry correct heights.
    pub(crate) fn fix_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Height of the right subtree minus the height of the left subtree.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.right) as isize - height(&self.left) as isize
    }
}

/// The height of a subtree: 0 when absent.
pub(crate) fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Promotes the left child of `p` to subtree root.
///
/// The left child's former right subtree becomes `p`'s left subtree. Heights
/// are fixed bottom-up: `p` first, then the new root.
pub(crate) fn rotate_right<K, V>(mut p: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut q) = p.left.take() else {
        return p;
    };

    p.left = q.right.take();
    p.fix_height();

    q.right = Some(p);
    q.fix_height();

    q
}

/// Promotes the right child of `q` to subtree root; the mirror of
/// [`rotate_right`].
pub(crate) fn rotate_left<K, V>(mut q: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut p) = q.right.take() else {
        return q;
    };

    q.right = p.left.take();
    q.fix_height();

    p.left = Some(q);
    p.fix_height();

    p
}

/// Restores the AVL property at `p`, assuming both of its subtrees already
/// satisfy it and differ in height by at most two.
///
/// Returns the new root of the subtree.
pub(crate) fn balance<K, V>(mut p: Box<Node<K, V>>) -> Box<Node<K, V>> {
    p.fix_height();

    let factor = p.balance_factor();
    debug_assert!(
        factor.abs() <= 2,
        "Subtree imbalance of {factor} cannot be repaired by rotation"
    );

    match factor {
        2 => {
            if let Some(right) = p.right.take() {
                p.right = Some(if right.balance_factor() < 0 {
                    trace!(height = p.height, "Double rotation (right-left)");
                    rotate_right(right)
                } else {
                    trace!(height = p.height, "Single rotation (left)");
                    right
                });
            }
            rotate_left(p)
        }
        -2 => {
            if let Some(left) = p.left.take() {
                p.left = Some(if left.balance_factor() > 0 {
                    trace!(height = p.height, "Double rotation (left-right)");
                    rotate_left(left)
                } else {
                    trace!(height = p.height, "Single rotation (right)");
                    left
                });
            }
            rotate_right(p)
        }
        _ => p,
    }
}

/// Replaces the subtree behind `link` with its rebalanced form.
pub(crate) fn rebalance<K, V>(link: &mut Link<K, V>) {
    if let Some(node) = link.take() {
        *link = Some(balance(node));
    }
}
