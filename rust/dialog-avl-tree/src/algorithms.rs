//! Recursive descents over [`Link`]s.
//!
//! Every mutating descent rebalances each node on its way back up, so the
//! AVL property holds for the whole subtree once the call returns. Failing
//! descents return before any structural change.

use std::{borrow::Borrow, cmp::Ordering};

use crate::{DialogAvlTreeError, Link, Node, balance, rebalance};

/// Inserts a new entry below `link`, rejecting keys that are already present.
pub(crate) fn insert<K, V>(
    link: &mut Link<K, V>,
    key: K,
    value: V,
) -> Result<(), DialogAvlTreeError>
where
    K: Ord,
{
    let Some(node) = link.as_mut() else {
        *link = Some(Box::new(Node::new(key, value)));
        return Ok(());
    };

    match key.cmp(&node.key) {
        Ordering::Less => insert(&mut node.left, key, value)?,
        Ordering::Greater => insert(&mut node.right, key, value)?,
        Ordering::Equal => return Err(DialogAvlTreeError::DuplicateKey),
    }

    rebalance(link);
    Ok(())
}

/// Inserts or overwrites the entry for `key`, returning the displaced value.
///
/// An overwrite does not restructure the tree.
pub(crate) fn upsert<K, V>(link: &mut Link<K, V>, key: K, value: V) -> Option<V>
where
    K: Ord,
{
    let Some(node) = link.as_mut() else {
        *link = Some(Box::new(Node::new(key, value)));
        return None;
    };

    let displaced = match key.cmp(&node.key) {
        Ordering::Less => upsert(&mut node.left, key, value),
        Ordering::Greater => upsert(&mut node.right, key, value),
        Ordering::Equal => return Some(std::mem::replace(&mut node.value, value)),
    };

    if displaced.is_none() {
        rebalance(link);
    }
    displaced
}

/// Inserts `key` with a value produced by `default` unless the key is
/// already present. Returns `true` when an entry was created.
pub(crate) fn insert_if_absent<K, V, F>(link: &mut Link<K, V>, key: &K, default: F) -> bool
where
    K: Ord + Clone,
    F: FnOnce() -> V,
{
    let Some(node) = link.as_mut() else {
        *link = Some(Box::new(Node::new(key.clone(), default())));
        return true;
    };

    let inserted = match key.cmp(&node.key) {
        Ordering::Less => insert_if_absent(&mut node.left, key, default),
        Ordering::Greater => insert_if_absent(&mut node.right, key, default),
        Ordering::Equal => false,
    };

    if inserted {
        rebalance(link);
    }
    inserted
}

/// Removes the entry for `key`, returning it.
pub(crate) fn remove<K, V, Q>(
    link: &mut Link<K, V>,
    key: &Q,
) -> Result<(K, V), DialogAvlTreeError>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    let Some(node) = link.as_mut() else {
        return Err(DialogAvlTreeError::KeyNotFound);
    };

    let removed = match key.cmp(node.key.borrow()) {
        Ordering::Less => remove(&mut node.left, key)?,
        Ordering::Greater => remove(&mut node.right, key)?,
        Ordering::Equal => {
            let Some(node) = link.take() else {
                return Err(DialogAvlTreeError::KeyNotFound);
            };
            let (entry, replacement) = splice_out(node);
            *link = replacement;
            return Ok(entry);
        }
    };

    rebalance(link);
    Ok(removed)
}

/// Detaches `node` from its subtrees and joins them back together.
///
/// Without a right subtree the left subtree takes the node's place.
/// Otherwise the minimum of the right subtree is pulled out and becomes the
/// root of the joined subtree.
fn splice_out<K, V>(node: Box<Node<K, V>>) -> ((K, V), Link<K, V>) {
    let (entry, left, right) = node.into_parts();

    let Some(right) = right else {
        return (entry, left);
    };

    let (rest, mut min) = remove_min(right);
    min.left = left;
    min.right = rest;

    (entry, Some(balance(min)))
}

/// Detaches the leftmost node of the subtree rooted at `node`.
///
/// Returns the remaining (rebalanced) subtree and the detached node, whose
/// own links are cleared.
pub(crate) fn remove_min<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = remove_min(left);
            node.left = rest;
            (Some(balance(node)), min)
        }
    }
}

/// Detaches the rightmost node of the subtree rooted at `node`; the mirror
/// of [`remove_min`].
pub(crate) fn remove_max<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.right.take() {
        None => {
            let rest = node.left.take();
            (rest, node)
        }
        Some(right) => {
            let (rest, max) = remove_max(right);
            node.right = rest;
            (Some(balance(node)), max)
        }
    }
}

/// Finds the node holding `key`.
pub(crate) fn find<'a, K, V, Q>(link: &'a Link<K, V>, key: &Q) -> Option<&'a Node<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = link.as_deref()?;
    match key.cmp(node.key.borrow()) {
        Ordering::Less => find(&node.left, key),
        Ordering::Greater => find(&node.right, key),
        Ordering::Equal => Some(node),
    }
}

/// Finds the node holding `key`, mutably.
pub(crate) fn find_mut<'a, K, V, Q>(
    link: &'a mut Link<K, V>,
    key: &Q,
) -> Option<&'a mut Node<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = link.as_deref_mut()?;
    match key.cmp(node.key.borrow()) {
        Ordering::Less => find_mut(&mut node.left, key),
        Ordering::Greater => find_mut(&mut node.right, key),
        Ordering::Equal => Some(node),
    }
}

/// The leftmost node of a subtree.
pub(crate) fn find_min<K, V>(node: &Node<K, V>) -> &Node<K, V> {
    match node.left.as_deref() {
        Some(left) => find_min(left),
        None => node,
    }
}

/// The rightmost node of a subtree.
pub(crate) fn find_max<K, V>(node: &Node<K, V>) -> &Node<K, V> {
    match node.right.as_deref() {
        Some(right) => find_max(right),
        None => node,
    }
}

/// The rightmost node of a subtree, mutably.
pub(crate) fn find_max_mut<K, V>(node: &mut Node<K, V>) -> &mut Node<K, V> {
    match node.right {
        Some(ref mut right) => find_max_mut(right),
        None => node,
    }
}

/// Counts the nodes reachable from `link`.
pub(crate) fn count<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref()
        .map_or(0, |node| 1 + count(&node.left) + count(&node.right))
}
