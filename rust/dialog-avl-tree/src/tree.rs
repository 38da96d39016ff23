use std::{borrow::Borrow, fmt};

use tracing::{debug, trace};

use crate::{
    DialogAvlTreeError, Link, Node, Traversal, algorithms, drain, traverse, traverse_mut,
};

/// An ordered map backed by a height-balanced (AVL) binary search tree.
///
/// Keys are unique and ordered by their [`Ord`] implementation. Lookups,
/// insertions and removals descend a single root-to-leaf path and so run in
/// logarithmic time: after every mutation, the heights of the two subtrees of
/// any node differ by at most one.
///
/// Entries can be walked in any of the six visiting orders described by
/// [`Traversal`], with read-only ([`Tree::traverse`]), value-mutating
/// ([`Tree::traverse_mut`]) or consuming ([`Tree::into_traversal`]) access.
///
/// Cloning a [`Tree`] deep-copies every node, so a clone and its original
/// never observe each other's mutations. Moving out of a tree with
/// [`Tree::take`] (or [`std::mem::take`]) leaves an empty, usable tree
/// behind.
#[derive(Clone)]
pub struct Tree<K, V> {
    pub(crate) root: Link<K, V>,
    pub(crate) size: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    /// Creates a new, empty [`Tree`].
    pub const fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the root [`Node`] of this tree.
    ///
    /// Returns `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` when the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the tree: 1 for a single entry, growing logarithmically
    /// with [`Tree::len`].
    pub fn height(&self) -> Result<usize, DialogAvlTreeError> {
        self.root
            .as_ref()
            .map(|root| root.height)
            .ok_or(DialogAvlTreeError::EmptyTree)
    }

    /// Drops every entry, leaving the tree empty.
    pub fn clear(&mut self) {
        debug!(size = self.size, "Clearing tree");
        self.root = None;
        self.size = 0;
    }

    /// Moves every entry into a new tree, leaving this one empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// The entry with the smallest key.
    pub fn find_min(&self) -> Result<(&K, &V), DialogAvlTreeError> {
        let root = self.root.as_deref().ok_or(DialogAvlTreeError::EmptyTree)?;
        let node = algorithms::find_min(root);
        Ok((&node.key, &node.value))
    }

    /// The entry with the largest key.
    pub fn find_max(&self) -> Result<(&K, &V), DialogAvlTreeError> {
        let root = self.root.as_deref().ok_or(DialogAvlTreeError::EmptyTree)?;
        let node = algorithms::find_max(root);
        Ok((&node.key, &node.value))
    }

    /// The entry with the largest key, with mutable access to its value.
    pub fn find_max_mut(&mut self) -> Result<(&K, &mut V), DialogAvlTreeError> {
        let root = self
            .root
            .as_deref_mut()
            .ok_or(DialogAvlTreeError::EmptyTree)?;
        let node = algorithms::find_max_mut(root);
        Ok((&node.key, &mut node.value))
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_min(&mut self) -> Result<(K, V), DialogAvlTreeError> {
        let root = self.root.take().ok_or(DialogAvlTreeError::EmptyTree)?;
        let (rest, min) = algorithms::remove_min(root);
        self.root = rest;
        self.size -= 1;

        trace!(size = self.size, "Removed minimum entry");
        let (entry, ..) = min.into_parts();
        Ok(entry)
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_max(&mut self) -> Result<(K, V), DialogAvlTreeError> {
        let root = self.root.take().ok_or(DialogAvlTreeError::EmptyTree)?;
        let (rest, max) = algorithms::remove_max(root);
        self.root = rest;
        self.size -= 1;

        trace!(size = self.size, "Removed maximum entry");
        let (entry, ..) = max.into_parts();
        Ok(entry)
    }

    /// Walks the tree in the given order, handing every entry to `visitor`.
    ///
    /// The walk is depth-first and runs to completion before returning.
    pub fn traverse<'a, F>(&'a self, order: Traversal, mut visitor: F)
    where
        F: FnMut(&'a K, &'a V),
    {
        traverse(&self.root, order, &mut visitor);
    }

    /// Walks the tree in the given order, handing every entry to `visitor`
    /// with mutable access to its value.
    ///
    /// Keys stay immutable, so the shape of the tree never changes.
    pub fn traverse_mut<F>(&mut self, order: Traversal, mut visitor: F)
    where
        F: FnMut(&K, &mut V),
    {
        traverse_mut(&mut self.root, order, &mut visitor);
    }

    /// Consumes the tree, handing every owned entry to `visitor` in the
    /// given order.
    pub fn into_traversal<F>(self, order: Traversal, mut visitor: F)
    where
        F: FnMut(K, V),
    {
        drain(self.root, order, &mut visitor);
    }

    /// Collects references to every entry in the given order.
    pub fn entries(&self, order: Traversal) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.size);
        traverse(&self.root, order, &mut |key, value| {
            entries.push((key, value))
        });
        entries
    }
}

impl<K, V> Tree<K, V>
where
    K: Ord,
{
    /// Builds a tree by inserting `entries` in sequence.
    ///
    /// Fails with [`DialogAvlTreeError::DuplicateKey`] as soon as a key
    /// repeats.
    pub fn from_entries<I>(entries: I) -> Result<Self, DialogAvlTreeError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut tree = Self::new();
        for (key, value) in entries {
            tree.insert(key, value)?;
        }

        debug!(size = tree.size, "Built tree from entries");
        Ok(tree)
    }

    /// Inserts a new entry.
    ///
    /// Fails with [`DialogAvlTreeError::DuplicateKey`], leaving the tree
    /// untouched, if `key` is already present. Use [`Tree::upsert`] to
    /// overwrite existing entries.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), DialogAvlTreeError> {
        algorithms::insert(&mut self.root, key, value)?;
        self.size += 1;

        trace!(size = self.size, "Inserted entry");
        Ok(())
    }

    /// Inserts an entry, or replaces the value of an existing entry in place.
    ///
    /// Returns the displaced value, if any.
    pub fn upsert(&mut self, key: K, value: V) -> Option<V> {
        let displaced = algorithms::upsert(&mut self.root, key, value);
        if displaced.is_none() {
            self.size += 1;
            trace!(size = self.size, "Inserted entry");
        }
        displaced
    }

    /// Removes the entry for `key`, returning its value.
    pub fn erase<Q>(&mut self, key: &Q) -> Result<V, DialogAvlTreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (_, value) = algorithms::remove(&mut self.root, key)?;
        self.size -= 1;

        trace!(size = self.size, "Erased entry");
        Ok(value)
    }

    /// Returns the value bound to `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, DialogAvlTreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        algorithms::find(&self.root, key)
            .map(|node| &node.value)
            .ok_or(DialogAvlTreeError::KeyNotFound)
    }

    /// Returns the value bound to `key`, mutably.
    ///
    /// Replacing the value never restructures the tree.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, DialogAvlTreeError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        algorithms::find_mut(&mut self.root, key)
            .map(|node| &mut node.value)
            .ok_or(DialogAvlTreeError::KeyNotFound)
    }

    /// Returns the value bound to `key`, first inserting the value produced
    /// by `default` if the key is absent.
    ///
    /// The key is only cloned when a new entry is created.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        K: Clone,
        F: FnOnce() -> V,
    {
        if algorithms::insert_if_absent(&mut self.root, &key, default) {
            self.size += 1;
            trace!(size = self.size, "Inserted entry");
        }

        match algorithms::find_mut(&mut self.root, &key) {
            Some(node) => &mut node.value,
            None => unreachable!("Key is present after insert_if_absent"),
        }
    }

    /// Returns the value bound to `key`, first inserting [`V::default`] if the
    /// key is absent.
    ///
    /// This is the only lookup that inserts on a miss.
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        K: Clone,
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Looks up the entry for `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        algorithms::find(&self.root, key).map(|node| (&node.key, &node.value))
    }

    /// Returns `true` when the tree holds an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        algorithms::find(&self.root, key).is_some()
    }

    /// Deep-copies the subtree rooted at the node holding `key` into a new,
    /// independent tree.
    pub fn subtree<Q>(&self, key: &Q) -> Result<Self, DialogAvlTreeError>
    where
        K: Borrow<Q> + Clone,
        V: Clone,
        Q: Ord + ?Sized,
    {
        if self.is_empty() {
            return Err(DialogAvlTreeError::EmptyTree);
        }

        let node = algorithms::find(&self.root, key).ok_or(DialogAvlTreeError::KeyNotFound)?;
        let root = Some(Box::new(node.clone()));
        let size = algorithms::count(&root);

        trace!(size, "Extracted subtree");
        Ok(Self { root, size })
    }
}

impl<K, V, const N: usize> TryFrom<[(K, V); N]> for Tree<K, V>
where
    K: Ord,
{
    type Error = DialogAvlTreeError;

    fn try_from(entries: [(K, V); N]) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl<K, V> TryFrom<Vec<(K, V)>> for Tree<K, V>
where
    K: Ord,
{
    type Error = DialogAvlTreeError;

    fn try_from(entries: Vec<(K, V)>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries(Traversal::ASCENDING))
            .finish()
    }
}

impl<K, V> PartialEq for Tree<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.entries(Traversal::ASCENDING) == other.entries(Traversal::ASCENDING)
    }
}

impl<K, V> Eq for Tree<K, V>
where
    K: Eq,
    V: Eq,
{
}
