use tracing::trace;

use crate::{DialogAvlTreeError, Tree};

/// A max-priority queue holding at most one payload per priority.
///
/// Priorities are the keys of an underlying [`Tree`], so they are unique:
/// pushing to a priority that is already queued replaces its payload rather
/// than queueing both. [`PriorityQueue::pop`] and [`PriorityQueue::top`]
/// always address the payload with the highest priority.
#[derive(Clone, Debug)]
pub struct PriorityQueue<V, P = usize> {
    tree: Tree<P, V>,
}

impl<V, P> Default for PriorityQueue<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> PriorityQueue<V, P> {
    /// Creates a new, empty [`PriorityQueue`].
    pub const fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The number of queued payloads.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Drops every queued payload.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Removes and returns the payload with the highest priority.
    pub fn pop(&mut self) -> Result<V, DialogAvlTreeError> {
        let (_, value) = self.tree.pop_max().map_err(empty_queue)?;

        trace!(size = self.tree.len(), "Popped highest priority");
        Ok(value)
    }

    /// The payload with the highest priority, left in place.
    pub fn top(&self) -> Result<&V, DialogAvlTreeError> {
        self.tree
            .find_max()
            .map(|(_, value)| value)
            .map_err(empty_queue)
    }

    /// The payload with the highest priority, mutably.
    pub fn top_mut(&mut self) -> Result<&mut V, DialogAvlTreeError> {
        self.tree
            .find_max_mut()
            .map(|(_, value)| value)
            .map_err(empty_queue)
    }
}

impl<V, P> PriorityQueue<V, P>
where
    P: Ord,
{
    /// Queues `value` at `priority`, returning the payload it displaced if
    /// the priority was already queued.
    pub fn push(&mut self, priority: P, value: V) -> Option<V> {
        let displaced = self.tree.upsert(priority, value);

        trace!(
            size = self.tree.len(),
            displaced = displaced.is_some(),
            "Pushed payload"
        );
        displaced
    }
}

fn empty_queue(error: DialogAvlTreeError) -> DialogAvlTreeError {
    match error {
        DialogAvlTreeError::EmptyTree => DialogAvlTreeError::EmptyQueue,
        other => other,
    }
}
