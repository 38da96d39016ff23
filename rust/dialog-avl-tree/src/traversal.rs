use crate::Link;

/// One of the three slots visited at every node during a depth-first walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visit {
    /// Recurse into the left subtree.
    Left,
    /// Hand the current node's entry to the visitor.
    Root,
    /// Recurse into the right subtree.
    Right,
}

/// The order in which a traversal visits a node and its two subtrees.
///
/// Each variant names its visiting sequence. [`Traversal::LeftRootRight`]
/// yields entries in ascending key order and [`Traversal::RightRootLeft`] in
/// descending key order; the remaining four enumerate every entry exactly once
/// in pre-order or post-order shapes.
///
/// ```
/// use dialog_avl_tree::{Traversal, Tree};
///
/// let tree = Tree::try_from([(2, "b"), (1, "a"), (3, "c")]).unwrap();
///
/// let mut ascending = Vec::new();
/// tree.traverse(Traversal::LeftRootRight, |_, value| ascending.push(*value));
/// assert_eq!(ascending, ["a", "b", "c"]);
///
/// let mut pre_order = Vec::new();
/// tree.traverse(Traversal::RootLeftRight, |key, _| pre_order.push(*key));
/// assert_eq!(pre_order, [2, 1, 3]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// In-order: ascending key order.
    #[default]
    LeftRootRight,
    /// Reverse in-order: descending key order.
    RightRootLeft,
    /// Pre-order.
    RootLeftRight,
    /// Post-order.
    LeftRightRoot,
    /// Mirrored post-order.
    RightLeftRoot,
    /// Mirrored pre-order.
    RootRightLeft,
}

impl Traversal {
    /// Visits entries in ascending key order.
    pub const ASCENDING: Self = Self::LeftRootRight;

    /// Visits entries in descending key order.
    pub const DESCENDING: Self = Self::RightRootLeft;

    /// Every visiting order.
    pub const ALL: [Self; 6] = [
        Self::LeftRootRight,
        Self::RightRootLeft,
        Self::RootLeftRight,
        Self::LeftRightRoot,
        Self::RightLeftRoot,
        Self::RootRightLeft,
    ];

    /// The sequence of slots this order visits at every node.
    pub const fn sequence(self) -> [Visit; 3] {
        use Visit::*;

        match self {
            Self::LeftRootRight => [Left, Root, Right],
            Self::RightRootLeft => [Right, Root, Left],
            Self::RootLeftRight => [Root, Left, Right],
            Self::LeftRightRoot => [Left, Right, Root],
            Self::RightLeftRoot => [Right, Left, Root],
            Self::RootRightLeft => [Root, Right, Left],
        }
    }
}

// Visitors cannot restructure the tree while these run: every public entry
// point holds the tree borrowed (or owned) for the whole walk.

pub(crate) fn traverse<'a, K, V, F>(link: &'a Link<K, V>, order: Traversal, visitor: &mut F)
where
    F: FnMut(&'a K, &'a V),
{
    let Some(node) = link else {
        return;
    };

    for slot in order.sequence() {
        match slot {
            Visit::Left => traverse(&node.left, order, visitor),
            Visit::Root => visitor(&node.key, &node.value),
            Visit::Right => traverse(&node.right, order, visitor),
        }
    }
}

pub(crate) fn traverse_mut<K, V, F>(link: &mut Link<K, V>, order: Traversal, visitor: &mut F)
where
    F: FnMut(&K, &mut V),
{
    let Some(node) = link else {
        return;
    };

    for slot in order.sequence() {
        match slot {
            Visit::Left => traverse_mut(&mut node.left, order, visitor),
            Visit::Root => visitor(&node.key, &mut node.value),
            Visit::Right => traverse_mut(&mut node.right, order, visitor),
        }
    }
}

/// Tears the subtree down, handing each owned entry to the visitor.
pub(crate) fn drain<K, V, F>(link: Link<K, V>, order: Traversal, visitor: &mut F)
where
    F: FnMut(K, V),
{
    let Some(node) = link else {
        return;
    };

    let (entry, mut left, mut right) = node.into_parts();
    let mut entry = Some(entry);

    for slot in order.sequence() {
        match slot {
            Visit::Left => drain(left.take(), order, visitor),
            Visit::Root => {
                if let Some((key, value)) = entry.take() {
                    visitor(key, value);
                }
            }
            Visit::Right => drain(right.take(), order, visitor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_visits_every_slot_exactly_once() {
        for order in Traversal::ALL {
            let sequence = order.sequence();
            for slot in [Visit::Left, Visit::Root, Visit::Right] {
                assert_eq!(
                    sequence.iter().filter(|visit| **visit == slot).count(),
                    1,
                    "{order:?} must visit {slot:?} once"
                );
            }
        }
    }

    #[test]
    fn it_assigns_a_distinct_sequence_to_every_order() {
        let mut sequences = Traversal::ALL.map(Traversal::sequence).to_vec();
        sequences.sort_by_key(|sequence| format!("{sequence:?}"));
        sequences.dedup();

        assert_eq!(sequences.len(), 6);
    }

    #[test]
    fn it_defaults_to_ascending_order() {
        assert_eq!(Traversal::default(), Traversal::ASCENDING);
        assert_eq!(
            Traversal::ASCENDING.sequence(),
            [Visit::Left, Visit::Root, Visit::Right]
        );
        assert_eq!(
            Traversal::DESCENDING.sequence(),
            [Visit::Right, Visit::Root, Visit::Left]
        );
    }
}
