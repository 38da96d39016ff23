//! Higher-order operations over whole trees.
//!
//! These are expressed purely through the traversal entry points of
//! [`Tree`], never through its nodes. Each operation comes in a borrowing
//! form and, where ownership helps, a consuming `into_` form; both produce
//! the same result.

use crate::{Traversal, Tree};

/// Returns a copy of `tree` with `f` applied to every value.
///
/// Keys, and the shape of the tree, are preserved.
///
/// ```
/// use dialog_avl_tree::{Tree, map};
///
/// let tree = Tree::try_from([(1, 1), (2, 2), (3, 3)]).unwrap();
/// let squares = map(&tree, |value| value * value);
///
/// assert_eq!(squares.get(&3), Ok(&9));
/// assert_eq!(tree.get(&3), Ok(&3));
/// ```
pub fn map<K, V, F>(tree: &Tree<K, V>, f: F) -> Tree<K, V>
where
    K: Clone,
    V: Clone,
    F: FnMut(&V) -> V,
{
    into_map(tree.clone(), f)
}

/// Applies `f` to every value of `tree` in place, returning the tree.
pub fn into_map<K, V, F>(mut tree: Tree<K, V>, mut f: F) -> Tree<K, V>
where
    F: FnMut(&V) -> V,
{
    tree.traverse_mut(Traversal::ASCENDING, |_, value| *value = f(value));
    tree
}

/// Returns a new tree holding the entries of `tree` whose values satisfy
/// `predicate`.
///
/// ```
/// use dialog_avl_tree::{Traversal, Tree, filter};
///
/// let tree = Tree::try_from([(1, 10), (2, 20), (3, 30)]).unwrap();
/// let large = filter(&tree, |value| *value >= 20);
///
/// assert_eq!(large.entries(Traversal::ASCENDING), [(&2, &20), (&3, &30)]);
/// ```
pub fn filter<K, V, P>(tree: &Tree<K, V>, mut predicate: P) -> Tree<K, V>
where
    K: Ord + Clone,
    V: Clone,
    P: FnMut(&V) -> bool,
{
    let mut filtered = Tree::new();
    tree.traverse(Traversal::ASCENDING, |key, value| {
        if predicate(value) {
            // Keys arrive unique and ascending, so the upsert never displaces
            filtered.upsert(key.clone(), value.clone());
        }
    });
    filtered
}

/// Consumes `tree`, moving the entries whose values satisfy `predicate` into
/// a new tree.
pub fn into_filter<K, V, P>(tree: Tree<K, V>, mut predicate: P) -> Tree<K, V>
where
    K: Ord,
    P: FnMut(&V) -> bool,
{
    let mut filtered = Tree::new();
    tree.into_traversal(Traversal::ASCENDING, |key, value| {
        if predicate(&value) {
            filtered.upsert(key, value);
        }
    });
    filtered
}

/// Folds the values of `tree`, visited in `order`, into a single result.
///
/// Starting from `initial`, every visited value is combined with the running
/// accumulator as `f(value, accumulator)`.
///
/// ```
/// use dialog_avl_tree::{Traversal, Tree, reduce};
///
/// let tree = Tree::try_from([(1, "a"), (2, "b"), (3, "c")]).unwrap();
///
/// let sum = reduce(&tree, 0, |value, total| total + value.len(), Traversal::ASCENDING);
/// assert_eq!(sum, 3);
///
/// let reversed = reduce(
///     &tree,
///     String::new(),
///     |value, text| format!("{value}{text}"),
///     Traversal::ASCENDING,
/// );
/// assert_eq!(reversed, "cba");
/// ```
pub fn reduce<K, V, A, F>(tree: &Tree<K, V>, initial: A, mut f: F, order: Traversal) -> A
where
    F: FnMut(&V, A) -> A,
{
    let mut accumulator = Some(initial);
    tree.traverse(order, |_, value| {
        accumulator = accumulator.take().map(|running| f(value, running));
    });

    match accumulator {
        Some(result) => result,
        None => unreachable!("Accumulator is restored after every step"),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    use crate::{Traversal, Tree, filter, into_filter, into_map, map, reduce};

    #[test]
    fn it_maps_borrowed_and_owned_trees_alike() -> Result<()> {
        let tree = Tree::try_from([(1, 2), (2, 4), (3, 6)])?;

        let borrowed = map(&tree, |value| value + 1);
        let owned = into_map(tree.clone(), |value| value + 1);

        assert_eq!(borrowed, owned);
        assert_eq!(
            borrowed.entries(Traversal::ASCENDING),
            [(&1, &3), (&2, &5), (&3, &7)]
        );
        assert_eq!(tree.get(&1)?, &2);

        Ok(())
    }

    #[test]
    fn it_preserves_tree_shape_when_mapping() -> Result<()> {
        let tree = Tree::from_entries((0..31).map(|i| (i, i)))?;
        let mapped = map(&tree, |value| value * 2);

        let shape = |tree: &Tree<i32, i32>| {
            let mut keys = Vec::new();
            tree.traverse(Traversal::RootLeftRight, |key, _| keys.push(*key));
            keys
        };
        assert_eq!(shape(&tree), shape(&mapped));
        assert_eq!(mapped.height()?, tree.height()?);

        Ok(())
    }

    #[test]
    fn it_filters_borrowed_and_owned_trees_alike() -> Result<()> {
        let tree = Tree::from_entries((0..20).map(|i| (i, i.to_string())))?;

        let borrowed = filter(&tree, |value| value.len() == 2);
        let owned = into_filter(tree.clone(), |value| value.len() == 2);

        assert_eq!(borrowed, owned);
        assert_eq!(borrowed.len(), 10);
        assert_eq!(borrowed.find_min()?, (&10, &"10".to_string()));
        assert_eq!(tree.len(), 20);

        Ok(())
    }

    #[test]
    fn it_returns_an_empty_tree_when_nothing_matches() {
        let tree = Tree::try_from([(1, 1), (2, 2)]).unwrap();
        let none = filter(&tree, |_| false);

        assert!(none.is_empty());
        assert_eq!(none.len(), 0);
    }

    #[test]
    fn it_passes_the_value_before_the_accumulator() -> Result<()> {
        let tree = Tree::try_from([(1, 'a'), (2, 'b'), (3, 'c')])?;

        let ascending = reduce(
            &tree,
            String::new(),
            |value, mut text| {
                text.push(*value);
                text
            },
            Traversal::ASCENDING,
        );
        let descending = reduce(
            &tree,
            String::new(),
            |value, mut text| {
                text.push(*value);
                text
            },
            Traversal::DESCENDING,
        );

        assert_eq!(ascending, "abc");
        assert_eq!(descending, "cba");

        Ok(())
    }

    #[test]
    fn it_returns_the_initial_value_for_empty_trees() {
        let tree = Tree::<u32, u32>::new();
        assert_eq!(reduce(&tree, 7, |value, total| total + value, Traversal::default()), 7);
    }
}
