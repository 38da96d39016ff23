use anyhow::Result;
use dialog_avl_tree::{Traversal, Tree, filter, into_filter, map, reduce};
use pretty_assertions::assert_eq;

fn numbers() -> Result<Tree<u32, u64>> {
    Ok(Tree::from_entries((0..100).map(|key| (key, u64::from(key))))?)
}

#[test]
fn it_squares_every_value() -> Result<()> {
    let tree = numbers()?;
    let squares = map(&tree, |value| value * value);

    assert_eq!(squares.len(), tree.len());
    for key in 0..100u32 {
        assert_eq!(squares.get(&key)?, &(u64::from(key) * u64::from(key)));
    }

    Ok(())
}

#[test]
fn it_keeps_the_upper_half() -> Result<()> {
    let tree = numbers()?;
    let upper = filter(&tree, |value| *value >= 50);

    assert_eq!(upper.len(), 50);
    assert_eq!(upper.find_min()?, (&50, &50));
    assert_eq!(upper.find_max()?, (&99, &99));
    assert!(!upper.contains_key(&49));

    let moved = into_filter(tree, |value| *value >= 50);
    assert_eq!(moved, upper);

    Ok(())
}

#[test]
fn it_sums_values_in_any_order() -> Result<()> {
    let tree = numbers()?;

    for order in Traversal::ALL {
        assert_eq!(reduce(&tree, 0, |value, total| total + value, order), 4950);
    }

    Ok(())
}

#[test]
fn it_chains_operations() -> Result<()> {
    let tree = numbers()?;

    let doubled = map(&tree, |value| value * 2);
    let multiples_of_four = filter(&doubled, |value| value % 4 == 0);
    let largest = reduce(
        &multiples_of_four,
        None,
        |value, largest: Option<u64>| Some(largest.map_or(*value, |largest| largest.max(*value))),
        Traversal::RootLeftRight,
    );

    assert_eq!(multiples_of_four.len(), 50);
    assert_eq!(largest, Some(196));

    Ok(())
}
