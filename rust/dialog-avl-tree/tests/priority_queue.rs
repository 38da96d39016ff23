use anyhow::Result;
use dialog_avl_tree::{DialogAvlTreeError, PriorityQueue};
use pretty_assertions::assert_eq;
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

#[test]
fn it_pops_in_priority_order() -> Result<()> {
    let mut queue = PriorityQueue::new();
    for priority in [0usize, 1, 2, 3] {
        queue.push(priority, priority);
    }

    let mut popped = Vec::new();
    while let Ok(value) = queue.pop() {
        popped.push(value);
    }

    assert_eq!(popped, vec![3, 2, 1, 0]);
    assert_eq!(queue.pop(), Err(DialogAvlTreeError::EmptyQueue));

    Ok(())
}

#[test]
fn it_drains_shuffled_priorities_from_highest_to_lowest() -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut priorities: Vec<usize> = (0..256).collect();
    priorities.shuffle(&mut rng);

    let mut queue = PriorityQueue::new();
    for priority in &priorities {
        queue.push(*priority, format!("task-{priority}"));
    }

    for expected in (0..256).rev() {
        assert_eq!(queue.top()?, &format!("task-{expected}"));
        assert_eq!(queue.pop()?, format!("task-{expected}"));
    }
    assert!(queue.is_empty());

    Ok(())
}

#[test]
fn it_replaces_payloads_for_repeated_priorities() -> Result<()> {
    let mut queue = PriorityQueue::<&str>::new();
    queue.push(1, "low");
    queue.push(2, "high");

    assert_eq!(queue.push(2, "higher"), Some("high"));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.pop()?, "higher");
    assert_eq!(queue.pop()?, "low");

    Ok(())
}
