use search_trees::avl::Tree;

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::{init_logging, sorted, strictly_increasing, Op};

/// Applies a set of operations to a tree and a set, checking after every call that the tree is
/// still balanced and that both containers reported the same outcome.
fn do_ops<T>(ops: &[Op<T>], avl: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| {
        let agrees = match op {
            Op::Insert(x) => avl.insert(x.clone()) == set.insert(x.clone()),
            Op::Remove(x) => avl.remove(x) == set.remove(x),
        };
        agrees && avl.is_balanced()
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && set.iter().all(|x| tree.contains(x))
        && tree.in_order() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn in_order_is_strictly_increasing(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x);
    }
    for delete in &deletes {
        tree.remove(delete);
    }

    strictly_increasing(&tree.in_order())
}

#[quickcheck]
fn traversals_hold_the_same_values(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x);
    }

    let in_order = tree.in_order();
    sorted(tree.pre_order()) == in_order && sorted(tree.post_order()) == in_order
}

#[quickcheck]
fn second_insert_is_refused(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x);
    }
    tree.remove(&x);

    let first = tree.insert(x);
    let before = tree.in_order();
    let second = tree.insert(x);

    first && !second && tree.in_order() == before
}

#[quickcheck]
fn insert_then_remove_round_trips(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x);
    }

    tree.insert(x);
    let found = tree.contains(&x);
    tree.remove(&x);

    found && !tree.contains(&x) && tree.is_balanced()
}

#[test]
fn scenario_every_intermediate_step_is_balanced() {
    init_logging();
    let mut tree = Tree::new();
    for x in [5, 3, 8, 1, 4, 7, 9] {
        assert!(tree.insert(x));
        assert!(tree.is_balanced());
    }

    assert_eq!(tree.in_order(), vec![1, 3, 4, 5, 7, 8, 9]);
}

#[test]
fn scenario_sorted_input_stays_shallow() {
    let mut tree = Tree::new();
    for x in 1..=7 {
        assert!(tree.insert(x));
        assert!(tree.is_balanced());
    }

    assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.height(), 2);
}

#[test]
fn scenario_remove_with_two_children() {
    let mut tree = Tree::new();
    for x in [5, 3, 8, 2, 4, 7, 9] {
        tree.insert(x);
    }

    assert!(tree.remove(&5));
    assert_eq!(tree.pre_order()[0], 4);
    assert_eq!(tree.in_order(), vec![2, 3, 4, 7, 8, 9]);
}

#[test]
fn scenario_large_sequential_workload() {
    let mut tree = Tree::new();
    for x in 0..10_000 {
        tree.insert(x);
    }
    assert!(tree.is_balanced());
    assert!(tree.height() < 20);

    for x in (0..10_000).step_by(2) {
        assert!(tree.remove(&x));
    }
    assert!(tree.is_balanced());
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&9_999));
}
