//! Property tests for the B-tree, using `std::collections::BTreeSet` as model.

use std::collections::BTreeSet;

use classicds::BTree;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16),
    Remove(u16),
    PopFirst,
    PopLast,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(|k| Op::Insert(k % 512)),
        3 => any::<u16>().prop_map(|k| Op::Remove(k % 512)),
        1 => Just(Op::PopFirst),
        1 => Just(Op::PopLast),
    ]
}

/// A random permutation of `0..n` for a random `n`.
fn shuffled_keys() -> impl Strategy<Value = Vec<usize>> {
    (0usize..2000).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
}

/// Insert `keys` into trees of growing degree, checking height never rises.
fn assert_height_non_increasing(keys: &[usize]) -> Result<(), TestCaseError> {
    let mut previous = isize::MAX;
    for t in 2..=10 {
        let mut tree = BTree::with_min_degree(t);
        tree.extend(keys.iter().copied());

        let height = tree.height();
        prop_assert!(
            height <= previous,
            "t={} height={} previous={}",
            t,
            height,
            previous
        );
        previous = height;
    }
    Ok(())
}

fn build(t: usize, keys: &[u16]) -> BTree<u16> {
    let mut tree = BTree::with_min_degree(t);
    tree.extend(keys.iter().copied());
    tree
}

proptest! {
    #[test]
    fn prop_traversal_is_sorted_distinct_inserts(
        t in 2usize..8,
        keys in prop::collection::vec(any::<u16>(), 0..400),
    ) {
        let tree = build(t, &keys);
        let model: BTreeSet<u16> = keys.iter().copied().collect();

        let mut visited = Vec::new();
        tree.in_order_traversal(|k| visited.push(*k));

        prop_assert!(visited.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(visited, model.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(tree.len(), model.len());
        prop_assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn prop_insert_is_idempotent(
        t in 2usize..6,
        keys in prop::collection::vec(any::<u16>(), 1..200),
    ) {
        let mut tree = build(t, &keys);
        let len = tree.len();

        for key in &keys {
            prop_assert!(!tree.insert(*key));
        }
        prop_assert_eq!(tree.len(), len);
        prop_assert!(tree.validate_properties());
    }

    #[test]
    fn prop_search_round_trip(
        t in 2usize..8,
        keys in prop::collection::vec(0u16..1000, 0..300),
        lookups in prop::collection::vec(0u16..1000, 0..100),
    ) {
        let tree = build(t, &keys);
        let model: BTreeSet<u16> = keys.iter().copied().collect();

        for key in &keys {
            prop_assert!(tree.search(key));
        }
        for key in &lookups {
            prop_assert_eq!(tree.contains(key), model.contains(key));
        }
    }

    #[test]
    fn prop_height_non_increasing_in_degree(n in 0usize..3000) {
        let keys: Vec<usize> = (0..n).collect();
        assert_height_non_increasing(&keys)?;
    }

    #[test]
    fn prop_height_non_increasing_in_degree_shuffled(keys in shuffled_keys()) {
        assert_height_non_increasing(&keys)?;
    }

    #[test]
    fn prop_operations_match_model(
        t in 2usize..6,
        ops in prop::collection::vec(op(), 0..600),
    ) {
        let mut tree = BTree::with_min_degree(t);
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(k) => prop_assert_eq!(tree.insert(k), model.insert(k)),
                Op::Remove(k) => prop_assert_eq!(tree.remove(&k), model.remove(&k)),
                Op::PopFirst => prop_assert_eq!(tree.pop_first(), model.pop_first()),
                Op::PopLast => prop_assert_eq!(tree.pop_last(), model.pop_last()),
            }
            prop_assert!(tree.check_invariants().is_ok(), "{:?}", tree.check_invariants());
        }

        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(tree.first(), model.first());
        prop_assert_eq!(tree.last(), model.last());
        prop_assert!(tree.iter().eq(model.iter()));
    }
}
