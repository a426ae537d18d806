//! Insertion walker: top-down descent with proactive splitting.

use std::cmp::Ordering;

use crate::common::MinDegree;
use crate::index::btree::node::Node;
use crate::index::btree::TreeStats;

impl<K: Ord> Node<K> {
    /// Insert `key` into the subtree rooted at this non-full node.
    ///
    /// Every full child is split before the walker steps into it, so the
    /// node being visited always has room for a promoted median and the leaf
    /// reached at the bottom always has room for `key`.
    ///
    /// Returns `false` without storing anything if `key` is already present.
    /// A split performed on the way down to a duplicate is kept; it leaves
    /// the tree valid.
    pub(crate) fn insert_non_full(
        &mut self,
        key: K,
        degree: MinDegree,
        stats: &mut TreeStats,
    ) -> bool {
        let mut node = self;
        loop {
            let mut index = match node.find_index(&key) {
                Ok(_) => return false,
                Err(index) => index,
            };

            if node.is_leaf {
                node.keys.insert(index, key);
                return true;
            }

            if node.children[index].is_full(degree) {
                node.split_child(index, degree);
                stats.splits += 1;

                match key.cmp(&node.keys[index]) {
                    Ordering::Less => {}
                    Ordering::Greater => index += 1,
                    // The promoted median was the key we were looking for.
                    Ordering::Equal => return false,
                }
            }

            node = node.children[index].as_mut();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::btree::node::tests::{internal, leaf};

    fn degree(t: usize) -> MinDegree {
        MinDegree::new(t).unwrap()
    }

    #[test]
    fn test_insert_into_leaf_keeps_order() {
        let mut stats = TreeStats::new();
        let mut node = leaf(vec![10, 30]);

        assert!(node.insert_non_full(20, degree(3), &mut stats));
        assert!(node.insert_non_full(5, degree(3), &mut stats));
        assert_eq!(node.keys, vec![5, 10, 20, 30]);
        assert_eq!(stats.splits, 0);
    }

    #[test]
    fn test_insert_rejects_duplicate_in_leaf() {
        let mut stats = TreeStats::new();
        let mut node = leaf(vec![10, 30]);

        assert!(!node.insert_non_full(30, degree(3), &mut stats));
        assert_eq!(node.keys, vec![10, 30]);
    }

    #[test]
    fn test_insert_rejects_separator_duplicate() {
        let mut stats = TreeStats::new();
        let mut node = internal(vec![20], vec![leaf(vec![10]), leaf(vec![30])]);

        assert!(!node.insert_non_full(20, degree(2), &mut stats));
        assert_eq!(node.keys, vec![20]);
    }

    #[test]
    fn test_insert_splits_full_child_then_descends_right() {
        let mut stats = TreeStats::new();
        let mut node = internal(vec![50], vec![leaf(vec![10, 20, 30]), leaf(vec![60])]);

        assert!(node.insert_non_full(25, degree(2), &mut stats));

        assert_eq!(stats.splits, 1);
        assert_eq!(node.keys, vec![20, 50]);
        assert_eq!(node.children[0].keys, vec![10]);
        assert_eq!(node.children[1].keys, vec![25, 30]);
    }

    #[test]
    fn test_insert_duplicate_of_promoted_median() {
        let mut stats = TreeStats::new();
        let mut node = internal(vec![50], vec![leaf(vec![10, 20, 30]), leaf(vec![60])]);

        // 20 sits in a full child; the split promotes it, revealing the duplicate.
        assert!(!node.insert_non_full(20, degree(2), &mut stats));

        assert_eq!(stats.splits, 1);
        assert_eq!(node.keys, vec![20, 50]);
        assert_eq!(node.children.len(), 3);
    }
}
