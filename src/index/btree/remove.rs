//! Removal walker: top-down descent that tops up thin children.
//!
//! The mirror image of proactive splitting. Before stepping into a child the
//! walker makes sure that child holds at least `t` keys, either by rotating a
//! key over from a sibling or by merging it with a sibling. A key can then be
//! taken from whatever node the walker lands on without underflowing it, and
//! nothing ever has to be repaired on the way back up.

use std::borrow::Borrow;
use std::mem;

use crate::common::MinDegree;
use crate::index::btree::node::Node;
use crate::index::btree::TreeStats;

impl<K: Ord> Node<K> {
    /// Remove and return the key equal to `key` from this subtree.
    ///
    /// Caller guarantees this node has at least `t` keys, unless it is the
    /// root. The root may be left with zero keys; the tree handle collapses it.
    pub(crate) fn remove<Q>(
        &mut self,
        key: &Q,
        degree: MinDegree,
        stats: &mut TreeStats,
    ) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.find_index(key) {
            Ok(index) if self.is_leaf => Some(self.keys.remove(index)),
            Ok(index) => self.remove_separator(index, key, degree, stats),
            Err(_) if self.is_leaf => None,
            Err(index) => {
                let index = self.fill_child(index, degree, stats);
                self.children[index].remove(key, degree, stats)
            }
        }
    }

    /// Remove `keys[index]` of this internal node.
    fn remove_separator<Q>(
        &mut self,
        index: usize,
        key: &Q,
        degree: MinDegree,
        stats: &mut TreeStats,
    ) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let t = degree.get();
        if self.children[index].len() >= t {
            let predecessor = self.children[index].pop_last(degree, stats)?;
            Some(mem::replace(&mut self.keys[index], predecessor))
        } else if self.children[index + 1].len() >= t {
            let successor = self.children[index + 1].pop_first(degree, stats)?;
            Some(mem::replace(&mut self.keys[index], successor))
        } else {
            // Both neighbours are minimal: pull the separator down into the
            // merged child and remove it from there.
            self.merge_children(index, stats);
            self.children[index].remove(key, degree, stats)
        }
    }

    /// Remove and return the smallest key of this subtree.
    pub(crate) fn pop_first(&mut self, degree: MinDegree, stats: &mut TreeStats) -> Option<K> {
        let mut node = self;
        while !node.is_leaf {
            let index = node.fill_child(0, degree, stats);
            node = node.children[index].as_mut();
        }
        if node.keys.is_empty() {
            None
        } else {
            Some(node.keys.remove(0))
        }
    }

    /// Remove and return the largest key of this subtree.
    pub(crate) fn pop_last(&mut self, degree: MinDegree, stats: &mut TreeStats) -> Option<K> {
        let mut node = self;
        while !node.is_leaf {
            let last = node.children.len() - 1;
            let index = node.fill_child(last, degree, stats);
            node = node.children[index].as_mut();
        }
        node.keys.pop()
    }
}

impl<K> Node<K> {
    /// Make sure `children[index]` holds at least `t` keys before descending.
    ///
    /// Returns the index of the child to descend into, which moves one to the
    /// left when the child had to be merged into its left sibling.
    pub(crate) fn fill_child(
        &mut self,
        index: usize,
        degree: MinDegree,
        stats: &mut TreeStats,
    ) -> usize {
        let t = degree.get();
        if self.children[index].len() >= t {
            return index;
        }

        let has_right = index + 1 < self.children.len();
        if index > 0 && self.children[index - 1].len() >= t {
            self.rotate_right(index);
            stats.rotations += 1;
            index
        } else if has_right && self.children[index + 1].len() >= t {
            self.rotate_left(index);
            stats.rotations += 1;
            index
        } else if has_right {
            self.merge_children(index, stats);
            index
        } else {
            self.merge_children(index - 1, stats);
            index - 1
        }
    }

    /// Move the last key of `children[index - 1]` up into the separator and
    /// the old separator down to the front of `children[index]`.
    fn rotate_right(&mut self, index: usize) {
        let (left_side, right_side) = self.children.split_at_mut(index);
        let sibling = &mut left_side[index - 1];
        let child = &mut right_side[0];

        if let Some(key) = sibling.keys.pop() {
            let separator = mem::replace(&mut self.keys[index - 1], key);
            child.keys.insert(0, separator);
        }
        if let Some(grandchild) = sibling.children.pop() {
            child.children.insert(0, grandchild);
        }

        tracing::trace!(index, "borrowed key from left sibling");
    }

    /// Move the first key of `children[index + 1]` up into the separator and
    /// the old separator down to the back of `children[index]`.
    fn rotate_left(&mut self, index: usize) {
        let (left_side, right_side) = self.children.split_at_mut(index + 1);
        let child = &mut left_side[index];
        let sibling = &mut right_side[0];

        if !sibling.keys.is_empty() {
            let key = sibling.keys.remove(0);
            let separator = mem::replace(&mut self.keys[index], key);
            child.keys.push(separator);
        }
        if !sibling.is_leaf {
            child.children.push(sibling.children.remove(0));
        }

        tracing::trace!(index, "borrowed key from right sibling");
    }

    /// Fold `keys[index]` and `children[index + 1]` into `children[index]`.
    ///
    /// Both children hold `t-1` keys, so the merged child is exactly full.
    pub(crate) fn merge_children(&mut self, index: usize, stats: &mut TreeStats) {
        let right = self.children.remove(index + 1);
        let separator = self.keys.remove(index);
        let Node { keys, children, .. } = *right;

        let left = &mut self.children[index];
        left.keys.push(separator);
        left.keys.extend(keys);
        left.children.extend(children);

        stats.merges += 1;
        tracing::trace!(index, "merged sibling children");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::btree::node::tests::{internal, leaf};

    fn degree() -> MinDegree {
        MinDegree::new(2).unwrap()
    }

    fn child_keys(node: &Node<i32>) -> Vec<Vec<i32>> {
        node.children.iter().map(|c| c.keys.clone()).collect()
    }

    #[test]
    fn test_remove_from_leaf() {
        let mut stats = TreeStats::new();
        let mut node = leaf(vec![1, 2, 3]);

        assert_eq!(node.remove(&2, degree(), &mut stats), Some(2));
        assert_eq!(node.remove(&7, degree(), &mut stats), None);
        assert_eq!(node.keys, vec![1, 3]);
    }

    #[test]
    fn test_remove_separator_uses_predecessor() {
        let mut stats = TreeStats::new();
        let mut node = internal(vec![20], vec![leaf(vec![5, 10]), leaf(vec![30])]);

        assert_eq!(node.remove(&20, degree(), &mut stats), Some(20));
        assert_eq!(node.keys, vec![10]);
        assert_eq!(child_keys(&node), vec![vec![5], vec![30]]);
    }

    #[test]
    fn test_remove_separator_uses_successor() {
        let mut stats = TreeStats::new();
        let mut node = internal(vec![20], vec![leaf(vec![10]), leaf(vec![30, 40])]);

        assert_eq!(node.remove(&20, degree(), &mut stats), Some(20));
        assert_eq!(node.keys, vec![30]);
        assert_eq!(child_keys(&node), vec![vec![10], vec![40]]);
    }

    #[test]
    fn test_remove_separator_merges_minimal_children() {
        let mut stats = TreeStats::new();
        let mut node = internal(vec![20], vec![leaf(vec![10]), leaf(vec![30])]);

        assert_eq!(node.remove(&20, degree(), &mut stats), Some(20));
        assert_eq!(stats.merges, 1);
        assert!(node.keys.is_empty());
        assert_eq!(child_keys(&node), vec![vec![10, 30]]);
    }

    #[test]
    fn test_fill_child_rotates_from_left() {
        let mut stats = TreeStats::new();
        let mut node = internal(
            vec![20, 40],
            vec![leaf(vec![5, 10]), leaf(vec![30]), leaf(vec![50])],
        );

        assert_eq!(node.fill_child(1, degree(), &mut stats), 1);
        assert_eq!(stats.rotations, 1);
        assert_eq!(node.keys, vec![10, 40]);
        assert_eq!(child_keys(&node), vec![vec![5], vec![20, 30], vec![50]]);
    }

    #[test]
    fn test_fill_child_rotates_from_right() {
        let mut stats = TreeStats::new();
        let mut node = internal(vec![20], vec![leaf(vec![10]), leaf(vec![30, 40])]);

        assert_eq!(node.fill_child(0, degree(), &mut stats), 0);
        assert_eq!(node.keys, vec![30]);
        assert_eq!(child_keys(&node), vec![vec![10, 20], vec![40]]);
    }

    #[test]
    fn test_fill_last_child_merges_left() {
        let mut stats = TreeStats::new();
        let mut node = internal(
            vec![20, 40],
            vec![leaf(vec![10]), leaf(vec![30]), leaf(vec![50])],
        );

        assert_eq!(node.fill_child(2, degree(), &mut stats), 1);
        assert_eq!(node.keys, vec![20]);
        assert_eq!(child_keys(&node), vec![vec![10], vec![30, 40, 50]]);
    }

    #[test]
    fn test_rotation_moves_grandchildren() {
        let mut stats = TreeStats::new();
        let left = internal(
            vec![10, 20],
            vec![leaf(vec![5]), leaf(vec![15]), leaf(vec![25])],
        );
        let right = internal(vec![40], vec![leaf(vec![35]), leaf(vec![45])]);
        let mut node = internal(vec![30], vec![left, right]);

        node.fill_child(1, degree(), &mut stats);

        assert_eq!(node.keys, vec![20]);
        let right = &node.children[1];
        assert_eq!(right.keys, vec![30, 40]);
        assert_eq!(child_keys(right), vec![vec![25], vec![35], vec![45]]);
        assert_eq!(node.children[0].children.len(), 2);
    }

    #[test]
    fn test_pop_first_and_last() {
        let mut stats = TreeStats::new();
        let mut node = internal(vec![20], vec![leaf(vec![5, 10]), leaf(vec![30, 40])]);

        assert_eq!(node.pop_first(degree(), &mut stats), Some(5));
        assert_eq!(node.pop_last(degree(), &mut stats), Some(40));
        assert_eq!(node.pop_first(degree(), &mut stats), Some(10));
    }
}
