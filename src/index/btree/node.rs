//! A single B-tree node.

use std::borrow::Borrow;

use crate::common::config::MAX_RESERVED_KEYS;
use crate::common::MinDegree;

/// One level of the tree: up to `2t-1` sorted keys and, if internal,
/// exactly one more child than keys.
///
/// Each node exclusively owns its children, so dropping the root releases
/// the whole tree.
#[derive(Debug)]
pub(crate) struct Node<K> {
    /// True if this node has no children.
    pub(crate) is_leaf: bool,

    /// Sorted ascending, no duplicates.
    pub(crate) keys: Vec<K>,

    /// `keys.len() + 1` entries if internal, empty if leaf.
    pub(crate) children: Vec<Box<Node<K>>>,
}

impl<K> Node<K> {
    /// Create an empty node, reserving room for a full node of the given
    /// degree up to [`MAX_RESERVED_KEYS`]. Wider nodes grow on demand.
    pub(crate) fn new(degree: MinDegree, is_leaf: bool) -> Self {
        let children = if is_leaf {
            Vec::new()
        } else {
            Vec::with_capacity(degree.max_children().min(MAX_RESERVED_KEYS + 1))
        };

        Self {
            is_leaf,
            keys: Vec::with_capacity(degree.max_keys().min(MAX_RESERVED_KEYS)),
            children,
        }
    }

    /// Create a leaf holding a single key. Used for the first insert.
    pub(crate) fn leaf_with(key: K, degree: MinDegree) -> Self {
        let mut node = Self::new(degree, true);
        node.keys.push(key);
        node
    }

    /// Number of keys in this node.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    /// A full node has `2t-1` keys and must be split before descending into it.
    #[inline]
    pub(crate) fn is_full(&self, degree: MinDegree) -> bool {
        self.keys.len() >= degree.max_keys()
    }

    /// Locate `key` within this node.
    ///
    /// Returns `Ok(i)` if `keys[i]` equals `key`, otherwise `Err(i)` where
    /// `i` is both the sorted insertion position and the index of the child
    /// whose subtree would contain `key`.
    #[inline]
    pub(crate) fn find_index<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.keys.binary_search_by(|stored| stored.borrow().cmp(key))
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub(crate) fn count_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.count_nodes())
            .sum::<usize>()
    }

    /// Edges from this node down to a leaf, following the leftmost spine.
    ///
    /// All leaves sit at the same depth, so any path gives the same answer.
    pub(crate) fn height(&self) -> usize {
        let mut node = self;
        let mut height = 0;
        while let Some(child) = node.children.first() {
            node = child.as_ref();
            height += 1;
        }
        height
    }

    /// Smallest key in the subtree.
    pub(crate) fn first_key(&self) -> Option<&K> {
        let mut node = self;
        while let Some(child) = node.children.first() {
            node = child.as_ref();
        }
        node.keys.first()
    }

    /// Largest key in the subtree.
    pub(crate) fn last_key(&self) -> Option<&K> {
        let mut node = self;
        while let Some(child) = node.children.last() {
            node = child.as_ref();
        }
        node.keys.last()
    }
}
