//! The B-tree handle: owns the root and exposes the public set API.

use std::borrow::Borrow;
use std::fmt;
use std::mem;

use crate::common::{MinDegree, Result, Violation};
use crate::index::btree::node::Node;
use crate::index::btree::traversal::{IntoIter, Iter};
use crate::index::btree::validate::Checker;
use crate::index::btree::TreeStats;

/// An ordered set backed by a B-tree of minimum degree `t`.
///
/// # Structure
/// ```text
///                    root: [ 30 | 60 ]
///                   /        |        \
///          [ 10 | 20 ]   [ 40 | 50 ]   [ 70 | 80 | 90 ]
/// ```
/// - every non-root node holds `t-1 ..= 2t-1` keys, the root `1 ..= 2t-1`
/// - an internal node with `n` keys has `n + 1` children
/// - all leaves sit at the same depth
///
/// Inserts split full nodes on the way down and removals top up thin nodes
/// on the way down, so neither ever walks back up the tree.
///
/// # Ownership
/// Each node owns its children outright. Moving a `BTree` moves the root;
/// `std::mem::take` moves the contents out and leaves an empty tree behind.
/// There is deliberately no `Clone`: copying a whole tree should be spelled
/// out, e.g. `tree.iter().cloned().collect::<BTree<_>>()`.
///
/// # Thread Safety
/// None internally. `&BTree` may be shared for reads; mutation needs `&mut`
/// or an external lock.
///
/// # Usage
/// ```
/// use classicds::BTree;
///
/// let mut tree = BTree::new();
/// assert!(tree.insert(10));
/// assert!(tree.insert(20));
/// assert!(tree.insert(5));
/// assert!(!tree.insert(10)); // duplicate
///
/// assert_eq!(tree.len(), 3);
/// assert!(tree.contains(&5));
/// assert!(!tree.contains(&15));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 10, 20]);
/// ```
pub struct BTree<K> {
    /// `None` for an empty tree; otherwise holds at least one key.
    root: Option<Box<Node<K>>>,

    /// Number of stored keys, maintained incrementally.
    len: usize,

    /// Fixed for the lifetime of the tree.
    degree: MinDegree,

    stats: TreeStats,
}

impl<K> BTree<K> {
    /// Create an empty tree with the default minimum degree.
    pub fn new() -> Self {
        Self::with_degree(MinDegree::default())
    }

    /// Create an empty tree with minimum degree `t`.
    ///
    /// # Panics
    /// Panics if `t` is out of range (see [`MinDegree::new`]). Use
    /// [`BTree::try_with_min_degree`] to handle that case as an error.
    pub fn with_min_degree(t: usize) -> Self {
        match MinDegree::new(t) {
            Ok(degree) => Self::with_degree(degree),
            Err(err) => panic!("{}", err),
        }
    }

    /// Create an empty tree with minimum degree `t`.
    ///
    /// # Errors
    /// - `Error::InvalidMinDegree` if `t` is less than 2 or above
    ///   [`MAX_MIN_DEGREE`](crate::MAX_MIN_DEGREE)
    pub fn try_with_min_degree(t: usize) -> Result<Self> {
        Ok(Self::with_degree(MinDegree::new(t)?))
    }

    /// Create an empty tree with an already validated minimum degree.
    pub fn with_degree(degree: MinDegree) -> Self {
        Self {
            root: None,
            len: 0,
            degree,
            stats: TreeStats::new(),
        }
    }

    /// The minimum degree this tree was built with.
    #[inline]
    pub fn min_degree(&self) -> MinDegree {
        self.degree
    }

    /// Number of keys stored. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`BTree::len`].
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// True if the tree stores no keys. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Levels below the root: 0 for a lone leaf root, -1 for an empty tree.
    pub fn height(&self) -> isize {
        match &self.root {
            None => -1,
            Some(root) => root.height() as isize,
        }
    }

    /// Total number of nodes. Walks the whole tree; diagnostic only.
    pub fn count_nodes(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.count_nodes())
    }

    /// Structural counters accumulated since creation or the last reset.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    /// Zero the structural counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Release every node and reset the size to 0.
    ///
    /// The minimum degree and the statistics are kept.
    pub fn clear(&mut self) {
        if self.root.take().is_some() {
            tracing::debug!(keys = self.len, "cleared B-tree");
        }
        self.len = 0;
    }

    /// Smallest key, or `None` if the tree is empty.
    pub fn first(&self) -> Option<&K> {
        self.root.as_ref().and_then(|root| root.first_key())
    }

    /// Largest key, or `None` if the tree is empty.
    pub fn last(&self) -> Option<&K> {
        self.root.as_ref().and_then(|root| root.last_key())
    }

    /// Visit every key in ascending order.
    ///
    /// May be called any number of times; the tree is not modified.
    pub fn in_order_traversal<F: FnMut(&K)>(&self, mut visit: F) {
        if let Some(root) = &self.root {
            root.in_order(&mut visit);
        }
    }

    /// A lazy iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Collapse a root left without keys by a removal.
    fn shrink_root(&mut self) {
        self.root = match self.root.take() {
            Some(mut root) if root.keys.is_empty() => {
                let child = root.children.pop();
                if let Some(child) = &child {
                    tracing::debug!(
                        height = child.height(),
                        "root emptied, tree shrank by one level"
                    );
                }
                child
            }
            other => other,
        };
    }
}

impl<K: Ord> BTree<K> {
    /// Insert `key`, returning `false` if an equal key is already stored.
    ///
    /// Duplicates are rejected, not overwritten: the stored key stays.
    pub fn insert(&mut self, key: K) -> bool {
        let degree = self.degree;
        let Some(root) = self.root.as_mut() else {
            self.root = Some(Box::new(Node::leaf_with(key, degree)));
            self.len = 1;
            self.stats.insertions += 1;
            return true;
        };

        if root.is_full(degree) {
            // Grow a level: the old root becomes the sole child of a new,
            // empty internal root, which is split immediately.
            let old_root = mem::replace(root, Box::new(Node::new(degree, false)));
            root.children.push(old_root);
            root.split_child(0, degree);
            self.stats.root_splits += 1;
            tracing::debug!(height = root.height(), "root split, tree grew by one level");
        }

        let inserted = root.insert_non_full(key, degree, &mut self.stats);
        if inserted {
            self.len += 1;
            self.stats.insertions += 1;
        } else {
            self.stats.duplicates_rejected += 1;
        }
        inserted
    }

    /// True if a key equal to `key` is stored.
    pub fn search<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Alias of [`BTree::search`].
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// The stored key equal to `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.as_ref()?.search(key)
    }

    /// Remove `key`, returning `true` if it was stored.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Remove and return the stored key equal to `key`, if any.
    ///
    /// Merges and rotations done on the way down to an absent key are kept;
    /// the tree stays valid either way.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let root = self.root.as_mut()?;
        let removed = root.remove(key, self.degree, &mut self.stats);
        self.finish_removal(removed)
    }

    /// Remove and return the smallest key.
    pub fn pop_first(&mut self) -> Option<K> {
        let root = self.root.as_mut()?;
        let removed = root.pop_first(self.degree, &mut self.stats);
        self.finish_removal(removed)
    }

    /// Remove and return the largest key.
    pub fn pop_last(&mut self) -> Option<K> {
        let root = self.root.as_mut()?;
        let removed = root.pop_last(self.degree, &mut self.stats);
        self.finish_removal(removed)
    }

    fn finish_removal(&mut self, removed: Option<K>) -> Option<K> {
        if removed.is_some() {
            self.len -= 1;
        }
        self.shrink_root();
        removed
    }

    /// Check every structural invariant, reporting the first violation.
    ///
    /// # Errors
    /// - `Error::Invariant` describing what is broken and at which depth
    pub fn check_invariants(&self) -> Result<()> {
        let counted = match &self.root {
            None => 0,
            Some(root) => Checker::new(self.degree).check(root)?,
        };
        if counted != self.len {
            return Err(Violation::SizeMismatch {
                tracked: self.len,
                counted,
            }
            .into());
        }
        Ok(())
    }

    /// True if every structural invariant holds. An empty tree is valid.
    pub fn validate_properties(&self) -> bool {
        match self.check_invariants() {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    min_degree = %self.degree,
                    "B-tree failed validation"
                );
                false
            }
        }
    }
}

impl<K> Default for BTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: PartialEq> PartialEq for BTree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq> Eq for BTree<K> {}

impl<K: Ord> FromIterator<K> for BTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = BTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for BTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a BTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K> IntoIterator for BTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(mut self) -> IntoIter<K> {
        let len = mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}
