//! Structural statistics for a B-tree.

use std::fmt;

/// Counters of the structural work a tree has done.
///
/// Lookups never touch these; only `insert`, `remove` and the `pop_*`
/// operations do, and they already hold `&mut` access to the tree.
///
/// # Example
/// ```
/// use classicds::BTree;
///
/// let mut tree = BTree::with_min_degree(2);
/// for key in 0..10 {
///     tree.insert(key);
/// }
/// tree.insert(3);
///
/// let stats = tree.stats();
/// assert!(stats.splits > 0);
/// assert_eq!(stats.duplicates_rejected, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of keys successfully inserted.
    pub insertions: u64,

    /// Number of full children split during insert descent.
    pub splits: u64,

    /// Number of times the root itself was split (tree grew a level).
    pub root_splits: u64,

    /// Number of sibling merges during removal descent.
    pub merges: u64,

    /// Number of keys borrowed from a sibling through the parent.
    pub rotations: u64,

    /// Number of inserts rejected because the key was already present.
    pub duplicates_rejected: u64,
}

impl TreeStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits (root splits included) per successful insertion.
    pub fn split_rate(&self) -> f64 {
        if self.insertions == 0 {
            0.0
        } else {
            (self.splits + self.root_splits) as f64 / self.insertions as f64
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, splits: {}, root_splits: {}, ",
            self.insertions, self.splits, self.root_splits
        )?;
        write!(
            f,
            "merges: {}, rotations: {}, duplicates: {}, split_rate: {:.2} }}",
            self.merges,
            self.rotations,
            self.duplicates_rejected,
            self.split_rate()
        )
    }
}
