//! Minimum degree of a B-tree.

use std::fmt;

use crate::common::config::{DEFAULT_MIN_DEGREE, MAX_MIN_DEGREE, MIN_DEGREE_FLOOR};
use crate::common::{Error, Result};

/// The minimum degree `t` of a B-tree, validated to lie in
/// `MIN_DEGREE_FLOOR..=MAX_MIN_DEGREE`.
///
/// Every node bound in the tree derives from it:
/// - non-root nodes hold `t-1 ..= 2t-1` keys
/// - internal nodes have one more child than keys, so `t ..= 2t` children
///
/// # Example
/// ```
/// use classicds::MinDegree;
///
/// let degree = MinDegree::new(3).unwrap();
/// assert_eq!(degree.max_keys(), 5);
/// assert_eq!(degree.min_keys(), 2);
/// assert!(MinDegree::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MinDegree(usize);

impl MinDegree {
    /// Create a new MinDegree.
    ///
    /// # Errors
    /// - `Error::InvalidMinDegree` if `t` is below [`MIN_DEGREE_FLOOR`] or
    ///   above [`MAX_MIN_DEGREE`]
    pub fn new(t: usize) -> Result<Self> {
        if !(MIN_DEGREE_FLOOR..=MAX_MIN_DEGREE).contains(&t) {
            return Err(Error::InvalidMinDegree(t));
        }
        Ok(MinDegree(t))
    }

    /// The raw value of `t`.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Capacity of a full node: `2t - 1` keys.
    #[inline]
    pub fn max_keys(self) -> usize {
        2 * self.0 - 1
    }

    /// Fewest keys a non-root node may hold: `t - 1`.
    #[inline]
    pub fn min_keys(self) -> usize {
        self.0 - 1
    }

    /// Fan-out of a full internal node: `2t` children.
    #[inline]
    pub fn max_children(self) -> usize {
        2 * self.0
    }
}

impl Default for MinDegree {
    fn default() -> Self {
        MinDegree(DEFAULT_MIN_DEGREE)
    }
}

impl TryFrom<usize> for MinDegree {
    type Error = Error;

    fn try_from(t: usize) -> Result<Self> {
        MinDegree::new(t)
    }
}

impl fmt::Display for MinDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
