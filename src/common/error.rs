//! Error types for classicds.

use thiserror::Error as ThisError;

use crate::common::config::{MAX_MIN_DEGREE, MIN_DEGREE_FLOOR};

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in classicds.
///
/// Note what is *not* here: inserting a duplicate key or looking up an
/// absent one are ordinary outcomes reported as `bool`/`Option`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The requested minimum degree is below [`MIN_DEGREE_FLOOR`] or above
    /// [`MAX_MIN_DEGREE`].
    #[error(
        "Invalid minimum degree: {0} (must be in {floor}..={ceiling})",
        floor = MIN_DEGREE_FLOOR,
        ceiling = MAX_MIN_DEGREE
    )]
    InvalidMinDegree(usize),

    /// A structural invariant of the tree does not hold.
    ///
    /// This indicates a bug in the tree itself; callers cannot trigger it
    /// through the public API.
    #[error("B-tree invariant violated: {0}")]
    Invariant(#[from] Violation),
}

/// The structural invariant a B-tree failed, with where it failed.
///
/// Depths count edges from the root, so the root is at depth 0.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Violation {
    /// A node holds too few or too many keys.
    #[error("node at depth {depth} holds {found} keys, expected {min}..={max}")]
    KeyCount {
        depth: usize,
        found: usize,
        min: usize,
        max: usize,
    },

    /// Keys inside one node are not strictly ascending.
    #[error("keys of node at depth {depth} are not strictly ascending")]
    Unordered { depth: usize },

    /// A key does not lie strictly between the separators around its subtree.
    #[error("key in node at depth {depth} falls outside its separator range")]
    OutOfRange { depth: usize },

    /// An internal node with `n` keys does not have `n + 1` children,
    /// or a leaf has children.
    #[error("node at depth {depth} has {children} children for {keys} keys")]
    ChildCount {
        depth: usize,
        keys: usize,
        children: usize,
    },

    /// Leaves were found at different depths.
    #[error("leaf at depth {found}, expected every leaf at depth {expected}")]
    LeafDepth { expected: usize, found: usize },

    /// The tracked size disagrees with the number of stored keys.
    #[error("tree tracks {tracked} keys but stores {counted}")]
    SizeMismatch { tracked: usize, counted: usize },
}
