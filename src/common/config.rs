//! Configuration constants for classicds.

/// Minimum degree `t` used when a tree is built without an explicit one.
///
/// With `t = 3` every non-root node holds between 2 and 5 keys and an
/// internal node fans out to between 3 and 6 children.
pub const DEFAULT_MIN_DEGREE: usize = 3;

/// Smallest legal minimum degree.
///
/// At `t = 2` the tree is a 2-3-4 tree. Anything lower cannot split a full
/// node into two non-empty halves.
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Largest legal minimum degree.
///
/// A full internal node has `2t` children, which must fit in a `usize`.
pub const MAX_MIN_DEGREE: usize = usize::MAX / 2;

/// Most keys a freshly created node reserves room for.
///
/// Nodes of wider trees start at this capacity and grow as keys arrive.
pub const MAX_RESERVED_KEYS: usize = 64;
