//! B-tree ordered set.
//!
//! # Components
//! - [`BTree`] - The tree handle: owns the root, tracks size, public API
//! - `node` - One level of the tree (sorted keys + owned children)
//! - `split` - Splits a full child and promotes its median
//! - `insert` / `search` / `remove` - Top-down walkers
//! - [`Iter`] / [`IntoIter`] - Ascending iteration
//! - `validate` - Structural invariant checker
//! - [`TreeStats`] - Counters of splits, merges and rotations

mod insert;
mod node;
mod remove;
mod search;
mod split;
mod stats;
mod traversal;
mod tree;
mod validate;

pub use stats::TreeStats;
pub use traversal::{IntoIter, Iter};
pub use tree::BTree;
