//! Index structures.
//!
//! Currently implements:
//! - [`btree`] - B-tree ordered set with proactive splitting

pub mod btree;
