//! classicds - Classic in-memory data structures with explicit complexity guarantees.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           classicds                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              BTree handle (index/btree/tree)             │   │
//! │  │      root: Option<Box<Node>>  ·  len  ·  MinDegree       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                        Walkers                           │   │
//! │  │   insert (split on descent)  ·  search  ·  remove        │   │
//! │  │   (top up on descent)  ·  traversal  ·  validate         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Node + split engine (index/btree)           │   │
//! │  │      keys: Vec<K>  ·  children: Vec<Box<Node<K>>>        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (MinDegree, Error, config)
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use classicds::BTree;
//!
//! let mut tree = BTree::with_min_degree(2);
//! for key in 1..=10 {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.len(), 10);
//! assert!(tree.validate_properties());
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_MIN_DEGREE, MAX_MIN_DEGREE, MIN_DEGREE_FLOOR};
pub use common::{Error, MinDegree, Result, Violation};

pub use index::btree::{BTree, IntoIter, Iter, TreeStats};
