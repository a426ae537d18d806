//! Common types and utilities shared across classicds.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The validated minimum degree of a B-tree

pub mod config;
pub mod error;
mod min_degree;

pub use error::{Error, Result, Violation};
pub use min_degree::MinDegree;
