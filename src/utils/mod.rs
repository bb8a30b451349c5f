//! Supporting data structures shared by the graph algorithms.
//!
//! - [`DisjointSet`] - Union-find forest with path compression and union by rank

mod disjoint_set;

pub use disjoint_set::DisjointSet;
