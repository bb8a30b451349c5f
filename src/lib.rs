// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphscope
//!
//! A library of classic graph algorithms over dense, fixed-size graphs: directed and
//! undirected, plain and edge-weighted. Every algorithm runs to completion inside its
//! constructor and hands back an immutable result object that answers queries.
//!
//! ## Features
//!
//! - **Graphs** - [`graph::DirectedGraph`] and [`graph::UndirectedGraph`] over vertices
//!   `0..n`, with duplicate-free edge insertion and optional edge data
//! - **Traversal** - Breadth-first distances and paths, depth-first forests with
//!   timestamps and edge classification
//! - **Connectivity** - Connected components (union-find or depth-first), strongly
//!   connected components with condensation, bipartiteness
//! - **Spanning trees** - Kruskal and Prim
//! - **Ordering** - Topological sort, level partition, cycle extraction
//! - **2-SAT** - Satisfiability of 2-CNF formulas via the implication graph
//!
//! ## Quick Start
//!
//! ```rust
//! use graphscope::prelude::*;
//!
//! let mut graph = Graph::new(4);
//! graph.add_edge(NodeId::new(0), NodeId::new(1), ())?;
//! graph.add_edge(NodeId::new(1), NodeId::new(2), ())?;
//! graph.add_edge(NodeId::new(2), NodeId::new(3), ())?;
//!
//! let bfs = Bfs::new(&graph, NodeId::new(0))?;
//! assert_eq!(bfs.distance(NodeId::new(3))?, Some(3));
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`graph`] - Graph types, vertex and edge identifiers, rendering
//! - [`graph::algorithms`] - Traversal, connectivity, spanning trees and orderings
//! - [`sat`] - The 2-SAT solver
//! - [`utils`] - Supporting data structures such as [`utils::DisjointSet`]
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Errors are raised where a
//! precondition is violated and are never recovered from inside the library:
//!
//! ```rust
//! use graphscope::{prelude::*, Error};
//!
//! let mut graph = WeightedGraph::new(4);
//! graph.add_edge(NodeId::new(0), NodeId::new(1), 1.0)?;
//! graph.add_edge(NodeId::new(2), NodeId::new(3), 1.0)?;
//!
//! match Kruskal::new(&graph) {
//!     Ok(mst) => println!("cost {}", mst.total_cost()),
//!     Err(Error::GraphNotConnected { components }) => println!("{} components", components),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ## Logging
//!
//! The algorithms report their progress through the [`log`](https://docs.rs/log) facade:
//! one `debug` record per completed algorithm, `trace` records for per-edge decisions.
//! Install any logger, e.g. `env_logger`, to see them.
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//!
//! # Fuzz the graph builders and algorithms
//! cargo +nightly fuzz run algorithms --release
//! ```
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = Digraph::new(2);
/// graph.add_edge(NodeId::new(0), NodeId::new(1), ())?;
/// assert!(TopologicalSort::new(&graph).is_dag());
/// # Ok::<(), graphscope::Error>(())
/// ```
pub mod prelude;

pub mod graph;
pub mod sat;
pub mod utils;

/// `graphscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use graphscope::{prelude::*, Result};
///
/// fn shortest_hops(graph: &Graph, from: usize, to: usize) -> Result<Option<usize>> {
///     Bfs::with_target(graph, NodeId::new(from), NodeId::new(to))?.distance(NodeId::new(to))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `graphscope` Error type
///
/// See [`Error`] for the full list of error conditions.
pub use error::Error;
