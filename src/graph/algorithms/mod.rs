//! Graph algorithms over fixed-size graphs.
//!
//! Every algorithm runs to completion inside its constructor and returns an immutable
//! result object; all further calls are read-only queries.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`Bfs`] - Breadth-first distances and shortest paths, with optional early stop
//! - [`Dfs`] - Depth-first forest with timestamps and [`EdgeClass`] buckets
//!
//! ## Connectivity
//!
//! - [`UnionFindComponents`] / [`DfsComponents`] - Connected components of undirected graphs
//! - [`StronglyConnectedComponents`] - Kosaraju's two-pass algorithm with condensation
//! - [`TwoColoring`] - Bipartiteness check by depth-first two-coloring
//!
//! ## Spanning Trees
//!
//! - [`Kruskal`] - Sorted edges plus union-find
//! - [`Prim`] - Priority queue keyed by the cheapest connecting edge
//!
//! ## Ordering and Cycles
//!
//! - [`TopologicalSort`] - Reverse finishing order of a DAG
//! - [`LevelPartition`] - Layering by indegree peeling
//! - [`CycleFinder`] - Explicit-stack cycle extraction for digraphs
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS | O(V + E) | Fewest-edge paths |
//! | DFS | O(V + E) | Edge classification, reachability |
//! | Components | O(V + E α(V)) | Undirected connectivity |
//! | SCC | O(V + E) | Mutual reachability, condensation |
//! | Kruskal | O(E log E) | Sparse graphs |
//! | Prim | O(E log V) | Dense graphs |
//! | Topological / Levels / Cycle | O(V + E) | Dependency ordering |
//!
//! # Examples
//!
//! ```rust
//! use graphscope::prelude::*;
//!
//! let mut graph = WeightedGraph::new(3);
//! graph.add_edge(NodeId::new(0), NodeId::new(1), 1.0)?;
//! graph.add_edge(NodeId::new(1), NodeId::new(2), 2.0)?;
//! graph.add_edge(NodeId::new(0), NodeId::new(2), 3.0)?;
//!
//! assert_eq!(Kruskal::new(&graph)?.total_cost(), 3.0);
//! assert_eq!(Prim::new(&graph)?.total_cost(), 3.0);
//! # Ok::<(), graphscope::Error>(())
//! ```

mod bfs;
mod bipartite;
mod components;
mod cycles;
mod dfs;
mod mst;
mod scc;
mod topological;

pub use bfs::Bfs;
pub use bipartite::TwoColoring;
pub use components::{ComponentStrategy, Components, DfsComponents, UnionFindComponents};
pub use cycles::CycleFinder;
pub use dfs::{Dfs, EdgeClass, TraversedEdge};
pub use mst::{Kruskal, Prim};
pub use scc::StronglyConnectedComponents;
pub use topological::{LevelPartition, TopologicalSort};

/// Traversal state of a vertex during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    /// Not yet discovered
    White,
    /// Discovered, adjacency not fully scanned
    Gray,
    /// Finished
    Black,
}
