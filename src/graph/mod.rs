//! Fixed-size graph infrastructure and the algorithms built on it.
//!
//! This module provides directed and undirected graphs over a dense vertex range
//! `[0, n)`, in unweighted and `f64`-weighted flavors, together with the standard
//! algorithm suite in [`algorithms`].
//!
//! # Architecture
//!
//! - **Core Types**: [`NodeId`], [`EdgeId`], [`Edge`], [`DirectedGraph`] and
//!   [`UndirectedGraph`] provide the graph representation
//! - **Traits**: [`GraphBase`] and [`Successors`] let one algorithm implementation serve
//!   both graph kinds
//! - **Algorithms**: traversal, connectivity, spanning trees, strong components and
//!   topological ordering, each computed eagerly into an immutable result object
//!
//! # Design Principles
//!
//! ## Fixed Vertex Set
//!
//! The vertex count is chosen at construction and never changes. Vertices carry no data;
//! naming them is left to the caller, who maps names to indices.
//!
//! ## Arena Storage
//!
//! Edges live in a contiguous vector indexed by [`EdgeId`] and adjacency lists store ids.
//! Undirected edges appear in the adjacency list of both endpoints but are stored, counted
//! and iterated once.
//!
//! ## Frozen During Analysis
//!
//! Every algorithm borrows the graph immutably while it runs and copies what it needs into
//! its result, so results outlive neither more nor less than the caller wants.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphscope::prelude::*;
//!
//! // Path 0 - 1 - 2 - 3
//! let mut graph = Graph::new(4);
//! for i in 0..3 {
//!     graph.add_edge(NodeId::new(i), NodeId::new(i + 1), ())?;
//! }
//!
//! let bfs = Bfs::new(&graph, NodeId::new(0))?;
//! assert_eq!(bfs.distance(NodeId::new(3))?, Some(3));
//! # Ok::<(), graphscope::Error>(())
//! ```

mod directed;
mod edge;
mod node;
mod render;
mod traits;
mod undirected;

pub mod algorithms;

// Re-export core types at module level
pub use directed::{Digraph, DirectedGraph, WeightedDigraph};
pub use edge::{Cost, Edge, EdgeId};
pub use node::NodeId;
pub use render::EdgeLabel;
pub use traits::{GraphBase, Successors};
pub use undirected::{Graph, UndirectedGraph, WeightedGraph};
