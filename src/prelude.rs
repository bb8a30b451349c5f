//! # graphscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphscope library. Import this module to get quick access to the graph types
//! and every algorithm.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphscope operations
pub use crate::Error;

/// The result type used throughout graphscope
pub use crate::Result;

// ================================================================================================
// Graphs
// ================================================================================================

/// Graph containers and their common aliases
pub use crate::graph::{
    Digraph, DirectedGraph, Graph, UndirectedGraph, WeightedDigraph, WeightedGraph,
};

/// Vertex and edge identifiers, edges and edge costs
pub use crate::graph::{Cost, Edge, EdgeId, EdgeLabel, NodeId};

/// Traits shared by both graph kinds
pub use crate::graph::{GraphBase, Successors};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Breadth- and depth-first traversal
pub use crate::graph::algorithms::{Bfs, Dfs, EdgeClass, TraversedEdge};

/// Connectivity
pub use crate::graph::algorithms::{
    ComponentStrategy, Components, DfsComponents, StronglyConnectedComponents, TwoColoring,
    UnionFindComponents,
};

/// Minimum spanning trees
pub use crate::graph::algorithms::{Kruskal, Prim};

/// Orderings and cycles
pub use crate::graph::algorithms::{CycleFinder, LevelPartition, TopologicalSort};

// ================================================================================================
// 2-SAT and Utilities
// ================================================================================================

/// 2-CNF satisfiability
pub use crate::sat::{Assignment, Clause, ImplicationGraph, Literal, TwoSat};

/// Union-find forest
pub use crate::utils::DisjointSet;
