//! Trait definitions for graph abstractions.
//!
//! Algorithms in this crate are written against these traits rather than against a
//! concrete graph type, so one traversal skeleton serves both directed and undirected
//! graphs of any edge data type.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Vertex and edge counts, vertex validation, and the directedness capability
//! - [`Successors`] - Positional access to a vertex's adjacency list
//!
//! # Directedness
//!
//! The few places where directed and undirected graphs must be treated differently (DFS
//! edge classification, forest path certification) branch on the associated constant
//! [`GraphBase::DIRECTED`]. The constant is resolved at compile time, so each algorithm is
//! monomorphized into two clearly separated variants sharing one traversal skeleton.

use crate::{
    graph::{EdgeId, NodeId},
    Error, Result,
};

/// Core graph properties shared by every graph type.
pub trait GraphBase {
    /// `true` for directed graphs, `false` for undirected graphs.
    const DIRECTED: bool;

    /// Returns the fixed number of vertices `n`.
    fn node_count(&self) -> usize;

    /// Returns the number of edges currently stored.
    ///
    /// Undirected edges are counted once.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in index order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId::new)
    }

    /// Returns `true` if `node` is a vertex of this graph.
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Validates `node`, failing with [`Error::OutOfRange`] if it is not a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when `node.index() >= node_count()`.
    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex: node.index(),
                count: self.node_count(),
            })
        }
    }
}

/// Forward adjacency with stable positions.
///
/// The adjacency list of a vertex is exposed as a slice of edge ids so that iterative
/// searches can keep `(vertex, position)` frames on an explicit stack and resume a
/// vertex's scan exactly where it was interrupted.
pub trait Successors: GraphBase {
    /// Returns the edge ids in the adjacency list of `node`, in insertion order.
    ///
    /// For undirected graphs every incident edge appears in the list of both endpoints.
    /// Callers must pass a valid vertex.
    fn adjacency(&self, node: NodeId) -> &[EdgeId];

    /// Returns the vertex reached by following `edge` out of `from`.
    ///
    /// For directed graphs this is the head of the arc; for undirected graphs the endpoint
    /// opposite to `from`.
    fn follow(&self, edge: EdgeId, from: NodeId) -> NodeId;

    /// Returns the endpoints `(source, target)` of `edge`.
    fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId);

    /// Returns an iterator over the vertices adjacent to `node`.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.adjacency(node)
            .iter()
            .map(move |&edge| self.follow(edge, node))
    }

    /// Returns the `position`-th `(edge, neighbor)` pair of `node`'s adjacency list.
    fn neighbor_at(&self, node: NodeId, position: usize) -> Option<(EdgeId, NodeId)> {
        self.adjacency(node)
            .get(position)
            .map(|&edge| (edge, self.follow(edge, node)))
    }
}
