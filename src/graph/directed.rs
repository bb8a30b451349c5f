//! Directed graph implementation.
//!
//! This module provides [`DirectedGraph`], a fixed-size digraph stored as outgoing
//! adjacency lists over a contiguous edge arena. No incoming index is kept: in-degrees are
//! computed by scanning, and algorithms that need backward traversal build a transient
//! [`reverse`](DirectedGraph::reverse) graph instead.

use crate::{
    graph::{
        edge::{Edge, EdgeId},
        node::NodeId,
        traits::{GraphBase, Successors},
    },
    Result,
};

/// A directed graph over the vertices `[0, n)` with typed edge data.
///
/// - Vertices are fixed at construction; only arcs are added afterwards
/// - Parallel arcs between the same ordered pair are rejected (reported as "not added")
/// - The reverse arc `(v, u)` is distinct from `(u, v)`
/// - Self-loops are permitted
///
/// # Memory Layout
///
/// Arcs are stored once in a vector indexed by [`EdgeId`]; `outgoing[v]` holds the ids of
/// arcs leaving `v` in insertion order, so its length is the out-degree of `v`.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = Digraph::new(3);
/// let (a, b, c) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));
///
/// assert!(graph.add_edge(a, b, ())?.is_some());
/// assert!(graph.add_edge(b, c, ())?.is_some());
/// // Parallel arcs are not added
/// assert!(graph.add_edge(a, b, ())?.is_none());
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.out_degree(a)?, 1);
/// assert_eq!(graph.in_degree(c)?, 1);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<E = ()> {
    /// Arc storage indexed by `EdgeId`
    edges: Vec<Edge<E>>,
    /// Outgoing arc ids per vertex
    outgoing: Vec<Vec<EdgeId>>,
}

/// An unweighted directed graph.
pub type Digraph = DirectedGraph<()>;

/// A directed graph with `f64` arc costs.
pub type WeightedDigraph = DirectedGraph<f64>;

impl<E> DirectedGraph<E> {
    /// Creates a digraph with `node_count` vertices and no arcs.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        DirectedGraph {
            edges: Vec::new(),
            outgoing: vec![Vec::new(); node_count],
        }
    }

    /// Adds the arc `source -> target` carrying `data`.
    ///
    /// # Arguments
    ///
    /// * `source` - Tail of the arc
    /// * `target` - Head of the arc
    /// * `data` - Edge data, typically `()` or an `f64` cost
    ///
    /// # Returns
    ///
    /// `Some(id)` for a newly inserted arc, or `None` if an arc `source -> target` already
    /// exists, in which case the graph is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`](crate::Error::InvalidEdge) if either endpoint is not a
    /// vertex of the graph.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, data: E) -> Result<Option<EdgeId>> {
        let count = self.node_count();
        for endpoint in [source, target] {
            if endpoint.index() >= count {
                return Err(invalid_edge!(
                    source.index(),
                    target.index(),
                    "vertex {} does not exist in graph with {} vertices",
                    endpoint.index(),
                    count
                ));
            }
        }

        Ok(self.insert(source, target, data))
    }

    /// Unchecked [`add_edge`](Self::add_edge) for endpoints known to be vertices.
    pub(crate) fn insert(&mut self, source: NodeId, target: NodeId, data: E) -> Option<EdgeId> {
        if self.contains_edge(source, target) {
            return None;
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(source, target, data));
        self.outgoing[source.index()].push(id);
        Some(id)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns the number of arcs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }

    /// Returns `true` if the arc `source -> target` exists.
    ///
    /// Out-of-range vertices are simply reported as not connected.
    #[must_use]
    pub fn contains_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.outgoing
            .get(source.index())
            .is_some_and(|out| out.iter().any(|&e| self.edges[e.index()].target == target))
    }

    /// Returns the arc with the given id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(id.index())
    }

    /// Returns an iterator over all arcs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E>> {
        self.edges.iter()
    }

    /// Returns the arcs leaving `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `node` is not a vertex.
    pub fn adjacent(&self, node: NodeId) -> Result<impl Iterator<Item = &Edge<E>>> {
        self.check_node(node)?;
        Ok(self.outgoing[node.index()]
            .iter()
            .map(|&e| &self.edges[e.index()]))
    }

    /// Returns the number of arcs leaving `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `node` is not a vertex.
    pub fn out_degree(&self, node: NodeId) -> Result<usize> {
        self.check_node(node)?;
        Ok(self.outgoing[node.index()].len())
    }

    /// Returns the number of arcs entering `node`.
    ///
    /// Computed by scanning every arc, O(V + E).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `node` is not a vertex.
    pub fn in_degree(&self, node: NodeId) -> Result<usize> {
        self.check_node(node)?;
        Ok(self.edges.iter().filter(|e| e.target == node).count())
    }

    /// Returns the total degree of `node`, in-degree plus out-degree.
    ///
    /// A self-loop contributes two.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `node` is not a vertex.
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        Ok(self.out_degree(node)? + self.in_degree(node)?)
    }

    /// Returns the ids of all arcs sharing an endpoint with `id`, excluding `id` itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`](crate::Error::InvalidEdge) if `id` is not an arc of
    /// this graph.
    pub fn adjacent_edges(&self, id: EdgeId) -> Result<Vec<EdgeId>> {
        let Some(edge) = self.edge(id) else {
            return Err(invalid_edge!(
                id.index(),
                id.index(),
                "edge id {} does not exist in graph with {} edges",
                id.index(),
                self.edges.len()
            ));
        };

        Ok(self
            .edges
            .iter()
            .enumerate()
            .filter(|&(i, other)| i != id.index() && edge.shares_endpoint(other))
            .map(|(i, _)| EdgeId::new(i))
            .collect())
    }
}

impl<E: Clone> DirectedGraph<E> {
    /// Returns a new graph with every arc reversed.
    ///
    /// Arc `i` of the result is the reversal of arc `i` of `self` and carries a clone of
    /// its data.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = DirectedGraph::new(self.node_count());
        for edge in &self.edges {
            let id = EdgeId::new(reversed.edges.len());
            reversed
                .edges
                .push(Edge::new(edge.target, edge.source, edge.data.clone()));
            reversed.outgoing[edge.target.index()].push(id);
        }
        reversed
    }
}

impl<E> GraphBase for DirectedGraph<E> {
    const DIRECTED: bool = true;

    fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<E> Successors for DirectedGraph<E> {
    fn adjacency(&self, node: NodeId) -> &[EdgeId] {
        &self.outgoing[node.index()]
    }

    fn follow(&self, edge: EdgeId, _from: NodeId) -> NodeId {
        self.edges[edge.index()].target
    }

    fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        self.edges[edge.index()].endpoints()
    }
}
