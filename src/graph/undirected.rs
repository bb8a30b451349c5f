//! Undirected graph implementation.
//!
//! [`UndirectedGraph`] stores every edge once in an edge arena and records its id in the
//! adjacency lists of both endpoints, so the edge can be traversed from either side in
//! O(1) while edge iteration still yields each unordered pair exactly once.

use crate::{
    graph::{
        edge::{Edge, EdgeId},
        node::NodeId,
        traits::{GraphBase, Successors},
    },
    Result,
};

/// An undirected graph over the vertices `[0, n)` with typed edge data.
///
/// - Self-loops are rejected with [`Error::InvalidEdge`](crate::Error::InvalidEdge)
/// - A second edge between the same unordered pair is reported as "not added"
/// - `degree(v)` equals the length of `v`'s adjacency list
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = WeightedGraph::new(3);
/// let (a, b, c) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));
///
/// graph.add_edge(a, b, 1.0)?;
/// graph.add_edge(b, c, 2.0)?;
/// assert!(graph.add_edge(b, a, 5.0)?.is_none());
/// assert!(graph.add_edge(c, c, 1.0).is_err());
///
/// assert_eq!(graph.degree(b)?, 2);
/// assert_eq!(graph.edges().count(), 2);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph<E = ()> {
    /// Edge storage indexed by `EdgeId`
    edges: Vec<Edge<E>>,
    /// Incident edge ids per vertex, each edge listed at both endpoints
    adjacency: Vec<Vec<EdgeId>>,
}

/// An unweighted undirected graph.
pub type Graph = UndirectedGraph<()>;

/// An undirected graph with `f64` edge costs.
pub type WeightedGraph = UndirectedGraph<f64>;

impl<E> UndirectedGraph<E> {
    /// Creates a graph with `node_count` vertices and no edges.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        UndirectedGraph {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Adds the edge `{v, u}` carrying `data`.
    ///
    /// # Returns
    ///
    /// `Some(id)` for a newly inserted edge, `None` if the pair is already connected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`](crate::Error::InvalidEdge) if `v == u` or if either
    /// endpoint is not a vertex of the graph.
    pub fn add_edge(&mut self, v: NodeId, u: NodeId, data: E) -> Result<Option<EdgeId>> {
        let count = self.node_count();
        for endpoint in [v, u] {
            if endpoint.index() >= count {
                return Err(invalid_edge!(
                    v.index(),
                    u.index(),
                    "vertex {} does not exist in graph with {} vertices",
                    endpoint.index(),
                    count
                ));
            }
        }
        if v == u {
            return Err(invalid_edge!(
                v.index(),
                u.index(),
                "self-loops are not allowed in undirected graphs"
            ));
        }

        if self.contains_edge(v, u) {
            return Ok(None);
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(v, u, data));
        self.adjacency[v.index()].push(id);
        self.adjacency[u.index()].push(id);
        Ok(Some(id))
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges, each unordered pair counted once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if `v` and `u` are joined by an edge, in either orientation.
    #[must_use]
    pub fn contains_edge(&self, v: NodeId, u: NodeId) -> bool {
        self.adjacency.get(v.index()).is_some_and(|incident| {
            incident
                .iter()
                .any(|&e| self.edges[e.index()].other(v) == Some(u))
        })
    }

    /// Returns the edge with the given id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(id.index())
    }

    /// Returns an iterator over all edges in insertion order, each exactly once.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E>> {
        self.edges.iter()
    }

    /// Returns the edges incident to `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `node` is not a vertex.
    pub fn adjacent(&self, node: NodeId) -> Result<impl Iterator<Item = &Edge<E>>> {
        self.check_node(node)?;
        Ok(self.adjacency[node.index()]
            .iter()
            .map(|&e| &self.edges[e.index()]))
    }

    /// Returns the number of edges incident to `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `node` is not a vertex.
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        self.check_node(node)?;
        Ok(self.adjacency[node.index()].len())
    }

    /// Returns the ids of all edges sharing an endpoint with `id`, excluding `id` itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`](crate::Error::InvalidEdge) if `id` is not an edge of
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

        let mut result: Vec<EdgeId> = self.adjacency[edge.source.index()]
            .iter()
            .chain(&self.adjacency[edge.target.index()])
            .copied()
            .filter(|&e| e != id)
            .collect();
        result.sort_unstable();
        result.dedup();
        Ok(result)
    }
}

impl<E> GraphBase for UndirectedGraph<E> {
    const DIRECTED: bool = false;

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<E> Successors for UndirectedGraph<E> {
    fn adjacency(&self, node: NodeId) -> &[EdgeId] {
        &self.adjacency[node.index()]
    }

    fn follow(&self, edge: EdgeId, from: NodeId) -> NodeId {
        let edge = &self.edges[edge.index()];
        if edge.source == from {
            edge.target
        } else {
            edge.source
        }
    }

    fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        self.edges[edge.index()].endpoints()
    }
}
