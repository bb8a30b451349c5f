//! Edge identifiers and edge values.
//!
//! This module provides [`EdgeId`], the dense index of an edge within its graph, and
//! [`Edge`], the stored edge value: two endpoints plus user data. Weighted graphs store
//! an `f64` cost as edge data; the [`Cost`] trait lets spanning tree algorithms read it
//! from any numeric edge type.

use std::{cmp::Ordering, fmt};

use crate::graph::NodeId;

/// A strongly-typed identifier for edges within a graph.
///
/// Edge ids are assigned sequentially from 0 in insertion order. An undirected edge has a
/// single id even though it appears in the adjacency lists of both endpoints.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// Numeric edge data that can act as an edge cost.
///
/// Spanning tree algorithms are generic over the edge data of a graph; any type
/// implementing `Cost` can be used as a weight.
pub trait Cost {
    /// Returns the cost of the edge as a floating-point value.
    fn cost(&self) -> f64;
}

impl Cost for f64 {
    #[inline]
    fn cost(&self) -> f64 {
        *self
    }
}

impl Cost for f32 {
    #[inline]
    fn cost(&self) -> f64 {
        f64::from(*self)
    }
}

impl Cost for i32 {
    #[inline]
    fn cost(&self) -> f64 {
        f64::from(*self)
    }
}

impl Cost for u32 {
    #[inline]
    fn cost(&self) -> f64 {
        f64::from(*self)
    }
}

/// A stored edge: two endpoints and the user-provided edge data.
///
/// For directed graphs `source` is the tail and `target` the head of the arc. For
/// undirected graphs the pair is unordered; `source` is simply the first endpoint given on
/// insertion, and [`Edge::other`] walks the edge from either side.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = WeightedGraph::new(3);
/// let id = graph
///     .add_edge(NodeId::new(0), NodeId::new(2), 4.5)?
///     .expect("fresh edge");
///
/// let edge = graph.edge(id).expect("edge exists");
/// assert_eq!(edge.other(NodeId::new(2)), Some(NodeId::new(0)));
/// assert_eq!(edge.cost(), 4.5);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E> {
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) data: E,
}

impl<E> Edge<E> {
    pub(crate) const fn new(source: NodeId, target: NodeId, data: E) -> Self {
        Edge {
            source,
            target,
            data,
        }
    }

    /// Returns the first endpoint (tail of a directed arc).
    #[must_use]
    #[inline]
    pub const fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the second endpoint (head of a directed arc).
    #[must_use]
    #[inline]
    pub const fn target(&self) -> NodeId {
        self.target
    }

    /// Returns the data attached to this edge.
    #[must_use]
    #[inline]
    pub const fn data(&self) -> &E {
        &self.data
    }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    #[inline]
    pub const fn endpoints(&self) -> (NodeId, NodeId) {
        (self.source, self.target)
    }

    /// Returns the endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    ///
    /// For a self-loop the opposite endpoint is the vertex itself.
    #[must_use]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.source {
            Some(self.target)
        } else if node == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    /// Returns `true` if `node` is one of the endpoints.
    #[must_use]
    #[inline]
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    /// Returns `true` if the two edges share at least one endpoint.
    #[must_use]
    pub fn shares_endpoint<F>(&self, other: &Edge<F>) -> bool {
        self.touches(other.source) || self.touches(other.target)
    }
}

impl<E: Cost> Edge<E> {
    /// Returns the cost carried by this edge.
    #[must_use]
    #[inline]
    pub fn cost(&self) -> f64 {
        self.data.cost()
    }

    /// Orders two edges by ascending cost.
    ///
    /// Uses [`f64::total_cmp`], so the ordering is total even for NaN costs and stable
    /// sorts keep equal-cost edges in their relative input order.
    #[must_use]
    pub fn cmp_by_cost(&self, other: &Self) -> Ordering {
        self.cost().total_cmp(&other.cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_formatting() {
        let edge = EdgeId::new(7);
        assert_eq!(edge.index(), 7);
        assert_eq!(format!("{edge:?}"), "EdgeId(7)");
        assert_eq!(format!("{edge}"), "e7");
    }

    #[test]
    fn test_edge_other_endpoint() {
        let edge = Edge::new(NodeId::new(1), NodeId::new(4), ());

        assert_eq!(edge.other(NodeId::new(1)), Some(NodeId::new(4)));
        assert_eq!(edge.other(NodeId::new(4)), Some(NodeId::new(1)));
        assert_eq!(edge.other(NodeId::new(2)), None);
    }

    #[test]
    fn test_edge_self_loop_other() {
        let edge = Edge::new(NodeId::new(3), NodeId::new(3), ());
        assert_eq!(edge.other(NodeId::new(3)), Some(NodeId::new(3)));
    }

    #[test]
    fn test_edge_shares_endpoint() {
        let a = Edge::new(NodeId::new(0), NodeId::new(1), ());
        let b = Edge::new(NodeId::new(1), NodeId::new(2), 2.0);
        let c = Edge::new(NodeId::new(3), NodeId::new(4), ());

        assert!(a.shares_endpoint(&b));
        assert!(!a.shares_endpoint(&c));
    }

    #[test]
    fn test_edge_cost_ordering_is_stable() {
        let mut edges = vec![
            Edge::new(NodeId::new(0), NodeId::new(1), 3.0),
            Edge::new(NodeId::new(1), NodeId::new(2), 1.0),
            Edge::new(NodeId::new(2), NodeId::new(3), 3.0),
            Edge::new(NodeId::new(3), NodeId::new(4), 1.0),
        ];
        edges.sort_by(Edge::cmp_by_cost);

        let order: Vec<usize> = edges.iter().map(|e| e.source().index()).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_integer_costs() {
        let edge = Edge::new(NodeId::new(0), NodeId::new(1), 7u32);
        assert_eq!(edge.cost(), 7.0);
    }
}
