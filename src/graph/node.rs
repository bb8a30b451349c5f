//! Vertex identifier for fixed-size graphs.
//!
//! This module provides the [`NodeId`] type, the dense vertex index used by every graph
//! and algorithm in the crate. A graph with `n` vertices owns exactly the identifiers
//! `NodeId(0)` through `NodeId(n - 1)`; vertices are never added or removed after
//! construction.

use std::fmt;

/// A strongly-typed vertex index in `[0, n)`.
///
/// `NodeId` wraps a `usize` index, keeping vertex indices apart from edge ids, component
/// ids, timestamps and the other integers that algorithms juggle. Because the vertex set
/// of a graph is fixed, callers construct identifiers directly from indices, typically as
/// produced by an external name-to-index table.
///
/// # Usage
///
/// Node IDs are used to:
///
/// - Name edge endpoints on insertion
/// - Query adjacency and degrees
/// - Select the source of a search
/// - Index into per-vertex result arrays of algorithms
///
/// An identifier is only meaningful relative to a graph; queries validate it and report
/// [`Error::OutOfRange`](crate::Error::OutOfRange) when it does not exist.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = Graph::new(2);
/// let a = NodeId::new(0);
/// let b = NodeId::new(1);
/// graph.add_edge(a, b, ())?;
///
/// assert_eq!(graph.degree(a)?, 1);
/// assert!(graph.degree(NodeId::new(2)).is_err());
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw vertex index.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this vertex.
    ///
    /// The index can be used directly to index into per-vertex vectors.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    /// Formats the vertex as its bare index, matching adjacency listings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
