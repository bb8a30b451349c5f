//! Breadth-first search from a single source.
//!
//! [`Bfs`] computes the shortest-path-by-edge-count tree rooted at a source vertex. Vertices
//! move WHITE → GRAY when enqueued and GRAY → BLACK once their adjacency list has been
//! fully expanded; a newly discovered vertex gets its predecessor's distance plus one.
//!
//! # Early Stop
//!
//! [`Bfs::with_target`] stops discovering as soon as the target is first reached. Because
//! breadth-first search discovers vertices in non-decreasing distance order, the target's
//! distance and path are still shortest. Vertices not yet discovered at that point report
//! no path, so use [`Bfs::new`] when the complete distance array is needed.

use std::collections::VecDeque;

use crate::{
    graph::{algorithms::Color, NodeId, Successors},
    Error, Result,
};

/// Distances and a shortest-path tree from one source vertex.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(NodeId::new(0), NodeId::new(1), ())?;
/// graph.add_edge(NodeId::new(1), NodeId::new(2), ())?;
/// graph.add_edge(NodeId::new(2), NodeId::new(3), ())?;
///
/// let bfs = Bfs::new(&graph, NodeId::new(0))?;
/// let distances: Vec<Option<usize>> = graph
///     .node_ids()
///     .map(|v| bfs.distance(v))
///     .collect::<Result<_>>()?;
/// assert_eq!(distances, vec![Some(0), Some(1), Some(2), Some(3)]);
///
/// let path: Vec<usize> = bfs.path_to(NodeId::new(3))?.iter().map(|v| v.index()).collect();
/// assert_eq!(path, vec![0, 1, 2, 3]);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Bfs {
    source: NodeId,
    target: Option<NodeId>,
    /// `None` is the unreachable sentinel
    distance: Vec<Option<usize>>,
    predecessor: Vec<Option<NodeId>>,
    /// Vertices in discovery order, starting with the source
    order: Vec<NodeId>,
}

impl Bfs {
    /// Runs a complete breadth-first search from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `source` is not a vertex.
    pub fn new<G: Successors>(graph: &G, source: NodeId) -> Result<Self> {
        Self::run(graph, source, None)
    }

    /// Runs a breadth-first search from `source` that stops once `target` is discovered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either vertex does not exist.
    pub fn with_target<G: Successors>(graph: &G, source: NodeId, target: NodeId) -> Result<Self> {
        graph.check_node(target)?;
        Self::run(graph, source, Some(target))
    }

    fn run<G: Successors>(graph: &G, source: NodeId, target: Option<NodeId>) -> Result<Self> {
        graph.check_node(source)?;

        let n = graph.node_count();
        let mut color = vec![Color::White; n];
        let mut distance = vec![None; n];
        let mut predecessor = vec![None; n];
        let mut order = vec![source];
        let mut queue = VecDeque::new();

        color[source.index()] = Color::Gray;
        distance[source.index()] = Some(0);
        queue.push_back(source);
        let mut found = target == Some(source);

        while !found {
            let Some(u) = queue.pop_front() else {
                break;
            };
            let next = distance[u.index()].map(|d| d + 1);

            for v in graph.successors(u) {
                if color[v.index()] == Color::White {
                    color[v.index()] = Color::Gray;
                    distance[v.index()] = next;
                    predecessor[v.index()] = Some(u);
                    order.push(v);
                    queue.push_back(v);
                }
                if target == Some(v) {
                    found = true;
                    break;
                }
            }
            color[u.index()] = Color::Black;
        }

        log::debug!(
            "bfs from {}: discovered {} of {} vertices",
            source,
            order.len(),
            n
        );

        Ok(Bfs {
            source,
            target,
            distance,
            predecessor,
            order,
        })
    }

    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the early-stop target, if one was given.
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    fn check(&self, node: NodeId) -> Result<()> {
        if node.index() < self.distance.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex: node.index(),
                count: self.distance.len(),
            })
        }
    }

    /// Returns the number of edges on a shortest path from the source, `None` if
    /// unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a vertex.
    pub fn distance(&self, node: NodeId) -> Result<Option<usize>> {
        self.check(node)?;
        Ok(self.distance[node.index()])
    }

    /// Returns the parent of `node` in the breadth-first tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a vertex.
    pub fn predecessor(&self, node: NodeId) -> Result<Option<NodeId>> {
        self.check(node)?;
        Ok(self.predecessor[node.index()])
    }

    /// Returns `true` if `node` was reached from the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a vertex.
    pub fn has_path_to(&self, node: NodeId) -> Result<bool> {
        Ok(self.distance(node)?.is_some())
    }

    /// Returns a shortest path from the source to `node`, both included.
    ///
    /// Among equally short paths the one through the first-discovered vertices is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a vertex and [`Error::Unreachable`]
    /// if no path exists.
    pub fn path_to(&self, node: NodeId) -> Result<Vec<NodeId>> {
        if !self.has_path_to(node)? {
            return Err(Error::Unreachable {
                from: self.source.index(),
                to: node.index(),
            });
        }

        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.predecessor[current.index()] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Ok(path)
    }

    /// Returns the reached vertices in discovery order, the source first.
    #[must_use]
    pub fn discovery_order(&self) -> &[NodeId] {
        &self.order
    }
}
