//! Minimum spanning trees of connected, undirected, weighted graphs.
//!
//! - [`Kruskal`] sorts all edges by ascending cost (stable, so equal-cost edges keep their
//!   insertion order) and accepts every edge whose endpoints lie in different sets of a
//!   [`DisjointSet`].
//! - [`Prim`] grows a tree from a root, repeatedly extracting the vertex with the cheapest
//!   known connecting edge from a binary heap. Instead of decrease-key, improved keys are
//!   pushed again and stale heap entries are skipped when popped.
//!
//! Both fail with [`Error::GraphNotConnected`] on disconnected input and with
//! [`Error::InvalidEdge`] when some edge cost is NaN or infinite. On the same graph they
//! always agree on the total cost even when ties make their edge sets differ: every minimum
//! spanning tree has the same multiset of edge costs, and both sum it in ascending order.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{
    graph::{Cost, Edge, GraphBase, NodeId, UndirectedGraph},
    utils::DisjointSet,
    Error, Result,
};

/// Minimum spanning tree computed with Kruskal's algorithm.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = WeightedGraph::new(4);
/// graph.add_edge(NodeId::new(0), NodeId::new(1), 1.0)?;
/// graph.add_edge(NodeId::new(1), NodeId::new(2), 4.0)?;
/// graph.add_edge(NodeId::new(2), NodeId::new(3), 2.0)?;
/// graph.add_edge(NodeId::new(0), NodeId::new(2), 3.0)?;
///
/// let mst = Kruskal::new(&graph)?;
/// assert_eq!(mst.total_cost(), 6.0);
/// assert_eq!(mst.edges().len(), 3);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Kruskal {
    tree: Vec<Edge<f64>>,
    total: f64,
}

impl Kruskal {
    /// Computes a minimum spanning tree of `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`] if an edge cost is not finite and
    /// [`Error::GraphNotConnected`] unless the graph forms exactly one component.
    pub fn new<E: Cost>(graph: &UndirectedGraph<E>) -> Result<Self> {
        check_costs(graph)?;

        let mut sorted: Vec<&Edge<E>> = graph.edges().collect();
        sorted.sort_by(|a, b| a.cmp_by_cost(b));

        let mut sets = DisjointSet::new(graph.node_count());
        let mut tree = Vec::with_capacity(graph.node_count().saturating_sub(1));
        let mut total = 0.0;

        for edge in sorted {
            if sets.merge(edge.source().index(), edge.target().index()) {
                log::trace!(
                    "kruskal: accept {} - {} ({})",
                    edge.source(),
                    edge.target(),
                    edge.cost()
                );
                total += edge.cost();
                tree.push(Edge::new(edge.source(), edge.target(), edge.cost()));
            }
        }

        if sets.set_count() != 1 {
            return Err(Error::GraphNotConnected {
                components: sets.set_count(),
            });
        }

        log::debug!("kruskal: {} edges, total cost {}", tree.len(), total);
        Ok(Kruskal { tree, total })
    }

    /// Returns the tree edges in the order they were accepted, i.e. by ascending cost.
    #[must_use]
    pub fn edges(&self) -> &[Edge<f64>] {
        &self.tree
    }

    /// Returns the sum of the costs of the tree edges.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.total
    }
}

/// Rejects graphs carrying a NaN or infinite edge cost.
fn check_costs<E: Cost>(graph: &UndirectedGraph<E>) -> Result<()> {
    match graph.edges().find(|edge| !edge.cost().is_finite()) {
        Some(edge) => Err(invalid_edge!(
            edge.source().index(),
            edge.target().index(),
            "cost {} is not finite",
            edge.cost()
        )),
        None => Ok(()),
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest key first.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    key: f64,
    node: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Minimum spanning tree computed with Prim's algorithm.
///
/// The root's key starts at 0 and every other key at +∞. When a vertex leaves the queue,
/// each neighbor still in the queue whose connecting edge is cheaper than its current key
/// has its key replaced, and a running total is adjusted by the difference. The reported
/// [`total_cost`](Prim::total_cost) is the sum of the final keys taken in ascending order,
/// which matches [`Kruskal::total_cost`] exactly.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = WeightedGraph::new(3);
/// graph.add_edge(NodeId::new(0), NodeId::new(1), 1.0)?;
/// graph.add_edge(NodeId::new(1), NodeId::new(2), 2.0)?;
/// graph.add_edge(NodeId::new(0), NodeId::new(2), 3.0)?;
///
/// let mst = Prim::with_root(&graph, NodeId::new(2))?;
/// assert_eq!(mst.total_cost(), 3.0);
/// assert_eq!(mst.root(), NodeId::new(2));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Prim {
    root: NodeId,
    tree: Vec<Edge<f64>>,
    total: f64,
}

impl Prim {
    /// Computes a minimum spanning tree of `graph` rooted at vertex 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphNotConnected`] if some vertex cannot be reached,
    /// [`Error::InvalidEdge`] if an edge cost is not finite, and [`Error::OutOfRange`] for a
    /// graph without vertices.
    pub fn new<E: Cost>(graph: &UndirectedGraph<E>) -> Result<Self> {
        Self::with_root(graph, NodeId::new(0))
    }

    /// Computes a minimum spanning tree of `graph` grown from `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `root` is not a vertex, [`Error::InvalidEdge`] if
    /// an edge cost is not finite, and [`Error::GraphNotConnected`] if some vertex cannot be
    /// reached from it.
    pub fn with_root<E: Cost>(graph: &UndirectedGraph<E>, root: NodeId) -> Result<Self> {
        graph.check_node(root)?;
        check_costs(graph)?;

        let n = graph.node_count();
        let mut key = vec![f64::INFINITY; n];
        let mut predecessor: Vec<Option<NodeId>> = vec![None; n];
        let mut in_tree = vec![false; n];
        let mut queue = BinaryHeap::new();
        let mut running = 0.0;

        key[root.index()] = 0.0;
        queue.push(Candidate {
            key: 0.0,
            node: root,
        });

        while let Some(Candidate { node: u, .. }) = queue.pop() {
            if in_tree[u.index()] {
                continue;
            }
            in_tree[u.index()] = true;

            for edge in graph.adjacent(u)? {
                let Some(v) = edge.other(u) else {
                    continue;
                };
                let cost = edge.cost();
                if !in_tree[v.index()] && cost < key[v.index()] {
                    if key[v.index()].is_finite() {
                        running -= key[v.index()];
                    }
                    running += cost;
                    key[v.index()] = cost;
                    predecessor[v.index()] = Some(u);
                    queue.push(Candidate { key: cost, node: v });
                }
            }
        }

        if key.iter().any(|k| k.is_infinite()) {
            let mut sets = DisjointSet::new(n);
            for edge in graph.edges() {
                sets.merge(edge.source().index(), edge.target().index());
            }
            return Err(Error::GraphNotConnected {
                components: sets.set_count(),
            });
        }

        let tree: Vec<Edge<f64>> = graph
            .node_ids()
            .filter_map(|v| predecessor[v.index()].map(|u| Edge::new(u, v, key[v.index()])))
            .collect();

        let mut costs: Vec<f64> = tree.iter().map(Edge::cost).collect();
        costs.sort_by(f64::total_cmp);
        let total = costs.iter().fold(0.0, |sum, cost| sum + cost);

        log::trace!("prim from {}: running total {}", root, running);
        log::debug!(
            "prim from {}: {} edges, total cost {}",
            root,
            tree.len(),
            total
        );
        Ok(Prim { root, tree, total })
    }

    /// Returns the root the tree was grown from.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the tree edges `(parent, child, key)` for every non-root vertex, in vertex
    /// order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<f64>] {
        &self.tree
    }

    /// Returns the sum of the costs of the tree edges.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.total
    }
}
