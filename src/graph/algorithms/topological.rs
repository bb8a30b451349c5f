//! Orderings of directed acyclic graphs.
//!
//! - [`TopologicalSort`] lists vertices in reverse depth-first finishing order. That list
//!   is a topological order exactly when the search found no back edge.
//! - [`LevelPartition`] peels vertices by indegree: level 0 holds every vertex without
//!   incoming arcs, and level `i + 1` holds the vertices whose last remaining incoming arc
//!   came from level `i`. The level of a vertex is the length of the longest path ending
//!   in it.
//!
//! Both accept cyclic input. The cycle only surfaces when the ordering is requested.

use crate::{
    graph::{
        algorithms::{dfs::Forest, EdgeClass},
        DirectedGraph, GraphBase, NodeId, Successors,
    },
    Error, Result,
};

/// Topological order of a digraph, if it has one.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// // shirt -> tie -> jacket, shirt -> belt -> jacket
/// let mut graph = Digraph::new(4);
/// graph.add_edge(NodeId::new(0), NodeId::new(1), ())?;
/// graph.add_edge(NodeId::new(1), NodeId::new(3), ())?;
/// graph.add_edge(NodeId::new(0), NodeId::new(2), ())?;
/// graph.add_edge(NodeId::new(2), NodeId::new(3), ())?;
///
/// let sort = TopologicalSort::new(&graph);
/// assert!(sort.is_dag());
///
/// let order: Vec<usize> = sort.order()?.iter().map(|v| v.index()).collect();
/// assert_eq!(order, vec![0, 2, 1, 3]);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TopologicalSort {
    order: Vec<NodeId>,
    /// Index of each vertex within `order`
    position: Vec<usize>,
    dag: bool,
}

impl TopologicalSort {
    /// Runs one depth-first pass over `graph`, covering every vertex.
    #[must_use]
    pub fn new<E>(graph: &DirectedGraph<E>) -> Self {
        let forest = Forest::explore(graph, graph.node_ids());
        let dag = forest.classes[EdgeClass::Back as usize].is_empty();

        let mut order = forest.finish_order;
        order.reverse();
        let mut position = vec![0; order.len()];
        for (i, v) in order.iter().enumerate() {
            position[v.index()] = i;
        }

        log::debug!(
            "topological sort over {} vertices, dag: {}",
            order.len(),
            dag
        );
        TopologicalSort {
            order,
            position,
            dag,
        }
    }

    /// Returns `true` if the graph is acyclic.
    #[must_use]
    pub fn is_dag(&self) -> bool {
        self.dag
    }

    /// Returns the vertices in topological order: for every arc `u -> v`, `u` comes
    /// before `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotADag`] if the graph contains a cycle.
    pub fn order(&self) -> Result<&[NodeId]> {
        if !self.dag {
            return Err(Error::NotADag);
        }
        Ok(&self.order)
    }

    /// Returns the index of `node` within [`TopologicalSort::order`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotADag`] for a cyclic graph and [`Error::OutOfRange`] if `node`
    /// is not a vertex.
    pub fn position(&self, node: NodeId) -> Result<usize> {
        if !self.dag {
            return Err(Error::NotADag);
        }
        self.position
            .get(node.index())
            .copied()
            .ok_or(Error::OutOfRange {
                vertex: node.index(),
                count: self.position.len(),
            })
    }
}

/// Layering of a digraph by repeated removal of indegree-0 vertices.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = Digraph::new(4);
/// graph.add_edge(NodeId::new(0), NodeId::new(2), ())?;
/// graph.add_edge(NodeId::new(1), NodeId::new(2), ())?;
/// graph.add_edge(NodeId::new(2), NodeId::new(3), ())?;
/// graph.add_edge(NodeId::new(0), NodeId::new(3), ())?;
///
/// let levels = LevelPartition::new(&graph);
/// assert_eq!(levels.levels()?.len(), 3);
/// assert_eq!(levels.level_of(NodeId::new(3))?, Some(2));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LevelPartition {
    levels: Vec<Vec<NodeId>>,
    /// `None` for vertices that are on or behind a cycle
    level_of: Vec<Option<usize>>,
    placed: usize,
}

impl LevelPartition {
    /// Peels `graph` level by level until no vertex is freed.
    #[must_use]
    pub fn new<E>(graph: &DirectedGraph<E>) -> Self {
        let n = graph.node_count();
        let mut indegree = vec![0usize; n];
        for edge in graph.edges() {
            indegree[edge.target().index()] += 1;
        }

        let mut level_of = vec![None; n];
        let mut current: Vec<NodeId> = graph
            .node_ids()
            .filter(|v| indegree[v.index()] == 0)
            .collect();
        let mut levels = Vec::new();
        let mut placed = 0;

        while !current.is_empty() {
            let depth = levels.len();
            let mut next = Vec::new();
            for &u in &current {
                level_of[u.index()] = Some(depth);
                for v in graph.successors(u) {
                    indegree[v.index()] -= 1;
                    if indegree[v.index()] == 0 {
                        next.push(v);
                    }
                }
            }
            placed += current.len();
            levels.push(current);
            current = next;
        }

        log::debug!(
            "level partition: {} levels, {} of {} vertices placed",
            levels.len(),
            placed,
            n
        );
        LevelPartition {
            levels,
            level_of,
            placed,
        }
    }

    /// Returns `true` if some vertex could never be placed, i.e. the graph has a cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.placed < self.level_of.len()
    }

    /// Returns the levels, each listing its vertices in the order they were freed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] if the graph has a cycle.
    pub fn levels(&self) -> Result<&[Vec<NodeId>]> {
        if self.has_cycle() {
            return Err(Error::CycleDetected {
                placed: self.placed,
                total: self.level_of.len(),
            });
        }
        Ok(&self.levels)
    }

    /// Returns the level of `node`, or `None` if it was never placed because it lies on or
    /// after a cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a vertex.
    pub fn level_of(&self, node: NodeId) -> Result<Option<usize>> {
        self.level_of
            .get(node.index())
            .copied()
            .ok_or(Error::OutOfRange {
                vertex: node.index(),
                count: self.level_of.len(),
            })
    }
}
