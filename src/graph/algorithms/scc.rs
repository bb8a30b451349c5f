//! Strongly connected components using Kosaraju's algorithm.
//!
//! The first pass runs a depth-first search over the graph and records vertices in
//! finishing order. The second pass searches the reverse graph, taking roots in reverse
//! finishing order; every tree of that second forest is exactly one strongly connected
//! component.
//!
//! Component ids follow the order in which the second pass discovers the components. That
//! order is also a topological order of the condensed graph: every arc between two
//! components points from a lower id to a higher id.

use crate::{
    graph::{
        algorithms::{dfs::Forest, Components},
        Digraph, DirectedGraph, GraphBase, NodeId,
    },
    Error, Result,
};

/// Partition of a digraph into strongly connected components, plus its condensation.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// // Cycle 0 -> 1 -> 2 -> 0 feeding into the cycle 3 <-> 4
/// let mut graph = Digraph::new(5);
/// for (u, v) in [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3)] {
///     graph.add_edge(NodeId::new(u), NodeId::new(v), ())?;
/// }
///
/// let scc = StronglyConnectedComponents::new(&graph);
/// assert_eq!(scc.component_count(), 2);
/// assert!(scc.same_component(NodeId::new(0), NodeId::new(2))?);
/// assert!(!scc.same_component(NodeId::new(2), NodeId::new(3))?);
///
/// let condensed = scc.component_graph();
/// assert_eq!(condensed.edge_count(), 1);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StronglyConnectedComponents {
    /// Component id per vertex
    id: Vec<usize>,
    /// Vertices of each component in second-pass discovery order
    members: Vec<Vec<NodeId>>,
    condensed: Digraph,
}

impl StronglyConnectedComponents {
    /// Computes the strongly connected components of `graph`.
    #[must_use]
    pub fn new<E>(graph: &DirectedGraph<E>) -> Self {
        let n = graph.node_count();
        let first = Forest::explore(graph, graph.node_ids());

        let mut reversed = Digraph::new(n);
        for edge in graph.edges() {
            reversed.insert(edge.target(), edge.source(), ());
        }
        let second = Forest::explore(&reversed, first.finish_order.iter().rev().copied());

        let count = second.tree_count;
        let id = second.tree_of;

        let mut by_discovery: Vec<NodeId> = graph.node_ids().collect();
        by_discovery.sort_unstable_by_key(|v| second.discovery[v.index()]);
        let mut members = vec![Vec::new(); count];
        for v in by_discovery {
            members[id[v.index()]].push(v);
        }

        let mut condensed = Digraph::new(count);
        for edge in graph.edges() {
            let (from, to) = (id[edge.source().index()], id[edge.target().index()]);
            if from != to {
                condensed.insert(NodeId::new(from), NodeId::new(to), ());
            }
        }

        log::debug!(
            "kosaraju: {} components over {} vertices, {} condensed arcs",
            count,
            n,
            condensed.edge_count()
        );

        StronglyConnectedComponents {
            id,
            members,
            condensed,
        }
    }

    /// Returns the components ordered by id, each listing its vertices in discovery order.
    #[must_use]
    pub fn components(&self) -> &[Vec<NodeId>] {
        &self.members
    }

    /// Returns the vertices of component `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponentId`] if `id >= component_count()`.
    pub fn component(&self, id: usize) -> Result<&[NodeId]> {
        self.members
            .get(id)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidComponentId {
                id,
                count: self.members.len(),
            })
    }

    /// Returns the condensed graph over `[0, component_count())`.
    ///
    /// It has one arc `a -> b` whenever some arc of the original graph leads from
    /// component `a` to a different component `b`. It is always acyclic, and `a < b` holds
    /// for every arc.
    #[must_use]
    pub fn component_graph(&self) -> &Digraph {
        &self.condensed
    }
}

impl Components for StronglyConnectedComponents {
    fn component_count(&self) -> usize {
        self.members.len()
    }

    fn component_id(&self, node: NodeId) -> Result<usize> {
        self.id.get(node.index()).copied().ok_or(Error::OutOfRange {
            vertex: node.index(),
            count: self.id.len(),
        })
    }

    fn size_of(&self, id: usize) -> Result<usize> {
        self.component(id).map(<[NodeId]>::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{algorithms::CycleFinder, Digraph},
        test::{digraph, nodes},
    };

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    #[test]
    fn test_scc_empty_graph() {
        let scc = StronglyConnectedComponents::new(&Digraph::new(0));
        assert_eq!(scc.component_count(), 0);
        assert!(scc.components().is_empty());
    }

    #[test]
    fn test_scc_single_node_self_loop() {
        let graph = digraph(1, &[(0, 0)]);
        let scc = StronglyConnectedComponents::new(&graph);

        assert_eq!(scc.component_count(), 1);
        assert_eq!(scc.component_graph().edge_count(), 0);
    }

    #[test]
    fn test_scc_linear_chain() {
        let graph = digraph(3, &[(0, 1), (1, 2)]);
        let scc = StronglyConnectedComponents::new(&graph);

        assert_eq!(scc.component_count(), 3);
        // Ids follow a topological order of the chain
        assert_eq!(scc.component_id(n(0)).unwrap(), 0);
        assert_eq!(scc.component_id(n(1)).unwrap(), 1);
        assert_eq!(scc.component_id(n(2)).unwrap(), 2);
    }

    #[test]
    fn test_scc_two_cycles() {
        let graph = digraph(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3)]);
        let scc = StronglyConnectedComponents::new(&graph);

        assert_eq!(scc.component_count(), 2);
        assert_eq!(scc.components()[0], nodes(&[0, 2, 1]));
        assert_eq!(scc.components()[1], nodes(&[3, 4]));
        assert_eq!(scc.size_of(0).unwrap(), 3);
        assert!(scc.component_graph().contains_edge(n(0), n(1)));
    }

    #[test]
    fn test_scc_textbook_graph() {
        // a=0 b=1 c=2 d=3 e=4 f=5 g=6 h=7
        let graph = digraph(
            8,
            &[
                (0, 1),
                (1, 2),
                (1, 4),
                (1, 5),
                (2, 3),
                (2, 6),
                (3, 2),
                (3, 7),
                (4, 0),
                (4, 5),
                (5, 6),
                (6, 5),
                (6, 7),
                (7, 7),
            ],
        );
        let scc = StronglyConnectedComponents::new(&graph);

        assert_eq!(scc.component_count(), 4);
        assert!(scc.same_component(n(0), n(4)).unwrap());
        assert!(scc.same_component(n(1), n(4)).unwrap());
        assert!(scc.same_component(n(2), n(3)).unwrap());
        assert!(scc.same_component(n(5), n(6)).unwrap());
        assert!(!scc.same_component(n(0), n(2)).unwrap());
        assert!(!scc.same_component(n(6), n(7)).unwrap());

        // {a, b, e} -> {c, d}, {f, g} -> {h}
        let condensed = scc.component_graph();
        assert_eq!(condensed.edge_count(), 5);
        for edge in condensed.edges() {
            assert!(edge.source() < edge.target());
        }
        assert!(!CycleFinder::new(condensed).has_cycle());
    }

    #[test]
    fn test_scc_condensed_arcs_are_deduplicated() {
        // Three arcs from {0, 1} into {2}
        let graph = digraph(3, &[(0, 1), (1, 0), (0, 2), (1, 2)]);
        let scc = StronglyConnectedComponents::new(&graph);

        assert_eq!(scc.component_count(), 2);
        assert_eq!(scc.component_graph().edge_count(), 1);
    }

    #[test]
    fn test_scc_errors() {
        let graph = digraph(2, &[(0, 1)]);
        let scc = StronglyConnectedComponents::new(&graph);

        assert_eq!(
            scc.component_id(n(2)),
            Err(Error::OutOfRange {
                vertex: 2,
                count: 2
            })
        );
        assert_eq!(
            scc.component(2),
            Err(Error::InvalidComponentId { id: 2, count: 2 })
        );
        assert!(scc.same_component(n(5), n(0)).is_err());
    }
}
