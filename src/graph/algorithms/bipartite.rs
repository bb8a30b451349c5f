//! Bipartiteness by depth-first two-coloring.

use crate::{
    graph::{
        algorithms::{dfs::Forest, EdgeClass},
        GraphBase, NodeId, UndirectedGraph,
    },
    Error, Result,
};

/// Two-coloring of an undirected graph.
///
/// Every depth-first root gets color 1 and every tree child the color opposite to its
/// parent. The graph is bipartite iff no back edge joins two vertices of the same color.
/// When it is not, the colors are still reported but do not form a proper coloring.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// // Square 0 - 1 - 2 - 3 - 0
/// let mut graph = Graph::new(4);
/// for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
///     graph.add_edge(NodeId::new(u), NodeId::new(v), ())?;
/// }
///
/// let coloring = TwoColoring::new(&graph);
/// assert!(coloring.is_bipartite());
/// assert_eq!(coloring.color(NodeId::new(0))?, 1);
/// assert_eq!(coloring.color(NodeId::new(1))?, 2);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TwoColoring {
    color: Vec<u8>,
    bipartite: bool,
}

impl TwoColoring {
    /// Colors every vertex of `graph`.
    #[must_use]
    pub fn new<E>(graph: &UndirectedGraph<E>) -> Self {
        let forest = Forest::explore(graph, graph.node_ids());

        // Parents are discovered before their children
        let mut by_discovery: Vec<NodeId> = graph.node_ids().collect();
        by_discovery.sort_unstable_by_key(|v| forest.discovery[v.index()]);

        let mut color = vec![1u8; graph.node_count()];
        for v in by_discovery {
            if let Some(parent) = forest.predecessor[v.index()] {
                color[v.index()] = 3 - color[parent.index()];
            }
        }

        let bipartite = forest.classes[EdgeClass::Back as usize]
            .iter()
            .all(|e| color[e.from.index()] != color[e.to.index()]);

        log::debug!(
            "two-coloring over {} vertices, bipartite: {}",
            graph.node_count(),
            bipartite
        );
        TwoColoring { color, bipartite }
    }

    /// Returns `true` if no edge joins two vertices of the same color.
    #[must_use]
    pub fn is_bipartite(&self) -> bool {
        self.bipartite
    }

    /// Returns the color of `node`, either 1 or 2.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a vertex.
    pub fn color(&self, node: NodeId) -> Result<u8> {
        self.color
            .get(node.index())
            .copied()
            .ok_or(Error::OutOfRange {
                vertex: node.index(),
                count: self.color.len(),
            })
    }

    /// Returns the vertices of each color class, `(color 1, color 2)`, in index order.
    #[must_use]
    pub fn sides(&self) -> (Vec<NodeId>, Vec<NodeId>) {
        (0..self.color.len())
            .map(NodeId::new)
            .partition(|v| self.color[v.index()] == 1)
    }
}
