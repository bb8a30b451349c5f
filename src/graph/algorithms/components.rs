//! Connected components of undirected graphs.
//!
//! Two interchangeable implementations share the [`Components`] contract:
//!
//! - [`UnionFindComponents`] unions the endpoints of every edge in a [`DisjointSet`] and
//!   numbers the resulting roots in index order.
//! - [`DfsComponents`] assigns one component id per depth-first tree and keeps the forest's
//!   timestamps and predecessors for ancestor queries.
//!
//! Both produce the same partition of the vertices, though component ids may be numbered
//! differently. [`ComponentStrategy`] selects an implementation at runtime.

use strum::{Display, EnumIter};

use crate::{
    graph::{algorithms::dfs::Forest, GraphBase, NodeId, UndirectedGraph},
    utils::DisjointSet,
    Error, Result,
};

/// Queries shared by every component partition.
///
/// Component ids are dense in `[0, component_count())`.
pub trait Components {
    /// Returns the number of components.
    fn component_count(&self) -> usize;

    /// Returns the id of the component containing `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a vertex.
    fn component_id(&self, node: NodeId) -> Result<usize>;

    /// Returns the number of vertices in component `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponentId`] if `id >= component_count()`.
    fn size_of(&self, id: usize) -> Result<usize>;

    /// Returns `true` if `u` and `v` lie in the same component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either vertex does not exist.
    fn same_component(&self, u: NodeId, v: NodeId) -> Result<bool> {
        Ok(self.component_id(u)? == self.component_id(v)?)
    }
}

/// Selects how connected components are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ComponentStrategy {
    /// Incremental unions over every edge
    UnionFind,
    /// One depth-first pass over the whole graph
    DepthFirst,
}

impl ComponentStrategy {
    /// Computes the connected components of `graph` with this strategy.
    #[must_use]
    pub fn compute<E>(self, graph: &UndirectedGraph<E>) -> Box<dyn Components> {
        match self {
            ComponentStrategy::UnionFind => Box::new(UnionFindComponents::new(graph)),
            ComponentStrategy::DepthFirst => Box::new(DfsComponents::new(graph)),
        }
    }
}

/// Per-vertex component ids plus per-component sizes.
#[derive(Debug, Clone)]
struct Partition {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl Partition {
    fn component_id(&self, node: NodeId) -> Result<usize> {
        self.id.get(node.index()).copied().ok_or(Error::OutOfRange {
            vertex: node.index(),
            count: self.id.len(),
        })
    }

    fn size_of(&self, id: usize) -> Result<usize> {
        self.size.get(id).copied().ok_or(Error::InvalidComponentId {
            id,
            count: self.size.len(),
        })
    }
}

/// Connected components computed with a disjoint-set forest.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = Graph::new(5);
/// graph.add_edge(NodeId::new(0), NodeId::new(1), ())?;
/// graph.add_edge(NodeId::new(3), NodeId::new(4), ())?;
///
/// let components = UnionFindComponents::new(&graph);
/// assert_eq!(components.component_count(), 3);
/// assert!(components.same_component(NodeId::new(0), NodeId::new(1))?);
/// assert!(!components.same_component(NodeId::new(1), NodeId::new(3))?);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct UnionFindComponents {
    partition: Partition,
}

impl UnionFindComponents {
    /// Unions the endpoints of every edge of `graph`, then numbers the sets.
    #[must_use]
    pub fn new<E>(graph: &UndirectedGraph<E>) -> Self {
        let n = graph.node_count();
        let mut sets = DisjointSet::new(n);
        for edge in graph.edges() {
            sets.merge(edge.source().index(), edge.target().index());
        }

        let id = sets.labels();
        let mut size = vec![0; sets.set_count()];
        for x in 0..n {
            let root = sets.root(x);
            if root == x {
                size[id[x]] = sets.size_of_root(root);
            }
        }

        log::debug!(
            "union-find components: {} components over {} vertices",
            sets.set_count(),
            n
        );
        UnionFindComponents {
            partition: Partition { id, size },
        }
    }
}

impl Components for UnionFindComponents {
    fn component_count(&self) -> usize {
        self.partition.size.len()
    }

    fn component_id(&self, node: NodeId) -> Result<usize> {
        self.partition.component_id(node)
    }

    fn size_of(&self, id: usize) -> Result<usize> {
        self.partition.size_of(id)
    }
}

/// Connected components computed with a single depth-first pass.
///
/// Component `k` is the `k`-th depth-first tree, with roots taken in index order. The
/// forest's timestamps and predecessors remain available.
#[derive(Debug, Clone)]
pub struct DfsComponents {
    partition: Partition,
    forest: Forest,
}

impl DfsComponents {
    /// Runs the depth-first pass over `graph`.
    #[must_use]
    pub fn new<E>(graph: &UndirectedGraph<E>) -> Self {
        let forest = Forest::explore(graph, graph.node_ids());
        let mut size = vec![0; forest.tree_count];
        for &tree in &forest.tree_of {
            size[tree] += 1;
        }

        log::debug!(
            "dfs components: {} components over {} vertices",
            forest.tree_count,
            graph.node_count()
        );
        DfsComponents {
            partition: Partition {
                id: forest.tree_of.clone(),
                size,
            },
            forest,
        }
    }

    /// Returns `(discovery, finish)` times of `node` in the component forest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a vertex.
    pub fn times(&self, node: NodeId) -> Result<(usize, usize)> {
        self.partition.component_id(node)?;
        Ok((
            self.forest.discovery[node.index()],
            self.forest.finish[node.index()],
        ))
    }

    /// Returns the parent of `node` in its depth-first tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a vertex.
    pub fn predecessor(&self, node: NodeId) -> Result<Option<NodeId>> {
        self.partition.component_id(node)?;
        Ok(self.forest.predecessor[node.index()])
    }

    /// Returns `true` if `ancestor` is a proper ancestor of `node` in the forest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either vertex does not exist.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> Result<bool> {
        self.partition.component_id(ancestor)?;
        self.partition.component_id(node)?;
        Ok(self.forest.is_descendant(ancestor, node))
    }
}

impl Components for DfsComponents {
    fn component_count(&self) -> usize {
        self.partition.size.len()
    }

    fn component_id(&self, node: NodeId) -> Result<usize> {
        self.partition.component_id(node)
    }

    fn size_of(&self, id: usize) -> Result<usize> {
        self.partition.size_of(id)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{graph::Graph, test::graph};

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    fn sample() -> Graph {
        // {0, 2, 4}, {1, 3}, {5}
        graph(6, &[(0, 2), (2, 4), (3, 1)])
    }

    #[test]
    fn test_union_find_ids_follow_root_order() {
        let components = UnionFindComponents::new(&sample());

        assert_eq!(components.component_count(), 3);
        // Roots are 1 (for {1, 3}), 2 (for {0, 2, 4}) and 5
        assert_eq!(components.component_id(n(3)).unwrap(), 0);
        assert_eq!(components.component_id(n(0)).unwrap(), 1);
        assert_eq!(components.component_id(n(5)).unwrap(), 2);
        assert_eq!(components.size_of(1).unwrap(), 3);
        assert_eq!(components.size_of(0).unwrap(), 2);
        assert_eq!(components.size_of(2).unwrap(), 1);
    }

    #[test]
    fn test_dfs_ids_follow_tree_order() {
        let components = DfsComponents::new(&sample());

        assert_eq!(components.component_count(), 3);
        assert_eq!(components.component_id(n(0)).unwrap(), 0);
        assert_eq!(components.component_id(n(4)).unwrap(), 0);
        assert_eq!(components.component_id(n(1)).unwrap(), 1);
        assert_eq!(components.component_id(n(5)).unwrap(), 2);
        assert_eq!(components.size_of(0).unwrap(), 3);
    }

    #[test]
    fn test_dfs_forest_queries() {
        let components = DfsComponents::new(&sample());

        assert_eq!(components.times(n(0)).unwrap(), (1, 6));
        assert_eq!(components.predecessor(n(4)).unwrap(), Some(n(2)));
        assert!(components.is_ancestor(n(0), n(4)).unwrap());
        assert!(!components.is_ancestor(n(4), n(0)).unwrap());
        assert!(!components.is_ancestor(n(0), n(1)).unwrap());
    }

    #[test]
    fn test_strategies_agree_on_partition() {
        let graph = sample();
        let results: Vec<Box<dyn Components>> = ComponentStrategy::iter()
            .map(|strategy| strategy.compute(&graph))
            .collect();

        for u in 0..6 {
            for v in 0..6 {
                let answers: Vec<bool> = results
                    .iter()
                    .map(|c| c.same_component(n(u), n(v)).unwrap())
                    .collect();
                assert!(answers.windows(2).all(|w| w[0] == w[1]), "{u} {v}");
            }
        }
    }

    #[test]
    fn test_component_errors() {
        let graph = sample();
        for strategy in ComponentStrategy::iter() {
            let components = strategy.compute(&graph);
            assert_eq!(
                components.component_id(n(6)),
                Err(Error::OutOfRange {
                    vertex: 6,
                    count: 6
                })
            );
            assert_eq!(
                components.size_of(3),
                Err(Error::InvalidComponentId { id: 3, count: 3 })
            );
            assert!(components.same_component(n(0), n(9)).is_err());
        }
    }

    #[test]
    fn test_edgeless_graph() {
        let graph = Graph::new(3);
        for strategy in ComponentStrategy::iter() {
            let components = strategy.compute(&graph);
            assert_eq!(components.component_count(), 3);
            assert!(!components.same_component(n(0), n(1)).unwrap());
        }
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(ComponentStrategy::UnionFind.to_string(), "UnionFind");
        assert_eq!(ComponentStrategy::DepthFirst.to_string(), "DepthFirst");
    }
}
