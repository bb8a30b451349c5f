//! Depth-first forests with timestamps and edge classification.
//!
//! [`Dfs`] runs a depth-first search from every undiscovered vertex in index order, so
//! the resulting forest covers the whole vertex set. A single clock is threaded through
//! the traversal: it ticks once when a vertex is discovered and once when it finishes, and
//! is never reset between trees.
//!
//! Every edge is classified exactly once:
//!
//! | Target color | Class |
//! |--------------|-------|
//! | WHITE | [`EdgeClass::Tree`] |
//! | GRAY | [`EdgeClass::Back`] |
//! | BLACK, discovered after the source | [`EdgeClass::Forward`] |
//! | BLACK, discovered before the source | [`EdgeClass::Cross`] |
//!
//! Undirected edges are classified from the endpoint that scans them first; the mirrored
//! copy in the other endpoint's adjacency list is skipped, so undirected graphs only ever
//! produce tree and back edges.
//!
//! The traversal is iterative. An explicit stack of `(vertex, adjacency position)` frames
//! replaces recursion, so arbitrarily deep graphs cannot overflow the call stack.

use strum::{Display, EnumCount, EnumIter};

use crate::{
    graph::{algorithms::Color, EdgeId, NodeId, Successors},
    Error, Result,
};

/// Classification of an edge relative to a depth-first forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EdgeClass {
    /// The edge discovered its target; forest edges.
    Tree,
    /// The edge leads to an ancestor that is still on the search path.
    Back,
    /// The edge leads to an already finished descendant.
    Forward,
    /// The edge leads to an already finished vertex in another subtree or tree.
    Cross,
}

/// An edge as it was traversed by the search, oriented from the scanning vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraversedEdge {
    /// Id of the edge in the searched graph
    pub edge: EdgeId,
    /// Vertex whose adjacency list contained the edge
    pub from: NodeId,
    /// Vertex the edge led to
    pub to: NodeId,
}

/// Raw output of one forest traversal, shared by the DFS-based algorithms.
#[derive(Debug, Clone)]
pub(crate) struct Forest {
    pub(crate) discovery: Vec<usize>,
    pub(crate) finish: Vec<usize>,
    pub(crate) predecessor: Vec<Option<NodeId>>,
    /// Index of the tree each vertex belongs to, in root order
    pub(crate) tree_of: Vec<usize>,
    pub(crate) tree_count: usize,
    /// Vertices in the order they turned BLACK
    pub(crate) finish_order: Vec<NodeId>,
    pub(crate) classes: [Vec<TraversedEdge>; EdgeClass::COUNT],
}

impl Forest {
    /// Runs a depth-first search from each root that is still WHITE when reached.
    ///
    /// Vertices never reachable from `roots` keep discovery time 0.
    pub(crate) fn explore<G, I>(graph: &G, roots: I) -> Forest
    where
        G: Successors,
        I: IntoIterator<Item = NodeId>,
    {
        let n = graph.node_count();
        let mut forest = Forest {
            discovery: vec![0; n],
            finish: vec![0; n],
            predecessor: vec![None; n],
            tree_of: vec![usize::MAX; n],
            tree_count: 0,
            finish_order: Vec::with_capacity(n),
            classes: Default::default(),
        };
        let mut color = vec![Color::White; n];
        let mut classified = vec![false; graph.edge_count()];
        let mut clock = 0usize;
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        for root in roots {
            if color[root.index()] != Color::White {
                continue;
            }

            let tree = forest.tree_count;
            forest.tree_count += 1;

            clock += 1;
            forest.discovery[root.index()] = clock;
            forest.tree_of[root.index()] = tree;
            color[root.index()] = Color::Gray;
            stack.push((root, 0));

            while let Some(&(u, position)) = stack.last() {
                let Some((edge, v)) = graph.neighbor_at(u, position) else {
                    stack.pop();
                    color[u.index()] = Color::Black;
                    clock += 1;
                    forest.finish[u.index()] = clock;
                    forest.finish_order.push(u);
                    continue;
                };

                if let Some(frame) = stack.last_mut() {
                    frame.1 += 1;
                }
                if classified[edge.index()] {
                    continue;
                }
                classified[edge.index()] = true;

                let class = match color[v.index()] {
                    Color::White => EdgeClass::Tree,
                    Color::Gray => EdgeClass::Back,
                    Color::Black if forest.discovery[u.index()] < forest.discovery[v.index()] => {
                        EdgeClass::Forward
                    }
                    Color::Black => EdgeClass::Cross,
                };
                forest.classes[class as usize].push(TraversedEdge { edge, from: u, to: v });

                if class == EdgeClass::Tree {
                    clock += 1;
                    forest.discovery[v.index()] = clock;
                    forest.predecessor[v.index()] = Some(u);
                    forest.tree_of[v.index()] = tree;
                    color[v.index()] = Color::Gray;
                    stack.push((v, 0));
                }
            }
        }

        forest
    }

    /// Returns `true` if `v` is a proper descendant of `u` in the forest.
    pub(crate) fn is_descendant(&self, u: NodeId, v: NodeId) -> bool {
        let (u, v) = (u.index(), v.index());
        self.discovery[u] < self.discovery[v] && self.finish[v] < self.finish[u]
    }

    pub(crate) fn edges(&self, class: EdgeClass) -> &[TraversedEdge] {
        &self.classes[class as usize]
    }
}

/// A depth-first forest over every vertex of a graph.
///
/// The search runs to completion on construction. The result borrows the graph so that
/// path queries not certified by the forest can fall back to a fresh search.
///
/// # Examples
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let mut graph = Digraph::new(3);
/// graph.add_edge(NodeId::new(0), NodeId::new(1), ())?;
/// graph.add_edge(NodeId::new(1), NodeId::new(2), ())?;
/// graph.add_edge(NodeId::new(2), NodeId::new(0), ())?;
///
/// let dfs = Dfs::new(&graph);
/// assert_eq!(dfs.times(NodeId::new(0))?, (1, 6));
/// assert!(dfs.has_back_edges());
/// assert_eq!(dfs.tree_edges()?.len(), 2);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub struct Dfs<'g, G: Successors> {
    graph: &'g G,
    forest: Forest,
}

impl<'g, G: Successors> Dfs<'g, G> {
    /// Builds the depth-first forest of `graph`, visiting roots in index order.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        let forest = Forest::explore(graph, graph.node_ids());
        log::debug!(
            "dfs: {} trees, {} tree / {} back / {} forward / {} cross edges",
            forest.tree_count,
            forest.edges(EdgeClass::Tree).len(),
            forest.edges(EdgeClass::Back).len(),
            forest.edges(EdgeClass::Forward).len(),
            forest.edges(EdgeClass::Cross).len()
        );
        Dfs { graph, forest }
    }

    /// Returns the parent of `node` in the forest, `None` for tree roots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a vertex.
    pub fn predecessor(&self, node: NodeId) -> Result<Option<NodeId>> {
        self.graph.check_node(node)?;
        Ok(self.forest.predecessor[node.index()])
    }

    /// Returns `(discovery, finish)` times of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `node` is not a vertex.
    pub fn times(&self, node: NodeId) -> Result<(usize, usize)> {
        self.graph.check_node(node)?;
        Ok((
            self.forest.discovery[node.index()],
            self.forest.finish[node.index()],
        ))
    }

    /// Returns the number of trees in the forest.
    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.forest.tree_count
    }

    /// Returns vertices in the order they finished.
    #[must_use]
    pub fn finish_order(&self) -> &[NodeId] {
        &self.forest.finish_order
    }

    /// Returns the tree edges, which form the depth-first forest itself.
    ///
    /// Unlike [`tree_edges`](Self::tree_edges) an edgeless forest is not an error.
    #[must_use]
    pub fn forest(&self) -> &[TraversedEdge] {
        self.forest.edges(EdgeClass::Tree)
    }

    /// Returns `true` if at least one edge fell into `class`.
    #[must_use]
    pub fn has_edges_of(&self, class: EdgeClass) -> bool {
        !self.forest.edges(class).is_empty()
    }

    /// Returns the edges classified as `class`, in classification order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchEdgeClass`] if the bucket is empty.
    pub fn edges_of(&self, class: EdgeClass) -> Result<&[TraversedEdge]> {
        let edges = self.forest.edges(class);
        if edges.is_empty() {
            Err(Error::NoSuchEdgeClass(class))
        } else {
            Ok(edges)
        }
    }

    /// Returns `true` if the forest has at least one tree edge.
    #[must_use]
    pub fn has_tree_edges(&self) -> bool {
        self.has_edges_of(EdgeClass::Tree)
    }

    /// Returns the tree edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchEdgeClass`] if there are none.
    pub fn tree_edges(&self) -> Result<&[TraversedEdge]> {
        self.edges_of(EdgeClass::Tree)
    }

    /// Returns `true` if the search found a back edge.
    ///
    /// For directed graphs this holds exactly when the graph has a cycle.
    #[must_use]
    pub fn has_back_edges(&self) -> bool {
        self.has_edges_of(EdgeClass::Back)
    }

    /// Returns the back edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchEdgeClass`] if there are none.
    pub fn back_edges(&self) -> Result<&[TraversedEdge]> {
        self.edges_of(EdgeClass::Back)
    }

    /// Returns `true` if the search found a forward edge.
    #[must_use]
    pub fn has_forward_edges(&self) -> bool {
        self.has_edges_of(EdgeClass::Forward)
    }

    /// Returns the forward edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchEdgeClass`] if there are none.
    pub fn forward_edges(&self) -> Result<&[TraversedEdge]> {
        self.edges_of(EdgeClass::Forward)
    }

    /// Returns `true` if the search found a cross edge.
    #[must_use]
    pub fn has_cross_edges(&self) -> bool {
        self.has_edges_of(EdgeClass::Cross)
    }

    /// Returns the cross edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchEdgeClass`] if there are none.
    pub fn cross_edges(&self) -> Result<&[TraversedEdge]> {
        self.edges_of(EdgeClass::Cross)
    }

    /// Returns `true` if `v` can be reached from `u`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either vertex does not exist.
    pub fn has_path(&self, u: NodeId, v: NodeId) -> Result<bool> {
        self.graph.check_node(u)?;
        self.graph.check_node(v)?;

        if self.forest.is_descendant(u, v) || (!G::DIRECTED && self.forest.is_descendant(v, u))
        {
            return Ok(true);
        }
        Ok(search_path(self.graph, u, v).is_some())
    }

    /// Returns a path from `u` to `v`, both included.
    ///
    /// When `v` descends from `u` in the forest the path follows tree edges. In undirected
    /// graphs the reverse relation is used as well. Otherwise a separate depth-first search
    /// from `u` looks for `v`, so the returned path is not necessarily a shortest one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either vertex does not exist and
    /// [`Error::Unreachable`] if `v` cannot be reached from `u`.
    pub fn path_between(&self, u: NodeId, v: NodeId) -> Result<Vec<NodeId>> {
        self.graph.check_node(u)?;
        self.graph.check_node(v)?;

        if self.forest.is_descendant(u, v) {
            let mut path = self.climb(v, u);
            path.reverse();
            return Ok(path);
        }
        if !G::DIRECTED && self.forest.is_descendant(v, u) {
            return Ok(self.climb(u, v));
        }

        search_path(self.graph, u, v).ok_or(Error::Unreachable {
            from: u.index(),
            to: v.index(),
        })
    }

    /// Walks predecessor links from `from` up to its ancestor `to`, both included.
    fn climb(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        let mut path = vec![from];
        let mut current = from;
        while current != to {
            match self.forest.predecessor[current.index()] {
                Some(parent) => {
                    path.push(parent);
                    current = parent;
                }
                None => break,
            }
        }
        path
    }
}

/// Depth-first search from `u` that stops at the first discovery of `v`.
fn search_path<G: Successors>(graph: &G, u: NodeId, v: NodeId) -> Option<Vec<NodeId>> {
    let mut visited = vec![false; graph.node_count()];
    let mut stack: Vec<(NodeId, usize)> = vec![(u, 0)];
    visited[u.index()] = true;

    while let Some(&(x, position)) = stack.last() {
        if x == v {
            return Some(stack.into_iter().map(|(node, _)| node).collect());
        }
        match graph.neighbor_at(x, position) {
            Some((_, y)) => {
                if let Some(frame) = stack.last_mut() {
                    frame.1 += 1;
                }
                if !visited[y.index()] {
                    visited[y.index()] = true;
                    stack.push((y, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        graph::{Digraph, Graph},
        test::{digraph, graph},
    };

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    fn pairs(edges: &[TraversedEdge]) -> Vec<(usize, usize)> {
        edges
            .iter()
            .map(|e| (e.from.index(), e.to.index()))
            .collect()
    }

    #[test]
    fn test_dfs_empty_graph() {
        let graph = Digraph::new(0);
        let dfs = Dfs::new(&graph);
        assert_eq!(dfs.tree_count(), 0);
        for class in EdgeClass::iter() {
            assert_eq!(dfs.edges_of(class), Err(Error::NoSuchEdgeClass(class)));
        }
    }

    #[test]
    fn test_dfs_times_share_one_clock() {
        // Two trees: 0 -> 1 and 2
        let graph = digraph(3, &[(0, 1)]);
        let dfs = Dfs::new(&graph);

        assert_eq!(dfs.times(n(0)).unwrap(), (1, 4));
        assert_eq!(dfs.times(n(1)).unwrap(), (2, 3));
        assert_eq!(dfs.times(n(2)).unwrap(), (5, 6));
        assert_eq!(dfs.tree_count(), 2);
        assert_eq!(dfs.predecessor(n(1)).unwrap(), Some(n(0)));
        assert_eq!(dfs.predecessor(n(2)).unwrap(), None);
    }

    #[test]
    fn test_dfs_classifies_all_four_kinds() {
        // 0 -> 1 -> 2, 0 -> 2 (forward), 2 -> 0 (back), 3 -> 1 (cross)
        let graph = digraph(4, &[(0, 1), (1, 2), (0, 2), (2, 0), (3, 1)]);
        let dfs = Dfs::new(&graph);

        assert_eq!(pairs(dfs.tree_edges().unwrap()), vec![(0, 1), (1, 2)]);
        assert_eq!(pairs(dfs.back_edges().unwrap()), vec![(2, 0)]);
        assert_eq!(pairs(dfs.forward_edges().unwrap()), vec![(0, 2)]);
        assert_eq!(pairs(dfs.cross_edges().unwrap()), vec![(3, 1)]);
    }

    #[test]
    fn test_dfs_every_edge_classified_once() {
        let graph = digraph(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 3), (2, 4)]);
        let dfs = Dfs::new(&graph);

        let total: usize = EdgeClass::iter()
            .map(|class| dfs.edges_of(class).map_or(0, <[TraversedEdge]>::len))
            .sum();
        assert_eq!(total, graph.edge_count());
    }

    #[test]
    fn test_dfs_undirected_has_no_forward_or_cross() {
        // Triangle plus a pendant vertex
        let graph = graph(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let dfs = Dfs::new(&graph);

        assert!(!dfs.has_forward_edges());
        assert!(!dfs.has_cross_edges());
        assert_eq!(dfs.tree_edges().unwrap().len(), 3);
        assert_eq!(dfs.back_edges().unwrap().len(), 1);
    }

    #[test]
    fn test_dfs_undirected_tree_has_no_back_edges() {
        let graph = graph(4, &[(0, 1), (1, 2), (1, 3)]);
        let dfs = Dfs::new(&graph);
        assert!(!dfs.has_back_edges());
        assert_eq!(dfs.forest().len(), 3);
    }

    #[test]
    fn test_dfs_self_loop_is_back_edge() {
        let graph = digraph(1, &[(0, 0)]);
        let dfs = Dfs::new(&graph);
        assert_eq!(pairs(dfs.back_edges().unwrap()), vec![(0, 0)]);
    }

    #[test]
    fn test_dfs_path_through_forest() {
        let graph = digraph(4, &[(0, 1), (1, 2), (2, 3)]);
        let dfs = Dfs::new(&graph);

        assert!(dfs.has_path(n(1), n(3)).unwrap());
        assert_eq!(dfs.path_between(n(1), n(3)).unwrap(), vec![n(1), n(2), n(3)]);
        assert!(!dfs.has_path(n(3), n(0)).unwrap());
        assert_eq!(
            dfs.path_between(n(3), n(0)),
            Err(Error::Unreachable { from: 3, to: 0 })
        );
    }

    #[test]
    fn test_dfs_path_outside_forest() {
        // 1 is discovered from 0, so 2 -> 1 is a cross edge not certified by the forest
        let graph = digraph(3, &[(0, 1), (2, 1)]);
        let dfs = Dfs::new(&graph);

        assert!(dfs.has_path(n(2), n(1)).unwrap());
        assert_eq!(dfs.path_between(n(2), n(1)).unwrap(), vec![n(2), n(1)]);
    }

    #[test]
    fn test_dfs_undirected_path_upwards() {
        let graph: Graph = graph(3, &[(0, 1), (1, 2)]);
        let dfs = Dfs::new(&graph);

        assert!(dfs.has_path(n(2), n(0)).unwrap());
        assert_eq!(dfs.path_between(n(2), n(0)).unwrap(), vec![n(2), n(1), n(0)]);
        assert_eq!(dfs.path_between(n(2), n(1)).unwrap(), vec![n(2), n(1)]);
    }

    #[test]
    fn test_dfs_path_to_self() {
        let graph = digraph(2, &[]);
        let dfs = Dfs::new(&graph);
        assert_eq!(dfs.path_between(n(1), n(1)).unwrap(), vec![n(1)]);
    }

    #[test]
    fn test_dfs_out_of_range() {
        let graph = digraph(2, &[(0, 1)]);
        let dfs = Dfs::new(&graph);
        assert!(matches!(dfs.times(n(2)), Err(Error::OutOfRange { .. })));
        assert!(matches!(dfs.has_path(n(0), n(9)), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_dfs_deep_chain_is_iterative() {
        let count = 200_000;
        let arcs: Vec<(usize, usize)> = (0..count - 1).map(|i| (i, i + 1)).collect();
        let graph = digraph(count, &arcs);
        let dfs = Dfs::new(&graph);

        assert_eq!(dfs.times(n(count - 1)).unwrap(), (count, count + 1));
        assert_eq!(dfs.tree_count(), 1);
    }
}
