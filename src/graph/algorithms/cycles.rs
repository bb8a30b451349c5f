//! Cycle extraction for directed graphs.
//!
//! [`CycleFinder`] runs an iterative depth-first search whose explicit stack holds exactly
//! the vertices on the current search path (the GRAY vertices). The first arc that reaches
//! a GRAY vertex closes a cycle: that vertex is the cycle's root, and the cycle is the
//! suffix of the stack starting at the root. The search stops right there, so the stack
//! is never popped past the cycle and later parts of the graph cannot disturb it.

use crate::{
    graph::{algorithms::Color, DirectedGraph, GraphBase, NodeId, Successors},
    Error, Result,
};

/// Result of a cycle search over a digraph.
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
/// let finder = CycleFinder::new(&graph);
/// assert!(finder.has_cycle());
///
/// let cycle: Vec<usize> = finder.cycle()?.iter().map(|v| v.index()).collect();
/// assert_eq!(cycle, vec![0, 1, 2, 0]);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CycleFinder {
    /// Closed vertex sequence `[root, ..., root]`, empty when acyclic
    cycle: Vec<NodeId>,
}

impl CycleFinder {
    /// Searches `graph` for a cycle, taking roots in index order.
    #[must_use]
    pub fn new<E>(graph: &DirectedGraph<E>) -> Self {
        let mut color = vec![Color::White; graph.node_count()];
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        for start in graph.node_ids() {
            if color[start.index()] != Color::White {
                continue;
            }
            color[start.index()] = Color::Gray;
            stack.push((start, 0));

            while let Some(&(u, position)) = stack.last() {
                let Some((_, v)) = graph.neighbor_at(u, position) else {
                    stack.pop();
                    color[u.index()] = Color::Black;
                    continue;
                };
                if let Some(frame) = stack.last_mut() {
                    frame.1 += 1;
                }

                match color[v.index()] {
                    Color::White => {
                        color[v.index()] = Color::Gray;
                        stack.push((v, 0));
                    }
                    Color::Gray => {
                        let cycle = Self::close(&stack, v);
                        log::debug!("cycle of length {} found at {}", cycle.len() - 1, v);
                        return CycleFinder { cycle };
                    }
                    Color::Black => {}
                }
            }
        }

        log::debug!("no cycle in {} vertices", graph.node_count());
        CycleFinder { cycle: Vec::new() }
    }

    /// Cuts the search path at `root` and appends `root` again.
    fn close(stack: &[(NodeId, usize)], root: NodeId) -> Vec<NodeId> {
        let start = stack.iter().rposition(|&(v, _)| v == root).unwrap_or(0);
        stack[start..]
            .iter()
            .map(|&(v, _)| v)
            .chain(std::iter::once(root))
            .collect()
    }

    /// Returns `true` if the search found a cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        !self.cycle.is_empty()
    }

    /// Returns the cycle found as a closed sequence: the first and last vertices are the
    /// same, and every consecutive pair is an arc of the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCycle`] if the graph is acyclic.
    pub fn cycle(&self) -> Result<&[NodeId]> {
        if self.cycle.is_empty() {
            return Err(Error::NoCycle);
        }
        Ok(&self.cycle)
    }
}
