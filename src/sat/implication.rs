//! The implication graph of a 2-CNF formula.

use crate::{
    graph::{Digraph, NodeId},
    sat::{Clause, Literal},
    Error, Result,
};

/// Implication graph of a 2-CNF formula.
///
/// With `n` variables the graph has `2n` vertices: the positive literal of variable `x`
/// is vertex `x - 1` and its negation is vertex `n + x - 1`. Each clause `(a ∨ b)` is
/// equivalent to the implications `¬a → b` and `¬b → a`, and contributes those two arcs.
/// Repeated implications are stored once.
///
/// # Examples
///
/// ```rust
/// use graphscope::sat::{ImplicationGraph, Literal};
///
/// let x1 = Literal::new(1)?;
/// let x2 = Literal::new(2)?;
/// let implications = ImplicationGraph::new(&[(x1, !x2)]);
///
/// assert_eq!(implications.variable_count(), 2);
/// assert_eq!(implications.graph().node_count(), 4);
/// assert_eq!(implications.vertex(!x2)?.index(), 3);
/// assert_eq!(implications.negated_vertex(x1)?.index(), 2);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ImplicationGraph {
    graph: Digraph,
    variables: usize,
}

impl ImplicationGraph {
    /// Builds the implication graph of `clauses`.
    ///
    /// The variable count is the largest variable index used by any clause.
    #[must_use]
    pub fn new(clauses: &[Clause]) -> Self {
        let variables = clauses
            .iter()
            .map(|&(a, b)| a.variable().max(b.variable()))
            .max()
            .unwrap_or(0);

        let mut graph = Digraph::new(2 * variables);
        for &(a, b) in clauses {
            graph.insert(Self::map(variables, !a), Self::map(variables, b), ());
            graph.insert(Self::map(variables, !b), Self::map(variables, a), ());
        }

        log::debug!(
            "implication graph: {} variables, {} clauses, {} arcs",
            variables,
            clauses.len(),
            graph.edge_count()
        );
        ImplicationGraph { graph, variables }
    }

    fn map(variables: usize, literal: Literal) -> NodeId {
        let offset = if literal.is_negated() { variables } else { 0 };
        NodeId::new(offset + literal.variable() - 1)
    }

    /// Returns the underlying digraph.
    #[must_use]
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Returns the number of variables `n`.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables
    }

    /// Returns the vertex representing `literal`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] if the literal's variable exceeds the variable
    /// count.
    pub fn vertex(&self, literal: Literal) -> Result<NodeId> {
        if literal.variable() > self.variables {
            return Err(Error::InvalidLiteral(format!(
                "{} names a variable outside 1..={}",
                literal, self.variables
            )));
        }
        Ok(Self::map(self.variables, literal))
    }

    /// Returns the vertex representing the negation of `literal`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] if the literal's variable exceeds the variable
    /// count.
    pub fn negated_vertex(&self, literal: Literal) -> Result<NodeId> {
        self.vertex(!literal)
    }

    /// Returns the literal represented by `node`, if it is a vertex of the graph.
    #[must_use]
    pub fn literal(&self, node: NodeId) -> Option<Literal> {
        let index = node.index();
        if index < self.variables {
            Literal::positive(index + 1).ok()
        } else if index < 2 * self.variables {
            Literal::negative(index - self.variables + 1).ok()
        } else {
            None
        }
    }
}
