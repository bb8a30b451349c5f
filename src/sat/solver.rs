//! 2-SAT solving over the strongly connected components of the implication graph.

use crate::{
    graph::{
        algorithms::{Components, StronglyConnectedComponents, TopologicalSort},
        NodeId,
    },
    sat::{Clause, ImplicationGraph, Literal},
    Error, Result,
};

/// Satisfiability of a 2-CNF formula via strongly connected components.
///
/// The formula is unsatisfiable iff some variable and its negation share a component of
/// the implication graph. Otherwise a variable is set to true iff its positive literal's
/// component comes after its negation's component in a topological order of the condensed
/// graph, so every implication leads from false or to true.
///
/// # Examples
///
/// ```rust
/// use graphscope::sat::{Literal, TwoSat};
///
/// // (x1 ∨ x2) ∧ (¬x1 ∨ x2) ∧ (¬x2 ∨ x3)
/// let clauses = [
///     (Literal::new(1)?, Literal::new(2)?),
///     (Literal::new(-1)?, Literal::new(2)?),
///     (Literal::new(-2)?, Literal::new(3)?),
/// ];
///
/// let assignment = TwoSat::solve(&clauses)?;
/// assert!(assignment.value(2)?);
/// assert!(assignment.value(3)?);
/// assert!(assignment.satisfies(&clauses));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TwoSat {
    implications: ImplicationGraph,
    components: StronglyConnectedComponents,
}

impl TwoSat {
    /// Builds the implication graph of `clauses` and its strongly connected components.
    #[must_use]
    pub fn new(clauses: &[Clause]) -> Self {
        let implications = ImplicationGraph::new(clauses);
        let components = StronglyConnectedComponents::new(implications.graph());
        TwoSat {
            implications,
            components,
        }
    }

    /// Solves `clauses` in one step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsatisfiable`] if no assignment satisfies every clause.
    pub fn solve(clauses: &[Clause]) -> Result<Assignment> {
        Self::new(clauses).assignment()
    }

    /// Returns the implication graph the solver works on.
    #[must_use]
    pub fn implications(&self) -> &ImplicationGraph {
        &self.implications
    }

    /// Returns the strongly connected components of the implication graph.
    #[must_use]
    pub fn components(&self) -> &StronglyConnectedComponents {
        &self.components
    }

    /// Returns the first variable that shares a component with its own negation.
    fn conflict(&self) -> Result<Option<usize>> {
        for variable in 1..=self.implications.variable_count() {
            let (positive, negative) = self.literal_components(variable)?;
            if positive == negative {
                return Ok(Some(variable));
            }
        }
        Ok(None)
    }

    fn literal_components(&self, variable: usize) -> Result<(usize, usize)> {
        let literal = Literal::positive(variable)?;
        let positive = self
            .components
            .component_id(self.implications.vertex(literal)?)?;
        let negative = self
            .components
            .component_id(self.implications.negated_vertex(literal)?)?;
        Ok((positive, negative))
    }

    /// Returns `true` if the formula has a satisfying assignment.
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        matches!(self.conflict(), Ok(None))
    }

    /// Derives a satisfying assignment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsatisfiable`] naming a variable that is equivalent to its own
    /// negation.
    pub fn assignment(&self) -> Result<Assignment> {
        if let Some(variable) = self.conflict()? {
            log::debug!("2-sat: x{} and its negation share a component", variable);
            return Err(Error::Unsatisfiable { variable });
        }

        let order = TopologicalSort::new(self.components.component_graph());
        let count = self.implications.variable_count();
        let mut values = vec![false; count];

        for variable in 1..=count {
            let (positive, negative) = self.literal_components(variable)?;
            let positive = order.position(NodeId::new(positive))?;
            let negative = order.position(NodeId::new(negative))?;
            values[variable - 1] = negative < positive;
        }

        log::debug!(
            "2-sat: satisfiable, {} of {} variables true",
            values.iter().filter(|&&v| v).count(),
            count
        );
        Ok(Assignment { values })
    }
}

/// Truth values for the variables `1..=n` of a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    /// Returns the value of the 1-based `variable`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] if `variable` is 0 or exceeds the variable count.
    pub fn value(&self, variable: usize) -> Result<bool> {
        variable
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .copied()
            .ok_or_else(|| {
                Error::InvalidLiteral(format!(
                    "variable {} is outside 1..={}",
                    variable,
                    self.values.len()
                ))
            })
    }

    /// Returns the truth value of `literal`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] if the literal's variable exceeds the variable
    /// count.
    pub fn literal(&self, literal: Literal) -> Result<bool> {
        self.value(literal.variable()).map(|v| literal.eval(v))
    }

    /// Returns the values of all variables, index `i` holding variable `i + 1`.
    #[must_use]
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Returns `true` if every clause has at least one true literal.
    ///
    /// Literals naming unknown variables count as false.
    #[must_use]
    pub fn satisfies(&self, clauses: &[Clause]) -> bool {
        clauses.iter().all(|&(a, b)| {
            self.literal(a).unwrap_or(false) || self.literal(b).unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clauses(raw: &[(i32, i32)]) -> Vec<Clause> {
        raw.iter()
            .map(|&(a, b)| (Literal::new(a).unwrap(), Literal::new(b).unwrap()))
            .collect()
    }

    #[test]
    fn test_forced_true_and_false() {
        // x1 forced true, x2 forced false
        let formula = clauses(&[(1, 1), (-2, -2)]);
        let assignment = TwoSat::solve(&formula).unwrap();

        assert_eq!(assignment.values(), &[true, false]);
        assert!(assignment.satisfies(&formula));
    }

    #[test]
    fn test_contradiction() {
        let formula = clauses(&[(1, 1), (-1, -1)]);
        let solver = TwoSat::new(&formula);

        assert!(!solver.is_satisfiable());
        assert_eq!(
            solver.assignment(),
            Err(Error::Unsatisfiable { variable: 1 })
        );
    }

    #[test]
    fn test_unsatisfiable_chain() {
        // x1 -> x2 -> ¬x1 and ¬x1 -> x3 -> x1
        let formula = clauses(&[(-1, 2), (-2, -1), (1, 3), (-3, 1)]);
        assert_eq!(
            TwoSat::solve(&formula),
            Err(Error::Unsatisfiable { variable: 1 })
        );
    }

    #[test]
    fn test_implication_chain() {
        // x1 forced, and x1 -> x2 -> x3
        let formula = clauses(&[(1, 1), (-1, 2), (-2, 3)]);
        let assignment = TwoSat::solve(&formula).unwrap();

        assert_eq!(assignment.values(), &[true, true, true]);
    }

    #[test]
    fn test_exclusive_or() {
        // Exactly one of x1, x2
        let formula = clauses(&[(1, 2), (-1, -2)]);
        let assignment = TwoSat::solve(&formula).unwrap();

        assert_ne!(assignment.value(1).unwrap(), assignment.value(2).unwrap());
        assert!(assignment.satisfies(&formula));
    }

    #[test]
    fn test_unused_variable_still_assigned() {
        // x2 appears in no clause but x3 does
        let formula = clauses(&[(1, 3), (-1, 3)]);
        let assignment = TwoSat::solve(&formula).unwrap();

        assert_eq!(assignment.values().len(), 3);
        assert!(assignment.value(3).unwrap());
        assert!(assignment.satisfies(&formula));
    }

    #[test]
    fn test_empty_formula() {
        let assignment = TwoSat::solve(&[]).unwrap();
        assert!(assignment.values().is_empty());
        assert!(assignment.satisfies(&[]));
    }

    #[test]
    fn test_value_errors() {
        let assignment = TwoSat::solve(&clauses(&[(1, 2)])).unwrap();
        assert!(matches!(assignment.value(0), Err(Error::InvalidLiteral(_))));
        assert!(matches!(assignment.value(3), Err(Error::InvalidLiteral(_))));
        assert!(!assignment.satisfies(&clauses(&[(5, 5)])));
    }

    #[test]
    fn test_exposes_intermediate_structures() {
        let solver = TwoSat::new(&clauses(&[(1, -2)]));
        assert_eq!(solver.implications().variable_count(), 2);
        // ¬x1 → ¬x2 and x2 → x1 leave every literal in its own component
        assert_eq!(solver.components().component_count(), 4);
    }
}
