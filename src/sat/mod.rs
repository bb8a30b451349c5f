//! 2-SAT solving by reduction to strong connectivity.
//!
//! A 2-CNF formula is a conjunction of clauses with exactly two literals each. The solver
//! goes through three stages:
//!
//! 1. [`ImplicationGraph`] turns every clause `(a ∨ b)` into the arcs `¬a → b` and `¬b → a`
//! 2. [`StronglyConnectedComponents`](crate::graph::algorithms::StronglyConnectedComponents)
//!    partitions the literals into equivalence classes
//! 3. [`TwoSat`] rejects the formula if a variable is equivalent to its negation, and
//!    otherwise reads an [`Assignment`] off a topological order of the condensed graph
//!
//! # Examples
//!
//! ```rust
//! use graphscope::{sat::{Literal, TwoSat}, Error};
//!
//! // (x1 ∨ x1) ∧ (¬x1 ∨ ¬x1) forces x1 and ¬x1
//! let x1 = Literal::new(1)?;
//! let result = TwoSat::solve(&[(x1, x1), (!x1, !x1)]);
//! assert_eq!(result, Err(Error::Unsatisfiable { variable: 1 }));
//! # Ok::<(), graphscope::Error>(())
//! ```

mod implication;
mod literal;
mod solver;

pub use implication::ImplicationGraph;
pub use literal::{Clause, Literal};
pub use solver::{Assignment, TwoSat};
