use thiserror::Error;

use crate::graph::algorithms::EdgeClass;

macro_rules! invalid_edge {
    // Single string version
    ($from:expr, $to:expr, $msg:expr) => {
        crate::Error::InvalidEdge {
            from: $from,
            to: $to,
            reason: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($from:expr, $to:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidEdge {
            from: $from,
            to: $to,
            reason: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every error is raised synchronously at the point where an argument or an input graph
/// violates the precondition of an operation. Nothing is retried and no partial result is
/// returned alongside an error.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::OutOfRange`] - A vertex index outside `[0, n)` was passed to a query
/// - [`Error::InvalidEdge`] - Edge insertion with a self-loop or an unknown endpoint, or a
///   spanning tree requested over a non-finite edge cost
/// - [`Error::InvalidLiteral`] - A 2-SAT literal that names no variable
///
/// ## Query Errors
/// - [`Error::Unreachable`] - Path requested between vertices with no connecting path
/// - [`Error::NoSuchEdgeClass`] - Empty depth-first edge classification bucket requested
/// - [`Error::InvalidComponentId`] - Component id outside `[0, component_count)`
/// - [`Error::NoCycle`] - Cycle requested from a search that found none
///
/// ## Input Shape Errors
/// - [`Error::GraphNotConnected`] - Spanning tree requested over a disconnected graph
/// - [`Error::NotADag`] - Topological order requested over a cyclic graph
/// - [`Error::CycleDetected`] - Level partition could not place every vertex
/// - [`Error::Unsatisfiable`] - 2-CNF formula with no satisfying assignment
///
/// # Examples
///
/// ```rust
/// use graphscope::{prelude::*, Error};
///
/// let mut graph = Digraph::new(3);
/// graph.add_edge(NodeId::new(0), NodeId::new(1), ())?;
/// graph.add_edge(NodeId::new(1), NodeId::new(2), ())?;
/// graph.add_edge(NodeId::new(2), NodeId::new(0), ())?;
///
/// match TopologicalSort::new(&graph).order() {
///     Ok(order) => println!("order: {:?}", order),
///     Err(Error::NotADag) => println!("graph has a cycle"),
///     Err(e) => println!("other error: {}", e),
/// }
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Construction Errors
    /// A vertex argument lies outside the vertex range of the graph.
    ///
    /// Graphs have a fixed number of vertices chosen at construction time, and every
    /// per-vertex query validates its argument against that count.
    ///
    /// # Fields
    ///
    /// * `vertex` - The offending vertex index
    /// * `count` - The number of vertices of the graph or structure queried
    #[error("Vertex {vertex} is out of range for a graph with {count} vertices")]
    OutOfRange {
        /// The rejected vertex index
        vertex: usize,
        /// The vertex count of the queried structure
        count: usize,
    },

    /// An edge could not be inserted.
    ///
    /// Raised for undirected self-loops, for endpoints that do not exist in the graph, and
    /// by the spanning tree algorithms for an edge whose cost is NaN or infinite.
    /// Duplicate edges are not an error; insertion reports them as "not added" instead.
    #[error("Invalid edge ({from}, {to}): {reason}")]
    InvalidEdge {
        /// First endpoint of the rejected edge
        from: usize,
        /// Second endpoint of the rejected edge
        to: usize,
        /// Why the edge was rejected
        reason: String,
    },

    /// A 2-SAT literal does not reference a variable.
    ///
    /// Literals are signed, 1-based variable indices, so `0` (and anything that does not
    /// parse as an integer) is rejected.
    #[error("Invalid literal - {0}")]
    InvalidLiteral(String),

    // Query Errors
    /// No path exists between the two vertices.
    #[error("No path from {from} to {to}")]
    Unreachable {
        /// Start of the requested path
        from: usize,
        /// End of the requested path
        to: usize,
    },

    /// The depth-first search produced no edge of the requested class.
    #[error("The depth-first forest has no {0} edges")]
    NoSuchEdgeClass(EdgeClass),

    /// A component id outside `[0, count)` was passed to a component query.
    #[error("Component id {id} is invalid, there are {count} components")]
    InvalidComponentId {
        /// The rejected component id
        id: usize,
        /// The number of components computed
        count: usize,
    },

    /// A cycle was requested but the search found none.
    #[error("The graph has no cycle")]
    NoCycle,

    // Input Shape Errors
    /// A spanning tree was requested over a graph with more than one connected component.
    #[error("The graph is not connected, found {components} components")]
    GraphNotConnected {
        /// Number of components left after the algorithm finished
        components: usize,
    },

    /// A topological order was requested over a graph that contains a cycle.
    #[error("The graph is not a DAG")]
    NotADag,

    /// Indegree peeling stopped before every vertex was assigned a level.
    ///
    /// The vertices that could never be freed all lie on, or are reachable from, a cycle.
    #[error("Cycle detected, only {placed} of {total} vertices could be placed")]
    CycleDetected {
        /// Number of vertices assigned a level
        placed: usize,
        /// Number of vertices of the graph
        total: usize,
    },

    /// The 2-CNF formula has no satisfying assignment.
    ///
    /// The reported variable (1-based) has its positive and negated literal in the same
    /// strongly connected component of the implication graph.
    #[error("Formula is unsatisfiable, x{variable} and its negation are equivalent")]
    Unsatisfiable {
        /// A variable forced to equal its own negation
        variable: usize,
    },
}
