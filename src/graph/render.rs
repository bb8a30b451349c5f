//! Text and Graphviz DOT rendering of graphs.
//!
//! Both graph types implement [`Display`](fmt::Display) as an adjacency listing, one line
//! per vertex:
//!
//! ```text
//! |0| -> [1] -> [2|0.5]
//! |1|
//! ```
//!
//! and offer `to_dot` for visualization with Graphviz. Edge data is rendered through the
//! [`EdgeLabel`] trait, so unweighted graphs print bare neighbors and weighted graphs print
//! `[neighbor|cost]`.

use std::fmt::{self, Write};

use crate::graph::{
    directed::DirectedGraph,
    edge::EdgeId,
    node::NodeId,
    traits::{GraphBase, Successors},
    undirected::UndirectedGraph,
};

/// Edge data that knows how to label itself in rendered output.
pub trait EdgeLabel {
    /// Returns the label to print next to the edge, or `None` for no label.
    fn label(&self) -> Option<String>;
}

impl EdgeLabel for () {
    fn label(&self) -> Option<String> {
        None
    }
}

macro_rules! numeric_label {
    ($($ty:ty),*) => {
        $(
            impl EdgeLabel for $ty {
                fn label(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

numeric_label!(f64, f32, i32, u32);

/// Escapes a string for use inside a double-quoted DOT identifier or label.
fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}

fn write_adjacency<G, L>(f: &mut fmt::Formatter<'_>, graph: &G, label: L) -> fmt::Result
where
    G: Successors,
    L: Fn(EdgeId) -> Option<String>,
{
    for node in graph.node_ids() {
        write!(f, "|{node}|")?;
        for &edge in graph.adjacency(node) {
            let neighbor = graph.follow(edge, node);
            match label(edge) {
                Some(text) => write!(f, " -> [{neighbor}|{text}]")?,
                None => write!(f, " -> [{neighbor}]")?,
            }
        }
        writeln!(f)?;
    }
    Ok(())
}

fn dot<G, L, N>(graph: &G, name: &str, label: L, node_name: N) -> String
where
    G: Successors,
    L: Fn(EdgeId) -> Option<String>,
    N: Fn(NodeId) -> String,
{
    let (keyword, connector) = if G::DIRECTED {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{keyword} \"{}\" {{", escape_dot(name));
    for node in graph.node_ids() {
        let _ = writeln!(
            out,
            "    n{} [label=\"{}\"];",
            node.index(),
            escape_dot(&node_name(node))
        );
    }
    for edge in (0..graph.edge_count()).map(EdgeId::new) {
        let (source, target) = graph.endpoints(edge);
        let _ = match label(edge) {
            Some(text) => writeln!(
                out,
                "    n{} {connector} n{} [label=\"{}\"];",
                source.index(),
                target.index(),
                escape_dot(&text)
            ),
            None => writeln!(out, "    n{} {connector} n{};", source.index(), target.index()),
        };
    }
    out.push_str("}\n");
    out
}

macro_rules! impl_render {
    ($graph:ident) => {
        impl<E: EdgeLabel> $graph<E> {
            /// Renders the graph in Graphviz DOT format, labelling vertices by index.
            #[must_use]
            pub fn to_dot(&self, name: &str) -> String {
                self.to_dot_with(name, |node| node.index().to_string())
            }

            /// Renders the graph in Graphviz DOT format with caller-provided vertex names.
            ///
            /// Typically `node_name` consults an external name-to-index table.
            #[must_use]
            pub fn to_dot_with<N>(&self, name: &str, node_name: N) -> String
            where
                N: Fn(NodeId) -> String,
            {
                dot(
                    self,
                    name,
                    |edge| self.edge(edge).and_then(|e| e.data().label()),
                    node_name,
                )
            }
        }

        impl<E: EdgeLabel> fmt::Display for $graph<E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_adjacency(f, self, |edge| {
                    self.edge(edge).and_then(|e| e.data().label())
                })
            }
        }
    };
}

impl_render!(DirectedGraph);
impl_render!(UndirectedGraph);
