//! Shared graph factories for unit tests.

use crate::graph::{Digraph, Graph, NodeId, WeightedGraph};

// Helper function to create an unweighted digraph from an arc list
pub fn digraph(n: usize, arcs: &[(usize, usize)]) -> Digraph {
    let mut graph = Digraph::new(n);
    for &(u, v) in arcs {
        graph.add_edge(NodeId::new(u), NodeId::new(v), ()).unwrap();
    }
    graph
}

// Helper function to create an unweighted undirected graph from an edge list
pub fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new(n);
    for &(u, v) in edges {
        graph.add_edge(NodeId::new(u), NodeId::new(v), ()).unwrap();
    }
    graph
}

// Helper function to create a weighted undirected graph from `(u, v, cost)` triples
pub fn weighted_graph(n: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new(n);
    for &(u, v, cost) in edges {
        graph.add_edge(NodeId::new(u), NodeId::new(v), cost).unwrap();
    }
    graph
}

// Helper function to turn raw indices into vertex ids
pub fn nodes(indices: &[usize]) -> Vec<NodeId> {
    indices.iter().copied().map(NodeId::new).collect()
}
