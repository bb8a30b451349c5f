#![no_main]

use graphscope::prelude::*;
use libfuzzer_sys::fuzz_target;

// First byte picks the vertex count, every following pair of bytes is one edge and
// the pair index doubles as its weight.
fuzz_target!(|data: &[u8]| {
    let Some((&head, body)) = data.split_first() else {
        return;
    };
    let count = usize::from(head % 64);

    let mut directed = Digraph::new(count);
    let mut undirected = WeightedGraph::new(count);
    for (weight, pair) in body.chunks_exact(2).enumerate() {
        let (u, v) = (NodeId::new(usize::from(pair[0])), NodeId::new(usize::from(pair[1])));
        let _ = directed.add_edge(u, v, ());
        let _ = undirected.add_edge(u, v, weight as f64);
    }

    let _ = Dfs::new(&directed).has_back_edges();
    let _ = CycleFinder::new(&directed).cycle();
    let _ = TopologicalSort::new(&directed).order();
    let _ = LevelPartition::new(&directed).levels();
    let _ = StronglyConnectedComponents::new(&directed).component_graph();
    if count > 0 {
        let _ = Bfs::new(&directed, NodeId::new(0)).map(|bfs| bfs.path_to(NodeId::new(count - 1)));
    }

    let _ = UnionFindComponents::new(&undirected).component_count();
    let _ = DfsComponents::new(&undirected).component_count();
    let _ = TwoColoring::new(&undirected).is_bipartite();
    let _ = Kruskal::new(&undirected).map(|mst| mst.total_cost());
    let _ = Prim::new(&undirected).map(|mst| mst.total_cost());

    // Same bytes read as signed literals for 2-SAT
    let clauses: Vec<Clause> = body
        .chunks_exact(2)
        .filter_map(|pair| {
            let a = Literal::new(i32::from(pair[0] as i8)).ok()?;
            let b = Literal::new(i32::from(pair[1] as i8)).ok()?;
            Some((a, b))
        })
        .collect();
    if let Ok(assignment) = TwoSat::solve(&clauses) {
        assert!(assignment.satisfies(&clauses));
    }
});
