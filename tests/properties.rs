//! Randomized checks of the algorithm invariants against brute-force references.

use graphscope::{
    graph::{
        algorithms::{
            Bfs, Components, CycleFinder, Dfs, DfsComponents, EdgeClass, Kruskal, LevelPartition,
            Prim, StronglyConnectedComponents, TopologicalSort, TraversedEdge, UnionFindComponents,
        },
        Digraph, Graph, NodeId, Successors, UndirectedGraph, WeightedGraph,
    },
    sat::{Clause, Literal, TwoSat},
    utils::DisjointSet,
    Error,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

const MAX_NODES: usize = 12;

fn n(i: usize) -> NodeId {
    NodeId::new(i)
}

/// Vertex count plus an arbitrary list of index pairs inside it.
fn arcs() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=MAX_NODES).prop_flat_map(|count| {
        let pairs = proptest::collection::vec((0..count, 0..count), 0..count * 3);
        (Just(count), pairs)
    })
}

fn build_digraph(count: usize, arcs: &[(usize, usize)]) -> Digraph {
    let mut graph = Digraph::new(count);
    for &(u, v) in arcs {
        graph.add_edge(n(u), n(v), ()).unwrap();
    }
    graph
}

fn build_graph(count: usize, arcs: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new(count);
    for &(u, v) in arcs {
        if u != v {
            graph.add_edge(n(u), n(v), ()).unwrap();
        }
    }
    graph
}

/// Reflexive-transitive closure by repeated relaxation.
fn reachability<G: Successors>(graph: &G) -> Vec<Vec<bool>> {
    let count = graph.node_count();
    let mut reach = vec![vec![false; count]; count];
    for (u, row) in reach.iter_mut().enumerate() {
        row[u] = true;
    }
    let mut changed = true;
    while changed {
        changed = false;
        for u in 0..count {
            for w in graph.successors(n(u)).collect::<Vec<_>>() {
                for x in 0..count {
                    if reach[w.index()][x] && !reach[u][x] {
                        reach[u][x] = true;
                        changed = true;
                    }
                }
            }
        }
    }
    reach
}

/// Fewest-edge distances from `source` by Bellman-Ford style relaxation.
fn hop_distances<G: Successors>(graph: &G, source: usize) -> Vec<Option<usize>> {
    let count = graph.node_count();
    let mut distance = vec![None; count];
    distance[source] = Some(0);
    for _ in 0..count {
        for u in 0..count {
            let Some(d) = distance[u] else { continue };
            for v in graph.successors(n(u)) {
                if distance[v.index()].map_or(true, |old| d + 1 < old) {
                    distance[v.index()] = Some(d + 1);
                }
            }
        }
    }
    distance
}

proptest! {
    #[test]
    fn bfs_distances_are_shortest((count, pairs) in arcs(), source in 0..MAX_NODES) {
        let source = source % count;
        let directed = build_digraph(count, &pairs);
        let undirected = build_graph(count, &pairs);

        let bfs = Bfs::new(&directed, n(source)).unwrap();
        let expected = hop_distances(&directed, source);
        for v in 0..count {
            prop_assert_eq!(bfs.distance(n(v)).unwrap(), expected[v]);
        }

        let bfs = Bfs::new(&undirected, n(source)).unwrap();
        let expected = hop_distances(&undirected, source);
        for v in 0..count {
            prop_assert_eq!(bfs.distance(n(v)).unwrap(), expected[v]);
            if let Some(d) = expected[v] {
                prop_assert_eq!(bfs.path_to(n(v)).unwrap().len(), d + 1);
            }
        }
    }

    #[test]
    fn dfs_classifies_every_edge_once((count, pairs) in arcs()) {
        let directed = build_digraph(count, &pairs);
        let dfs = Dfs::new(&directed);
        let classified: usize = EdgeClass::iter()
            .map(|class| dfs.edges_of(class).map_or(0, <[TraversedEdge]>::len))
            .sum();
        prop_assert_eq!(classified, directed.edge_count());

        let undirected = build_graph(count, &pairs);
        let dfs = Dfs::new(&undirected);
        prop_assert!(!dfs.has_forward_edges());
        prop_assert!(!dfs.has_cross_edges());
        let classified = dfs.tree_edges().map_or(0, <[TraversedEdge]>::len)
            + dfs.back_edges().map_or(0, <[TraversedEdge]>::len);
        prop_assert_eq!(classified, undirected.edge_count());
    }

    #[test]
    fn cycle_detectors_agree((count, pairs) in arcs()) {
        let graph = build_digraph(count, &pairs);
        let cyclic = Dfs::new(&graph).has_back_edges();

        let finder = CycleFinder::new(&graph);
        prop_assert_eq!(finder.has_cycle(), cyclic);
        prop_assert_eq!(!TopologicalSort::new(&graph).is_dag(), cyclic);
        prop_assert_eq!(LevelPartition::new(&graph).has_cycle(), cyclic);

        if let Ok(cycle) = finder.cycle() {
            prop_assert_eq!(cycle.first(), cycle.last());
            for pair in cycle.windows(2) {
                prop_assert!(graph.contains_edge(pair[0], pair[1]));
            }
        }
    }

    #[test]
    fn topological_order_respects_arcs((count, pairs) in arcs()) {
        // Keep only forward arcs so the graph is a DAG
        let forward: Vec<(usize, usize)> = pairs.into_iter().filter(|(u, v)| u < v).collect();
        let graph = build_digraph(count, &forward);

        let sort = TopologicalSort::new(&graph);
        prop_assert_eq!(sort.order().unwrap().len(), count);
        let partition = LevelPartition::new(&graph);
        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            prop_assert!(sort.position(u).unwrap() < sort.position(v).unwrap());
            prop_assert!(partition.level_of(u).unwrap() < partition.level_of(v).unwrap());
        }
    }

    #[test]
    fn scc_matches_mutual_reachability((count, pairs) in arcs()) {
        let graph = build_digraph(count, &pairs);
        let scc = StronglyConnectedComponents::new(&graph);
        let reach = reachability(&graph);

        for u in 0..count {
            for v in 0..count {
                let mutual = reach[u][v] && reach[v][u];
                prop_assert_eq!(scc.same_component(n(u), n(v)).unwrap(), mutual);
            }
        }

        let condensed = scc.component_graph();
        prop_assert!(!CycleFinder::new(condensed).has_cycle());
        for edge in condensed.edges() {
            prop_assert!(edge.source() < edge.target());
        }
    }

    #[test]
    fn component_strategies_match_reachability((count, pairs) in arcs()) {
        let graph = build_graph(count, &pairs);
        let reach = reachability(&graph);
        let union_find = UnionFindComponents::new(&graph);
        let dfs = DfsComponents::new(&graph);

        prop_assert_eq!(union_find.component_count(), dfs.component_count());
        for u in 0..count {
            for v in 0..count {
                prop_assert_eq!(union_find.same_component(n(u), n(v)).unwrap(), reach[u][v]);
                prop_assert_eq!(dfs.same_component(n(u), n(v)).unwrap(), reach[u][v]);
            }
        }
    }

    #[test]
    fn union_find_set_count(ops in proptest::collection::vec((0..MAX_NODES, 0..MAX_NODES), 0..40)) {
        let mut sets = DisjointSet::new(MAX_NODES);
        for (x, y) in ops {
            let before = sets.set_count();
            let merged = sets.union(x, y).unwrap();
            let expected = if merged { before - 1 } else { before };
            prop_assert_eq!(sets.set_count(), expected);
            prop_assert!(sets.same_set(x, y).unwrap());
        }
    }

    #[test]
    fn kruskal_and_prim_agree(
        count in 2..=MAX_NODES,
        extra in proptest::collection::vec((0..MAX_NODES, 0..MAX_NODES, 1u32..20), 0..30),
        spine in proptest::collection::vec(1u32..20, MAX_NODES),
    ) {
        // A weighted path keeps the graph connected, extra edges add choices and ties
        let mut graph: UndirectedGraph<u32> = UndirectedGraph::new(count);
        for i in 1..count {
            graph.add_edge(n(i - 1), n(i), spine[i]).unwrap();
        }
        for (u, v, cost) in extra {
            let (u, v) = (u % count, v % count);
            if u != v {
                graph.add_edge(n(u), n(v), cost).unwrap();
            }
        }

        let kruskal = Kruskal::new(&graph).unwrap();
        let prim = Prim::new(&graph).unwrap();
        prop_assert_eq!(kruskal.total_cost(), prim.total_cost());
        prop_assert_eq!(kruskal.edges().len(), count - 1);
        prop_assert_eq!(prim.edges().len(), count - 1);
    }

    #[test]
    fn kruskal_and_prim_agree_on_fractional_costs(
        count in 2..=MAX_NODES,
        extra in proptest::collection::vec((0..MAX_NODES, 0..MAX_NODES, 1u32..20), 0..30),
        spine in proptest::collection::vec(1u32..20, MAX_NODES),
        root in 0..MAX_NODES,
    ) {
        // Tenths are inexact in binary, so any difference in summation order shows up
        let tenth = |c: u32| f64::from(c) * 0.1;
        let mut graph = WeightedGraph::new(count);
        for i in 1..count {
            graph.add_edge(n(i - 1), n(i), tenth(spine[i])).unwrap();
        }
        for (u, v, cost) in extra {
            let (u, v) = (u % count, v % count);
            if u != v {
                graph.add_edge(n(u), n(v), tenth(cost)).unwrap();
            }
        }

        let kruskal = Kruskal::new(&graph).unwrap();
        let prim = Prim::with_root(&graph, n(root % count)).unwrap();
        prop_assert_eq!(kruskal.total_cost(), prim.total_cost());
    }

    #[test]
    fn two_sat_agrees_with_brute_force(
        raw in proptest::collection::vec(((1i32..=5), any::<bool>(), (1i32..=5), any::<bool>()), 1..12)
    ) {
        let clauses: Vec<Clause> = raw
            .iter()
            .map(|&(a, na, b, nb)| {
                let a = Literal::new(if na { -a } else { a }).unwrap();
                let b = Literal::new(if nb { -b } else { b }).unwrap();
                (a, b)
            })
            .collect();
        let variables = clauses
            .iter()
            .map(|&(a, b)| a.variable().max(b.variable()))
            .max()
            .unwrap_or(0);

        let satisfiable = (0u32..1 << variables).any(|mask| {
            clauses.iter().all(|&(a, b)| {
                let value = |l: Literal| l.eval(mask & (1 << (l.variable() - 1)) != 0);
                value(a) || value(b)
            })
        });

        match TwoSat::solve(&clauses) {
            Ok(assignment) => {
                prop_assert!(satisfiable);
                prop_assert!(assignment.satisfies(&clauses));
            }
            Err(Error::Unsatisfiable { .. }) => prop_assert!(!satisfiable),
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }
}
