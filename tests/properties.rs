use pathcost::{bfs, dijkstra, multiplicative, prim, Graph, QueueKind};
use proptest::prelude::*;

type Triples = Vec<(usize, usize, i64)>;

fn small_graph(max_cost: i64) -> impl Strategy<Value = (usize, Triples)> {
    (1usize..8).prop_flat_map(move |n| {
        let edge = (0..n, 0..n, 0..=max_cost);
        (Just(n), prop::collection::vec(edge, 0..16))
    })
}

/// All-pairs shortest paths by exhaustive relaxation over every vertex as an intermediate.
fn floyd_warshall(n: usize, edges: &[(usize, usize, i64)], unit: bool) -> Vec<Vec<Option<u64>>> {
    let mut dist = vec![vec![None; n]; n];
    for v in 0..n {
        dist[v][v] = Some(0);
    }
    for &(u, v, c) in edges {
        let c = if unit { 1 } else { c as u64 };
        for (a, b) in [(u, v), (v, u)] {
            if dist[a][b].map_or(true, |d| c < d) {
                dist[a][b] = Some(c);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| ik + kj < d) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn bfs_self_distance_is_zero((n, edges) in small_graph(5), v in 0usize..8) {
        let graph = Graph::from_triples(n, &edges).unwrap();
        let v = v % n;
        prop_assert_eq!(bfs::shortest_hops(&graph, v, v).unwrap(), Some(0));
    }

    #[test]
    fn bfs_matches_exhaustive_search((n, edges) in small_graph(5)) {
        let graph = Graph::from_triples(n, &edges).unwrap();
        let oracle = floyd_warshall(n, &edges, true);
        for start in 0..n {
            let hops = bfs::hop_distances(&graph, &[start]).unwrap();
            prop_assert_eq!(&hops, &oracle[start]);
        }
    }

    #[test]
    fn dijkstra_matches_exhaustive_search((n, edges) in small_graph(20)) {
        let graph = Graph::from_triples(n, &edges).unwrap();
        let oracle = floyd_warshall(n, &edges, false);
        for start in 0..n {
            for queue in [QueueKind::Lazy, QueueKind::DecreaseKey] {
                let dist = dijkstra::distances(&graph, start, queue).unwrap();
                prop_assert_eq!(&dist, &oracle[start]);
            }
        }
    }

    #[test]
    fn dijkstra_is_monotone_in_edge_costs(
        (n, edges) in small_graph(20),
        bumps in prop::collection::vec(0i64..10, 16),
        start in 0usize..8,
        goal in 0usize..8,
    ) {
        let (start, goal) = (start % n, goal % n);
        let heavier: Triples = edges
            .iter()
            .zip(&bumps)
            .map(|(&(u, v, c), &b)| (u, v, c + b))
            .collect();
        let before = dijkstra::shortest_cost(&Graph::from_triples(n, &edges).unwrap(), start, goal).unwrap();
        let after = dijkstra::shortest_cost(&Graph::from_triples(n, &heavier).unwrap(), start, goal).unwrap();
        match (before, after) {
            (Some(b), Some(a)) => prop_assert!(a >= b),
            (None, None) => {}
            other => prop_assert!(false, "reachability changed: {:?}", other),
        }
    }

    #[test]
    fn bfs_and_dijkstra_agree_on_reachability((n, edges) in small_graph(0)) {
        let unit: Triples = edges.iter().map(|&(u, v, _)| (u, v, 1)).collect();
        let graph = Graph::from_triples(n, &unit).unwrap();
        for start in 0..n {
            let hops = bfs::hop_distances(&graph, &[start]).unwrap();
            let dist = dijkstra::distances(&graph, start, QueueKind::Lazy).unwrap();
            prop_assert_eq!(&hops, &dist);
        }
    }

    #[test]
    fn prim_ignores_edge_order(
        ((n, edges), shuffled) in small_graph(20).prop_flat_map(|(n, edges)| {
            let shuffled = Just(edges.clone()).prop_shuffle();
            (Just((n, edges)), shuffled)
        }),
        start in 0usize..8,
    ) {
        let start = start % n;
        let original = prim::mst_cost(&Graph::from_triples(n, &edges).unwrap(), start).unwrap();
        let reordered = prim::mst_cost(&Graph::from_triples(n, &shuffled).unwrap(), start).unwrap();
        prop_assert_eq!(original, reordered);
    }

    #[test]
    fn prim_queue_kinds_agree((n, edges) in small_graph(20)) {
        let graph = Graph::from_triples(n, &edges).unwrap();
        for start in 0..n {
            prop_assert_eq!(
                prim::mst_cost_with(&graph, start, QueueKind::Lazy).unwrap(),
                prim::mst_cost_with(&graph, start, QueueKind::DecreaseKey).unwrap()
            );
        }
    }

    #[test]
    fn multiplicative_single_edge_reports_its_cost(cost in 0i64..1000) {
        let graph = Graph::from_triples(2, &[(0, 1, cost)]).unwrap();
        let pct = multiplicative::shortest_percentage(&graph, 0, 1).unwrap().unwrap();
        prop_assert!((pct - cost as f64).abs() < 1e-9 * (1.0 + cost as f64));
    }

    #[test]
    fn multiplicative_agrees_with_dijkstra_on_reachability((n, edges) in small_graph(50)) {
        let graph = Graph::from_triples(n, &edges).unwrap();
        for start in 0..n {
            let additive = dijkstra::distances(&graph, start, QueueKind::Lazy).unwrap();
            let compounded = multiplicative::multipliers(&graph, start, QueueKind::DecreaseKey).unwrap();
            for (a, m) in additive.iter().zip(&compounded) {
                prop_assert_eq!(a.is_some(), m.is_some());
                if let Some(m) = m {
                    prop_assert!(*m >= 1.0);
                }
            }
        }
    }
}

#[test]
fn concrete_scenarios() {
    let graph = Graph::from_triples(4, &[(0, 1, 5), (1, 2, 3), (0, 2, 10)]).unwrap();
    assert_eq!(dijkstra::shortest_cost(&graph, 0, 2).unwrap(), Some(8));

    let path = Graph::from_triples(4, &[(0, 1, 5), (1, 2, 3)]).unwrap();
    assert_eq!(bfs::shortest_hops(&path, 0, 2).unwrap(), Some(2));

    let star = Graph::from_triples(4, &[(0, 1, 1), (0, 2, 1), (0, 3, 1)]).unwrap();
    assert_eq!(prim::mst_cost(&star, 0).unwrap().total, 3);

    let chain = Graph::from_triples(3, &[(0, 1, 10), (1, 2, 20)]).unwrap();
    let pct = multiplicative::shortest_percentage(&chain, 0, 2).unwrap().unwrap();
    assert!((pct - 32.0).abs() < 1e-9);
}
