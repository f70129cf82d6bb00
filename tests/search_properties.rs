use std::collections::{HashSet, VecDeque};

use campus_nav::{dijkstra_route, AStar, Graph, HeuristicKind, Node, SearchResult};
use rand::{rngs::StdRng, Rng, SeedableRng};

const HEURISTICS: [HeuristicKind; 2] = [HeuristicKind::Euclidean, HeuristicKind::Manhattan];

/// Small random graph with integer coordinates and integer edge lengths no
/// shorter than the Manhattan distance between their endpoints, so both
/// built-in heuristics are admissible and path costs are exact
fn random_graph(rng: &mut StdRng) -> Graph {
    let n = rng.random_range(2..=7);
    let mut graph = Graph::new();
    let mut coords = Vec::with_capacity(n);

    for i in 0..n {
        let x = rng.random_range(0..20) as f64;
        let y = rng.random_range(0..20) as f64;
        coords.push((x, y));
        graph.add_node(format!("n{i}"), Node::at(x, y));
    }

    for i in 0..n {
        for j in 0..n {
            if i > j || !rng.random_bool(0.35) {
                continue;
            }
            let (x1, y1) = coords[i];
            let (x2, y2) = coords[j];
            let extra = rng.random_range(0..10) as f64;
            let distance = (x1 - x2).abs() + (y1 - y2).abs() + extra;
            graph.add_edge(campus_nav::Edge::new(format!("n{i}"), format!("n{j}"), distance));
        }
    }

    graph
}

/// Cheapest simple path by exhaustive enumeration
fn brute_force(graph: &Graph, start: &str, goal: &str) -> Option<f64> {
    fn walk<'g>(graph: &'g Graph, node: &'g str, goal: &str, cost: f64, seen: &mut Vec<&'g str>, best: &mut Option<f64>) {
        if node == goal {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for (next, edge) in graph.neighbors(node) {
            if seen.contains(&next) {
                continue;
            }
            seen.push(next);
            walk(graph, next, goal, cost + edge, seen, best);
            seen.pop();
        }
    }

    let mut best = None;
    let start = graph.nodes().map(|(id, _)| id).find(|id| *id == start)?;
    walk(graph, start, goal, 0.0, &mut vec![start], &mut best);
    best
}

fn component<'g>(graph: &'g Graph, start: &'g str) -> HashSet<&'g str> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for (next, _) in graph.neighbors(node) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn assert_valid_path(graph: &Graph, result: &SearchResult<&str>, start: &str, goal: &str) {
    let path = result.path();
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));

    let mut total = 0.0;
    for pair in path.windows(2) {
        assert_ne!(pair[0], pair[1], "self-loop in path {path:?}");
        total += graph
            .edge_cost(pair[0], pair[1])
            .unwrap_or_else(|| panic!("no edge {} - {} in {path:?}", pair[0], pair[1]));
    }
    assert_eq!(total, result.cost());
}

fn assert_trace_well_formed(result: &SearchResult<&str>, start: &str) {
    let trace = result.exploration_trace();
    assert_eq!(trace.first(), Some(&start));
    assert_eq!(trace.len(), result.nodes_explored());
    let unique: HashSet<_> = trace.iter().collect();
    assert_eq!(unique.len(), trace.len(), "trace repeats a node: {trace:?}");
}

#[test]
fn dijkstra_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..300 {
        let graph = random_graph(&mut rng);
        let ids: Vec<_> = graph.nodes().map(|(id, _)| id).collect();
        let start = ids[rng.random_range(0..ids.len())];
        let goal = ids[rng.random_range(0..ids.len())];

        let result = dijkstra_route(&graph, start, goal).unwrap();
        assert_trace_well_formed(&result, start);

        match brute_force(&graph, start, goal) {
            Some(best) => {
                assert!(result.success());
                assert_eq!(result.cost(), best, "{start} -> {goal} in {:?}", graph.edges());
                assert_valid_path(&graph, &result, start, goal);
            }
            None => {
                assert!(!result.success());
                assert!(result.cost().is_infinite());
                assert!(result.path().is_empty());
            }
        }
    }
}

#[test]
fn a_star_matches_dijkstra_with_admissible_heuristics() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..300 {
        let graph = random_graph(&mut rng);
        let ids: Vec<_> = graph.nodes().map(|(id, _)| id).collect();
        let start = ids[rng.random_range(0..ids.len())];
        let goal = ids[rng.random_range(0..ids.len())];

        let expected = dijkstra_route(&graph, start, goal).unwrap();

        for heuristic in HEURISTICS {
            let result = AStar{}.route(&graph, start, goal, &heuristic).unwrap();
            assert_trace_well_formed(&result, start);
            assert_eq!(result.success(), expected.success());
            assert_eq!(result.cost(), expected.cost(), "{heuristic}: {start} -> {goal}");
            if result.success() {
                assert_valid_path(&graph, &result, start, goal);
            }
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let graph = random_graph(&mut rng);
        let ids: Vec<_> = graph.nodes().map(|(id, _)| id).collect();
        let start = ids[0];
        let goal = ids[ids.len() - 1];

        assert_eq!(dijkstra_route(&graph, start, goal), dijkstra_route(&graph, start, goal));
        for heuristic in HEURISTICS {
            assert_eq!(
                AStar{}.route(&graph, start, goal, &heuristic),
                AStar{}.route(&graph, start, goal, &heuristic)
            );
        }
    }
}

#[test]
fn unreachable_goal_explores_whole_component() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..100 {
        // a random component plus one isolated goal
        let graph = random_graph(&mut rng).with_node("island", Node::at(50.0, 50.0));
        let start = "n0";

        let expected = component(&graph, start);
        for result in [
            dijkstra_route(&graph, start, "island").unwrap(),
            AStar{}.route(&graph, start, "island", &HeuristicKind::Euclidean).unwrap(),
        ] {
            assert!(!result.success());
            assert!(result.cost().is_infinite());
            assert!(result.path().is_empty());
            let explored: HashSet<_> = result.exploration_trace().iter().copied().collect();
            assert_eq!(explored, expected);
        }
    }
}

#[test]
fn self_loops_never_help() {
    let graph = Graph::new()
        .with_node("A", Node::at(0.0, 0.0))
        .with_node("B", Node::at(3.0, 0.0))
        .with_node("C", Node::at(3.0, 4.0))
        .with_edge("A", "A", 5.0)
        .with_edge("A", "B", 3.0)
        .with_edge("B", "B", 0.0)
        .with_edge("B", "C", 4.0);

    let result = dijkstra_route(&graph, "A", "C").unwrap();
    assert_eq!(result.path(), ["A", "B", "C"]);
    assert_eq!(result.cost(), 7.0);

    let to_self = dijkstra_route(&graph, "A", "A").unwrap();
    assert_eq!(to_self.path(), ["A"]);
    assert_eq!(to_self.cost(), 0.0);
}
