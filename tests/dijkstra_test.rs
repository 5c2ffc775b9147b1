use rand::{thread_rng, Rng};
use wire_paths::{
    graphs::{vec_graph::VecGraph, Distance, Graph, Vertex, WeightedEdge},
    search::{bellman_ford::bellman_ford, dijkstra::dijkstra_one_to_one_wrapped},
};

fn edge(tail: Vertex, head: Vertex, weight: Distance) -> WeightedEdge {
    WeightedEdge { tail, head, weight }
}

/// Checks that a reported path is an actual walk through the graph and that
/// its distance is the sum of the cheapest edge of every hop.
fn assert_path_is_valid(graph: &VecGraph, path: &wire_paths::search::path::Path) {
    let mut walked: Distance = 0;
    for hop in path.vertices.windows(2) {
        let cheapest = graph
            .edges(hop[0])
            .filter(|edge| edge.head == hop[1])
            .map(|edge| edge.weight)
            .min();
        walked += cheapest.expect("path uses a hop with no matching edge");
    }
    assert_eq!(walked, path.distance);
}

#[test]
fn finds_shortest_path_over_intermediate_vertices() {
    let graph = VecGraph::from_edges(&[edge(1, 2, 1), edge(1, 3, 4), edge(2, 3, 1), edge(3, 4, 1)]);

    let path = dijkstra_one_to_one_wrapped(&graph, 1, 4).unwrap();
    assert_eq!(path.vertices, vec![1, 2, 3, 4]);
    assert_eq!(path.distance, 3);
}

#[test]
fn returns_none_for_unreachable_target() {
    let graph = VecGraph::from_edges(&[edge(1, 2, 5)]);

    assert_eq!(dijkstra_one_to_one_wrapped(&graph, 2, 1), None);
}

#[test]
fn source_equals_target_has_distance_zero() {
    let graph = VecGraph::from_edges(&[edge(7, 8, 1)]);

    let path = dijkstra_one_to_one_wrapped(&graph, 7, 7).unwrap();
    assert_eq!(path.vertices, vec![7]);
    assert_eq!(path.distance, 0);
}

#[test]
fn cheaper_parallel_edge_wins() {
    let graph = VecGraph::from_edges(&[edge(1, 2, 5), edge(1, 2, 2)]);

    let path = dijkstra_one_to_one_wrapped(&graph, 1, 2).unwrap();
    assert_eq!(path.distance, 2);
}

#[test]
fn self_loops_never_shorten_a_path() {
    let graph = VecGraph::from_edges(&[edge(1, 1, 3), edge(1, 2, 4)]);

    let path = dijkstra_one_to_one_wrapped(&graph, 1, 2).unwrap();
    assert_eq!(path.vertices, vec![1, 2]);
    assert_eq!(path.distance, 4);
}

#[test]
fn unreached_target_distance_stays_unset() {
    // Two disconnected components. The search must leave the far component
    // untouched.
    let graph = VecGraph::from_edges(&[edge(1, 2, 1), edge(3, 4, 1)]);

    assert_eq!(dijkstra_one_to_one_wrapped(&graph, 1, 4), None);
    assert_eq!(dijkstra_one_to_one_wrapped(&graph, 1, 3), None);
}

#[test]
fn early_termination_still_returns_final_distance() {
    // The direct edge is relaxed first, the cheaper detour must still win
    // before the target is popped.
    let graph = VecGraph::from_edges(&[edge(1, 4, 10), edge(1, 2, 1), edge(2, 3, 1), edge(3, 4, 1)]);

    let path = dijkstra_one_to_one_wrapped(&graph, 1, 4).unwrap();
    assert_eq!(path.vertices, vec![1, 2, 3, 4]);
    assert_eq!(path.distance, 3);
}

#[test]
fn matches_bellman_ford_on_random_graphs() {
    let mut rng = thread_rng();

    for _ in 0..100 {
        let number_of_vertices: Vertex = rng.gen_range(2..40);
        let number_of_edges = rng.gen_range(1..150);

        let edges: Vec<WeightedEdge> = (0..number_of_edges)
            .map(|_| {
                edge(
                    rng.gen_range(1..=number_of_vertices),
                    rng.gen_range(1..=number_of_vertices),
                    rng.gen_range(1..=50),
                )
            })
            .collect();

        let mut graph = VecGraph::with_vertices(number_of_vertices as usize + 1);
        edges.iter().for_each(|edge| graph.add_edge(edge));

        let source = rng.gen_range(1..=number_of_vertices);
        let target = rng.gen_range(1..=number_of_vertices);

        let reference = bellman_ford(&graph, source);
        let path = dijkstra_one_to_one_wrapped(&graph, source, target);

        assert_eq!(
            path.as_ref().map(|path| path.distance),
            reference[target as usize],
            "distance mismatch for {} -> {}",
            source,
            target
        );

        if let Some(path) = path {
            assert_eq!(path.vertices.first(), Some(&source));
            assert_eq!(path.vertices.last(), Some(&target));
            assert_path_is_valid(&graph, &path);
        }
    }
}
