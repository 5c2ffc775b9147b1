use crate::{
    graphs::{Distance, Graph, Vertex},
    search::{
        collections::{
            dijkstra_data::{DijkstraData, DijkstraDataVec},
            vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueIndexedHeap},
            vertex_expanded_data::{VertexExpandedData, VertexExpandedDataVec},
        },
        path::Path,
    },
};

/// Dijkstra from `source`, terminating as soon as `target` is popped. When
/// the target comes off the queue its distance is final, the rest of the
/// frontier can be abandoned.
pub fn dijkstra_one_to_one(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
    target: Vertex,
) {
    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some(tail) = queue.pop() {
        if tail == target {
            break;
        }
        if expanded.expand(tail) {
            continue;
        }

        let distance_tail = data.get_distance(tail).unwrap();

        for edge in graph.edges(tail) {
            let current_distance_head = data.get_distance(edge.head).unwrap_or(Distance::MAX);
            let alternative_distance_head = distance_tail + edge.weight;
            if alternative_distance_head < current_distance_head {
                data.set_distance(edge.head, alternative_distance_head);
                data.set_predecessor(edge.head, tail);
                queue.insert(edge.head, alternative_distance_head);
            }
        }
    }
}

/// Allocates the search collections for one request, runs the one-to-one
/// search and extracts the path, if any.
pub fn dijkstra_one_to_one_wrapped(
    graph: &dyn Graph,
    source: Vertex,
    target: Vertex,
) -> Option<Path> {
    let mut data = DijkstraDataVec::new(graph);
    let mut expanded = VertexExpandedDataVec::new(graph);
    let mut queue = VertexDistanceQueueIndexedHeap::new(graph.number_of_vertices() as usize);

    dijkstra_one_to_one(graph, &mut data, &mut expanded, &mut queue, source, target);

    data.get_path(source, target)
}
