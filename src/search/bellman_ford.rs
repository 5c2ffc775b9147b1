use crate::graphs::{Distance, Graph, Vertex};

/// Single source Bellman-Ford. Quadratic, used by the benchmark and the
/// tests as the reference answer to cross check the heap based search.
pub fn bellman_ford(graph: &dyn Graph, source: Vertex) -> Vec<Option<Distance>> {
    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut distances = vec![None; number_of_vertices];
    distances[source as usize] = Some(0);

    for _ in 0..number_of_vertices {
        let mut improved = false;

        for tail in 0..number_of_vertices {
            let Some(distance_tail) = distances[tail] else {
                continue;
            };
            for edge in graph.edges(tail as Vertex) {
                let alternative = distance_tail + edge.weight;
                if distances[edge.head as usize].map_or(true, |current| alternative < current) {
                    distances[edge.head as usize] = Some(alternative);
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    distances
}
