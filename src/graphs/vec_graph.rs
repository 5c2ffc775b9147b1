use serde::{Deserialize, Serialize};

use super::{Graph, TaillessEdge, Vertex, WeightedEdge};

/// Adjacency lists in arrival order. Parallel edges are kept as separate
/// entries, never merged.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct VecGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl VecGraph {
    pub fn with_vertices(number_of_vertices: usize) -> VecGraph {
        VecGraph {
            edges: vec![Vec::new(); number_of_vertices],
        }
    }

    pub fn from_edges(edges: &[WeightedEdge]) -> VecGraph {
        let mut graph = VecGraph::default();
        edges.iter().for_each(|edge| graph.add_edge(edge));
        graph
    }

    pub fn add_edge(&mut self, edge: &WeightedEdge) {
        // Ensure both edge endpoints are within the bounds of self.edges.
        let max_edge_endpoint = std::cmp::max(edge.tail, edge.head) as usize;
        if max_edge_endpoint >= self.edges.len() {
            self.edges.resize(max_edge_endpoint + 1, Vec::new());
        }

        self.edges[edge.tail as usize].push(edge.remove_tail());
    }
}

impl Graph for VecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        let edges = self
            .edges
            .get(tail as usize)
            .map(|edges| edges.iter())
            .unwrap_or_default();

        Box::new(edges.map(move |edge| edge.set_tail(tail)))
    }
}
