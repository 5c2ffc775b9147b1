use crate::{
    graphs::{Distance, Graph, Vertex},
    search::path::Path,
};

pub trait DijkstraData {
    fn clear(&mut self);

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex>;

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex);

    fn get_distance(&self, vertex: Vertex) -> Option<Distance>;

    fn set_distance(&mut self, vertex: Vertex, distance: Distance);

    fn get_path(&self, source: Vertex, target: Vertex) -> Option<Path>;
}

pub struct DijkstraDataVec {
    distances: Vec<Distance>,
    predecessors: Vec<Option<Vertex>>,
}

impl DijkstraDataVec {
    pub fn new(graph: &dyn Graph) -> Self {
        DijkstraDataVec {
            distances: vec![Distance::MAX; graph.number_of_vertices() as usize],
            predecessors: vec![None; graph.number_of_vertices() as usize],
        }
    }
}

impl DijkstraData for DijkstraDataVec {
    fn clear(&mut self) {
        self.distances.fill(Distance::MAX);
        self.predecessors.fill(None);
    }

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors[vertex as usize]
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors[vertex as usize] = Some(predecessor);
    }

    // Distance::MAX stands in for unset. It is unreachable as a real value,
    // the longest possible path (65535 edges of weight 65535) stays below it.
    fn get_distance(&self, vertex: Vertex) -> Option<Distance> {
        if self.distances[vertex as usize] != Distance::MAX {
            return Some(self.distances[vertex as usize]);
        }

        None
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances[vertex as usize] = distance;
    }

    /// Walks the predecessor chain from the target back to the source. A
    /// chain that leaves the table or runs longer than the table is treated
    /// as no path, it cannot occur after a correct search.
    fn get_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        let distance = self.get_distance(target)?;

        let mut vertices = vec![target];
        let mut current = target;
        while current != source {
            if vertices.len() > self.predecessors.len() {
                return None;
            }
            current = self.get_predecessor(current)?;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}
