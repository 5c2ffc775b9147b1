use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path in the graph and
/// the total distance associated with traversing this path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: Vertex,
    pub target: Vertex,
}

/// A shortest path request along with the distance of a shortest path, if
/// there exists one. Used to validate other answers for the same graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub request: ShortestPathRequest,
    pub distance: Option<Distance>,
}
