use std::io::Read;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    error::RequestError,
    graphs::{vec_graph::VecGraph, Distance, Vertex, WeightedEdge},
};

pub mod response;

pub const HEADER_BYTES: usize = 6;
pub const EDGE_RECORD_BYTES: usize = 6;

/// One shortest path problem as it arrives over the wire: a graph given as
/// an edge list plus the pair of vertices to connect. All integers are
/// unsigned 16 bit, big endian (network order).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub source: Vertex,
    pub target: Vertex,
    pub edges: Vec<WeightedEdge>,
}

impl RouteRequest {
    /// Reads one request in wire order: source, target, edge count, then the
    /// fixed size edge records. Bytes after the declared records are left
    /// unread. A short read or a vertex id of 0 anywhere aborts the decode,
    /// no partial graph escapes.
    pub fn decode(reader: &mut dyn Read) -> Result<RouteRequest, RequestError> {
        let source = read_vertex(reader)?;
        let target = read_vertex(reader)?;
        let number_of_edges = read_u16(reader)?;

        let mut edges = Vec::with_capacity(number_of_edges as usize);
        for _ in 0..number_of_edges {
            let tail = read_vertex(reader)?;
            let head = read_vertex(reader)?;
            let weight = read_u16(reader)? as Distance;
            trace!("edge {}->{}:{}", tail, head, weight);
            edges.push(WeightedEdge { tail, head, weight });
        }

        Ok(RouteRequest {
            source,
            target,
            edges,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        encode_request(self.source, self.target, &self.edges)
    }

    /// Builds the adjacency lists, sized to cover the largest vertex id the
    /// request mentions anywhere, endpoints and query pair alike.
    pub fn to_graph(&self) -> VecGraph {
        let mut graph = VecGraph::with_vertices(self.max_vertex() as usize + 1);
        for edge in &self.edges {
            graph.add_edge(edge);
        }
        graph
    }

    fn max_vertex(&self) -> Vertex {
        let mut max_vertex = std::cmp::max(self.source, self.target);
        for edge in &self.edges {
            max_vertex = max_vertex.max(edge.tail).max(edge.head);
        }
        max_vertex
    }
}

pub fn encode_request(source: Vertex, target: Vertex, edges: &[WeightedEdge]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_BYTES + EDGE_RECORD_BYTES * edges.len());
    bytes.extend(source.to_be_bytes());
    bytes.extend(target.to_be_bytes());
    bytes.extend((edges.len() as u16).to_be_bytes());
    for edge in edges {
        bytes.extend(edge.tail.to_be_bytes());
        bytes.extend(edge.head.to_be_bytes());
        bytes.extend((edge.weight as u16).to_be_bytes());
    }
    bytes
}

fn read_u16(reader: &mut dyn Read) -> Result<u16, RequestError> {
    let mut bytes = [0u8; 2];
    reader
        .read_exact(&mut bytes)
        .map_err(RequestError::from_read)?;
    Ok(u16::from_be_bytes(bytes))
}

fn read_vertex(reader: &mut dyn Read) -> Result<Vertex, RequestError> {
    let vertex = read_u16(reader)?;
    if vertex == 0 {
        return Err(RequestError::ZeroVertex);
    }
    Ok(vertex)
}
