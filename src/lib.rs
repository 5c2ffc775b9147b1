use std::io::Read;

use log::debug;

use crate::{
    error::RequestError,
    search::dijkstra::dijkstra_one_to_one_wrapped,
    wire::{response::render_response, RouteRequest},
};

pub mod error;
pub mod graphs;
pub mod search;
pub mod server;
pub mod utility;
pub mod wire;

/// Answers one request end to end: decode the graph from `reader`, run the
/// search, render the reply. All state lives on the request and is dropped
/// on every exit path.
pub fn solve(reader: &mut dyn Read) -> Result<String, RequestError> {
    let request = RouteRequest::decode(reader)?;
    debug!(
        "routing {} -> {} over {} edges",
        request.source,
        request.target,
        request.edges.len()
    );

    let graph = request.to_graph();
    let path = dijkstra_one_to_one_wrapped(&graph, request.source, request.target);

    Ok(render_response(request.source, request.target, path.as_ref()))
}
