use wire_paths::{
    error::RequestError,
    graphs::{Distance, Vertex, WeightedEdge},
    solve,
    wire::{encode_request, RouteRequest},
};

fn edge(tail: Vertex, head: Vertex, weight: Distance) -> WeightedEdge {
    WeightedEdge { tail, head, weight }
}

fn example_edges() -> Vec<WeightedEdge> {
    vec![edge(1, 2, 1), edge(1, 3, 4), edge(2, 3, 1), edge(3, 4, 1)]
}

#[test]
fn decodes_what_was_encoded() {
    let bytes = encode_request(1, 4, &example_edges());

    let request = RouteRequest::decode(&mut bytes.as_slice()).unwrap();
    assert_eq!(request.source, 1);
    assert_eq!(request.target, 4);
    assert_eq!(request.edges, example_edges());
}

#[test]
fn truncated_header_is_a_decode_error() {
    let bytes = encode_request(1, 4, &example_edges());

    let result = RouteRequest::decode(&mut &bytes[..3]);
    assert!(matches!(result, Err(RequestError::TruncatedRequest)));
}

#[test]
fn truncated_edge_record_is_a_decode_error() {
    let bytes = encode_request(1, 4, &example_edges());

    // Cut mid-record: header plus one and a half edges.
    let result = RouteRequest::decode(&mut &bytes[..6 + 9]);
    assert!(matches!(result, Err(RequestError::TruncatedRequest)));
}

#[test]
fn zero_vertex_ids_are_rejected() {
    let zero_source = encode_request(0, 4, &example_edges());
    assert!(matches!(
        RouteRequest::decode(&mut zero_source.as_slice()),
        Err(RequestError::ZeroVertex)
    ));

    let zero_target = encode_request(1, 0, &example_edges());
    assert!(matches!(
        RouteRequest::decode(&mut zero_target.as_slice()),
        Err(RequestError::ZeroVertex)
    ));

    let zero_edge_head = encode_request(1, 4, &[edge(1, 0, 1)]);
    assert!(matches!(
        RouteRequest::decode(&mut zero_edge_head.as_slice()),
        Err(RequestError::ZeroVertex)
    ));
}

#[test]
fn bytes_after_declared_records_are_left_unread() {
    let mut bytes = encode_request(1, 4, &example_edges());
    bytes.extend([0xde, 0xad, 0xbe, 0xef]);

    let mut reader = bytes.as_slice();
    let request = RouteRequest::decode(&mut reader).unwrap();
    assert_eq!(request.edges.len(), 4);
    assert_eq!(reader, [0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn solve_reports_path_and_distance() {
    let bytes = encode_request(1, 4, &example_edges());

    let response = solve(&mut bytes.as_slice()).unwrap();
    assert_eq!(response, "1->2->3->4 (3)\n");
}

#[test]
fn solve_reports_no_path() {
    let bytes = encode_request(2, 1, &[edge(1, 2, 5)]);

    let response = solve(&mut bytes.as_slice()).unwrap();
    assert_eq!(response, "No path from '2' to '1'\n");
}

#[test]
fn solve_handles_source_equals_target() {
    let bytes = encode_request(7, 7, &[edge(7, 8, 1)]);

    let response = solve(&mut bytes.as_slice()).unwrap();
    assert_eq!(response, "7 (0)\n");
}

#[test]
fn solve_covers_query_vertices_beyond_edge_endpoints() {
    // Target id larger than any edge endpoint, the vertex table must still
    // cover it.
    let bytes = encode_request(1, 600, &[edge(1, 2, 5)]);

    let response = solve(&mut bytes.as_slice()).unwrap();
    assert_eq!(response, "No path from '1' to '600'\n");
}

#[test]
fn solve_is_deterministic_for_the_same_request() {
    let bytes = encode_request(1, 4, &example_edges());

    let first = solve(&mut bytes.as_slice()).unwrap();
    let second = solve(&mut bytes.as_slice()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn solve_surfaces_decode_errors() {
    let bytes = encode_request(1, 4, &example_edges());

    let result = solve(&mut &bytes[..10]);
    assert!(matches!(result, Err(RequestError::TruncatedRequest)));
}
