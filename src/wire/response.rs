use itertools::Itertools;

use crate::{graphs::Vertex, search::path::Path};

/// Renders the reply for one request: the path's vertices joined by `->`
/// with the total distance in parentheses, or the no path report. Always a
/// single newline terminated UTF-8 line, no trailing NUL.
pub fn render_response(source: Vertex, target: Vertex, path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("{} ({})\n", path.vertices.iter().join("->"), path.distance),
        None => format!("No path from '{}' to '{}'\n", source, target),
    }
}
