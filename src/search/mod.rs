pub mod bellman_ford;
pub mod collections;
pub mod dijkstra;
pub mod path;
