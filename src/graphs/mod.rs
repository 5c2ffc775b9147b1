use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use serde::{Deserialize, Serialize};

pub mod vec_graph;

pub type Vertex = u16;
pub type Distance = u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Distance,
}

impl WeightedEdge {
    pub fn remove_tail(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: Vertex,
    pub weight: Distance,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: Vertex) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex as Vertex).len() as u32)
            .sum::<u32>()
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;
}

/// Reads a graph from a plain text edge list, one `tail head weight` triple
/// per line. Lines starting with '#' are skipped.
pub fn read_edges_from_text_file(file: &Path) -> Vec<WeightedEdge> {
    let file = File::open(file).unwrap();
    let reader = BufReader::new(file);

    reader
        .lines()
        .map(|line| line.unwrap())
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .map(|line| {
            let mut values = line.split_whitespace();
            let tail: Vertex = values
                .next()
                .unwrap_or_else(|| panic!("no tail found in line {}", line))
                .parse()
                .unwrap_or_else(|_| panic!("unable to parse tail in line {}", line));
            let head: Vertex = values
                .next()
                .unwrap_or_else(|| panic!("no head found in line {}", line))
                .parse()
                .unwrap_or_else(|_| panic!("unable to parse head in line {}", line));
            let weight: Distance = values
                .next()
                .unwrap_or_else(|| panic!("no weight found in line {}", line))
                .parse()
                .unwrap_or_else(|_| panic!("unable to parse weight in line {}", line));
            WeightedEdge { tail, head, weight }
        })
        .collect()
}
