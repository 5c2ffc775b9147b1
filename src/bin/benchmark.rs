use std::{
    fs::File,
    io::BufWriter,
    path::PathBuf,
    time::{Duration, Instant},
};

use ahash::AHashSet;
use clap::Parser;
use indicatif::ParallelProgressIterator;
use rand::{thread_rng, Rng};
use rayon::prelude::*;
use wire_paths::{
    graphs::{vec_graph::VecGraph, Distance, WeightedEdge},
    search::{
        bellman_ford::bellman_ford,
        path::{ShortestPathRequest, ShortestPathTestCase},
    },
    solve,
    utility::get_progressbar,
    wire::encode_request,
};

/// Generates a random graph plus a batch of random queries, runs every query
/// through the full decode/search/render pipeline in memory and cross checks
/// each answer against a Bellman-Ford reference.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices of the generated graph
    #[arg(short = 'v', long, default_value = "1000")]
    number_of_vertices: u16,
    /// Number of edges of the generated graph
    #[arg(short = 'e', long, default_value = "5000")]
    number_of_edges: u32,
    /// Number of queries to run
    #[arg(short = 'r', long, default_value = "100")]
    number_of_requests: u32,
    /// Path where the checked queries will be saved as json test cases
    #[arg(short, long)]
    test_cases: Option<PathBuf>,
}

fn main() {
    flexi_logger::Logger::try_with_env_or_str("info")
        .unwrap()
        .start()
        .unwrap();

    let args = Args::parse();
    let mut rng = thread_rng();

    let edges: Vec<WeightedEdge> = (0..args.number_of_edges)
        .map(|_| WeightedEdge {
            tail: rng.gen_range(1..=args.number_of_vertices),
            head: rng.gen_range(1..=args.number_of_vertices),
            weight: rng.gen_range(1..=100),
        })
        .collect();

    let mut graph = VecGraph::with_vertices(args.number_of_vertices as usize + 1);
    edges.iter().for_each(|edge| graph.add_edge(edge));

    let mut pairs = AHashSet::new();
    while pairs.len() < args.number_of_requests as usize {
        pairs.insert((
            rng.gen_range(1..=args.number_of_vertices),
            rng.gen_range(1..=args.number_of_vertices),
        ));
    }
    let requests: Vec<ShortestPathRequest> = pairs
        .into_iter()
        .map(|(source, target)| ShortestPathRequest { source, target })
        .collect();

    let bar = get_progressbar("Solving requests", requests.len() as u64);
    let results: Vec<(Option<Distance>, Duration)> = requests
        .par_iter()
        .progress_with(bar)
        .map(|request| {
            let bytes = encode_request(request.source, request.target, &edges);

            let start = Instant::now();
            let response = solve(&mut bytes.as_slice()).unwrap();
            let duration = start.elapsed();

            let reference = bellman_ford(&graph, request.source);
            let expected = reference[request.target as usize];
            match expected {
                Some(distance) => assert!(
                    response.ends_with(&format!(" ({})\n", distance)),
                    "wrong distance for {} -> {}: got {:?}, expected {}",
                    request.source,
                    request.target,
                    response,
                    distance
                ),
                None => assert_eq!(
                    response,
                    format!("No path from '{}' to '{}'\n", request.source, request.target)
                ),
            }

            (expected, duration)
        })
        .collect();

    let total: Duration = results.iter().map(|(_, duration)| *duration).sum();
    println!("Average solve duration {:?}", total / results.len() as u32);

    if let Some(test_cases_path) = args.test_cases {
        let test_cases: Vec<ShortestPathTestCase> = requests
            .iter()
            .zip(results.iter())
            .map(|(request, (distance, _))| ShortestPathTestCase {
                request: request.clone(),
                distance: *distance,
            })
            .collect();

        let mut writer = BufWriter::new(File::create(&test_cases_path).unwrap());
        serde_json::to_writer(&mut writer, &test_cases).unwrap();
    }
}
