use std::{
    io::{Read, Write},
    net::TcpStream,
    path::PathBuf,
};

use clap::Parser;
use wire_paths::{
    graphs::{read_edges_from_text_file, Vertex},
    wire::encode_request,
};

/// Sends a shortest path query to a running server. The graph is read from a
/// text edge list with one `tail head weight` triple per line, `#` starts a
/// comment line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph as a text edge list
    #[arg(short, long)]
    graph: PathBuf,
    /// Vertex the path starts at
    #[arg(short, long)]
    source: Vertex,
    /// Vertex the path ends at
    #[arg(short, long)]
    target: Vertex,
    /// Server to query
    #[arg(short, long, default_value = "127.0.0.1:7777")]
    address: String,
}

fn main() {
    flexi_logger::Logger::try_with_env_or_str("info")
        .unwrap()
        .start()
        .unwrap();

    let args = Args::parse();

    let edges = read_edges_from_text_file(&args.graph);
    let request = encode_request(args.source, args.target, &edges);

    let mut stream = TcpStream::connect(&args.address).unwrap();
    stream.write_all(&request).unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    print!("{}", response);
}
