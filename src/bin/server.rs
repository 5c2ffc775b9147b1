use clap::Parser;
use tokio::net::TcpListener;
use wire_paths::server::serve;

/// Serves shortest path queries over TCP. Each connection carries one binary
/// graph request and receives one plain text reply.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "0.0.0.0")]
    address: String,
    /// Port to listen on
    #[arg(short, long, default_value = "7777")]
    port: u16,
}

#[tokio::main]
async fn main() {
    flexi_logger::Logger::try_with_env_or_str("info")
        .unwrap()
        .start()
        .unwrap();

    let args = Args::parse();
    let listener = TcpListener::bind((args.address.as_str(), args.port))
        .await
        .unwrap();

    serve(listener).await.unwrap();
}
