//! ElastiCache Discovery CLI
//!
//! Resolves the cluster nodes behind a configuration endpoint and prints them.

use clap::Parser;
use elasticache_discovery::{ClusterResolver, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// ElastiCache node discovery
#[derive(Parser, Debug)]
#[command(name = "elasticache-discover")]
#[command(about = "Print the nodes of an ElastiCache memcached cluster")]
#[command(version)]
struct Args {
    /// Configuration endpoint (host:port)
    #[arg(short, long, env = "ELASTICACHE_ENDPOINT")]
    endpoint: Option<String>,

    /// Connect timeout in milliseconds (0 = none)
    #[arg(long, default_value = "0")]
    connect_timeout_ms: u64,

    /// Read/write timeout in milliseconds (0 = none)
    #[arg(short = 't', long, default_value = "0")]
    timeout_ms: u64,

    /// Print only the host:port URL of each node
    #[arg(short, long)]
    urls: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,elasticache_discovery=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder()
        .connect_timeout_ms(args.connect_timeout_ms)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms);
    if let Some(endpoint) = args.endpoint {
        builder = builder.endpoint(endpoint);
    }

    let nodes = match ClusterResolver::new(builder.build()).resolve_nodes() {
        Ok(nodes) => nodes,
        Err(e) => {
            tracing::error!("Discovery failed: {}", e);
            std::process::exit(1);
        }
    };

    for node in &nodes {
        if args.urls {
            println!("{}", node.url());
        } else {
            println!("{} {} {}", node.host, node.ip, node.port);
        }
    }
}
