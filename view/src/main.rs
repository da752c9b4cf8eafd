use std::{io, net::SocketAddr};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;

#[derive(Parser, Debug)]
#[command(author, version, about = "Knight path lookups over HTTP", long_about = None)]
struct Args {
    #[arg(long, env = "KNIGHT_VIEW_ADDR", default_value = "0.0.0.0:3000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    info!(addr = %args.addr, "listening");
    axum::serve(listener, api::router()).await
}
