mod cli;

use clap::Parser;
use paramecho::{
    routes,
    HttpServer,
};
use tracing::info;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut http_server = HttpServer::bind(cli.addr.as_str(), Some(cli.name.as_str()))?;
    let addr = http_server.serve(routes::router()).await?;
    info!(%addr, "Serving GET /sample. Press Ctrl-C to stop.");

    tokio::signal::ctrl_c().await?;
    http_server.shutdown().await;

    Ok(())
}
