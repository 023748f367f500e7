use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use metroroute_core::prelude::create_metro_network;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;

use config::ServerConfig;
use error::ServerError;

/// HTTP route finding service for a metro network
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "metroroute.toml")]
    config: PathBuf,

    /// Address to listen on, overrides `bind` from the config file
    #[arg(long)]
    bind: Option<SocketAddr>,
}

fn init_tracing(filter: &str) -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ServerError::Logging(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn run(args: Args) -> Result<(), ServerError> {
    let mut config = ServerConfig::from_file(&args.config)?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    init_tracing(&config.log_filter)?;

    // Network loading is blocking file I/O
    let network_config = config.network_config();
    let network = tokio::task::spawn_blocking(move || create_metro_network(&network_config))
        .await
        .map_err(|e| ServerError::Io(std::io::Error::other(e)))??;
    info!("Loaded {}", network.network_info());

    let app = api::app(Arc::new(network), &config);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("metroroute-server: {e}");
        std::process::exit(1);
    }
}
