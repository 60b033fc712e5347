//! Standard web backend boilerplate service.
//!
//! # Architecture Overview
//!
//! ```text
//! Client Request
//!     → request-id / trace / timeout / body-limit layers
//!     → catch-panic (unexpected failures → envelope 1001)
//!     → response advice (uniform envelope wrapping)
//!     → per-route logging middleware (resolved LogPolicy)
//!     → handler (may raise a declared business failure → envelope 1000)
//! Client Response
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use web_standard::config::{load_config, ServiceConfig};
use web_standard::http::HttpServer;
use web_standard::lifecycle::{signals, Shutdown};
use web_standard::observability;

#[derive(Parser)]
#[command(version, about = "Standard web backend boilerplate")]
struct Cli {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_tracing();

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => load_config(&path)?,
        None => ServiceConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(error) => tracing::error!(
                %error,
                metrics_address = %config.observability.metrics_address,
                "failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_on_signal(&shutdown).await;
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
