//! OS signal handling.

use crate::lifecycle::shutdown::Shutdown;

/// Wait for ctrl-c and trigger graceful shutdown.
pub async fn shutdown_on_signal(shutdown: &Shutdown) {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutdown signal received");
    shutdown.trigger();
}
