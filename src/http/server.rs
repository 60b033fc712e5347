//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all endpoints
//! - Attach each endpoint's log policy at registration time
//! - Wire up middleware (envelope wrapping, catch-panic, limits, timeout,
//!   request ID, tracing)
//! - Bind the server to a listener and serve with graceful shutdown

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, request_id::PropagateRequestIdLayer,
    request_id::SetRequestIdLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::error::handle_panic;
use crate::http::handlers;
use crate::http::request_id::{UuidRequestId, X_REQUEST_ID};
use crate::logging::{log_requests, LogPolicy, LogTag, LoggingState};
use crate::response::wrap_responses;

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

/// Attach a log policy to one endpoint. The declared tags are resolved here,
/// once, when the router is built.
fn logged(handler: MethodRouter, tags: &[LogTag], max_body_bytes: usize) -> MethodRouter {
    let state = LoggingState {
        policy: LogPolicy::resolve(tags),
        max_body_bytes,
    };
    handler.layer(middleware::from_fn_with_state(state, log_requests))
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router: endpoints with their declared log tags, then
    /// the router-wide layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig) -> Router {
        let limit = config.limits.max_body_bytes;
        Router::new()
            .route("/api/success", logged(get(handlers::success), &[], limit))
            .route("/api/ping", logged(get(handlers::ping), &[], limit))
            .route("/api/user", logged(get(handlers::user), &[], limit))
            .route("/api/error", logged(get(handlers::domain_error), &[], limit))
            .route("/api/panic", logged(get(handlers::blow_up), &[], limit))
            .route(
                "/api/less-url",
                logged(get(handlers::less_url), &[LogTag::Url], limit),
            )
            .route(
                "/api/less-request",
                logged(get(handlers::less_request), &[LogTag::Request], limit),
            )
            .route(
                "/api/less-response",
                logged(get(handlers::less_response), &[LogTag::Response], limit),
            )
            .route("/api/quiet", logged(get(handlers::quiet), &[LogTag::All], limit))
            .route(
                "/api/verbose",
                logged(get(handlers::verbose), &[LogTag::None], limit),
            )
            .layer(
                // Outermost first: tracing and request IDs wrap everything.
                // The advice sits outside the panic catcher so panic
                // envelopes also cross it and get the boundary failure log.
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID.clone(), UuidRequestId))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone()))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(DefaultBodyLimit::max(limit))
                    .layer(middleware::from_fn(wrap_responses))
                    .layer(CatchPanicLayer::custom(handle_panic)),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
