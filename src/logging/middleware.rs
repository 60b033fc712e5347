//! Request/response logging middleware.
//!
//! # Responsibilities
//! - Emit the URL, request-arguments, and response-body log lines an
//!   endpoint's resolved `LogPolicy` allows
//! - Record per-request metrics
//!
//! # Design Decisions
//! - The policy is attached per route when the router is built; this layer
//!   only reads it
//! - Bodies are buffered only when the corresponding line is enabled, and
//!   restored unchanged for the inner service
//! - Failures from the inner service propagate unchanged; this layer
//!   observes control flow, never alters it. Its own buffering failures are
//!   raised as `ServiceError` so they reach the client as envelopes

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;

use crate::error::ServiceError;
use crate::logging::policy::LogPolicy;
use crate::observability::metrics;

/// Per-route logging configuration, attached when the router is built.
#[derive(Debug, Clone, Copy)]
pub struct LoggingState {
    /// Resolved policy for this endpoint.
    pub policy: LogPolicy,
    /// Cap for body buffering; matches the router's request body limit.
    pub max_body_bytes: usize,
}

/// Middleware applied per route with that route's resolved policy.
pub async fn log_requests(
    State(state): State<LoggingState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let policy = state.policy;
    let method = request.method().clone();
    let uri = request.uri().clone();
    let path = uri.path().to_string();

    if policy.url {
        tracing::info!(method = %method, uri = %uri, "request url");
    }

    let request = if policy.request {
        let query = uri.query().unwrap_or_default().to_string();
        let (parts, body) = request.into_parts();
        let bytes = match to_bytes(body, state.max_body_bytes).await {
            Ok(bytes) => bytes,
            Err(error) => {
                return ServiceError::unexpected(format!(
                    "failed to buffer request body: {error}"
                ))
                .into_response();
            }
        };
        tracing::info!(
            query = %query,
            body = %String::from_utf8_lossy(&bytes),
            "request params"
        );
        Request::from_parts(parts, Body::from(bytes))
    } else {
        request
    };

    let response = next.run(request).await;
    let status = response.status();

    let response = if policy.response {
        let (parts, body) = response.into_parts();
        match to_bytes(body, state.max_body_bytes).await {
            Ok(bytes) => {
                tracing::info!(body = %String::from_utf8_lossy(&bytes), "response");
                Response::from_parts(parts, Body::from(bytes))
            }
            Err(error) => {
                return ServiceError::unexpected(format!(
                    "failed to buffer response body: {error}"
                ))
                .into_response();
            }
        }
    } else {
        response
    };

    metrics::record_request(method.as_str(), &path, status.as_u16(), start);
    response
}
