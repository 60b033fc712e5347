//! Central response wrapping.
//!
//! # Responsibilities
//! - Wrap every handler's output in the uniform envelope before it reaches
//!   the wire
//! - Leave bodies that are already envelopes untouched (idempotent wrapping)
//! - Log the target identifier for every failure envelope crossing the
//!   boundary
//!
//! # Design Decisions
//! - Applied as a router-wide layer, outside the per-route logging layer, so
//!   the response log line shows the handler's raw result
//! - Only successful responses are wrapped; framework rejections (404, 405,
//!   timeouts, body limits) pass through unchanged rather than being
//!   relabeled as code-0 success
//! - Textual bodies get the whole envelope serialized to a JSON string
//!   instead of a nested structure; text transports carry a string body, not
//!   a structured one
//! - Non-JSON, non-text bodies (e.g. binary) pass through unchanged

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderValue, StatusCode, Uri,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::response::envelope::Envelope;

/// Buffering cap for response bodies; boilerplate payloads are small.
const MAX_WRAPPED_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Returns true when a JSON value already has the envelope shape.
fn is_envelope(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            map.len() == 3
                && map.get("code").is_some_and(Value::is_i64)
                && map.get("message").is_some_and(Value::is_string)
                && map.contains_key("data")
        }
        _ => false,
    }
}

fn content_type_of(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase())
}

/// Log the failure's target identifier when an error envelope crosses the
/// boundary.
fn log_failure(uri: &Uri, envelope: &Value) {
    let code = envelope.get("code").and_then(Value::as_i64).unwrap_or(0);
    if code == 0 {
        return;
    }
    let message = envelope
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();
    tracing::error!(uri = %uri, code, message = %message, "error url");
}

/// Router-wide middleware wrapping every response body in an envelope.
pub async fn wrap_responses(request: Request, next: Next) -> Response {
    let uri = request.uri().clone();
    let response = next.run(request).await;

    // Framework rejections are not operation results; relabeling them as
    // code-0 success would break the envelope contract.
    if !response.status().is_success() {
        return response;
    }

    let content_type = content_type_of(&response);

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_WRAPPED_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!(%error, "failed to buffer response body for wrapping");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    // The original length no longer applies once the body is rewritten.
    parts.headers.remove(CONTENT_LENGTH);

    let is_json = content_type.as_deref().is_some_and(|ct| ct.starts_with("application/json"));
    let is_text = content_type.as_deref().is_some_and(|ct| ct.starts_with("text/plain"));

    if bytes.is_empty() {
        parts
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let body = match serde_json::to_vec(&Envelope::<Value>::success_empty()) {
            Ok(body) => body,
            Err(error) => {
                tracing::error!(%error, "failed to serialize empty envelope");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        return Response::from_parts(parts, Body::from(body));
    }

    if is_json {
        let value: Value = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(error) => {
                tracing::error!(%error, "response declared JSON but did not parse");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        // Already an envelope: hand it on untouched.
        if is_envelope(&value) {
            log_failure(&uri, &value);
            return Response::from_parts(parts, Body::from(bytes));
        }
        let body = match serde_json::to_vec(&Envelope::success(value)) {
            Ok(body) => body,
            Err(error) => {
                tracing::error!(%error, "failed to serialize envelope");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        return Response::from_parts(parts, Body::from(body));
    }

    if is_text {
        // Text transports carry a string body, so the envelope itself is
        // serialized to a JSON string rather than wrapped structurally.
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = match serde_json::to_string(&Envelope::success(Value::String(text))) {
            Ok(body) => body,
            Err(error) => {
                tracing::error!(%error, "failed to serialize envelope");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        return Response::from_parts(parts, Body::from(body));
    }

    Response::from_parts(parts, Body::from(bytes))
}
