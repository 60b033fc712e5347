//! Example endpoints exercising the envelope and log-policy pipeline.
//!
//! These are payloads, not business logic: one plain-text result, one JSON
//! result, one declared business failure, one panic, and one endpoint per
//! log-tag variant.

use axum::Json;
use serde::Serialize;

use crate::error::ServiceError;

#[derive(Serialize)]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Plain-text success; the whole envelope is serialized to a JSON string.
pub async fn success() -> &'static str {
    "success"
}

/// Empty body; the advice returns `success(null)` as JSON.
pub async fn ping() {}

/// Structured success; wrapped as `{"code":0,...,"data":{...}}`.
pub async fn user() -> Json<UserProfile> {
    Json(UserProfile {
        id: 1,
        name: "guest".to_string(),
        email: "guest@example.com".to_string(),
    })
}

/// Declared business failure; translated to envelope code 1000.
pub async fn domain_error() -> Result<&'static str, ServiceError> {
    Err(ServiceError::service("business rule violated"))
}

/// Handler panic; the catch-panic layer turns it into envelope code 1001
/// and the process keeps serving.
pub async fn blow_up() -> &'static str {
    panic!("simulated unexpected failure")
}

/// Declared with tag `{Url}`: everything but the URL line is logged.
pub async fn less_url() -> &'static str {
    "lessUrl"
}

/// Declared with tag `{Request}`: everything but the params line is logged.
pub async fn less_request() -> &'static str {
    "lessRequest"
}

/// Declared with tag `{Response}`: everything but the response line is logged.
pub async fn less_response() -> &'static str {
    "lessResponse"
}

/// Declared with tag `{All}`: nothing is logged.
pub async fn quiet() -> &'static str {
    "quiet"
}

/// Declared with tag `{None}`: everything is logged.
pub async fn verbose() -> &'static str {
    "verbose"
}
