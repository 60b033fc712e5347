//! Terminal failure translation.
//!
//! # Responsibilities
//! - Define the service failure taxonomy (declared business failure vs.
//!   anything unexpected)
//! - Translate every failure reaching the boundary into a response envelope
//! - Catch handler panics so no failure ever escapes the process
//!
//! # Design Decisions
//! - Failures keep HTTP status 200; the category lives in the envelope code
//! - Nothing is retried here; a failure terminates the call's normal path
//! - The raw failure message is forwarded to the client for both categories

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderValue, Response as HttpResponse, StatusCode},
    response::{IntoResponse, Response},
};
use std::any::Any;
use thiserror::Error;

use crate::response::envelope::{Envelope, ResponseCode};

/// Failure raised by an operation. `Service` is an intentional business
/// failure; `Unexpected` is everything else that reached the boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Declared business-rule violation, mapped to code 1000.
    #[error("{0}")]
    Service(String),

    /// Uncaught engineering failure, mapped to code 1001.
    #[error("{0}")]
    Unexpected(String),
}

impl ServiceError {
    /// Business failure with a caller-facing message.
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }

    /// Unexpected failure with a caller-facing message.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Envelope category for this failure.
    pub fn response_code(&self) -> ResponseCode {
        match self {
            ServiceError::Service(_) => ResponseCode::ServiceUnknown,
            ServiceError::Unexpected(_) => ResponseCode::SystemUnknown,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match &self {
            ServiceError::Service(message) => {
                tracing::error!(message = %message, detail = ?self, "service failure");
            }
            ServiceError::Unexpected(message) => {
                tracing::error!(message = %message, detail = ?self, "unhandled failure");
            }
        }
        let code = self.response_code();
        Envelope::<()>::from_code(code, Some(&self.to_string())).into_response()
    }
}

/// Panic handler wired into the router's catch-panic layer. Produces the
/// system-failure envelope so the process keeps serving.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> HttpResponse<Body> {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    tracing::error!(message = %message, "panic in request handler");

    let envelope = Envelope::<()>::from_code(ResponseCode::SystemUnknown, Some(&message));
    let body = serde_json::to_vec(&envelope).unwrap_or_default();
    let mut response = HttpResponse::new(Body::from(body));
    *response.status_mut() = StatusCode::OK;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_failure_maps_to_business_code() {
        let err = ServiceError::service("bad input");
        assert_eq!(err.response_code(), ResponseCode::ServiceUnknown);
        assert_eq!(err.to_string(), "bad input");
    }

    #[test]
    fn unexpected_failure_maps_to_system_code() {
        let err = ServiceError::unexpected("io broke");
        assert_eq!(err.response_code(), ResponseCode::SystemUnknown);
        assert_eq!(err.to_string(), "io broke");
    }
}
