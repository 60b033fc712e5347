//! The uniform response envelope.
//!
//! Every exposed operation's result crosses the wire as
//! `{"code": int, "message": string, "data": <payload or null>}`.
//! `code = 0` signals success; any other value is a failure category.
//! Envelopes are constructed once per response and never mutated.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Well-known response categories. The numeric codes are part of the wire
/// contract and must remain stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    /// Successful call.
    Success,
    /// Generic failure.
    Fail,
    /// Declared business failure.
    ServiceUnknown,
    /// Uncaught system failure.
    SystemUnknown,
}

impl ResponseCode {
    /// Numeric code placed in the envelope.
    pub fn code(self) -> i32 {
        match self {
            ResponseCode::Success => 0,
            ResponseCode::Fail => -1,
            ResponseCode::ServiceUnknown => 1000,
            ResponseCode::SystemUnknown => 1001,
        }
    }

    /// Default human-readable message for the category.
    pub fn message(self) -> &'static str {
        match self {
            ResponseCode::Success => "success",
            ResponseCode::Fail => "fail",
            ResponseCode::ServiceUnknown => "service exception",
            ResponseCode::SystemUnknown => "unknown system error",
        }
    }
}

/// Uniform success/failure wrapper for every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            code: ResponseCode::Success.code(),
            message: ResponseCode::Success.message().to_string(),
            data: Some(data),
        }
    }

    /// Successful envelope with no payload.
    pub fn success_empty() -> Self {
        Self {
            code: ResponseCode::Success.code(),
            message: ResponseCode::Success.message().to_string(),
            data: None,
        }
    }

    /// Failure envelope with code and message set verbatim.
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Failure envelope from a category, with the default message unless a
    /// specific one is supplied.
    pub fn from_code(code: ResponseCode, message: Option<&str>) -> Self {
        Self::error(code.code(), message.unwrap_or(code.message()))
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
