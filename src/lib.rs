//! Standard web backend boilerplate.
//!
//! Demonstrates the cross-cutting concerns every endpoint here shares:
//! per-endpoint request/response logging gated by declared log tags, a
//! uniform `{code, message, data}` response envelope applied centrally, and
//! terminal translation of failures into envelopes.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod logging;
pub mod observability;
pub mod response;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use logging::{LogPolicy, LogTag};
pub use response::{Envelope, ResponseCode};
