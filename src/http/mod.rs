//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, router-wide layers)
//!     → per-route logging middleware (resolved LogPolicy)
//!     → handlers.rs (example payloads)
//!     → response advice (envelope wrapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request_id;
pub mod server;

pub use request_id::{UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
