//! Per-endpoint request/response logging subsystem.
//!
//! # Data Flow
//! ```text
//! registration time:
//!     declared &[LogTag]
//!         → policy.rs resolve()
//!         → LogPolicy (immutable, per route)
//!
//! request time:
//!     middleware.rs reads the route's LogPolicy
//!         → optional url / params lines
//!         → inner handler
//!         → optional response line
//! ```
//!
//! # Design Decisions
//! - Tags are declared explicitly where each route is registered; there is
//!   no runtime metadata lookup
//! - An endpoint with no declared tags logs everything

pub mod middleware;
pub mod policy;

pub use middleware::{log_requests, LoggingState};
pub use policy::{LogPolicy, LogTag};
