//! Uniform response envelope subsystem.
//!
//! # Data Flow
//! ```text
//! handler output
//!     → advice.rs (router-wide wrapping layer)
//!         empty body        → success(null) JSON
//!         JSON envelope     → passed through unchanged
//!         other JSON        → wrapped as success(value)
//!         text/plain        → envelope serialized to a JSON string
//!         anything else     → passed through unchanged
//! ```

pub mod advice;
pub mod envelope;

pub use advice::wrap_responses;
pub use envelope::{Envelope, ResponseCode};
