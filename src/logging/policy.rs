//! Log policy resolution.
//!
//! # Responsibilities
//! - Define the per-endpoint log tags declared at registration time
//! - Resolve a declared tag set into an effective `LogPolicy`
//!
//! # Design Decisions
//! - Resolution is a pure total function: every tag set maps to a policy
//! - Resolved once when the router is built, not per request
//! - The sentinel tags invert: `None` means "nothing suppressed" (log
//!   everything), `All` means "suppress all log types". This matches the
//!   historical contract and is covered explicitly by tests; do not "fix" it.

/// A log type that an endpoint can declare for suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    /// The request's target identifier (method + URI).
    Url,
    /// The serialized request arguments.
    Request,
    /// The serialized response body.
    Response,
    /// All of the above.
    All,
    /// None of the above.
    None,
}

/// Effective logging decision for one endpoint. Always fully determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogPolicy {
    /// Emit the target-identifier line.
    pub url: bool,
    /// Emit the request-arguments line.
    pub request: bool,
    /// Emit the response-body line.
    pub response: bool,
}

impl LogPolicy {
    /// Policy that emits every log line.
    pub fn everything() -> Self {
        Self {
            url: true,
            request: true,
            response: true,
        }
    }

    /// Policy that emits nothing.
    pub fn nothing() -> Self {
        Self {
            url: false,
            request: false,
            response: false,
        }
    }

    /// Resolve a declared tag set into an effective policy.
    ///
    /// Precedence:
    /// 1. an empty set behaves as `{None}`;
    /// 2. a set containing `None` yields the all-true policy;
    /// 3. otherwise a set containing `All` yields the all-false policy;
    /// 4. otherwise each flag is true unless its exact tag is present
    ///    (declaring a tag suppresses that log type).
    pub fn resolve(tags: &[LogTag]) -> Self {
        if tags.is_empty() || tags.contains(&LogTag::None) {
            return Self::everything();
        }
        if tags.contains(&LogTag::All) {
            return Self::nothing();
        }
        Self {
            url: !tags.contains(&LogTag::Url),
            request: !tags.contains(&LogTag::Request),
            response: !tags.contains(&LogTag::Response),
        }
    }
}
