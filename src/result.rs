use crate::constants::{ORIGIN_NOT_ALLOWED, status};
use crate::headers::Headers;

/// Headers and response metadata for a request the policy accepted.
#[derive(Debug, Clone)]
pub struct CorsResult {
    pub headers: Headers,
    pub status: Option<u16>,
    pub end_response: bool,
}

/// A cross-origin request the policy refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsRejection {
    pub status: u16,
    pub message: &'static str,
}

impl Default for CorsRejection {
    fn default() -> Self {
        Self {
            status: status::FORBIDDEN,
            message: ORIGIN_NOT_ALLOWED,
        }
    }
}

/// Outcome of evaluating one request against the middleware.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    /// `OPTIONS` request answered with 204; the next handler must not run.
    Preflight(CorsResult),
    /// Headers to apply before handing the request to the next handler.
    Simple(CorsResult),
    /// Origin refused; answer with the rejection and skip the next handler.
    Rejected(CorsRejection),
}

impl CorsDecision {
    pub fn is_rejected(&self) -> bool {
        matches!(self, CorsDecision::Rejected(_))
    }

    /// Whether the next handler in the pipeline should run.
    pub fn continues(&self) -> bool {
        matches!(self, CorsDecision::Simple(_))
    }
}
