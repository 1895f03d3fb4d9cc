#![allow(dead_code)]

use cors_guard::{CorsDecision, CorsRejection, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => {
            assert!(result.status.is_none(), "simple results carry no status");
            assert!(!result.end_response, "simple results continue the pipeline");
            result.headers
        }
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16, bool) {
    match decision {
        CorsDecision::Preflight(result) => (
            result.headers,
            result.status.expect("preflight results carry a status"),
            result.end_response,
        ),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_rejected(decision: CorsDecision) -> CorsRejection {
    match decision {
        CorsDecision::Rejected(rejection) => rejection,
        other => panic!("expected rejection, got {:?}", other),
    }
}
