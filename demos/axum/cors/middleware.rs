use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use cors_guard::{CorsDecision, CorsRequest, CorsResponse, RequestContext, constants::header};

use super::AppState;

/// Runs the CORS stage before the route handler.
///
/// The continuation is async here, so the middleware works from the
/// decision returned by `check` instead of the callback-based `handle`.
pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().as_str().to_owned();
    let origin = request.header(header::ORIGIN).map(str::to_owned);
    let context = RequestContext::new(&method, origin.as_deref());

    match state.cors.check(&context) {
        CorsDecision::Preflight(result) => {
            let mut response = Response::new(Body::empty());
            response.apply_headers(&result.headers);
            if let Some(status) = result.status {
                response.set_status(status);
            }
            response
        }
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            response.apply_headers(&result.headers);
            response
        }
        CorsDecision::Rejected(rejection) => {
            let mut response = Response::new(Body::empty());
            response.end(rejection.status, rejection.message);
            response
        }
    }
}
