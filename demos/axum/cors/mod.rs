use std::sync::Arc;

use cors_guard::{CorsConfiguration, CorsMiddleware, ValidationError};

pub type SharedCors = Arc<CorsMiddleware>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let configuration = CorsConfiguration::new()
        .with_origins(["http://app.example.com"])
        .with_methods(["GET", "POST", "OPTIONS"])
        .with_allow_headers(["Content-Type", "X-Requested-With", "X-Example-Trace"])
        .with_expose_headers(["X-Example-Trace"])
        .with_credentials(true)
        .with_max_age(600);

    let cors = Arc::new(CorsMiddleware::try_from_configuration(configuration)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS demo!",
    })
}

pub mod middleware;
