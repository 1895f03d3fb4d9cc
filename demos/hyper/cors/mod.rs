use std::sync::Arc;

use cors_guard::{CorsConfiguration, CorsMiddleware, CorsPolicy, ValidationError};

pub type SharedCors = Arc<CorsMiddleware>;
pub type SharedAppState = Arc<AppState>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<SharedAppState, ValidationError> {
    let mut cors = CorsMiddleware::try_from_configuration(
        CorsConfiguration::new()
            .with_methods(["GET", "POST", "OPTIONS"])
            .with_allow_headers(["Content-Type", "X-Requested-With", "X-Example-Trace"])
            .with_expose_headers(["X-Example-Trace"])
            .with_max_age(600),
    )?;
    cors.allow_origins(["http://app.example.com", "http://localhost:3000"]);
    cors.set_policy(CorsPolicy::AllowSpecific);

    Ok(Arc::new(AppState {
        cors: Arc::new(cors),
        greeting: "Welcome to the Hyper CORS demo!",
    }))
}

pub mod middleware;
