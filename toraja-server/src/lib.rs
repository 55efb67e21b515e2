//! HTTP API for the Tana Toraja tourism site.
//!
//! Serves bilingual content from the in-memory store, server-rendered
//! carousel windows, the weather panel and the admin endpoints. The binary in
//! `main.rs` only loads configuration and calls [`create_app`].

pub mod api;
pub mod handlers;
pub mod infra;
pub mod routes;

use axum::{Router, http::HeaderValue};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

pub use infra::app_state::AppState;

/// Build the full application router with middleware applied.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = cors_layer(&state.config().cors.allowed_origins);

    Router::new()
        .merge(routes::create_api_router())
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive when no origins are configured, an allow-list otherwise.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
