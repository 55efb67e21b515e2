use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    handlers::{admin, carousel, content, health, weather},
};

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .merge(create_site_routes())
        .merge(create_weather_routes())
        .merge(create_admin_routes())
}

/// Public bilingual content. Static prefixes take priority over the
/// `{collection}` captures.
fn create_site_routes() -> Router<AppState> {
    Router::new()
        .route("/legal/{kind}", get(content::get_legal_page))
        .route("/carousels/{key}", get(carousel::get_carousel))
        .route("/{collection}", get(content::list_content))
        .route("/{collection}/{slug}", get(content::get_content))
}

fn create_weather_routes() -> Router<AppState> {
    Router::new()
        .route("/weather", get(weather::get_weather))
        .route("/weather/refresh", post(weather::refresh_weather))
}

fn create_admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/content", post(admin::upsert_content))
        .route(
            "/admin/content/{collection}/{id}",
            delete(admin::delete_content),
        )
        .route("/admin/activity", get(admin::list_activity))
}
