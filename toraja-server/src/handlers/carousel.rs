use std::str::FromStr;
use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::Utc;
use serde::Deserialize;
use toraja_core::carousel::{Carousel, CarouselKey, CarouselView};
use toraja_core::content::{featured_destinations, upcoming_rambu_solo};
use toraja_model::{ContentDocument, Locale};

use crate::api::{
    ApiResponse,
    views::{CarouselWindow, ContentSummary},
};
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// Width assumed when the client does not report one.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarouselQuery {
    pub lang: Option<Locale>,
    pub viewport_width: Option<f32>,
    /// Page to show; out-of-range pages wrap.
    pub page: Option<usize>,
}

async fn carousel_items(
    state: &AppState,
    key: CarouselKey,
) -> AppResult<Vec<ContentDocument>> {
    let store = state.store();
    let items: Vec<ContentDocument> = match key {
        CarouselKey::FeaturedDestinations => featured_destinations(store)
            .await?
            .into_iter()
            .map(ContentDocument::from)
            .collect(),
        CarouselKey::RambuSoloEvents => {
            upcoming_rambu_solo(store, Utc::now().date_naive())
                .await?
                .into_iter()
                .map(ContentDocument::from)
                .collect()
        }
        CarouselKey::Custom(name) => {
            return Err(AppError::not_found(format!(
                "Unknown carousel '{name}'"
            )));
        }
    };
    Ok(items)
}

/// Render one page of a site carousel on the server.
pub async fn get_carousel(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<CarouselQuery>,
) -> AppResult<Json<ApiResponse<CarouselWindow>>> {
    let key = CarouselKey::from_str(&key)?;
    let locale = state.locale(query.lang);
    let items = carousel_items(&state, key).await?;

    let config = state.carousel_config(key);
    let width = query
        .viewport_width
        .filter(|w| w.is_finite() && *w >= 0.0)
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH);
    let now = Instant::now();
    let mut carousel = Carousel::mount(config, items.len(), width, now);
    if let Some(page) = query.page {
        carousel.jump_to(page, now);
    }

    let window = match CarouselView::compose(&carousel, &items) {
        Some(view) => CarouselWindow {
            key: key.as_str(),
            page: view.current_page,
            total_pages: view.total_pages,
            items_per_page: carousel.items_per_page(),
            show_controls: view.show_controls,
            autoplay_interval_ms: millis(carousel.autoplay_interval()),
            transition_ms: millis(config.transition_duration),
            dots: view.dots.clone(),
            items: view.map(|doc| ContentSummary::from_document(doc, locale)),
        },
        // Nothing to rotate through: the section renders empty.
        None => CarouselWindow {
            key: key.as_str(),
            page: 0,
            total_pages: 0,
            items_per_page: carousel.items_per_page(),
            show_controls: false,
            autoplay_interval_ms: millis(carousel.autoplay_interval()),
            transition_ms: millis(config.transition_duration),
            dots: Vec::new(),
            items: Vec::new(),
        },
    };
    carousel.unmount();

    Ok(Json(ApiResponse::success(window)))
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
