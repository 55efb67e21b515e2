use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use toraja_core::weather::WeatherPanel;
use tracing::info;

use super::LangQuery;
use crate::api::{ApiResponse, views::WeatherView};
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

fn panel(state: &AppState) -> AppResult<&Arc<WeatherPanel>> {
    state
        .weather
        .as_ref()
        .ok_or_else(|| AppError::not_found("Weather panel is disabled"))
}

/// Last known panel state. Never triggers a fetch.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<ApiResponse<WeatherView>>> {
    let panel = panel(&state)?;
    let locale = state.locale(query.lang);
    let view =
        WeatherView::new(&panel.location().name, panel.state().await, locale);
    Ok(Json(ApiResponse::success(view)))
}

/// User-triggered one-shot fetch. A failure is reported in the body, not as
/// an HTTP error, so the panel can show it next to its refresh button.
pub async fn refresh_weather(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> AppResult<Json<ApiResponse<WeatherView>>> {
    let panel = panel(&state)?;
    let locale = state.locale(query.lang);
    info!(location = %panel.location().name, "weather refresh requested");
    let outcome = panel.refresh().await;
    Ok(Json(ApiResponse::success(WeatherView::new(
        &panel.location().name,
        outcome,
        locale,
    ))))
}
