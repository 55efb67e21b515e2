//! Content management endpoints. Access control is expected in front of the
//! server; these handlers trust their callers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use toraja_core::content::ActivityEntry;
use toraja_model::ContentDocument;
use tracing::info;
use uuid::Uuid;

use super::content::parse_collection;
use crate::api::ApiResponse;
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub const DEFAULT_ACTIVITY_LIMIT: usize = 20;
pub const MAX_ACTIVITY_LIMIT: usize = 100;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityQuery {
    pub limit: Option<usize>,
}

/// Create or replace a document. Responds `201` for new documents.
pub async fn upsert_content(
    State(state): State<AppState>,
    Json(document): Json<ContentDocument>,
) -> AppResult<(StatusCode, Json<ApiResponse<ContentDocument>>)> {
    let saved = state.store().upsert(document).await?;
    info!(
        kind = %saved.document.kind(),
        slug = saved.document.slug(),
        action = ?saved.action,
        "admin saved content"
    );

    let status = if saved.created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(ApiResponse::success(saved.document))))
}

pub async fn delete_content(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> AppResult<Json<ApiResponse<ContentDocument>>> {
    let kind = parse_collection(&collection)?;
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request(format!("Invalid id '{id}'")))?;

    let removed = state.store().delete(kind, id).await?;
    info!(%kind, %id, "admin deleted content");
    Ok(Json(
        ApiResponse::success(removed).with_message("Content deleted"),
    ))
}

pub async fn list_activity(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> AppResult<Json<ApiResponse<Vec<ActivityEntry>>>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_ACTIVITY_LIMIT)
        .min(MAX_ACTIVITY_LIMIT);
    let entries = state.store().activity(limit).await?;
    Ok(Json(ApiResponse::success(entries)))
}
