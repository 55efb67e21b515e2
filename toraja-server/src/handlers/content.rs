use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use toraja_core::seo::PageMeta;
use toraja_model::{ContentKind, LegalKind, Locale};

use crate::api::{
    ApiResponse,
    views::{ContentDetail, ContentSummary, LegalView},
};
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub lang: Option<Locale>,
    /// Only featured documents when `true`.
    pub featured: Option<bool>,
}

pub(crate) fn parse_collection(raw: &str) -> AppResult<ContentKind> {
    ContentKind::from_str(raw)
        .map_err(|_| AppError::not_found(format!("Unknown collection '{raw}'")))
}

pub async fn list_content(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<Vec<ContentSummary>>>> {
    let kind = parse_collection(&collection)?;
    let locale = state.locale(query.lang);

    let summaries = state
        .store()
        .list(kind)
        .await?
        .iter()
        .filter(|doc| {
            query.featured.is_none_or(|want| doc.is_featured() == want)
        })
        .map(|doc| ContentSummary::from_document(doc, locale))
        .collect();

    Ok(Json(ApiResponse::success(summaries)))
}

pub async fn get_content(
    State(state): State<AppState>,
    Path((collection, slug)): Path<(String, String)>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<ContentDetail>>> {
    let kind = parse_collection(&collection)?;
    let locale = state.locale(query.lang);

    let document = state.store().get_by_slug(kind, &slug).await?;
    let base_url = &state.config().site.base_url;
    let meta = PageMeta::for_document(&document, locale, base_url);

    Ok(Json(ApiResponse::success(ContentDetail::new(
        &document, locale, meta,
    ))))
}

pub async fn get_legal_page(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<LegalView>>> {
    let kind = LegalKind::from_str(&kind).map_err(|_| {
        AppError::not_found(format!("Unknown legal page '{kind}'"))
    })?;
    let locale = state.locale(query.lang);

    let page = state.store().legal_page(kind).await?;
    Ok(Json(ApiResponse::success(LegalView::new(&page, locale))))
}
