//! Shortlist routes. The caller's own `Authorization: Bearer` token is
//! forwarded upstream as the user token.

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Extension, Json,
};
use roost_core::{PropertyList, ShortlistStatus};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_listings_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ShortlistPageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AddShortlistItem {
    #[serde(alias = "assetId")]
    pub asset_id: String,
}

/// Bearer token from the request, empty when absent.
fn user_token(headers: &HeaderMap) -> &str {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().strip_prefix("Bearer "))
        .map_or("", str::trim)
}

fn lenient_count(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

pub(super) async fn list_shortlist(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    headers: HeaderMap,
    Query(query): Query<ShortlistPageQuery>,
) -> Result<Json<ApiResponse<PropertyList>>, ApiError> {
    let list = state
        .client
        .list_shortlisted(
            user_token(&headers),
            lenient_count(query.page.as_deref()),
            lenient_count(query.limit.as_deref()),
        )
        .await
        .map_err(|e| map_listings_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: list,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn check_shortlist(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    headers: HeaderMap,
    Path(asset_id): Path<String>,
) -> Result<Json<ApiResponse<ShortlistStatus>>, ApiError> {
    let status = state
        .client
        .check_shortlist(&asset_id, user_token(&headers))
        .await
        .map_err(|e| map_listings_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: status,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn add_to_shortlist(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    headers: HeaderMap,
    Json(item): Json<AddShortlistItem>,
) -> Result<(StatusCode, Json<ApiResponse<ShortlistStatus>>), ApiError> {
    let status = state
        .client
        .add_to_shortlist(&item.asset_id, user_token(&headers))
        .await
        .map_err(|e| map_listings_error(req_id.0.clone(), &e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: status,
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

pub(super) async fn remove_from_shortlist(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    headers: HeaderMap,
    Path(asset_id): Path<String>,
) -> Result<Json<ApiResponse<ShortlistStatus>>, ApiError> {
    let status = state
        .client
        .remove_from_shortlist(&asset_id, user_token(&headers))
        .await
        .map_err(|e| map_listings_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: status,
        meta: ResponseMeta::new(req_id.0),
    }))
}
