use axum::{
    extract::{Query, State},
    Extension, Json,
};
use roost_core::NeighborhoodStat;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_listings_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct NeighborhoodQuery {
    pub city: Option<String>,
}

/// `limit` stays a string so a malformed value degrades to the default
/// instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub(super) struct TopNeighborhoodQuery {
    pub limit: Option<String>,
    pub city: Option<String>,
}

pub(super) async fn list_cities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    let result = state.client.get_cities_sourced().await;
    Json(ApiResponse {
        data: result.value,
        meta: ResponseMeta::sourced(req_id.0, result.source),
    })
}

pub(super) async fn list_neighborhoods(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<NeighborhoodQuery>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let result = state
        .client
        .get_neighborhoods_sourced(query.city.as_deref().unwrap_or_default())
        .await
        .map_err(|e| map_listings_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: result.value,
        meta: ResponseMeta::sourced(req_id.0, result.source),
    }))
}

pub(super) async fn list_top_neighborhoods(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TopNeighborhoodQuery>,
) -> Json<ApiResponse<Vec<NeighborhoodStat>>> {
    let limit = query
        .limit
        .as_deref()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let result = state
        .client
        .get_top_neighborhoods_sourced(limit, query.city.as_deref())
        .await;

    Json(ApiResponse {
        data: result.value,
        meta: ResponseMeta::sourced(req_id.0, result.source),
    })
}
