use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use roost_core::{Property, PropertyList, QueryValues, SearchParams};

use crate::middleware::RequestId;

use super::{map_listings_error, ApiError, ApiResponse, AppState, ResponseMeta};

/// Raw pairs are kept as-is so aliases and repeated keys reach the
/// normalizer untouched.
pub(super) async fn search_properties(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ApiResponse<PropertyList>> {
    let query: QueryValues = pairs.into_iter().collect();
    let params = SearchParams::from_query(&query);
    let result = state.client.search_properties_sourced(&params).await;

    Json(ApiResponse {
        data: result.value,
        meta: ResponseMeta::sourced(req_id.0, result.source),
    })
}

pub(super) async fn get_property(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Property>>, ApiError> {
    let property = state
        .client
        .get_property(&id)
        .await
        .map_err(|e| map_listings_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: property,
        meta: ResponseMeta::new(req_id.0),
    }))
}
