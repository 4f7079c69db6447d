use axum::{
    extract::{Path, State},
    Extension, Json,
};
use roost_core::Document;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_required_documents(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(asset_type): Path<String>,
) -> Json<ApiResponse<Vec<Document>>> {
    let result = state.client.get_required_documents_sourced(&asset_type).await;
    Json(ApiResponse {
        data: result.value,
        meta: ResponseMeta::sourced(req_id.0, result.source),
    })
}
