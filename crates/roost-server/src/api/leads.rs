use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};
use roost_core::Lead;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_listings_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct LeadAccepted {
    status: &'static str,
    property_id: String,
}

pub(super) async fn submit_lead(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(lead): Json<Lead>,
) -> Result<(StatusCode, Json<ApiResponse<LeadAccepted>>), ApiError> {
    let missing = lead.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            format!("missing required fields: {}", missing.join(", ")),
        ));
    }

    state
        .client
        .submit_lead(&lead)
        .await
        .map_err(|e| map_listings_error(req_id.0.clone(), &e))?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse {
            data: LeadAccepted {
                status: "accepted",
                property_id: lead.property_id,
            },
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}
