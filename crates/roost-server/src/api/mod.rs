mod documents;
mod leads;
mod locations;
mod properties;
mod shortlist;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use roost_listings::{DataSource, ListingsClient, ListingsError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ListingsClient>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    /// `upstream`, `mock` or `fallback` for reads that can degrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    listings: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
            source: None,
        }
    }

    pub(super) fn sourced(request_id: String, source: DataSource) -> Self {
        Self {
            source: Some(source_label(source)),
            ..Self::new(request_id)
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn source_label(source: DataSource) -> &'static str {
    match source {
        DataSource::Upstream => "upstream",
        DataSource::Mock => "mock",
        DataSource::Fallback(_) => "fallback",
    }
}

pub(super) fn map_listings_error(request_id: String, error: &ListingsError) -> ApiError {
    match error {
        ListingsError::MissingPropertyId | ListingsError::MissingCity => {
            ApiError::new(request_id, "validation_error", error.to_string())
        }
        ListingsError::PropertyNotFound { .. } => {
            ApiError::new(request_id, "not_found", error.to_string())
        }
        ListingsError::MissingUserToken | ListingsError::Unauthorized => {
            ApiError::new(request_id, "unauthorized", error.to_string())
        }
        ListingsError::Token(_)
        | ListingsError::Upstream(_)
        | ListingsError::LeadRejected { .. }
        | ListingsError::ShortlistRejected { .. } => {
            tracing::warn!(error = %error, "upstream call failed");
            ApiError::new(request_id, "upstream_error", "upstream listings API failed")
        }
        ListingsError::Client(_) | ListingsError::InvalidBaseUrl { .. } => {
            tracing::error!(error = %error, "listings client misconfigured");
            ApiError::new(request_id, "internal_error", "listings client misconfigured")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

fn lead_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/leads", post(leads::submit_lead))
        .route_layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, lead_rate_limit: RateLimitState) -> Router {
    let read_routes = Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/properties", get(properties::search_properties))
        .route("/api/v1/properties/{id}", get(properties::get_property))
        .route("/api/v1/cities", get(locations::list_cities))
        .route("/api/v1/neighborhoods", get(locations::list_neighborhoods))
        .route(
            "/api/v1/neighborhoods/top",
            get(locations::list_top_neighborhoods),
        )
        .route(
            "/api/v1/documents/{asset_type}",
            get(documents::list_required_documents),
        );

    let shortlist_routes = Router::new()
        .route(
            "/api/v1/shortlist",
            get(shortlist::list_shortlist).post(shortlist::add_to_shortlist),
        )
        .route(
            "/api/v1/shortlist/{asset_id}",
            get(shortlist::check_shortlist).delete(shortlist::remove_from_shortlist),
        );

    Router::new()
        .merge(read_routes)
        .merge(shortlist_routes)
        .merge(lead_router(lead_rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let listings = if state.client.mock_enabled() {
        "mock"
    } else {
        "upstream"
    };
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            listings,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Lead submissions allowed per client address per minute.
pub fn default_lead_rate_limit() -> RateLimitState {
    RateLimitState::new(20, Duration::from_secs(60))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
