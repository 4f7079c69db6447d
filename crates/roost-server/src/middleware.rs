use std::{
    collections::HashMap,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Expired windows are swept once this many clients are tracked.
const MAX_TRACKED_CLIENTS: usize = 4096;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

#[derive(Debug, Clone)]
struct RateLimitWindow {
    started_at: Instant,
    count: usize,
}

/// Fixed-window limiter with one window per client address.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    clients: Arc<Mutex<HashMap<IpAddr, RateLimitWindow>>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Counts one request from `client`; false once that client's budget
    /// for the current window is spent.
    async fn admit(&self, client: IpAddr) -> bool {
        let now = Instant::now();
        let mut clients = self.clients.lock().await;
        if clients.len() >= MAX_TRACKED_CLIENTS {
            clients.retain(|_, w| now.duration_since(w.started_at) < self.window);
        }

        let window = clients.entry(client).or_insert(RateLimitWindow {
            started_at: now,
            count: 0,
        });
        if now.duration_since(window.started_at) >= self.window {
            window.started_at = now;
            window.count = 0;
        }
        if window.count >= self.max_requests {
            return false;
        }
        window.count += 1;
        true
    }
}

/// Client address for rate limiting: the first `x-forwarded-for` hop set by
/// a fronting proxy, else the socket peer. Requests with neither share one
/// unspecified-address bucket.
fn client_ip(req: &Request) -> IpAddr {
    req.headers()
        .get(FORWARDED_FOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|ip| ip.trim().parse().ok())
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip())
        })
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

#[derive(Debug, Serialize)]
struct MiddlewareErrorBody {
    error: MiddlewareError,
}

#[derive(Debug, Serialize)]
struct MiddlewareError {
    code: &'static str,
    message: &'static str,
}

/// Axum middleware that extracts or generates a request ID.
///
/// An incoming `x-request-id` header is reused; otherwise a new `UUIDv4` is
/// generated. The ID is inserted into request extensions as [`RequestId`]
/// and echoed on the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }

    res
}

/// Middleware enforcing a fixed request-per-window limit per client.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let client = client_ip(&req);
    if !rate_limit.admit(client).await {
        tracing::warn!(path = %req.uri().path(), %client, "rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(MiddlewareErrorBody {
                error: MiddlewareError {
                    code: "rate_limited",
                    message: "rate limit exceeded",
                },
            }),
        )
            .into_response();
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));
    const BOB: IpAddr = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 2));

    fn request(headers: &[(&str, &str)]) -> Request {
        let mut builder = axum::http::Request::builder().uri("/api/v1/leads");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(axum::body::Body::empty()).expect("request")
    }

    #[tokio::test]
    async fn rate_limit_admits_up_to_budget() {
        let limit = RateLimitState::new(2, Duration::from_secs(60));
        assert!(limit.admit(ALICE).await);
        assert!(limit.admit(ALICE).await);
        assert!(!limit.admit(ALICE).await);
    }

    #[tokio::test]
    async fn rate_limit_budget_is_per_client() {
        let limit = RateLimitState::new(1, Duration::from_secs(60));
        assert!(limit.admit(ALICE).await);
        assert!(!limit.admit(ALICE).await);
        assert!(limit.admit(BOB).await, "another client keeps its own budget");
    }

    #[tokio::test]
    async fn rate_limit_resets_after_window() {
        let limit = RateLimitState::new(1, Duration::ZERO);
        assert!(limit.admit(ALICE).await);
        assert!(limit.admit(ALICE).await, "zero-length window resets every call");
    }

    #[test]
    fn client_ip_prefers_forwarded_for_then_peer() {
        let req = request(&[(FORWARDED_FOR_HEADER, "203.0.113.7, 10.0.0.1")]);
        assert_eq!(client_ip(&req), ALICE);

        let mut req = request(&[(FORWARDED_FOR_HEADER, "garbage")]);
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::new(BOB, 40_000)));
        assert_eq!(client_ip(&req), BOB);

        assert_eq!(
            client_ip(&request(&[])),
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        );
    }
}
