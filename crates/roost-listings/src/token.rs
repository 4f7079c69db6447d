//! OAuth client-credentials token cache.
//!
//! One [`TokenCache`] lives inside each [`crate::ListingsClient`]. The cached
//! token and its expiry sit behind a single async mutex that stays locked
//! across the check-and-refresh, so concurrent callers that all find the
//! token stale wait for one refresh instead of each issuing their own.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::TokenError;

/// A cached token is reused only while it has more than this left.
const REUSE_MARGIN: Duration = Duration::from_secs(60);

/// Lifetime assumed when the token endpoint omits `expires_in`.
const DEFAULT_LIFETIME: Duration = Duration::from_secs(15 * 60);

/// Upper bound on how early a token is treated as expired.
const MAX_EARLY_REFRESH: Duration = Duration::from_secs(2 * 60);

/// Longest lifetime honored from `expires_in`.
const MAX_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Bytes of an error body kept in [`TokenError::Rejected`].
const ERROR_BODY_EXCERPT: usize = 2048;

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

pub struct TokenCache {
    http: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    scope: Option<String>,
    state: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    #[must_use]
    pub fn new(
        http: Client,
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        scope: Option<String>,
    ) -> Self {
        Self {
            http,
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scope: scope.filter(|s| !s.trim().is_empty()),
            state: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Returns a bearer token, fetching a new one when the cached token is
    /// missing or within a minute of expiry.
    ///
    /// # Errors
    ///
    /// - [`TokenError::MissingCredentials`] when the client id or secret is blank.
    /// - [`TokenError::Http`] on network failure.
    /// - [`TokenError::Rejected`] on any non-200 status.
    /// - [`TokenError::Malformed`] / [`TokenError::EmptyToken`] on a bad body.
    /// - [`TokenError::InvalidExpiry`] if the expiry cannot be represented.
    pub async fn token(&self) -> Result<String, TokenError> {
        if self.client_id.trim().is_empty() || self.client_secret.trim().is_empty() {
            return Err(TokenError::MissingCredentials);
        }

        let mut state = self.state.lock().await;
        if let Some(cached) = state.as_ref() {
            let remaining = cached.expires_at.saturating_duration_since(Instant::now());
            if remaining > REUSE_MARGIN {
                tracing::trace!(remaining_secs = remaining.as_secs(), "reusing cached token");
                return Ok(cached.value.clone());
            }
        }

        let fresh = self.fetch().await?;
        let value = fresh.value.clone();
        *state = Some(fresh);
        Ok(value)
    }

    async fn fetch(&self) -> Result<CachedToken, TokenError> {
        let request = TokenRequest {
            grant_type: "client_credentials",
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            scope: self.scope.as_deref(),
        };

        tracing::debug!(url = %self.token_url, "requesting OAuth token");
        let response = self.http.post(&self.token_url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(TokenError::Rejected {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let parsed: TokenResponse = serde_json::from_str(&body).map_err(TokenError::Malformed)?;
        if parsed.access_token.trim().is_empty() {
            return Err(TokenError::EmptyToken);
        }

        let lifetime = u64::try_from(parsed.expires_in)
            .ok()
            .filter(|secs| *secs > 0)
            .map_or(DEFAULT_LIFETIME, Duration::from_secs)
            .min(MAX_LIFETIME);
        let early = MAX_EARLY_REFRESH.min(lifetime / 10);
        let expires_at = Instant::now()
            .checked_add(lifetime - early)
            .ok_or(TokenError::InvalidExpiry {
                expires_in: parsed.expires_in,
            })?;

        tracing::debug!(
            lifetime_secs = lifetime.as_secs(),
            refresh_after_secs = (lifetime - early).as_secs(),
            "obtained OAuth token"
        );

        Ok(CachedToken {
            value: parsed.access_token,
            expires_at,
        })
    }

    #[cfg(test)]
    async fn set_expiry(&self, expires_at: Instant) {
        if let Some(cached) = self.state.lock().await.as_mut() {
            cached.expires_at = expires_at;
        }
    }

    #[cfg(test)]
    async fn expires_in(&self) -> Option<Duration> {
        self.state
            .lock()
            .await
            .as_ref()
            .map(|cached| cached.expires_at.saturating_duration_since(Instant::now()))
    }
}

pub(crate) fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_BODY_EXCERPT) {
        Some((cut, _)) => trimmed[..cut].to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn cache(server: &MockServer) -> TokenCache {
        TokenCache::new(
            Client::new(),
            format!("{}/oauth/token", server.uri()),
            "client-1",
            "secret-1",
            Some("assets.read".to_string()),
        )
    }

    fn token_body(token: &str, expires_in: i64) -> serde_json::Value {
        json!({ "access_token": token, "expires_in": expires_in, "token_type": "Bearer" })
    }

    #[tokio::test]
    async fn sends_client_credentials_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_json(json!({
                "grant_type": "client_credentials",
                "client_id": "client-1",
                "client_secret": "secret-1",
                "scope": "assets.read"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok-1", 900)))
            .expect(1)
            .mount(&server)
            .await;

        let token = cache(&server).token().await.expect("token");
        assert_eq!(token, "tok-1");
    }

    #[tokio::test]
    async fn reuses_token_until_refresh_window() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok-1", 900)))
            .expect(1)
            .mount(&server)
            .await;

        let cache = cache(&server);
        assert_eq!(cache.token().await.expect("first"), "tok-1");
        assert_eq!(cache.token().await.expect("second"), "tok-1");
        assert_eq!(cache.token().await.expect("third"), "tok-1");
    }

    #[tokio::test]
    async fn refreshes_once_inside_refresh_window() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok", 900)))
            .expect(2)
            .mount(&server)
            .await;

        let cache = cache(&server);
        cache.token().await.expect("first fetch");
        cache
            .set_expiry(Instant::now() + Duration::from_secs(30))
            .await;
        cache.token().await.expect("refresh");
        cache.token().await.expect("cached after refresh");
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_refresh() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok", 900)))
            .expect(1)
            .mount(&server)
            .await;

        let cache = cache(&server);
        let (a, b) = tokio::join!(cache.token(), cache.token());
        assert_eq!(a.expect("a"), "tok");
        assert_eq!(b.expect("b"), "tok");
    }

    #[tokio::test]
    async fn expiry_is_shortened_by_a_tenth_capped_at_two_minutes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok", 0)))
            .mount(&server)
            .await;

        let cache = cache(&server);
        cache.token().await.expect("token");
        let left = cache.expires_in().await.expect("cached");
        // 15 min default lifetime minus a 90 s early refresh.
        assert!(left <= Duration::from_secs(810), "{left:?}");
        assert!(left > Duration::from_secs(800), "{left:?}");
    }

    #[tokio::test]
    async fn oversized_expires_in_is_capped_at_one_day() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok", i64::MAX)))
            .expect(1)
            .mount(&server)
            .await;

        let cache = cache(&server);
        assert_eq!(cache.token().await.expect("token"), "tok");
        let left = cache.expires_in().await.expect("cached");
        assert!(left <= MAX_LIFETIME - MAX_EARLY_REFRESH, "{left:?}");
        assert!(left > MAX_LIFETIME - Duration::from_secs(3 * 60), "{left:?}");
        assert_eq!(cache.token().await.expect("cached"), "tok");
    }

    #[tokio::test]
    async fn non_200_is_rejected_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(401).set_body_string(" invalid_client \n"))
            .mount(&server)
            .await;

        let err = cache(&server).token().await.expect_err("should fail");
        match err {
            TokenError::Rejected { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid_client");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_and_malformed_tokens_are_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("", 900)))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let cache = cache(&server);
        assert!(matches!(
            cache.token().await,
            Err(TokenError::EmptyToken)
        ));
        assert!(matches!(
            cache.token().await,
            Err(TokenError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn missing_credentials_skip_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok", 900)))
            .expect(0)
            .mount(&server)
            .await;

        let cache = TokenCache::new(
            Client::new(),
            format!("{}/oauth/token", server.uri()),
            "client-1",
            "  ",
            None,
        );
        assert!(matches!(
            cache.token().await,
            Err(TokenError::MissingCredentials)
        ));
    }

    #[test]
    fn excerpt_truncates_long_bodies() {
        let long = "x".repeat(ERROR_BODY_EXCERPT + 10);
        assert_eq!(excerpt(&long).len(), ERROR_BODY_EXCERPT);
        assert_eq!(excerpt("  short  "), "short");
    }
}
