//! HTTP client for the upstream assets API.
//!
//! Wraps `reqwest` with base-URL handling, bearer authorization (static token
//! or OAuth client credentials) and a JSON GET helper whose failures are
//! classified as [`UpstreamError`] so the read paths can fall back to the
//! mock catalog.

use std::time::{Duration, Instant};

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};

use roost_core::AppConfig;

use crate::error::{ListingsError, TokenError, UpstreamError};
use crate::mock::{MockCatalog, ShortlistStore};
use crate::token::TokenCache;

const DEFAULT_USER_AGENT: &str = "roost/0.1 (listing-search)";
const CONNECT_TIMEOUT_SECS: u64 = 10;

enum Authorization {
    /// Pre-provisioned bearer token, sent as is.
    Static(String),
    OAuth(TokenCache),
    Anonymous,
}

/// Client for the upstream assets API with built-in mock fallback.
///
/// Use [`ListingsClient::from_config`] in binaries, or
/// [`ListingsClient::with_base_url`] plus the `with_*` methods to point at a
/// mock server in tests.
pub struct ListingsClient {
    pub(crate) http: Client,
    base_url: Url,
    auth: Authorization,
    pub(crate) mock: MockCatalog,
    pub(crate) mock_enabled: bool,
    pub(crate) shortlists: ShortlistStore,
}

impl ListingsClient {
    /// Builds a client from application configuration.
    ///
    /// A static token wins over OAuth credentials; with neither the client
    /// sends no `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::Client`] if the `reqwest::Client` cannot be
    /// built, or [`ListingsError::InvalidBaseUrl`] for an unusable base URL.
    pub fn from_config(config: &AppConfig) -> Result<Self, ListingsError> {
        let mut client = Self::with_options(
            &config.api_base_url,
            config.api_timeout_secs,
            &config.api_user_agent,
        )?;

        if let Some(token) = &config.api_auth_token {
            client = client.with_static_token(token);
        } else if let (Some(id), Some(secret)) = (&config.api_client_id, &config.api_client_secret)
        {
            client = client.with_oauth(
                id,
                secret,
                Some(config.api_token_scope.clone()),
                config.api_auth_url.as_deref(),
            );
        }

        Ok(client.with_mock(config.mock_enabled))
    }

    /// Creates an anonymous, non-mock client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Same as [`ListingsClient::from_config`].
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ListingsError> {
        Self::with_options(base_url, timeout_secs, DEFAULT_USER_AGENT)
    }

    fn with_options(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ListingsError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()
            .map_err(ListingsError::Client)?;

        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
            auth: Authorization::Anonymous,
            mock: MockCatalog,
            mock_enabled: false,
            shortlists: ShortlistStore::new(),
        })
    }

    /// Sends `Authorization: Bearer {token}` on every request.
    #[must_use]
    pub fn with_static_token(mut self, token: &str) -> Self {
        self.auth = Authorization::Static(token.trim().to_string());
        self
    }

    /// Authenticates with OAuth client credentials.
    ///
    /// The token URL defaults to `{scheme}://{host}/oauth/token` on the base
    /// URL's origin.
    #[must_use]
    pub fn with_oauth(
        mut self,
        client_id: &str,
        client_secret: &str,
        scope: Option<String>,
        token_url: Option<&str>,
    ) -> Self {
        let token_url = token_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map_or_else(|| derive_token_url(&self.base_url), str::to_string);
        self.auth = Authorization::OAuth(TokenCache::new(
            self.http.clone(),
            token_url,
            client_id,
            client_secret,
            scope,
        ));
        self
    }

    /// Routes every read to the mock catalog without network I/O.
    #[must_use]
    pub fn with_mock(mut self, enabled: bool) -> Self {
        self.mock_enabled = enabled;
        self
    }

    #[must_use]
    pub fn mock_enabled(&self) -> bool {
        self.mock_enabled
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/{segments...}?{params}`, percent-encoding every segment
    /// and query value.
    pub(crate) fn build_url(&self, segments: &[&str], params: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    /// Bearer token for a read. Token failures are logged and the read goes
    /// out unauthenticated; the upstream's answer then decides the fallback.
    async fn read_bearer(&self) -> Option<String> {
        match self.write_bearer().await {
            Ok(token) => token,
            Err(error) => {
                tracing::warn!(%error, "token acquisition failed, continuing without authorization");
                None
            }
        }
    }

    /// Bearer token for a write. Token failures propagate.
    pub(crate) async fn write_bearer(&self) -> Result<Option<String>, TokenError> {
        match &self.auth {
            Authorization::Static(token) => Ok(Some(token.clone())),
            Authorization::OAuth(cache) => cache.token().await.map(Some),
            Authorization::Anonymous => Ok(None),
        }
    }

    /// Sends an authorized GET and parses a 200 response body as JSON.
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::Network`] on connection failure or timeout.
    /// - [`UpstreamError::Status`] on any status other than 200.
    /// - [`UpstreamError::Decode`] if the body is not valid JSON.
    pub(crate) async fn get_json(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> Result<serde_json::Value, UpstreamError> {
        let started = Instant::now();
        let mut request = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json");
        if let Some(token) = self.read_bearer().await {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(
            endpoint,
            status = status.as_u16(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "upstream response"
        );

        if status != StatusCode::OK {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| UpstreamError::Decode {
            context: endpoint.to_string(),
            source,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ListingsError> {
    let invalid = |reason: String| ListingsError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    // Exactly one trailing slash so path segments append instead of
    // replacing the last one.
    let normalised = format!("{}/", raw.trim().trim_end_matches('/'));
    let url = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }
    Ok(url)
}

/// `{scheme}://{host}[:port]/oauth/token` on the base URL's origin.
fn derive_token_url(base: &Url) -> String {
    format!("{}/oauth/token", base.origin().ascii_serialization())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
