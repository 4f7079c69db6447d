//! Property search and single-property reads.

use serde::Deserialize;
use serde_json::Value;

use roost_core::{Property, PropertyList, SearchParams};

use crate::asset::map_asset;
use crate::client::ListingsClient;
use crate::error::{ListingsError, UpstreamError};
use crate::fallback::{self, Sourced};

/// Envelope returned by `GET /assets`.
#[derive(Debug, Deserialize)]
struct AssetPage {
    #[serde(default)]
    data: Option<Vec<Value>>,
    #[serde(default)]
    total: Option<i64>,
    #[serde(default)]
    page: Option<i64>,
    #[serde(default)]
    limit: Option<i64>,
}

impl ListingsClient {
    /// Searches listings. Never fails: upstream failures are answered from
    /// the mock catalog.
    pub async fn search_properties(&self, params: &SearchParams) -> PropertyList {
        self.search_properties_sourced(params).await.value
    }

    /// Like [`ListingsClient::search_properties`], but reports whether the
    /// page came from the upstream, mock mode, or a fallback.
    pub async fn search_properties_sourced(&self, params: &SearchParams) -> Sourced<PropertyList> {
        if self.mock_enabled {
            return Sourced::mock(self.mock.search(params));
        }
        fallback::resolve("assets", self.fetch_properties(params).await, || {
            self.mock.search(params)
        })
    }

    async fn fetch_properties(&self, params: &SearchParams) -> Result<PropertyList, UpstreamError> {
        let url = self.build_url(&["assets"], &params.to_query_pairs());
        let payload = self.get_json("assets", url).await?;
        let page: AssetPage =
            serde_json::from_value(payload).map_err(|source| UpstreamError::Decode {
                context: "assets".to_string(),
                source,
            })?;

        let items: Vec<Property> = page
            .data
            .unwrap_or_default()
            .iter()
            .filter_map(map_asset)
            .collect();
        tracing::debug!(count = items.len(), "fetched properties from upstream");

        let current = positive(page.page).unwrap_or(params.page);
        let limit = positive(page.limit).unwrap_or(params.limit).max(1);
        let total = positive(page.total).unwrap_or(items.len());
        Ok(PropertyList::from_page(items, current, limit, total))
    }

    /// Fetches one listing by id.
    ///
    /// Upstream failures fall back to the mock record with the same id.
    ///
    /// # Errors
    ///
    /// - [`ListingsError::MissingPropertyId`] for a blank id.
    /// - [`ListingsError::PropertyNotFound`] when neither source has the
    ///   listing (including an upstream 404).
    /// - [`ListingsError::Upstream`] when the upstream failed otherwise and
    ///   the mock catalog has no stand-in.
    pub async fn get_property(&self, id: &str) -> Result<Property, ListingsError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ListingsError::MissingPropertyId);
        }
        let not_found = || ListingsError::PropertyNotFound { id: id.to_string() };

        if self.mock_enabled {
            return self.mock.property(id).ok_or_else(not_found);
        }

        match self.fetch_property(id).await {
            Ok(prop) => Ok(prop),
            Err(error) => {
                let cause = error.cause();
                fallback::log_fallback("assets/{id}", cause, &error);
                match self.mock.property(id) {
                    Some(prop) => Ok(prop),
                    None if matches!(error, UpstreamError::Status { status: 404, .. }) => {
                        Err(not_found())
                    }
                    None => Err(error.into()),
                }
            }
        }
    }

    async fn fetch_property(&self, id: &str) -> Result<Property, UpstreamError> {
        let url = self.build_url(&["assets", id], &[]);
        let mut payload = self.get_json("assets/{id}", url).await?;

        // Some deployments wrap the record as `{"data": {...}}`.
        if payload.get("data").is_some_and(Value::is_object) {
            payload = payload["data"].take();
        }
        let Some(raw) = payload.as_object_mut() else {
            return Err(UpstreamError::Empty {
                context: format!("assets/{id}"),
            });
        };
        if !raw.contains_key("id") && !raw.contains_key("ID") {
            raw.insert("id".to_string(), Value::String(id.to_string()));
        }

        map_asset(&payload).ok_or_else(|| UpstreamError::Empty {
            context: format!("assets/{id}"),
        })
    }
}

fn positive(value: Option<i64>) -> Option<usize> {
    value
        .filter(|v| *v > 0)
        .and_then(|v| usize::try_from(v).ok())
}
