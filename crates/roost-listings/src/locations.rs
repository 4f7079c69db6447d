//! City and neighborhood reads.

use roost_core::text::clean_any;
use roost_core::{NeighborhoodStat, DEFAULT_STATUS_FILTER};

use crate::asset::string_list;
use crate::client::ListingsClient;
use crate::error::{ListingsError, UpstreamError};
use crate::fallback::{self, Sourced};
use crate::mock::DEFAULT_TOP_LIMIT;

fn default_status() -> String {
    DEFAULT_STATUS_FILTER.join(",")
}

fn non_empty<T>(items: Vec<T>, context: &str) -> Result<Vec<T>, UpstreamError> {
    if items.is_empty() {
        return Err(UpstreamError::Empty {
            context: context.to_string(),
        });
    }
    Ok(items)
}

impl ListingsClient {
    /// Cities with listings. Falls back to the mock list on any failure,
    /// including an empty upstream answer.
    pub async fn get_cities(&self) -> Vec<String> {
        self.get_cities_sourced().await.value
    }

    pub async fn get_cities_sourced(&self) -> Sourced<Vec<String>> {
        if self.mock_enabled {
            return Sourced::mock(self.mock.cities());
        }
        fallback::resolve("assets/cities", self.fetch_cities().await, || {
            self.mock.cities()
        })
    }

    async fn fetch_cities(&self) -> Result<Vec<String>, UpstreamError> {
        let url = self.build_url(&["assets", "cities"], &[("status", default_status())]);
        let payload = self.get_json("assets/cities", url).await?;
        non_empty(string_list(&payload), "assets/cities")
    }

    /// Neighborhoods within `city`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::MissingCity`] when `city` is blank or "any".
    /// Upstream failures fall back to the mock list and are not errors.
    pub async fn get_neighborhoods(&self, city: &str) -> Result<Vec<String>, ListingsError> {
        Ok(self.get_neighborhoods_sourced(city).await?.value)
    }

    /// # Errors
    ///
    /// Same as [`ListingsClient::get_neighborhoods`].
    pub async fn get_neighborhoods_sourced(
        &self,
        city: &str,
    ) -> Result<Sourced<Vec<String>>, ListingsError> {
        let city = clean_any(city).ok_or(ListingsError::MissingCity)?;
        if self.mock_enabled {
            return Ok(Sourced::mock(self.mock.neighborhoods(city)));
        }
        Ok(fallback::resolve(
            "assets/neighborhoods",
            self.fetch_neighborhoods(city).await,
            || self.mock.neighborhoods(city),
        ))
    }

    async fn fetch_neighborhoods(&self, city: &str) -> Result<Vec<String>, UpstreamError> {
        let url = self.build_url(
            &["assets", "neighborhoods"],
            &[("city", city.to_string()), ("status", default_status())],
        );
        let payload = self.get_json("assets/neighborhoods", url).await?;
        non_empty(string_list(&payload), "assets/neighborhoods")
    }

    /// Neighborhoods ranked by listing count, at most `limit` of them
    /// (0 means [`DEFAULT_TOP_LIMIT`]).
    pub async fn get_top_neighborhoods(
        &self,
        limit: usize,
        city: Option<&str>,
    ) -> Vec<NeighborhoodStat> {
        self.get_top_neighborhoods_sourced(limit, city).await.value
    }

    pub async fn get_top_neighborhoods_sourced(
        &self,
        limit: usize,
        city: Option<&str>,
    ) -> Sourced<Vec<NeighborhoodStat>> {
        let limit = if limit == 0 { DEFAULT_TOP_LIMIT } else { limit };
        let city = city.and_then(clean_any);
        if self.mock_enabled {
            return Sourced::mock(self.mock.top_neighborhoods(limit, city));
        }
        fallback::resolve(
            "assets/neighborhoods/top",
            self.fetch_top_neighborhoods(limit, city).await,
            || self.mock.top_neighborhoods(limit, city),
        )
    }

    async fn fetch_top_neighborhoods(
        &self,
        limit: usize,
        city: Option<&str>,
    ) -> Result<Vec<NeighborhoodStat>, UpstreamError> {
        let mut params = vec![("limit", limit.to_string()), ("status", default_status())];
        if let Some(city) = city {
            params.push(("city", city.to_string()));
        }
        let url = self.build_url(&["assets", "neighborhoods", "top"], &params);
        let mut payload = self.get_json("assets/neighborhoods/top", url).await?;

        if let Some(data) = payload.get_mut("data") {
            payload = data.take();
        }
        let rows: Vec<NeighborhoodStat> =
            serde_json::from_value(payload).map_err(|source| UpstreamError::Decode {
                context: "assets/neighborhoods/top".to_string(),
                source,
            })?;

        let mut cleaned: Vec<NeighborhoodStat> = rows
            .into_iter()
            .filter(|row| !row.neighborhood.trim().is_empty())
            .map(|mut row| {
                if row.city.trim().is_empty() {
                    row.city = city.unwrap_or_default().to_string();
                }
                row
            })
            .collect();
        cleaned.truncate(limit);
        non_empty(cleaned, "assets/neighborhoods/top")
    }
}
