//! Per-user shortlists.
//!
//! Every call authenticates with the end user's own bearer token rather than
//! the client's credentials, and none of them fall back to the mock catalog.
//! In mock mode the client's in-memory [`crate::mock::ShortlistStore`]
//! answers instead.

use std::borrow::Cow;
use std::time::Instant;

use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;

use roost_core::{Property, PropertyList, ShortlistStatus, DEFAULT_LIMIT};

use crate::asset::{bool_from, first_string, map_asset, pick_object, Object};
use crate::client::ListingsClient;
use crate::error::{ListingsError, UpstreamError};
use crate::token::excerpt;

#[derive(Debug, Serialize)]
struct AddItem<'a> {
    asset_id: &'a str,
}

fn require_asset_id(raw: &str) -> Result<&str, ListingsError> {
    match raw.trim() {
        "" => Err(ListingsError::MissingPropertyId),
        id => Ok(id),
    }
}

fn decode_error(context: &str, source: serde_json::Error) -> ListingsError {
    ListingsError::Upstream(UpstreamError::Decode {
        context: context.to_string(),
        source,
    })
}

/// First positive integer under `keys`.
fn positive(obj: Option<&Object>, keys: &[&str]) -> Option<usize> {
    let obj = obj?;
    keys.iter()
        .find_map(|key| obj.get(*key)?.as_u64())
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
}

impl ListingsClient {
    fn user_request(
        &self,
        method: Method,
        url: Url,
        user_token: &str,
    ) -> Result<RequestBuilder, ListingsError> {
        let token = user_token.trim();
        if token.is_empty() {
            return Err(ListingsError::MissingUserToken);
        }
        Ok(self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .bearer_auth(token))
    }

    /// Sends a user request and returns the body of an accepted response.
    async fn send_user(
        &self,
        action: &'static str,
        request: RequestBuilder,
        accepted: &[StatusCode],
    ) -> Result<String, ListingsError> {
        let started = Instant::now();
        let response = request.send().await.map_err(UpstreamError::from)?;
        let status = response.status();
        tracing::debug!(
            action,
            status = status.as_u16(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "shortlist response"
        );

        if status == StatusCode::UNAUTHORIZED {
            return Err(ListingsError::Unauthorized);
        }
        let body = response.text().await.map_err(UpstreamError::from)?;
        if !accepted.contains(&status) {
            return Err(ListingsError::ShortlistRejected {
                action,
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }
        Ok(body)
    }

    /// Whether `asset_id` is on the user's shortlist.
    ///
    /// # Errors
    ///
    /// - [`ListingsError::MissingPropertyId`] for a blank id.
    /// - [`ListingsError::MissingUserToken`] for a blank token outside mock mode.
    /// - [`ListingsError::Unauthorized`] on HTTP 401.
    /// - [`ListingsError::ShortlistRejected`] on any other non-200 status.
    /// - [`ListingsError::Upstream`] on network or decode failure.
    pub async fn check_shortlist(
        &self,
        asset_id: &str,
        user_token: &str,
    ) -> Result<ShortlistStatus, ListingsError> {
        let id = require_asset_id(asset_id)?;
        if self.mock_enabled {
            return Ok(self.shortlists.status(user_token, id));
        }

        let url = self.build_url(&["shortlists", "check", id], &[]);
        let request = self.user_request(Method::GET, url, user_token)?;
        let body = self.send_user("check", request, &[StatusCode::OK]).await?;

        let mut status: ShortlistStatus =
            serde_json::from_str(&body).map_err(|e| decode_error("shortlists/check", e))?;
        if status.asset_id.is_empty() {
            status.asset_id = id.to_string();
        }
        Ok(status)
    }

    /// Adds `asset_id` to the user's default shortlist.
    ///
    /// An accepted response with an unreadable body still counts as added.
    ///
    /// # Errors
    ///
    /// Same as [`ListingsClient::check_shortlist`], with 200 and 201 accepted.
    pub async fn add_to_shortlist(
        &self,
        asset_id: &str,
        user_token: &str,
    ) -> Result<ShortlistStatus, ListingsError> {
        let id = require_asset_id(asset_id)?;
        if self.mock_enabled {
            return Ok(self.shortlists.add(user_token, id));
        }

        let url = self.build_url(&["shortlists", "items"], &[]);
        let request = self
            .user_request(Method::POST, url, user_token)?
            .json(&AddItem { asset_id: id });
        let body = self
            .send_user("add", request, &[StatusCode::OK, StatusCode::CREATED])
            .await?;

        let mut status: ShortlistStatus = serde_json::from_str(&body).unwrap_or_default();
        if status.asset_id.is_empty() {
            status.asset_id = id.to_string();
        }
        status.is_shortlisted = true;
        Ok(status)
    }

    /// Removes `asset_id` from every shortlist of the user.
    ///
    /// # Errors
    ///
    /// Same as [`ListingsClient::check_shortlist`].
    pub async fn remove_from_shortlist(
        &self,
        asset_id: &str,
        user_token: &str,
    ) -> Result<ShortlistStatus, ListingsError> {
        let id = require_asset_id(asset_id)?;
        if self.mock_enabled {
            return Ok(self.shortlists.remove(user_token, id));
        }

        let url = self.build_url(&["shortlists", "items", id], &[]);
        let request = self.user_request(Method::DELETE, url, user_token)?;
        let body = self.send_user("remove", request, &[StatusCode::OK]).await?;

        let mut status = ShortlistStatus {
            asset_id: id.to_string(),
            ..ShortlistStatus::default()
        };
        if let Ok(reply) = serde_json::from_str::<ShortlistStatus>(&body) {
            if !reply.asset_id.is_empty() {
                status.asset_id = reply.asset_id;
            }
            status.shortlist_id = reply.shortlist_id;
            status.is_shortlisted = reply.is_shortlisted;
        }
        Ok(status)
    }

    /// One page of the user's default shortlist. A user without any
    /// shortlist gets an empty page.
    ///
    /// `page` and `limit` of 0 mean 1 and the search default.
    ///
    /// # Errors
    ///
    /// Same as [`ListingsClient::check_shortlist`], minus the id check.
    pub async fn list_shortlisted(
        &self,
        user_token: &str,
        page: usize,
        limit: usize,
    ) -> Result<PropertyList, ListingsError> {
        let page = page.max(1);
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        if self.mock_enabled {
            return Ok(self.shortlists.list(user_token, page, limit));
        }

        let Some(shortlist_id) = self.default_shortlist_id(user_token).await? else {
            return Ok(PropertyList::from_page(Vec::new(), 1, limit, 0));
        };

        let url = self.build_url(
            &["shortlists", shortlist_id.as_str()],
            &[("page", page.to_string()), ("limit", limit.to_string())],
        );
        let request = self.user_request(Method::GET, url, user_token)?;
        let body = self.send_user("list", request, &[StatusCode::OK]).await?;
        let payload: Value =
            serde_json::from_str(&body).map_err(|e| decode_error("shortlists/items", e))?;
        let envelope = payload.as_object();

        let items: Vec<_> = envelope
            .and_then(|obj| obj.get("items"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|row| shortlisted_asset(row, &shortlist_id))
            .collect();

        let page = positive(envelope, &["page"]).unwrap_or(page);
        let limit = positive(envelope, &["limit"]).unwrap_or(limit);
        let total = positive(envelope, &["item_count", "total", "TotalItems"]).unwrap_or(items.len());
        Ok(PropertyList::from_page(items, page, limit, total))
    }

    /// The user's default shortlist, else their first one.
    async fn default_shortlist_id(&self, user_token: &str) -> Result<Option<String>, ListingsError> {
        let url = self.build_url(&["shortlists"], &[]);
        let request = self.user_request(Method::GET, url, user_token)?;
        let body = self.send_user("lookup", request, &[StatusCode::OK]).await?;
        let rows: Vec<Value> =
            serde_json::from_str(&body).map_err(|e| decode_error("shortlists", e))?;

        let mut first = None;
        for row in rows.iter().filter_map(Value::as_object) {
            let Some(id) = first_string(Some(row), &["id", "ID"]) else {
                continue;
            };
            if bool_from(Some(row), &["is_default", "isDefault"]) == Some(true) {
                return Ok(Some(id));
            }
            first.get_or_insert(id);
        }
        Ok(first)
    }
}

/// Maps one shortlist item, whose asset sits under `asset`. The item's own
/// `asset_id` stands in when the asset carries no id.
fn shortlisted_asset(row: &Value, shortlist_id: &str) -> Option<Property> {
    let row = row.as_object()?;
    let mut asset: Object = pick_object(row, &["asset", "Asset"])
        .map(Cow::into_owned)
        .unwrap_or_default();
    if first_string(Some(&asset), &["ID", "id"]).is_none() {
        let id = first_string(Some(row), &["asset_id", "assetId", "id"])?;
        asset.insert("id".to_string(), Value::String(id));
    }

    let mut prop = map_asset(&Value::Object(asset))?;
    prop.is_shortlisted = true;
    prop.shortlist_id = Some(shortlist_id.to_string());
    Some(prop)
}
