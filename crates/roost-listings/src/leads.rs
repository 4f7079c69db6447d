//! Contact-form lead submission. Writes never fall back to mock data.

use std::time::Instant;

use reqwest::header::ACCEPT;

use roost_core::Lead;

use crate::client::ListingsClient;
use crate::error::{ListingsError, UpstreamError};
use crate::token::excerpt;

impl ListingsClient {
    /// Posts `lead` to `{base}/leads` as JSON.
    ///
    /// Submitted even in mock mode, since a mock answer would confirm a lead
    /// that was never stored.
    ///
    /// # Errors
    ///
    /// - [`ListingsError::Token`] if an OAuth token cannot be obtained.
    /// - [`ListingsError::Upstream`] on connection failure or timeout.
    /// - [`ListingsError::LeadRejected`] for any status of 300 or above.
    pub async fn submit_lead(&self, lead: &Lead) -> Result<(), ListingsError> {
        let url = self.build_url(&["leads"], &[]);
        let started = Instant::now();

        let mut request = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(lead);
        if let Some(token) = self.write_bearer().await? {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(UpstreamError::from)?;
        let status = response.status();
        tracing::info!(
            property_id = %lead.property_id,
            status = status.as_u16(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "lead submitted"
        );

        if status.as_u16() >= 300 {
            let body = response.text().await.unwrap_or_default();
            return Err(ListingsError::LeadRejected {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }
        Ok(())
    }
}
