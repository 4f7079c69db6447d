//! Required-documents configuration read.

use serde::Deserialize;
use serde_json::Value;

use roost_core::{document_asset_type, Document};

use crate::asset::map_document;
use crate::client::ListingsClient;
use crate::error::UpstreamError;
use crate::fallback::{self, Sourced};

/// The documents endpoint answers with a bare array or a `{data}` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DocumentRows {
    Bare(Vec<Value>),
    Envelope { data: Vec<Value> },
}

impl ListingsClient {
    /// Documents an applicant supplies for `asset_type` (blank means
    /// `default`). Falls back to the mock list on any failure.
    pub async fn get_required_documents(&self, asset_type: &str) -> Vec<Document> {
        self.get_required_documents_sourced(asset_type).await.value
    }

    pub async fn get_required_documents_sourced(&self, asset_type: &str) -> Sourced<Vec<Document>> {
        let asset_type = document_asset_type(asset_type);
        if self.mock_enabled {
            return Sourced::mock(self.mock.required_documents(&asset_type));
        }
        fallback::resolve(
            "config/documents",
            self.fetch_required_documents(&asset_type).await,
            || self.mock.required_documents(&asset_type),
        )
    }

    async fn fetch_required_documents(
        &self,
        asset_type: &str,
    ) -> Result<Vec<Document>, UpstreamError> {
        let url = self.build_url(&["config", "asset", asset_type, "documents"], &[]);
        let payload = self.get_json("config/documents", url).await?;

        let body: DocumentRows =
            serde_json::from_value(payload).map_err(|source| UpstreamError::Decode {
                context: "config/documents".to_string(),
                source,
            })?;
        let (DocumentRows::Bare(rows) | DocumentRows::Envelope { data: rows }) = body;
        Ok(rows.iter().filter_map(map_document).collect())
    }
}
