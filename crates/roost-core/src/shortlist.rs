use serde::{Deserialize, Serialize};

/// Whether one asset sits on a user's shortlist.
///
/// Uses the upstream's `snake_case` field names on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortlistStatus {
    pub asset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortlist_id: Option<String>,
    pub is_shortlisted: bool,
}
