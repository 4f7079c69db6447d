use serde::{Deserialize, Serialize};

/// A document an applicant must (or may) supply for an asset type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub id: String,
    pub label: String,
    pub is_required: bool,
}

/// Asset-type key used in the documents path: trimmed, lowercased,
/// `default` when blank.
#[must_use]
pub fn document_asset_type(raw: &str) -> String {
    let clean = raw.trim().to_lowercase();
    if clean.is_empty() {
        "default".to_string()
    } else {
        clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_type_is_lowercased_with_default() {
        assert_eq!(document_asset_type(" Residential "), "residential");
        assert_eq!(document_asset_type("   "), "default");
    }

    #[test]
    fn serializes_is_required_in_camel_case() {
        let doc = Document {
            id: "nid".into(),
            label: "NID".into(),
            is_required: true,
        };
        let json = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(json["isRequired"], true);
        assert_eq!(json["label"], "NID");
    }
}
