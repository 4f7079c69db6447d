//! Canonical search filters built from raw, alias-heavy query strings.
//!
//! [`SearchParams::from_query`] never fails: malformed values degrade to "no
//! constraint" (or the documented default) so a sloppy URL produces a broader
//! search instead of an error page.
//!
//! Alias precedence, first present non-`any` key wins:
//!
//! | field          | keys                                      |
//! |----------------|-------------------------------------------|
//! | `types`        | `types`, `type`                           |
//! | `neighborhood` | `neighborhood`, `area`, `location`        |
//! | `price_min`    | `price_min`, `minPrice`                   |
//! | `price_max`    | `price_max`, `maxPrice`                   |
//! | `statuses`     | `status`, `listing_type`, `listingType`   |
//! | `shared_room`  | `shared_room`, `sharedRoom`               |

use serde::{Deserialize, Serialize};

use crate::query::QueryValues;
use crate::text::{clean_any, dedup_strings, titleize};

/// Page size used when the caller gives none (a 3×3 results grid).
pub const DEFAULT_LIMIT: usize = 9;

/// Listing statuses searched when the caller does not pick one.
pub const DEFAULT_STATUS_FILTER: &[&str] = &["listed_rental", "listed_sale"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub types: Vec<String>,
    /// Upstream status tokens such as `listed_rental`. Never empty.
    pub statuses: Vec<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    /// `0..=2` match exactly; `3` and above mean "at least".
    pub parking: Option<u32>,
    pub furnished: Option<bool>,
    pub serviced: Option<bool>,
    pub shared_room: Option<bool>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
    pub subunit_type: Option<String>,
    pub exclude_leased: Option<bool>,
    pub page: usize,
    pub limit: usize,
    pub sort_by: Option<String>,
    pub order: Option<SortOrder>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: None,
            city: None,
            neighborhood: None,
            types: Vec::new(),
            statuses: default_statuses(),
            price_min: None,
            price_max: None,
            bedrooms: None,
            bathrooms: None,
            parking: None,
            furnished: None,
            serviced: None,
            shared_room: None,
            area_min: None,
            area_max: None,
            subunit_type: None,
            exclude_leased: None,
            page: 1,
            limit: DEFAULT_LIMIT,
            sort_by: None,
            order: None,
        }
    }
}

impl SearchParams {
    /// Normalizes raw query values into the canonical filter set.
    #[must_use]
    pub fn from_query(q: &QueryValues) -> Self {
        let first = |keys: &[&str]| -> Option<String> {
            keys.iter()
                .find_map(|key| q.get(key).and_then(clean_any))
                .map(str::to_string)
        };

        let types = first(&["types", "type"])
            .map(|raw| {
                dedup_strings(
                    raw.split(',')
                        .filter_map(clean_any)
                        .map(normalize_type),
                )
            })
            .unwrap_or_default();

        Self {
            query: first(&["q"]),
            city: first(&["city"]),
            neighborhood: first(&["neighborhood", "area", "location"]),
            types,
            statuses: resolve_statuses(q),
            price_min: first(&["price_min", "minPrice"]).and_then(|v| parse_amount(&v)),
            price_max: first(&["price_max", "maxPrice"]).and_then(|v| parse_amount(&v)),
            bedrooms: first(&["bedrooms"])
                .and_then(|v| parse_count(&v))
                .filter(|n| *n > 0),
            bathrooms: first(&["bathrooms"])
                .and_then(|v| parse_count(&v))
                .filter(|n| *n > 0),
            parking: first(&["parking"]).and_then(|v| parse_count(&v)),
            furnished: first(&["furnished"]).and_then(|v| parse_tristate(&v)),
            serviced: first(&["serviced"]).and_then(|v| parse_tristate(&v)),
            shared_room: first(&["shared_room", "sharedRoom"]).and_then(|v| parse_tristate(&v)),
            area_min: first(&["area_min"]).and_then(|v| parse_amount(&v)),
            area_max: first(&["area_max"]).and_then(|v| parse_amount(&v)),
            subunit_type: first(&["subunit_type"]),
            exclude_leased: first(&["exclude_leased"]).and_then(|v| parse_tristate(&v)),
            page: parse_page(q.get("page"), 1),
            limit: parse_page(q.get("limit"), DEFAULT_LIMIT),
            sort_by: first(&["sort_by"]),
            order: first(&["order"]).and_then(|v| SortOrder::parse(&v)),
        }
    }

    /// Comma-joined status filter as sent upstream.
    #[must_use]
    pub fn status_param(&self) -> String {
        self.statuses.join(",")
    }

    /// Serializes the filters using the upstream `/assets` parameter names.
    /// Unset filters are omitted.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("status", self.status_param()),
        ];
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key, value));
            }
        };

        push("q", self.query.clone());
        push("city", self.city.clone());
        push("neighborhood", self.neighborhood.clone());
        push(
            "types",
            (!self.types.is_empty()).then(|| self.types.join(",")),
        );
        push("price_min", self.price_min.map(|v| v.to_string()));
        push("price_max", self.price_max.map(|v| v.to_string()));
        push("bedrooms", self.bedrooms.map(|v| v.to_string()));
        push("bathrooms", self.bathrooms.map(|v| v.to_string()));
        push("parking", self.parking.map(|v| v.to_string()));
        push("serviced", self.serviced.map(|v| v.to_string()));
        push("shared_room", self.shared_room.map(|v| v.to_string()));
        push("area_min", self.area_min.map(|v| v.to_string()));
        push("area_max", self.area_max.map(|v| v.to_string()));
        push("furnished", self.furnished.map(|v| v.to_string()));
        push("subunit_type", self.subunit_type.clone());
        push("exclude_leased", self.exclude_leased.map(|v| v.to_string()));
        push("sort_by", self.sort_by.clone());
        push("order", self.order.map(|o| o.as_str().to_string()));
        pairs
    }
}

fn default_statuses() -> Vec<String> {
    DEFAULT_STATUS_FILTER.iter().map(|s| (*s).to_string()).collect()
}

fn resolve_statuses(q: &QueryValues) -> Vec<String> {
    if let Some(raw) = q.get("status").and_then(clean_any) {
        let statuses = dedup_strings(
            raw.split(',')
                .filter_map(clean_any)
                .filter_map(normalize_listing_type),
        );
        if !statuses.is_empty() {
            return statuses;
        }
    }

    ["listing_type", "listingType"]
        .iter()
        .find_map(|key| q.get(key).and_then(clean_any))
        .and_then(normalize_listing_type)
        .map_or_else(default_statuses, |status| vec![status])
}

/// Maps the many spellings of "rent" and "sale" onto upstream status tokens.
///
/// `both` means no preference and yields `None`; unknown values are
/// lowercased and passed through.
#[must_use]
pub fn normalize_listing_type(raw: &str) -> Option<String> {
    let clean = raw.trim().to_lowercase();
    match clean.as_str() {
        "" | "both" => None,
        "rent" | "rental" | "listed_rental" | "lease" | "to-let" | "to_let" | "tolet" => {
            Some("listed_rental".to_string())
        }
        "sale" | "sell" | "listed_sale" | "for_sale" => Some("listed_sale".to_string()),
        _ => Some(clean),
    }
}

/// Maps free-text property types onto catalog category names.
#[must_use]
pub fn normalize_type(raw: &str) -> String {
    let clean = raw.trim().to_lowercase();
    match clean.as_str() {
        "residential" => "Residential".to_string(),
        "commercial" => "Commercial".to_string(),
        "land" => "Plot".to_string(),
        _ => titleize(&clean),
    }
}

/// Parses a money or size amount, ignoring currency symbols and separators.
///
/// `"৳20,000"` parses as `20000.0`. Values that do not parse, or parse to
/// zero or less, yield `None`.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Parses a small count such as bedrooms or parking spaces. Accepts a
/// trailing `+` as sent by "3+" dropdown options.
fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().trim_end_matches('+').trim().parse::<u32>().ok()
}

fn parse_page(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

fn parse_tristate(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "search_params_test.rs"]
mod tests;
