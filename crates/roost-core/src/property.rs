use serde::{Deserialize, Serialize};

use crate::geo::fallback_coordinates;
use crate::pagination::{clamp_page, page_bounds, page_count};
use crate::text::titleize;

/// Currency symbol used when a source omits one (Bangladeshi taka).
pub const DEFAULT_CURRENCY: &str = "৳";

/// Title used when a source provides none.
pub const DEFAULT_TITLE: &str = "Property";

const DEFAULT_AMENITIES: &[&str] = &[
    "Gas Supply",
    "Boundary Wall",
    "Kitchen Cabinet",
    "Power Backup",
    "Parking",
    "Lift",
    "Servant Room",
    "Furnished",
];

/// A normalized listing, regardless of whether it came from the upstream API
/// or the mock catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub price: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub listing_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_year: Option<i32>,
    /// Cover images first, then the rest in source order.
    pub images: Vec<String>,
    pub has_images: bool,
    pub badges: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_date: Option<String>,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square feet.
    pub area: u32,
    pub parking: u32,
    /// Set on records returned from a user's shortlist.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_shortlisted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortlist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Property {
    /// Fills every display default a caller relies on.
    ///
    /// Idempotent: finalizing an already finalized property changes nothing.
    #[must_use]
    pub fn finalize(mut self) -> Self {
        self.has_images = !self.images.is_empty();

        if self.title.trim().is_empty() {
            self.title = DEFAULT_TITLE.to_string();
        }
        if self.currency.trim().is_empty() {
            self.currency = DEFAULT_CURRENCY.to_string();
        }
        if self.property_type.is_empty() {
            if let Some(kind) = type_from_badges(&self.badges) {
                self.property_type = kind;
            }
        }
        if self.listing_type.is_empty() {
            if let Some(listing) = listing_type_from_badges(&self.badges) {
                self.listing_type = listing.to_string();
            }
        }
        if self.amenities.is_empty() {
            self.amenities = DEFAULT_AMENITIES.iter().map(|s| (*s).to_string()).collect();
        }
        if self.latitude.is_none() && self.longitude.is_none() {
            let badges = self.badges.join(" ");
            if let Some((lat, lng)) =
                fallback_coordinates(&[self.address.as_str(), badges.as_str(), self.title.as_str()])
            {
                self.latitude = Some(lat);
                self.longitude = Some(lng);
            }
        }
        self
    }
}

/// Display label for an upstream listing status such as `listed_rental`.
#[must_use]
pub fn status_label(status: &str) -> String {
    let clean = status.trim().to_lowercase();
    match clean.as_str() {
        "listed_rental" | "ready_for_listing" | "active" | "available" => "To-let".to_string(),
        "listed_sale" | "for_sale" | "sale" => "For Sale".to_string(),
        "leased" | "rented" => "Leased".to_string(),
        _ => titleize(&clean),
    }
}

fn type_from_badges(badges: &[String]) -> Option<String> {
    badges.iter().find_map(|badge| {
        match badge.trim().to_lowercase().as_str() {
            "land" | "plot" => Some("Plot".to_string()),
            clean @ ("residential" | "commercial") => Some(titleize(clean)),
            _ => None,
        }
    })
}

fn listing_type_from_badges(badges: &[String]) -> Option<&'static str> {
    badges.iter().find_map(|badge| {
        let clean = badge.trim().to_lowercase();
        if clean.contains("sale") {
            Some("For Sale")
        } else if clean.contains("to-let") || clean.contains("rent") {
            Some("To-let")
        } else if clean.contains("lease") {
            Some("Lease")
        } else {
            None
        }
    })
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyList {
    pub items: Vec<Property>,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
}

impl PropertyList {
    /// Wraps an already-sliced page, deriving `pages` and clamping `page`.
    #[must_use]
    pub fn from_page(items: Vec<Property>, page: usize, limit: usize, total: usize) -> Self {
        let pages = page_count(total, limit);
        Self {
            items,
            page: clamp_page(page, pages),
            pages,
            total,
        }
    }

    /// Slices the requested page out of the full, ordered result set.
    #[must_use]
    pub fn paginate(mut all: Vec<Property>, page: usize, limit: usize) -> Self {
        let total = all.len();
        let bounds = page_bounds(page, limit, total);
        all.truncate(bounds.end);
        let items = all.split_off(bounds.start);
        Self::from_page(items, page, limit, total)
    }
}

/// Listing count for one neighborhood, used by the "top neighborhoods" ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighborhoodStat {
    pub neighborhood: String,
    pub city: String,
    pub count: u32,
}
