//! In-memory stand-in for the upstream assets API.
//!
//! Answers the same reads as [`crate::ListingsClient`] from a fixed Dhaka
//! catalog, applying the same normalized [`SearchParams`] and the same
//! pagination rules, so a fallback page looks like a real one.

mod dataset;
mod filter;
mod shortlist;

use std::cmp::Reverse;

use roost_core::text::{clean_any, contains_ci, titleize};
use roost_core::{Document, NeighborhoodStat, Property, PropertyList, SearchParams};

use dataset::CATALOG;

pub use shortlist::{ShortlistStore, DEFAULT_SHORTLIST_ID};

/// Rows returned by the top-neighborhoods ranking when the caller asks for 0.
pub const DEFAULT_TOP_LIMIT: usize = 10;

const DEFAULT_CITY: &str = "Dhaka";

const CITIES: &[&str] = &["Dhaka", "Chittagong", "Sylhet", "Khulna", "Rajshahi"];

/// `(id, label, required)` rows served for every asset type.
const REQUIRED_DOCUMENTS: &[(&str, &str, bool)] = &[
    ("923dad", "NID", true),
    ("23243fasf", "Employment letter", true),
    ("da5da", "Bank Statement", false),
    ("da67g5da", "Solvency Certificate", false),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct MockCatalog;

impl MockCatalog {
    /// Every record, finalized, in catalog order.
    #[must_use]
    pub fn all(&self) -> &'static [Property] {
        &CATALOG
    }

    /// Filters, optionally sorts and paginates the catalog.
    #[must_use]
    pub fn search(&self, params: &SearchParams) -> PropertyList {
        let mut hits: Vec<Property> = CATALOG
            .iter()
            .filter(|prop| filter::matches(prop, params))
            .cloned()
            .collect();
        filter::sort(&mut hits, params.sort_by.as_deref(), params.order);

        tracing::debug!(total = hits.len(), "mock search");
        PropertyList::paginate(hits, params.page, params.limit)
    }

    /// Looks up a record by id, ignoring case.
    #[must_use]
    pub fn property(&self, id: &str) -> Option<Property> {
        let id = id.trim();
        CATALOG
            .iter()
            .find(|prop| prop.id.eq_ignore_ascii_case(id))
            .cloned()
    }

    #[must_use]
    pub fn cities(&self) -> Vec<String> {
        CITIES.iter().map(|c| (*c).to_string()).collect()
    }

    /// Known neighborhoods for `city`; unknown cities get generic areas.
    #[must_use]
    pub fn neighborhoods(&self, city: &str) -> Vec<String> {
        let areas: &[&str] = match city.trim().to_lowercase().as_str() {
            "dhaka" => &["Gulshan", "Banani", "Uttara", "Dhanmondi", "Bashundhara", "Mirpur"],
            "chittagong" => &["Agrabad", "Nasirabad", "Pahartali"],
            "sylhet" => &["Zinda Bazar", "Amberkhana", "Mirabazar"],
            "khulna" => &["Sonadanga", "Khalishpur", "Mujgunni"],
            "rajshahi" => &["Uttara", "Boalia", "Rajpara"],
            _ => &["Central", "North", "South"],
        };
        areas.iter().map(|a| (*a).to_string()).collect()
    }

    /// Ranks the city's neighborhoods by how many catalog records mention
    /// them in their address or title.
    ///
    /// The city defaults to Dhaka. Neighborhoods with no records are left
    /// out; ties are broken alphabetically.
    #[must_use]
    pub fn top_neighborhoods(&self, limit: usize, city: Option<&str>) -> Vec<NeighborhoodStat> {
        let limit = if limit == 0 { DEFAULT_TOP_LIMIT } else { limit };
        let city = titleize(city.and_then(clean_any).unwrap_or(DEFAULT_CITY));

        let mut stats: Vec<NeighborhoodStat> = self
            .neighborhoods(&city)
            .into_iter()
            .filter_map(|area| {
                let count = CATALOG
                    .iter()
                    .filter(|prop| contains_ci(&prop.address, &area) || contains_ci(&prop.title, &area))
                    .count();
                let count = u32::try_from(count).ok().filter(|n| *n > 0)?;
                Some(NeighborhoodStat {
                    neighborhood: area,
                    city: city.clone(),
                    count,
                })
            })
            .collect();

        stats.sort_by(|a, b| {
            Reverse(a.count)
                .cmp(&Reverse(b.count))
                .then_with(|| a.neighborhood.cmp(&b.neighborhood))
        });
        stats.truncate(limit);
        stats
    }

    /// Documents an applicant supplies. The list is the same for every
    /// asset type.
    #[must_use]
    pub fn required_documents(&self, asset_type: &str) -> Vec<Document> {
        tracing::debug!(asset_type, "mock required documents");
        REQUIRED_DOCUMENTS
            .iter()
            .map(|(id, label, required)| Document {
                id: (*id).to_string(),
                label: (*label).to_string(),
                is_required: *required,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;
