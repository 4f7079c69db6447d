//! Tolerant mapping from raw upstream asset JSON to [`Property`].
//!
//! The assets API has shipped the same field as `PascalCase`, `snake_case`
//! and `camelCase` across versions, and sometimes embeds the nested
//! `details` / `location` objects as JSON-encoded strings. Every lookup here
//! therefore takes a list of candidate keys and the first usable value wins.

use std::borrow::Cow;

use chrono::{DateTime, Datelike, NaiveDate};
use serde_json::{Map, Value};

use roost_core::geo::coords_from_pair;
use roost_core::text::{dedup_strings, titleize};
use roost_core::{status_label, Document, Property};

pub(crate) type Object = Map<String, Value>;

const LAT_KEYS: &[&str] = &["lat", "latitude", "Lat", "Latitude"];
const LNG_KEYS: &[&str] = &["lng", "lon", "longitude", "Longitude", "Long", "long"];
const AMENITY_KEYS: &[&str] = &[
    "amenities",
    "Amenities",
    "features",
    "featureList",
    "features_list",
    "Features",
];

/// Accepted listing-date layouts, tried in order after RFC 3339.
const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %b %Y",
    "%b %d, %Y",
    "%d-%m-%Y",
    "%d/%m/%Y",
];

/// Display layout for listing dates, e.g. `Sep 18, 2024`.
pub(crate) const DISPLAY_DATE_LAYOUT: &str = "%b %d, %Y";

/// Maps one upstream asset to a finalized [`Property`].
///
/// Returns `None` when `raw` is not an object or carries no id.
#[must_use]
pub fn map_asset(raw: &Value) -> Option<Property> {
    let raw = raw.as_object()?;
    let id = first_string(Some(raw), &["ID", "id"])?;

    let details = pick_object(raw, &["Details", "details"]);
    let location = pick_object(raw, &["Location", "location"]);
    let details = details.as_deref();
    let location = location.as_deref();

    let mut prop = Property {
        id,
        property_type: first_string(Some(raw), &["Type", "type"])
            .or_else(|| first_string(details, &["property_type", "propertyType"]))
            .map(|t| titleize(&t))
            .unwrap_or_default(),
        listing_type: first_string(Some(raw), &["Status", "status"])
            .or_else(|| first_string(details, &["listing_type", "listingType"]))
            .map(|s| status_label(&s))
            .unwrap_or_default(),
        title: first_string(details, &["listing_title", "listingTitle", "title"])
            .or_else(|| first_string(Some(raw), &["Name", "name"]))
            .unwrap_or_default(),
        address: first_string(Some(raw), &["Address", "address"])
            .or_else(|| build_address(location))
            .unwrap_or_default(),
        description: first_string(
            details,
            &[
                "description",
                "listing_description",
                "listingDescription",
                "overview",
                "remarks",
            ],
        )
        .or_else(|| first_string(Some(raw), &["description", "Description"]))
        .unwrap_or_default(),
        contact_phone: first_string(
            details,
            &["contact_phone", "contactPhone", "phone", "owner_phone", "ownerPhone"],
        )
        .or_else(|| first_string(Some(raw), &["contact_phone", "contactPhone", "phone"])),
        contact_email: first_string(details, &["contact_email", "contactEmail", "email"])
            .or_else(|| first_string(Some(raw), &["contact_email", "contactEmail", "email"])),
        images: pick_array(Some(raw), &["photos", "Photos"])
            .map(|items| select_photo_urls(items))
            .unwrap_or_default(),
        price: extract_price(details)
            .or_else(|| float_from(Some(raw), &["rent_price", "RentPrice", "monthly_rent"]))
            .unwrap_or_default(),
        ..Property::default()
    };

    if let Some((lat, lng)) = coordinates(raw, location) {
        prop.latitude = Some(lat);
        prop.longitude = Some(lng);
    }

    if let Some(details) = details {
        prop.bedrooms = float_from(Some(details), &["bedrooms"]).map_or(0, to_count);
        prop.bathrooms = float_from(Some(details), &["bathrooms"]).map_or(0, to_count);
        prop.area = float_from(Some(details), &["sizeSqft", "size_sqft"]).map_or(0, to_count);
        prop.parking = float_from(Some(details), &["parking_spaces", "parkingSpaces"])
            .map(to_count)
            .or_else(|| {
                bool_from(Some(details), &["hasParking", "has_parking"]).map(u32::from)
            })
            .unwrap_or_default();
        prop.build_year = float_from(
            Some(details),
            &["build_year", "buildYear", "year_built", "yearBuilt"],
        )
        .and_then(to_year);

        if let Some(raw_date) = first_string(
            Some(details),
            &[
                "listing_date",
                "listingDate",
                "available_from",
                "availableFrom",
                "created_at",
                "createdAt",
            ],
        ) {
            let (display, year) = display_listing_date(&raw_date);
            prop.listing_date = Some(display);
            prop.listing_year = year;
        }
    }

    let furnishing = first_string(details, &["furnishingStatus", "furnishing_status"]);
    prop.badges = dedup_strings([
        prop.property_type.clone(),
        prop.listing_type.clone(),
        first_string(location, &["city"]).map(|v| titleize(&v)).unwrap_or_default(),
        first_string(location, &["neighborhood"])
            .map(|v| titleize(&v))
            .unwrap_or_default(),
        furnishing.map(|v| titleize(&v)).unwrap_or_default(),
    ]);

    let mut amenities = extract_amenities(details);
    if amenities.is_empty() {
        amenities = extract_amenities(Some(raw));
    }
    prop.amenities = dedup_strings(amenities);

    Some(prop.finalize())
}

/// Extracts a flat list of strings from either a bare JSON array or a
/// `{"data": [...]}` envelope. Blank and repeated entries are dropped.
#[must_use]
pub fn string_list(payload: &Value) -> Vec<String> {
    match payload {
        Value::Array(items) => dedup_strings(items.iter().filter_map(value_to_string)),
        Value::Object(obj) => obj.get("data").map(string_list).unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Maps one required-document row. Rows without a label are dropped; a
/// missing id falls back to the label.
#[must_use]
pub fn map_document(raw: &Value) -> Option<Document> {
    let raw = raw.as_object();
    let label = first_string(raw, &["label", "name", "title"])?;
    Some(Document {
        id: first_string(raw, &["id", "ID"]).unwrap_or_else(|| label.clone()),
        is_required: bool_from(raw, &["isRequired", "required", "is_required"])
            .unwrap_or_default(),
        label,
    })
}

/// Parses a listing date in any of the layouts the upstream has used,
/// including bare unix seconds.
#[must_use]
pub fn parse_listing_date(raw: &str) -> Option<NaiveDate> {
    let clean = raw.trim();
    if clean.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(clean) {
        return Some(dt.date_naive());
    }
    if let Some(date) = DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(clean, layout).ok())
    {
        return Some(date);
    }
    clean
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.date_naive())
}

/// Formats a raw listing date for display and extracts its year.
///
/// Unparseable input is kept verbatim with no year.
#[must_use]
pub fn display_listing_date(raw: &str) -> (String, Option<i32>) {
    match parse_listing_date(raw) {
        Some(date) => (
            date.format(DISPLAY_DATE_LAYOUT).to_string(),
            Some(date.year()),
        ),
        None => (raw.trim().to_string(), None),
    }
}

fn coordinates(raw: &Object, location: Option<&Object>) -> Option<(f64, f64)> {
    let explicit = float_from(location, LAT_KEYS).zip(float_from(location, LNG_KEYS));
    let from_pair = || {
        let pair = pick_array(location, &["coordinates", "coords"])?;
        let first = parse_number(pair.first()?)?;
        let second = parse_number(pair.get(1)?)?;
        Some(coords_from_pair(first, second))
    };
    let top_level = || float_from(Some(raw), LAT_KEYS).zip(float_from(Some(raw), LNG_KEYS));

    [explicit, from_pair(), top_level()]
        .into_iter()
        .flatten()
        .find(|&(lat, lng)| lat != 0.0 || lng != 0.0)
}

fn extract_price(details: Option<&Object>) -> Option<f64> {
    let details = details?;
    let positive = |m: Option<&Object>, keys: &[&str]| float_from(m, keys).filter(|v| *v > 0.0);

    let pricing = pick_object(details, &["pricing", "Pricing"]);
    let pricing = pricing.as_deref();
    positive(pricing, &["monthly_rent", "rent_price"])
        .or_else(|| positive(pricing, &["sale_price", "SalePrice"]))
        .or_else(|| positive(Some(details), &["sale_price", "SalePrice"]))
        .or_else(|| positive(Some(details), &["rent_price", "RentPrice"]))
}

fn build_address(location: Option<&Object>) -> Option<String> {
    let parts: Vec<String> = ["address", "neighborhood", "city"]
        .iter()
        .filter_map(|key| first_string(location, &[*key]))
        .collect();
    if parts.is_empty() {
        first_string(location, &["raw"])
    } else {
        Some(parts.join(", "))
    }
}

/// Cover photos first, then the rest in declaration order.
fn select_photo_urls(items: &[Value]) -> Vec<String> {
    let (mut covers, others): (Vec<_>, Vec<_>) = items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|photo| {
            let url = first_string(Some(photo), &["FileURL", "file_url", "fileUrl"])?;
            let is_cover = bool_from(Some(photo), &["IsCover", "is_cover"]).unwrap_or(false);
            Some((url, is_cover))
        })
        .partition(|(_, is_cover)| *is_cover);
    covers.extend(others);
    covers.into_iter().map(|(url, _)| url).collect()
}

fn extract_amenities(m: Option<&Object>) -> Vec<String> {
    let Some(m) = m else {
        return Vec::new();
    };
    AMENITY_KEYS
        .iter()
        .find_map(|key| match m.get(*key)? {
            Value::Array(items) => Some(items.iter().filter_map(value_to_string).collect()),
            Value::String(s) if !s.trim().is_empty() => {
                Some(s.split(',').map(str::to_string).collect())
            }
            _ => None,
        })
        .unwrap_or_default()
}

/// Returns the first non-empty object under `keys`, decoding it from a JSON
/// string when the upstream double-encoded it.
pub(crate) fn pick_object<'a>(m: &'a Object, keys: &[&str]) -> Option<Cow<'a, Object>> {
    keys.iter().find_map(|key| match m.get(*key)? {
        Value::Object(obj) if !obj.is_empty() => Some(Cow::Borrowed(obj)),
        Value::String(encoded) => serde_json::from_str::<Object>(encoded)
            .ok()
            .filter(|obj| !obj.is_empty())
            .map(Cow::Owned),
        _ => None,
    })
}

fn pick_array<'a>(m: Option<&'a Object>, keys: &[&str]) -> Option<&'a Vec<Value>> {
    let m = m?;
    keys.iter().find_map(|key| m.get(*key)?.as_array())
}

pub(crate) fn first_string(m: Option<&Object>, keys: &[&str]) -> Option<String> {
    let m = m?;
    keys.iter().find_map(|key| m.get(*key).and_then(value_to_string))
}

pub(crate) fn float_from(m: Option<&Object>, keys: &[&str]) -> Option<f64> {
    let m = m?;
    keys.iter().find_map(|key| m.get(*key).and_then(parse_number))
}

pub(crate) fn bool_from(m: Option<&Object>, keys: &[&str]) -> Option<bool> {
    let m = m?;
    keys.iter().find_map(|key| match m.get(*key)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" => Some(true),
            "false" | "f" => Some(false),
            other => other.parse::<f64>().ok().map(|v| v != 0.0),
        },
        _ => None,
    })
}

fn value_to_string(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> u32 {
    if value > 0.0 {
        value.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_year(value: f64) -> Option<i32> {
    (1.0..10_000.0).contains(&value).then(|| value.round() as i32)
}

#[cfg(test)]
#[path = "asset_test.rs"]
mod tests;
