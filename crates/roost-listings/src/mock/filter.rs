//! Search predicates and ordering for the mock catalog.

use std::cmp::Ordering;

use roost_core::text::{contains_any_ci, contains_ci};
use roost_core::{status_label, Property, SearchParams, SortOrder};

use crate::asset::parse_listing_date;

/// Counts of this many or more are "at least"; below it they match exactly.
const PARKING_OPEN_ENDED: u32 = 3;

/// True when `prop` satisfies every filter set in `params`.
pub(super) fn matches(prop: &Property, params: &SearchParams) -> bool {
    if let Some(q) = &params.query {
        if !contains_ci(&prop.title, q)
            && !contains_ci(&prop.address, q)
            && !contains_any_ci(&prop.badges, &[q.as_str()])
        {
            return false;
        }
    }

    if let Some(area) = &params.neighborhood {
        if !contains_ci(&prop.address, area) && !contains_ci(&prop.title, area) {
            return false;
        }
    }

    if !params.types.is_empty()
        && !params
            .types
            .iter()
            .any(|t| contains_any_ci(&prop.badges, &[t.as_str()]))
    {
        return false;
    }

    if !params.statuses.is_empty()
        && !params
            .statuses
            .iter()
            .any(|s| contains_any_ci(&prop.badges, &[status_label(s).as_str()]))
    {
        return false;
    }

    if params.price_min.is_some_and(|min| prop.price < min)
        || params.price_max.is_some_and(|max| prop.price > max)
    {
        return false;
    }

    if let Some(parking) = params.parking {
        let ok = if parking >= PARKING_OPEN_ENDED {
            prop.parking >= parking
        } else {
            prop.parking == parking
        };
        if !ok {
            return false;
        }
    }

    if prop.area > 0 {
        let area = f64::from(prop.area);
        if params.area_min.is_some_and(|min| area < min)
            || params.area_max.is_some_and(|max| area > max)
        {
            return false;
        }
    }

    if params.bedrooms.is_some_and(|n| prop.bedrooms < n)
        || params.bathrooms.is_some_and(|n| prop.bathrooms < n)
    {
        return false;
    }

    let furnished = contains_any_ci(&prop.badges, &["Furnished"]);
    let serviced = contains_any_ci(&prop.badges, &["Serviced"]) || contains_ci(&prop.title, "serviced");
    let shared = contains_ci(&prop.title, "shared") || contains_any_ci(&prop.badges, &["Shared"]);

    tristate(params.furnished, furnished)
        && tristate(params.serviced, serviced)
        && tristate(params.shared_room, shared)
}

fn tristate(wanted: Option<bool>, actual: bool) -> bool {
    wanted.is_none_or(|wanted| wanted == actual)
}

/// Stable sort by a known key. Unknown keys leave the order untouched.
pub(super) fn sort(items: &mut [Property], sort_by: Option<&str>, order: Option<SortOrder>) {
    let Some(key) = sort_by.map(|k| k.trim().to_ascii_lowercase()) else {
        return;
    };

    let compare: fn(&Property, &Property) -> Ordering = match key.as_str() {
        "price" => |a, b| a.price.total_cmp(&b.price),
        "area" => |a, b| a.area.cmp(&b.area),
        "bedrooms" => |a, b| a.bedrooms.cmp(&b.bedrooms),
        "bathrooms" => |a, b| a.bathrooms.cmp(&b.bathrooms),
        "listing_date" | "date" => |a, b| listed_on(a).cmp(&listed_on(b)),
        _ => return,
    };

    match order.unwrap_or(SortOrder::Asc) {
        SortOrder::Asc => items.sort_by(compare),
        SortOrder::Desc => items.sort_by(|a, b| compare(b, a)),
    }
}

fn listed_on(prop: &Property) -> Option<chrono::NaiveDate> {
    prop.listing_date.as_deref().and_then(parse_listing_date)
}
