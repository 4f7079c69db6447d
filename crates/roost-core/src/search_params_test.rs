use super::*;

fn params(pairs: &[(&str, &str)]) -> SearchParams {
    let q: QueryValues = pairs.iter().copied().collect();
    SearchParams::from_query(&q)
}

#[test]
fn empty_query_yields_defaults() {
    let p = params(&[]);
    assert_eq!(p, SearchParams::default());
    assert_eq!(p.page, 1);
    assert_eq!(p.limit, DEFAULT_LIMIT);
    assert_eq!(p.statuses, vec!["listed_rental", "listed_sale"]);
    assert!(p.types.is_empty());
}

#[test]
fn type_and_types_normalize_identically() {
    assert_eq!(
        params(&[("type", "commercial")]),
        params(&[("types", "Commercial")])
    );
    assert_eq!(params(&[("type", "commercial")]).types, vec!["Commercial"]);
}

#[test]
fn types_wins_over_type() {
    let p = params(&[("type", "Residential"), ("types", "land,commercial,land")]);
    assert_eq!(p.types, vec!["Plot", "Commercial"]);
}

#[test]
fn neighborhood_aliases_normalize_identically() {
    let a = params(&[("location", "Gulshan")]);
    let b = params(&[("neighborhood", "Gulshan")]);
    let c = params(&[("area", "Gulshan")]);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.neighborhood.as_deref(), Some("Gulshan"));
    assert_eq!(a.query, None);
}

#[test]
fn neighborhood_precedence_prefers_specific_key() {
    let p = params(&[
        ("location", "Mirpur"),
        ("area", "Banani"),
        ("neighborhood", "Uttara"),
    ]);
    assert_eq!(p.neighborhood.as_deref(), Some("Uttara"));

    let p = params(&[("location", "Mirpur"), ("area", "Banani")]);
    assert_eq!(p.neighborhood.as_deref(), Some("Banani"));
}

#[test]
fn price_aliases_normalize_identically() {
    assert_eq!(
        params(&[("price_min", "20000"), ("price_max", "60000")]),
        params(&[("minPrice", "20000"), ("maxPrice", "60000")])
    );
}

#[test]
fn price_strips_currency_and_separators() {
    let p = params(&[("price_min", "৳20,000"), ("price_max", "60,000.50")]);
    assert_eq!(p.price_min, Some(20_000.0));
    assert_eq!(p.price_max, Some(60_000.5));
}

#[test]
fn non_positive_or_garbage_prices_are_dropped() {
    let p = params(&[("price_min", "0"), ("price_max", "cheap")]);
    assert_eq!(p.price_min, None);
    assert_eq!(p.price_max, None);
}

#[test]
fn any_in_every_case_equals_omission() {
    let keys = [
        "q",
        "city",
        "neighborhood",
        "type",
        "status",
        "price_min",
        "bedrooms",
        "parking",
        "furnished",
        "shared_room",
    ];
    for spelling in ["any", "ANY", "Any", " any "] {
        let pairs: Vec<(&str, &str)> = keys.iter().map(|k| (*k, spelling)).collect();
        assert_eq!(params(&pairs), SearchParams::default(), "spelling {spelling:?}");
    }
}

#[test]
fn listing_type_spellings_map_to_status_tokens() {
    for raw in ["rent", "Rental", "lease", "to-let", "to_let", "tolet", "listed_rental"] {
        assert_eq!(
            normalize_listing_type(raw).as_deref(),
            Some("listed_rental"),
            "{raw}"
        );
    }
    for raw in ["sale", "SELL", "for_sale", "listed_sale"] {
        assert_eq!(normalize_listing_type(raw).as_deref(), Some("listed_sale"), "{raw}");
    }
    assert_eq!(normalize_listing_type("both"), None);
    assert_eq!(normalize_listing_type("  "), None);
    assert_eq!(normalize_listing_type("Leased").as_deref(), Some("leased"));
}

#[test]
fn status_precedence_and_fallback_to_default() {
    let p = params(&[("listing_type", "sale"), ("status", "rent")]);
    assert_eq!(p.statuses, vec!["listed_rental"]);

    let p = params(&[("listingType", "sale")]);
    assert_eq!(p.statuses, vec!["listed_sale"]);

    let p = params(&[("listing_type", "both")]);
    assert_eq!(p.statuses, SearchParams::default().statuses);
}

#[test]
fn status_accepts_comma_separated_values() {
    let p = params(&[("status", "rent, sale,rental")]);
    assert_eq!(p.statuses, vec!["listed_rental", "listed_sale"]);
    assert_eq!(p.status_param(), "listed_rental,listed_sale");
}

#[test]
fn counts_drop_non_positive_but_parking_keeps_zero() {
    let p = params(&[("bedrooms", "0"), ("bathrooms", "-2"), ("parking", "0")]);
    assert_eq!(p.bedrooms, None);
    assert_eq!(p.bathrooms, None);
    assert_eq!(p.parking, Some(0));

    let p = params(&[("bedrooms", "3+"), ("parking", "3+")]);
    assert_eq!(p.bedrooms, Some(3));
    assert_eq!(p.parking, Some(3));
}

#[test]
fn page_and_limit_default_when_zero_or_garbage() {
    let p = params(&[("page", "0"), ("limit", "abc")]);
    assert_eq!(p.page, 1);
    assert_eq!(p.limit, DEFAULT_LIMIT);

    let p = params(&[("page", "3"), ("limit", "12")]);
    assert_eq!(p.page, 3);
    assert_eq!(p.limit, 12);
}

#[test]
fn tristates_accept_common_spellings() {
    let p = params(&[("furnished", "Yes"), ("serviced", "0"), ("sharedRoom", "TRUE")]);
    assert_eq!(p.furnished, Some(true));
    assert_eq!(p.serviced, Some(false));
    assert_eq!(p.shared_room, Some(true));

    let p = params(&[("furnished", "maybe")]);
    assert_eq!(p.furnished, None);
}

#[test]
fn order_parses_case_insensitively() {
    let p = params(&[("sort_by", "price"), ("order", "DESC")]);
    assert_eq!(p.sort_by.as_deref(), Some("price"));
    assert_eq!(p.order, Some(SortOrder::Desc));
    assert_eq!(params(&[("order", "sideways")]).order, None);
}

#[test]
fn to_query_pairs_uses_upstream_names_and_skips_unset() {
    let p = params(&[
        ("q", "lake view"),
        ("location", "Gulshan"),
        ("type", "commercial"),
        ("minPrice", "20000"),
        ("parking", "1"),
        ("furnished", "no"),
    ]);
    let pairs = p.to_query_pairs();
    let get = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    };
    assert_eq!(get("page"), Some("1"));
    assert_eq!(get("limit"), Some("9"));
    assert_eq!(get("status"), Some("listed_rental,listed_sale"));
    assert_eq!(get("q"), Some("lake view"));
    assert_eq!(get("neighborhood"), Some("Gulshan"));
    assert_eq!(get("types"), Some("Commercial"));
    assert_eq!(get("price_min"), Some("20000"));
    assert_eq!(get("parking"), Some("1"));
    assert_eq!(get("furnished"), Some("false"));
    assert_eq!(get("price_max"), None);
    assert_eq!(get("city"), None);
    assert_eq!(get("order"), None);
}
