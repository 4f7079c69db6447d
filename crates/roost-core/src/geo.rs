//! Best-effort coordinates for listings that arrive without usable lat/lng.
//!
//! The service area is Dhaka (lat ≈ 23.8, lng ≈ 90.4), which is what makes
//! the axis-order guess in [`coords_from_pair`] workable. Outside that
//! profile the guess can place a point on the wrong axis.

/// Approximate neighborhood centroids, matched by lowercase substring.
///
/// Ordered: the first key found in the haystack wins.
pub const AREA_CENTROIDS: &[(&str, f64, f64)] = &[
    ("uttara", 23.874_219, 90.396_475),
    ("gulshan", 23.792_521, 90.414_047),
    ("banani", 23.793_478, 90.404_137),
    ("dhanmondi", 23.746_105, 90.374_007),
    ("mirpur", 23.804_174, 90.353_605),
    ("bashundhara", 23.815_216, 90.423_018),
    ("mohammadpur", 23.758_726, 90.358_072),
    ("mohakhali", 23.780_195, 90.400_438),
    ("baridhara", 23.810_151, 90.422_426),
    ("nikunja", 23.826_702, 90.422_935),
    ("badda", 23.780_917, 90.426_642),
];

/// Orders an ambiguous two-element coordinate pair as `(lat, lng)`.
///
/// A magnitude above 60 can only be a longitude in this region. When neither
/// or both exceed 60 the larger magnitude is taken as the longitude.
#[must_use]
pub fn coords_from_pair(first: f64, second: f64) -> (f64, f64) {
    let (a, b) = (first.abs(), second.abs());
    if a > 60.0 && b <= 60.0 {
        (second, first)
    } else if (b > 60.0 && a <= 60.0) || b > a {
        (first, second)
    } else {
        (second, first)
    }
}

/// Looks up the first known neighborhood mentioned in any of `texts`.
#[must_use]
pub fn fallback_coordinates<S: AsRef<str>>(texts: &[S]) -> Option<(f64, f64)> {
    let haystack = texts
        .iter()
        .map(|t| t.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    AREA_CENTROIDS
        .iter()
        .find(|(key, _, _)| haystack.contains(key))
        .map(|&(_, lat, lng)| (lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_with_large_first_value_is_lng_lat() {
        assert_eq!(coords_from_pair(90.41, 23.79), (23.79, 90.41));
    }

    #[test]
    fn pair_with_large_second_value_is_lat_lng() {
        assert_eq!(coords_from_pair(23.79, 90.41), (23.79, 90.41));
    }

    #[test]
    fn small_pair_uses_larger_magnitude_as_longitude() {
        assert_eq!(coords_from_pair(10.0, 20.0), (10.0, 20.0));
        assert_eq!(coords_from_pair(20.0, 10.0), (10.0, 20.0));
    }

    #[test]
    fn fallback_matches_neighborhood_in_address() {
        let coords = fallback_coordinates(&["Road 11, Banani, Dhaka", "2 Bedroom Apartment"]);
        assert_eq!(coords, Some((23.793_478, 90.404_137)));
    }

    #[test]
    fn fallback_returns_none_for_unknown_area() {
        assert_eq!(fallback_coordinates(&["Agrabad, Chittagong"]), None);
    }
}
