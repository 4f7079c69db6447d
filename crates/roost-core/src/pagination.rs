//! Page arithmetic shared by the remote client and the mock engine so that
//! both report identical `page`/`pages` for the same inputs.

use std::ops::Range;

/// Number of pages needed for `total` items at `limit` per page.
///
/// Always at least 1, so an empty result still has a first page. A zero
/// `limit` is treated as 1.
#[must_use]
pub fn page_count(total: usize, limit: usize) -> usize {
    total.div_ceil(limit.max(1)).max(1)
}

/// Clamps a requested page into `[1, pages]`.
#[must_use]
pub fn clamp_page(page: usize, pages: usize) -> usize {
    page.clamp(1, pages.max(1))
}

/// Index range of the requested page within `total` items.
///
/// The page is clamped first; the range never extends past `total`.
#[must_use]
pub fn page_bounds(page: usize, limit: usize, total: usize) -> Range<usize> {
    let limit = limit.max(1);
    let page = clamp_page(page, page_count(total, limit));
    let start = ((page - 1) * limit).min(total);
    let end = (start + limit).min(total);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up_with_minimum_one() {
        assert_eq!(page_count(0, 9), 1);
        assert_eq!(page_count(1, 9), 1);
        assert_eq!(page_count(9, 9), 1);
        assert_eq!(page_count(10, 9), 2);
        assert_eq!(page_count(25, 5), 5);
        assert_eq!(page_count(26, 5), 6);
        assert_eq!(page_count(7, 0), 7);
    }

    #[test]
    fn page_count_matches_ceil_for_many_inputs() {
        for total in 0..60usize {
            for limit in 1..12usize {
                #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let expected = ((total as f64 / limit as f64).ceil() as usize).max(1);
                assert_eq!(page_count(total, limit), expected, "total={total} limit={limit}");
            }
        }
    }

    #[test]
    fn clamp_page_keeps_page_in_range() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(99, 5), 5);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn page_bounds_slices_second_page() {
        assert_eq!(page_bounds(2, 5, 25), 5..10);
        assert_eq!(page_bounds(5, 5, 23), 20..23);
        assert_eq!(page_bounds(9, 5, 23), 20..23);
        assert_eq!(page_bounds(1, 9, 0), 0..0);
    }

    #[test]
    fn pages_cover_every_index_exactly_once() {
        for total in 0..40usize {
            for limit in 1..10usize {
                let covered: Vec<usize> = (1..=page_count(total, limit))
                    .flat_map(|page| page_bounds(page, limit, total))
                    .collect();
                assert_eq!(covered, (0..total).collect::<Vec<_>>());
                for page in 1..=page_count(total, limit) {
                    assert!(page_bounds(page, limit, total).len() <= limit);
                }
            }
        }
    }
}
