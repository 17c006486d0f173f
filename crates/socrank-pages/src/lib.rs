//! Page-range parsing for bibliographic records.
//!
//! Turns the free-text `pages` field of a citation into a starting page and
//! a page count. Parsing is total: anything unrecognized yields 0.

pub mod range;

pub use range::{PageFormat, PageRange, colon_volumes, parse_ismb};

/// Papers must be at least this many pages long to count.
///
/// Enforced by the caller, not by the eligibility predicate.
pub const PAGE_COUNT_THRESHOLD: i64 = 6;

/// Starting page of a page string, or 0 if it cannot be parsed.
pub fn start_page(pages: Option<&str>) -> i64 {
    pages
        .and_then(PageRange::parse)
        .map_or(0, |range| range.start)
}

/// Number of pages in a page string, or 0 if it cannot be parsed.
///
/// A reversed range such as `20-10` gives a negative count.
pub fn page_count(pages: Option<&str>) -> i64 {
    pages
        .and_then(PageRange::parse)
        .map_or(0, |range| range.count())
}

/// Whether a page count reaches [`PAGE_COUNT_THRESHOLD`].
pub fn meets_page_threshold(count: i64) -> bool {
    count >= PAGE_COUNT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_are_zero() {
        assert_eq!(start_page(None), 0);
        assert_eq!(page_count(None), 0);
        assert_eq!(start_page(Some("")), 0);
        assert_eq!(page_count(Some("")), 0);
    }

    #[test]
    fn text_is_zero() {
        assert_eq!(start_page(Some("abc")), 0);
        assert_eq!(page_count(Some("abc")), 0);
        assert_eq!(page_count(Some("-")), 0);
        assert_eq!(page_count(Some("1--2")), 0);
    }

    #[test]
    fn simple_and_colon_formats() {
        assert_eq!(start_page(Some("10-17")), 10);
        assert_eq!(page_count(Some("10-17")), 8);
        assert_eq!(start_page(Some("12:140-12:150")), 140);
        assert_eq!(page_count(Some("12:140-12:150")), 11);
    }

    #[test]
    fn simple_format_wins_over_colon() {
        // "1-2:3-4:5" is a valid simple prefix before it could be a colon range.
        assert_eq!(start_page(Some("1-2:3-4:5")), 1);
        assert_eq!(page_count(Some("1-2:3-4:5")), 2);
    }

    #[test]
    fn huge_ranges_are_zero() {
        assert_eq!(page_count(Some("0-9223372036854775807")), 0);
        assert_eq!(start_page(Some("0-9223372036854775807")), 0);
        assert_eq!(page_count(Some("9223372036854775807-0")), -9223372036854775806);
    }

    #[test]
    fn single_page_is_rejected_by_threshold() {
        let count = page_count(Some("17"));
        assert_eq!(count, 0);
        assert!(!meets_page_threshold(count));
    }

    #[test]
    fn threshold_boundary() {
        assert!(!meets_page_threshold(page_count(Some("1-5"))));
        assert!(meets_page_threshold(page_count(Some("1-6"))));
    }

    #[test]
    fn range_properties_hold_across_values() {
        for a in [0_i64, 1, 9, 10, 99, 1234] {
            for len in [1_i64, 2, 6, 40] {
                let b = a + len - 1;
                let simple = format!("{a}-{b}");
                assert_eq!(start_page(Some(&simple)), a);
                assert_eq!(page_count(Some(&simple)), len);
                if a > 0 {
                    let colon = format!("7:{a}-8:{b}");
                    assert_eq!(start_page(Some(&colon)), a);
                    assert_eq!(page_count(Some(&colon)), len);
                }
            }
        }
    }
}
