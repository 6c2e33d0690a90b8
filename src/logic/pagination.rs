//! Pagination arithmetic for the result list.
//!
//! Pure functions only. The view is recomputed from the last accepted result
//! page and the configured page size every time it is needed.

/// One-based inclusive index range of the items shown on a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayRange {
    /// Index of the first item on the page.
    pub first: u64,
    /// Index of the last item on the page.
    pub last: u64,
}

/// Derived pagination state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationView {
    /// Number of pages, `0` when there are no results.
    pub page_count: u64,
    /// Shown range, `None` when there are no results.
    pub range: Option<DisplayRange>,
    /// Whether a previous page exists.
    pub has_previous: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

/// What: Compute the pagination view for a result set.
///
/// Inputs:
/// - `total_count`: Total number of matches.
/// - `page_size`: Items per page (at least 1).
/// - `current_page`: One-based page number.
///
/// Output:
/// - Page count, displayed range and previous/next availability.
///
/// Details:
/// - Zero results disable both directions and report no range.
/// - Range bounds are capped at `total_count` so a short last page reads e.g. `31 - 37`.
#[must_use]
pub fn compute_view(total_count: u64, page_size: u64, current_page: u64) -> PaginationView {
    if total_count == 0 {
        return PaginationView::default();
    }
    let page_size = page_size.max(1);
    let current_page = current_page.max(1);
    let page_count = total_count.div_ceil(page_size);
    let first = (current_page - 1)
        .saturating_mul(page_size)
        .saturating_add(1)
        .min(total_count);
    let last = current_page.saturating_mul(page_size).min(total_count);
    PaginationView {
        page_count,
        range: Some(DisplayRange { first, last }),
        has_previous: current_page > 1,
        has_next: current_page < page_count,
    }
}

/// What: Clamp a requested page into the valid range.
///
/// Inputs:
/// - `requested`: Requested page, possibly negative or past the end.
/// - `page_count`: Known number of pages (may be `0`).
///
/// Output:
/// - A page in `1..=max(page_count, 1)`.
#[must_use]
pub fn clamp_page(requested: i64, page_count: u64) -> u64 {
    let upper = page_count.max(1);
    u64::try_from(requested).map_or(1, |page| page.clamp(1, upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: No results means no pages, no range and no navigation.
    fn empty_result_set() {
        let view = compute_view(0, 15, 1);
        assert_eq!(view.page_count, 0);
        assert_eq!(view.range, None);
        assert!(!view.has_previous);
        assert!(!view.has_next);
    }

    #[test]
    /// What: The last, partially filled page is bounded by the total.
    ///
    /// Inputs:
    /// - 37 results, 15 per page, page 3.
    ///
    /// Output:
    /// - 3 pages, range 31-37, previous only.
    fn last_partial_page() {
        let view = compute_view(37, 15, 3);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.range, Some(DisplayRange { first: 31, last: 37 }));
        assert!(view.has_previous);
        assert!(!view.has_next);
    }

    #[test]
    /// What: The first page shows a full page and offers next only.
    fn first_full_page() {
        let view = compute_view(37, 15, 1);
        assert_eq!(view.range, Some(DisplayRange { first: 1, last: 15 }));
        assert!(!view.has_previous);
        assert!(view.has_next);
    }

    #[test]
    /// What: An exact multiple of the page size does not add a phantom page.
    fn exact_multiple() {
        let view = compute_view(30, 15, 2);
        assert_eq!(view.page_count, 2);
        assert_eq!(view.range, Some(DisplayRange { first: 16, last: 30 }));
        assert!(!view.has_next);
    }

    #[test]
    /// What: Requests outside the page range clamp instead of failing.
    fn clamp_out_of_range() {
        assert_eq!(clamp_page(99, 3), 3);
        assert_eq!(clamp_page(-5, 3), 1);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
