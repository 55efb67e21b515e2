//! Index arithmetic for cyclic paging.
//!
//! All functions are pure. Callers must check for an empty item list before
//! wrapping; the helpers here return empty windows rather than dividing by
//! zero.

/// Number of pages needed to show every item at least once. Never zero.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 1;
    }
    total_items.div_ceil(items_per_page).max(1)
}

/// Wrap a possibly negative index into `[0, len)`.
///
/// `len` must be non-zero.
#[inline]
pub fn wrap(raw: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrap called with an empty range");
    raw.rem_euclid(len as isize) as usize
}

/// Normalize a logical page index into `[0, total_pages)`.
#[inline]
pub fn normalize_page(index: isize, total_pages: usize) -> isize {
    if total_pages == 0 {
        return 0;
    }
    wrap(index, total_pages) as isize
}

/// Item indices shown on page `page_index`, wrapping past the end of the
/// list so the last page is always full.
///
/// When every item fits on one page each item appears exactly once.
pub fn visible_window(
    page_index: isize,
    items_per_page: usize,
    total_items: usize,
) -> Vec<usize> {
    if total_items == 0 || items_per_page == 0 {
        return Vec::new();
    }
    if total_items <= items_per_page {
        return (0..total_items).collect();
    }

    let base = page_index.saturating_mul(items_per_page as isize);
    (0..items_per_page)
        .map(|offset| wrap(base.saturating_add(offset as isize), total_items))
        .collect()
}
