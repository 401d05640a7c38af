//! Pure pagination math and page-window shaping helpers.

/// Compute the number of pages for a paginated list.
///
/// Never less than 1, even for an empty list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1)).max(1)
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Return start/end indices for a page window.
///
/// A page past the end of the list yields an empty window rather than
/// an error.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = (start + safe_per_page).min(total_items);
    (start.min(total_items), end)
}

/// Slice out the records for one page, along with the total page count.
pub fn page_slice<T>(records: &[T], per_page: usize, page: usize) -> (&[T], usize) {
    let total = total_pages(records.len(), per_page);
    let (start, end) = page_window(records.len(), per_page, page);
    (&records[start..end], total)
}
