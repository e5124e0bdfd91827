//! Fixed-size page slicing

/// Items of 1-based `page` when split into pages of `page_size`.
///
/// Pages past the end are empty, not an error. The last page may be shorter
/// than `page_size`. `page` and `page_size` below 1 are treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page_size = page_size.max(1);
    let start = (page.max(1) - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }

    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}

/// Number of pages needed for `total_items`; zero items means zero pages
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Page numbers `1..=total_pages`
pub fn page_numbers(total_pages: usize) -> Vec<usize> {
    (1..=total_pages).collect()
}
