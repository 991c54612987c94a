/// Comments shown per page unless configured otherwise.
pub const DEFAULT_PER_PAGE: usize = 3;

/// Number of pages needed for `len` items, `per_page` at a time.
///
/// A `per_page` of zero is treated as one.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1))
}

/// Items on 1-based `page`. Pages outside `1..=total_pages` are empty.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}
