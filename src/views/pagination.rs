/// One slot of the page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

/// Page numbers to show for `current` out of `total`.
///
/// First and last page are always shown, plus one neighbor on each side of
/// `current`; gaps collapse into a single ellipsis. Nothing is shown when
/// there is at most one page.
pub fn page_tokens(current: usize, total: usize) -> Vec<PageToken> {
    if total <= 1 {
        return Vec::new();
    }

    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total - 1);

    let mut tokens = vec![PageToken::Page(1)];
    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend((start..=end).map(PageToken::Page));
    if end < total - 1 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.push(PageToken::Page(total));
    tokens
}

/// Previous page, or `None` on the first page.
pub fn prev_page(current: usize) -> Option<usize> {
    (current > 1).then(|| current - 1)
}

/// Next page, or `None` on the last page.
pub fn next_page(current: usize, total: usize) -> Option<usize> {
    (current < total).then(|| current + 1)
}

#[cfg(test)]
mod tests {
    use super::PageToken::{Ellipsis, Page};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_middle_page_has_both_ellipses() {
        assert_eq!(
            page_tokens(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_small_totals_have_no_ellipsis() {
        assert_eq!(page_tokens(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_tokens(2, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn test_single_or_no_page_is_empty() {
        assert!(page_tokens(1, 1).is_empty());
        assert!(page_tokens(1, 0).is_empty());
        assert!(page_tokens(7, 1).is_empty());
    }

    #[test]
    fn test_edges() {
        assert_eq!(page_tokens(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(page_tokens(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
        assert_eq!(
            page_tokens(3, 4),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
    }

    #[test]
    fn test_prev_next_clamp() {
        assert_eq!(prev_page(1), None);
        assert_eq!(prev_page(3), Some(2));
        assert_eq!(next_page(4, 4), None);
        assert_eq!(next_page(2, 4), Some(3));
    }
}
