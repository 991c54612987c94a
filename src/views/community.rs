use std::collections::HashMap;

use crate::domain::Reaction;

use super::comments::{total_pages, DEFAULT_PER_PAGE};
use super::pagination::{next_page, prev_page};
use super::selection::ReactionPicker;

/// Community article screen: reactions and the comment pager.
#[derive(Debug)]
pub struct CommunityView {
    pub article_reaction: ReactionPicker,
    pub comment_reactions: HashMap<u32, ReactionPicker>,
    /// 1-based comment page.
    pub page: usize,
    pub per_page: usize,
    /// Comment cursor within the visible page.
    pub cursor: usize,
    pub show_author: bool,
    /// Article scroll offset in lines.
    pub scroll: u16,
}

impl Default for CommunityView {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PER_PAGE)
    }
}

impl CommunityView {
    pub fn with_page_size(per_page: usize) -> Self {
        Self {
            article_reaction: ReactionPicker::default(),
            comment_reactions: HashMap::new(),
            page: 1,
            per_page: per_page.max(1),
            cursor: 0,
            show_author: false,
            scroll: 0,
        }
    }

    pub fn react_to_comment(&mut self, comment_id: u32, reaction: Reaction) -> Option<Reaction> {
        self.comment_reactions
            .entry(comment_id)
            .or_default()
            .pick(reaction)
    }

    pub fn comment_reaction(&self, comment_id: u32) -> Option<Reaction> {
        self.comment_reactions
            .get(&comment_id)
            .and_then(ReactionPicker::active)
    }

    /// Move to the previous page. Returns false on the first page.
    pub fn prev_page(&mut self) -> bool {
        match prev_page(self.page) {
            Some(page) => {
                self.page = page;
                self.cursor = 0;
                true
            }
            None => false,
        }
    }

    pub fn next_page(&mut self, comment_count: usize) -> bool {
        match next_page(self.page, total_pages(comment_count, self.per_page)) {
            Some(page) => {
                self.page = page;
                self.cursor = 0;
                true
            }
            None => false,
        }
    }

    /// Jump to `page` if it exists.
    pub fn go_to(&mut self, page: usize, comment_count: usize) -> bool {
        if (1..=total_pages(comment_count, self.per_page)).contains(&page) {
            self.page = page;
            self.cursor = 0;
            true
        } else {
            false
        }
    }

    pub fn reset_transient(&mut self) {
        *self = Self::with_page_size(self.per_page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_stops_at_ends() {
        let mut view = CommunityView::default();
        assert!(!view.prev_page());
        assert!(view.next_page(10));
        assert!(view.next_page(10));
        assert!(view.next_page(10));
        assert_eq!(view.page, 4);
        assert!(!view.next_page(10));
    }

    #[test]
    fn test_go_to_rejects_missing_pages() {
        let mut view = CommunityView::default();
        assert!(view.go_to(3, 10));
        assert!(!view.go_to(5, 10));
        assert!(!view.go_to(0, 10));
        assert_eq!(view.page, 3);
    }

    #[test]
    fn test_each_comment_has_its_own_picker() {
        let mut view = CommunityView::default();
        view.react_to_comment(1, Reaction::Love);
        view.react_to_comment(2, Reaction::Smile);
        view.react_to_comment(1, Reaction::Love);

        assert_eq!(view.comment_reaction(1), None);
        assert_eq!(view.comment_reaction(2), Some(Reaction::Smile));
        assert_eq!(view.article_reaction.active(), None);
    }

    #[test]
    fn test_reset_keeps_page_size() {
        let mut view = CommunityView::with_page_size(5);
        view.next_page(20);
        view.show_author = true;
        view.reset_transient();
        assert_eq!(view.page, 1);
        assert_eq!(view.per_page, 5);
        assert!(!view.show_author);
    }
}
