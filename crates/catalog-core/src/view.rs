//! # View State
//!
//! Search box contents, effective (debounced) query, current page and view
//! mode, plus the pagination button rules.

use crate::query::clamp_page;
use crate::types::ViewMode;

// =============================================================================
// Pagination Buttons
// =============================================================================

/// Pagination buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
}

// =============================================================================
// View State
// =============================================================================

/// Transient presentation state. Rebuilt from defaults on every start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Raw text in the search box.
    pub search_query: String,
    /// The query the pipeline actually filters by.
    pub debounced_query: String,
    /// 1-based page number.
    pub current_page: usize,
    pub view_mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(ViewMode::default())
    }
}

impl ViewState {
    pub fn new(view_mode: ViewMode) -> Self {
        ViewState {
            search_query: String::new(),
            debounced_query: String::new(),
            current_page: 1,
            view_mode,
        }
    }

    /// Replaces the search box text. Always jumps back to page 1.
    pub fn set_search_query(&mut self, raw: impl Into<String>) {
        self.search_query = raw.into();
        self.current_page = 1;
    }

    /// Commits the search box text as the effective query (trimmed).
    ///
    /// Returns `true` if the effective query changed.
    pub fn commit_query(&mut self) -> bool {
        let committed = crate::query::normalize_query(&self.search_query);
        if committed == self.debounced_query {
            return false;
        }

        self.debounced_query = committed;
        true
    }

    /// Pulls `current_page` back into `[1, total_pages]`.
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.current_page = clamp_page(self.current_page, total_pages);
    }

    /// Applies a pagination button. Disabled buttons do nothing.
    ///
    /// Returns `true` if the page changed.
    pub fn navigate(&mut self, nav: PageNav, total_pages: usize) -> bool {
        match PageControls::new(self.current_page, total_pages).target(nav) {
            Some(page) => {
                self.current_page = page;
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Page Controls
// =============================================================================

/// Enabled/disabled state of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub page: usize,
    pub total_pages: usize,
}

impl PageControls {
    pub fn new(page: usize, total_pages: usize) -> Self {
        PageControls {
            page,
            total_pages: total_pages.max(1),
        }
    }

    /// First/Prev are disabled on page 1.
    pub fn can_go_back(&self) -> bool {
        self.page > 1
    }

    /// Next/Last are disabled on the last page.
    pub fn can_go_forward(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_enabled(&self, nav: PageNav) -> bool {
        match nav {
            PageNav::First | PageNav::Prev => self.can_go_back(),
            PageNav::Next | PageNav::Last => self.can_go_forward(),
        }
    }

    /// Page a button leads to, or `None` when it is disabled.
    pub fn target(&self, nav: PageNav) -> Option<usize> {
        if !self.is_enabled(nav) {
            return None;
        }

        Some(match nav {
            PageNav::First => 1,
            PageNav::Prev => self.page - 1,
            PageNav::Next => self.page + 1,
            PageNav::Last => self.total_pages,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_change_resets_page() {
        let mut view = ViewState::default();
        view.current_page = 3;

        view.set_search_query("lamp");
        assert_eq!(view.current_page, 1);

        // Same text again still resets
        view.current_page = 2;
        view.set_search_query("lamp");
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn test_commit_query_trims_and_reports_change() {
        let mut view = ViewState::default();
        view.set_search_query("  pen ");

        assert!(view.commit_query());
        assert_eq!(view.debounced_query, "pen");
        assert!(!view.commit_query());
    }

    #[test]
    fn test_typing_does_not_commit() {
        let mut view = ViewState::default();
        view.set_search_query("pe");
        assert_eq!(view.debounced_query, "");
    }

    #[test]
    fn test_boundary_buttons_disabled() {
        let controls = PageControls::new(1, 2);
        assert!(!controls.is_enabled(PageNav::First));
        assert!(!controls.is_enabled(PageNav::Prev));
        assert_eq!(controls.target(PageNav::Next), Some(2));
        assert_eq!(controls.target(PageNav::Last), Some(2));

        let controls = PageControls::new(2, 2);
        assert_eq!(controls.target(PageNav::Prev), Some(1));
        assert_eq!(controls.target(PageNav::Next), None);
        assert_eq!(controls.target(PageNav::Last), None);
    }

    #[test]
    fn test_single_page_disables_everything() {
        let controls = PageControls::new(1, 1);
        for nav in [PageNav::First, PageNav::Prev, PageNav::Next, PageNav::Last] {
            assert!(!controls.is_enabled(nav));
        }
    }

    #[test]
    fn test_navigate() {
        let mut view = ViewState::default();
        assert!(view.navigate(PageNav::Last, 4));
        assert_eq!(view.current_page, 4);
        assert!(!view.navigate(PageNav::Next, 4));
        assert!(view.navigate(PageNav::Prev, 4));
        assert_eq!(view.current_page, 3);
        assert!(view.navigate(PageNav::First, 4));
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn test_clamp_page_after_shrink() {
        let mut view = ViewState::default();
        view.current_page = 3;
        view.clamp_page(2);
        assert_eq!(view.current_page, 2);
    }
}
