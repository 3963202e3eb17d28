//! # View Commands
//!
//! Search box, view-mode buttons and pagination.

use catalog_core::{PageNav, ViewMode};
use tracing::debug;

use super::Outcome;
use crate::state::CatalogState;

/// Types into the search box.
///
/// The page resets to 1 right away; the filter itself waits for the
/// debounce window, so nothing is redrawn yet.
pub fn search(state: &mut CatalogState, text: String) -> Outcome {
    state.type_search(text);
    Outcome::debounce()
}

/// Switches between list and card view.
pub fn set_view_mode(state: &mut CatalogState, mode: ViewMode) -> Outcome {
    debug!(%mode, "View mode changed");
    state.set_view_mode(mode);
    Outcome::redraw()
}

/// Pagination buttons. Disabled buttons leave the screen as it is.
pub fn navigate(state: &mut CatalogState, nav: PageNav) -> Outcome {
    if state.navigate(nav) {
        return Outcome::redraw();
    }

    match nav {
        PageNav::First | PageNav::Prev => Outcome::message("Already on the first page"),
        PageNav::Next | PageNav::Last => Outcome::message("Already on the last page"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;
    use catalog_core::ProductStore;

    fn seeded() -> CatalogState {
        CatalogState::new(ProductStore::seeded().unwrap(), &ConfigState::default())
    }

    #[test]
    fn test_search_schedules_debounce() {
        let mut state = seeded();
        navigate(&mut state, PageNav::Last);

        let outcome = search(&mut state, "mug".into());
        assert!(outcome.debounce);
        assert!(!outcome.redraw);
        assert_eq!(state.view().current_page, 1);
        assert!(state.search_pending());
    }

    #[test]
    fn test_disabled_navigation() {
        let mut state = seeded();
        let outcome = navigate(&mut state, PageNav::Prev);
        assert!(!outcome.redraw);
        assert_eq!(outcome.message.as_deref(), Some("Already on the first page"));

        assert!(navigate(&mut state, PageNav::Next).redraw);
        let outcome = navigate(&mut state, PageNav::Last);
        assert_eq!(outcome.message.as_deref(), Some("Already on the last page"));
    }

    #[test]
    fn test_view_mode() {
        let mut state = seeded();
        assert!(set_view_mode(&mut state, ViewMode::Card).redraw);
        assert_eq!(state.view().view_mode, ViewMode::Card);
    }
}
