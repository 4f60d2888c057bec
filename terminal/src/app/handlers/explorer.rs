//! # Explorer Handlers
//!
//! Filter and pagination mutations for the list explorer screens. Each
//! handler returns `true` when the request parameters changed and a fresh
//! fetch is warranted.

use crate::app::state::{AppState, ExplorerState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Commit the typed filter text on the given explorer screen.
///
/// Internal handler function - use [`crate::app::App::handle_filter_apply`] instead.
pub(crate) fn handle_filter_apply(state: Arc<RwLock<AppState>>, screen: Screen) -> bool {
    let mut state = state.write();
    match screen {
        Screen::Weapons => apply(&mut state.weapons),
        Screen::Armors => apply(&mut state.armors),
        Screen::Bosses => apply(&mut state.bosses),
        Screen::Classes => apply(&mut state.classes),
        Screen::Dashboard => false,
    }
}

/// Clear the filter on the given explorer screen.
///
/// Internal handler function - use [`crate::app::App::handle_filter_clear`] instead.
pub(crate) fn handle_filter_clear(state: Arc<RwLock<AppState>>, screen: Screen) -> bool {
    let mut state = state.write();
    match screen {
        Screen::Weapons => clear(&mut state.weapons),
        Screen::Armors => clear(&mut state.armors),
        Screen::Bosses => clear(&mut state.bosses),
        Screen::Classes => clear(&mut state.classes),
        Screen::Dashboard => false,
    }
}

/// Jump to a one-based page on the given explorer screen.
///
/// Internal handler function - use [`crate::app::App::handle_page_select`] instead.
pub(crate) fn handle_page_select(state: Arc<RwLock<AppState>>, screen: Screen, page: u64) -> bool {
    let mut state = state.write();
    match screen {
        Screen::Weapons => goto(&mut state.weapons, page),
        Screen::Armors => goto(&mut state.armors, page),
        Screen::Bosses => goto(&mut state.bosses, page),
        Screen::Classes => goto(&mut state.classes, page),
        Screen::Dashboard => false,
    }
}

fn apply<T>(explorer: &mut ExplorerState<T>) -> bool {
    explorer.apply_filter();
    // Re-submitting an unchanged filter is still a refresh request.
    true
}

fn clear<T>(explorer: &mut ExplorerState<T>) -> bool {
    let had_filter = !explorer.filter.is_empty() || !explorer.filter_input.is_empty();
    explorer.clear_filter();
    had_filter
}

fn goto<T>(explorer: &mut ExplorerState<T>, page: u64) -> bool {
    let total = explorer.total_pages();
    let clamped = if total == 0 {
        1
    } else {
        page.clamp(1, total)
    };
    if clamped == explorer.page.current_page() {
        return false;
    }
    explorer.page.goto_page(clamped);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{NameFilter, Page, Weapon};

    fn loaded_explorer(total: u64) -> ExplorerState<Weapon> {
        let mut explorer = ExplorerState::default();
        let seq = explorer.slot.begin();
        explorer.slot.resolve(
            seq,
            Ok(Page {
                items: Vec::new(),
                total,
                skip: 0,
                limit: explorer.page.limit,
            }),
        );
        explorer
    }

    #[test]
    fn goto_clamps_to_valid_page_range() {
        let mut explorer = loaded_explorer(45); // 3 pages at limit 20

        assert!(goto(&mut explorer, 99));
        assert_eq!(explorer.page.current_page(), 3);

        assert!(goto(&mut explorer, 0));
        assert_eq!(explorer.page.current_page(), 1);
    }

    #[test]
    fn goto_same_page_requests_no_fetch() {
        let mut explorer = loaded_explorer(45);
        assert!(!goto(&mut explorer, 1));
    }

    #[test]
    fn clear_is_a_noop_without_a_filter() {
        let mut explorer = ExplorerState::<Weapon>::default();
        assert!(!clear(&mut explorer));

        explorer.filter = NameFilter::named("Margit");
        assert!(clear(&mut explorer));
        assert!(explorer.filter.is_empty());
    }
}
