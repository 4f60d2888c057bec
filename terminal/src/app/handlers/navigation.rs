//! # Navigation Handlers
//!
//! Handlers for screen navigation.

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle screen change
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    if state.current_screen != screen {
        tracing::debug!(screen = screen.title(), "Screen change");
        state.current_screen = screen;
    }
}

/// Navigate to next screen in Tab order
///
/// Internal handler function - use [`crate::app::App::next_screen`] instead.
pub(crate) fn next_screen(state: Arc<RwLock<AppState>>) {
    let mut state = match state.try_write() {
        Some(guard) => guard,
        None => {
            tracing::warn!("Skipped screen navigation - state locked");
            return;
        }
    };

    let screens = Screen::all();
    let current_idx = screens
        .iter()
        .position(|&s| s == state.current_screen)
        .unwrap_or(0);
    state.current_screen = screens[(current_idx + 1) % screens.len()];
}

/// Navigate to previous screen in Tab order
///
/// Internal handler function - use [`crate::app::App::previous_screen`] instead.
pub(crate) fn previous_screen(state: Arc<RwLock<AppState>>) {
    let mut state = match state.try_write() {
        Some(guard) => guard,
        None => {
            tracing::warn!("Skipped screen navigation - state locked");
            return;
        }
    };

    let screens = Screen::all();
    let current_idx = screens
        .iter()
        .position(|&s| s == state.current_screen)
        .unwrap_or(0);
    let prev_idx = if current_idx == 0 {
        screens.len() - 1
    } else {
        current_idx - 1
    };
    state.current_screen = screens[prev_idx];
}
