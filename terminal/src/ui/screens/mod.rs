//! # Screens
//!
//! One module per screen, plus the shared explorer scaffold that gives the
//! four list screens identical filter / pagination / error chrome.

pub mod armors;
pub mod bosses;
pub mod classes;
pub mod dashboard;
pub mod weapons;

use crate::app::{App, ExplorerState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::filter_bar::{render_filter_bar, FilterAction};
use crate::ui::widgets::pagination::render_pagination;
use crate::ui::widgets::tables::render_empty_state;
use shared::Page;

/// Shared scaffold for the four explorer screens: header with refresh,
/// filter bar, error banner, body, pagination.
///
/// `explorer` is a snapshot clone; all mutations go through `app` so the
/// state lock is never held while widgets lay out.
pub(crate) fn render_explorer<T, F>(
    ui: &mut egui::Ui,
    app: &mut App,
    screen: Screen,
    explorer: &ExplorerState<T>,
    theme: &Theme,
    empty_message: &str,
    render_items: F,
) where
    F: FnOnce(&mut egui::Ui, &Page<T>, &Theme),
{
    // Header
    ui.horizontal(|ui| {
        ui.heading(screen.title());
        if explorer.slot.loading {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                app.handle_refresh(screen);
            }
        });
    });
    ui.add_space(4.0);

    // Filter bar edits a local copy of the input; write it back only when
    // it actually changed so we skip the lock on idle frames.
    let mut input = explorer.filter_input.clone();
    let action = render_filter_bar(ui, &mut input, !explorer.filter.is_empty(), theme);
    if input != explorer.filter_input {
        set_filter_input(app, screen, input);
    }
    match action {
        Some(FilterAction::Apply) => app.handle_filter_apply(screen),
        Some(FilterAction::Clear) => app.handle_filter_clear(screen),
        None => {}
    }

    // A failed refresh keeps the previous page on screen under this banner.
    if let Some(error) = &explorer.slot.error {
        ui.colored_label(theme.error, format!("Request failed: {}", error));
    }

    ui.add_space(6.0);
    ui.separator();

    match &explorer.slot.data {
        Some(page) if page.items.is_empty() => {
            let secondary = if explorer.filter.is_empty() {
                None
            } else {
                Some("Try clearing the name filter")
            };
            render_empty_state(ui, empty_message, secondary, theme);
        }
        Some(page) => {
            render_items(ui, page, theme);

            ui.add_space(6.0);
            if let Some(target) =
                render_pagination(ui, explorer.page.current_page(), explorer.total_pages(), theme)
            {
                app.handle_page_select(screen, target);
            }
        }
        None if explorer.slot.loading => {
            render_empty_state(ui, "Loading...", None, theme);
        }
        None => {
            render_empty_state(ui, empty_message, None, theme);
        }
    }
}

fn set_filter_input(app: &App, screen: Screen, input: String) {
    let mut state = app.state.write();
    match screen {
        Screen::Weapons => state.weapons.filter_input = input,
        Screen::Armors => state.armors.filter_input = input,
        Screen::Bosses => state.bosses.filter_input = input,
        Screen::Classes => state.classes.filter_input = input,
        Screen::Dashboard => {}
    }
}
