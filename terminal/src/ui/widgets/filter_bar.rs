//! # Filter Bar
//!
//! Name filter input with apply/clear buttons, shared by all explorer
//! screens. The widget edits the live input text in place and reports the
//! committed action; the caller decides what fetch that triggers.

use crate::ui::theme::Theme;
use egui;

/// What the user did with the filter bar this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    /// Commit the current input text as the active filter.
    Apply,
    /// Drop the filter entirely.
    Clear,
}

/// Render the filter bar, mutating `input` in place.
///
/// Returns the action to perform, if any. Pressing Enter in the text box
/// counts as Apply.
pub fn render_filter_bar(
    ui: &mut egui::Ui,
    input: &mut String,
    filter_active: bool,
    theme: &Theme,
) -> Option<FilterAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, "Name:");

        let response = ui.add(
            egui::TextEdit::singleline(input)
                .hint_text("filter by name")
                .desired_width(220.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = Some(FilterAction::Apply);
        }

        if ui.button("Search").clicked() {
            action = Some(FilterAction::Apply);
        }

        // Clear only makes sense when something is typed or committed
        if (filter_active || !input.is_empty()) && ui.button("Clear").clicked() {
            action = Some(FilterAction::Clear);
        }

        if filter_active {
            ui.colored_label(theme.selected, "filtered");
        }
    });

    action
}
