//! # Pagination Controls
//!
//! Prev/next buttons with a page indicator. Hidden entirely when the result
//! set fits on one page; a single page of controls is just noise.

use crate::ui::theme::Theme;
use egui;

/// Render pagination controls.
///
/// `current` and the returned target are one-based page indices. Returns
/// `Some(page)` when the user asked to move.
pub fn render_pagination(
    ui: &mut egui::Ui,
    current: u64,
    total_pages: u64,
    theme: &Theme,
) -> Option<u64> {
    if total_pages <= 1 {
        return None;
    }

    let mut target = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(current > 1, egui::Button::new("< Prev"))
            .clicked()
        {
            target = Some(current - 1);
        }

        ui.colored_label(theme.normal, format!("Page {} of {}", current, total_pages));

        if ui
            .add_enabled(current < total_pages, egui::Button::new("Next >"))
            .clicked()
        {
            target = Some(current + 1);
        }

        // Quick jump to the edges for long result sets
        if total_pages > 3 {
            ui.separator();
            if ui.add_enabled(current > 1, egui::Button::new("First")).clicked() {
                target = Some(1);
            }
            if ui
                .add_enabled(current < total_pages, egui::Button::new("Last"))
                .clicked()
            {
                target = Some(total_pages);
            }
        }
    });

    target
}
