//! # Status Bar
//!
//! Bottom status bar: backend health dot, current screen, loaded record
//! counts, and a wall clock.

use crate::app::{AppState, Screen};
use crate::ui::theme::Theme;
use egui;

/// Render the status bar at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.horizontal(|ui| {
        // Backend health indicator
        match state.backend_healthy {
            Some(true) => {
                ui.colored_label(theme.success, "\u{25CF}");
                ui.colored_label(theme.success, "API healthy");
            }
            Some(false) => {
                ui.colored_label(theme.error, "\u{25CF}");
                ui.colored_label(theme.error, "API unreachable");
            }
            None => {
                ui.colored_label(theme.dim, "\u{25CF}");
                ui.colored_label(theme.dim, "API status unknown");
            }
        }

        ui.separator();
        ui.colored_label(theme.dim, state.current_screen.title());

        // Record count for the active explorer, total from the envelope
        if let Some(total) = current_total(state) {
            ui.separator();
            ui.colored_label(theme.dim, format!("{} records", total));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let now = chrono::Local::now();
            ui.colored_label(theme.dim, now.format("%H:%M:%S").to_string());
            ui.separator();
            ui.colored_label(theme.dim, "Tab: Navigate | Enter: Search");
        });
    });
}

fn current_total(state: &AppState) -> Option<u64> {
    match state.current_screen {
        Screen::Dashboard => None,
        Screen::Weapons => state.weapons.slot.data.as_ref().map(|p| p.total),
        Screen::Armors => state.armors.slot.data.as_ref().map(|p| p.total),
        Screen::Bosses => state.bosses.slot.data.as_ref().map(|p| p.total),
        Screen::Classes => state.classes.slot.data.as_ref().map(|p| p.total),
    }
}
