//! # GUI Rendering Framework
//!
//! This module orchestrates the complete UI rendering pipeline using egui
//! widgets: theme application, the top navigation bar, the per-screen body,
//! and the bottom status bar.

pub mod charts;
pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Screen};
use crate::ui::theme::Theme;
use egui;

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Snapshot state for rendering; skip the frame if a task holds the lock
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => return,
        }
    }; // Lock released here - rendering happens without holding it

    let theme = Theme::default();

    // Tab / Shift+Tab cycle through screens
    if ctx.input(|i| i.key_pressed(egui::Key::Tab) && !i.modifiers.shift) {
        app.next_screen();
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Tab) && i.modifiers.shift) {
        app.previous_screen();
    }

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        render_nav_bar(ui, state.current_screen, app, &theme);
    });

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        widgets::status::render_status_bar(ui, &state, &theme);
    });

    egui::CentralPanel::default().show(ctx, |ui| match state.current_screen {
        Screen::Dashboard => screens::dashboard::render(ui, &state, app),
        Screen::Weapons => screens::weapons::render(ui, &state, app),
        Screen::Armors => screens::armors::render(ui, &state, app),
        Screen::Bosses => screens::bosses::render(ui, &state, app),
        Screen::Classes => screens::classes::render(ui, &state, app),
    });
}

/// Top navigation: one selectable label per screen.
fn render_nav_bar(ui: &mut egui::Ui, current: Screen, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.selected, "ERDTREE TERMINAL");
        ui.separator();

        for screen in Screen::all() {
            let selected = *screen == current;
            if ui.selectable_label(selected, screen.title()).clicked() && !selected {
                app.handle_screen_change(*screen);
            }
        }
    });
}
