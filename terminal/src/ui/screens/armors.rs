//! # Armors Screen
//!
//! Armor explorer: card grid with category and weight.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::cards::{card_field, render_card_grid};
use shared::Armor;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    super::render_explorer(
        ui,
        app,
        Screen::Armors,
        &state.armors,
        &theme,
        "No armor found",
        |ui, page, theme| {
            render_card_grid(ui, "armors_grid", &page.items, 3, |ui, armor| {
                render_armor_card(ui, armor, theme);
            });
        },
    );
}

fn render_armor_card(ui: &mut egui::Ui, armor: &Armor, theme: &Theme) {
    ui.vertical(|ui| {
        ui.colored_label(theme.selected, &armor.name);

        if let Some(category) = &armor.category {
            ui.colored_label(theme.dim, category);
        }

        if let Some(weight) = armor.weight {
            card_field(ui, theme, "Weight:", &format!("{:.1}", weight));
        }

        if let Some(description) = &armor.description {
            ui.add(egui::Label::new(egui::RichText::new(description).small()).truncate());
        }
    });
}
