//! # Bosses Screen
//!
//! Boss explorer: card grid with tier badge, region, health, and drops.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::cards::{card_field, render_card_grid};
use shared::Boss;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    super::render_explorer(
        ui,
        app,
        Screen::Bosses,
        &state.bosses,
        &theme,
        "No bosses found",
        |ui, page, theme| {
            render_card_grid(ui, "bosses_grid", &page.items, 2, |ui, boss| {
                render_boss_card(ui, boss, theme);
            });
        },
    );
}

fn render_boss_card(ui: &mut egui::Ui, boss: &Boss, theme: &Theme) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.colored_label(theme.selected, &boss.name);
            let tier = boss.tier_label();
            ui.colored_label(theme.tier_color(tier), tier);
        });

        if let Some(region) = &boss.region {
            card_field(ui, theme, "Region:", region);
        }
        if let Some(location) = &boss.location {
            card_field(ui, theme, "Location:", location);
        }
        if let Some(hp) = &boss.health_points {
            card_field(ui, theme, "HP:", hp);
        }

        // Badges only for genuine boolean flags; anything else stays hidden
        ui.horizontal(|ui| {
            if boss.grants_great_rune() {
                ui.colored_label(theme.selected, "Great Rune");
            }
            if boss.grants_remembrance() {
                ui.colored_label(theme.info, "Remembrance");
            }
        });

        if let Some(drops) = &boss.drops {
            if !drops.is_empty() {
                ui.colored_label(theme.dim, format!("Drops: {}", drops.join(", ")));
            }
        }
    });
}
