//! # Weapons Screen
//!
//! Weapon explorer: card grid with attack totals, requirements, and scaling.
//! A build picker swaps the paginated list for per-archetype recommendations.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::cards::{card_field, render_card_grid};
use crate::ui::widgets::tables::render_empty_state;
use shared::{BuildType, Weapon};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    render_build_picker(ui, state, app, &theme);

    if let Some(categories) = &state.weapon_categories.data {
        if !categories.is_empty() {
            ui.colored_label(
                theme.dim,
                format!("Categories: {}", categories.join(", ")),
            );
        }
    }
    ui.add_space(4.0);

    if state.weapon_build_filter.is_some() {
        render_build_results(ui, state, app, &theme);
        return;
    }

    super::render_explorer(
        ui,
        app,
        Screen::Weapons,
        &state.weapons,
        &theme,
        "No weapons found",
        |ui, page, theme| {
            render_card_grid(ui, "weapons_grid", &page.items, 3, |ui, weapon| {
                render_weapon_card(ui, weapon, theme);
            });
        },
    );
}

/// Build archetype chips. "All" returns to the plain paginated list;
/// clicking the active build deselects it.
fn render_build_picker(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal_wrapped(|ui| {
        ui.colored_label(theme.dim, "Build:");

        let none_active = state.weapon_build_filter.is_none();
        if ui.selectable_label(none_active, "All").clicked() && !none_active {
            app.handle_build_select(None);
        }

        for build in BuildType::all() {
            let active = state.weapon_build_filter == Some(*build);
            if ui.selectable_label(active, build.label()).clicked() {
                app.handle_build_select(if active { None } else { Some(*build) });
            }
        }
    });
}

fn render_build_results(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(build) = state.weapon_build_filter else {
        return;
    };

    ui.horizontal(|ui| {
        ui.heading(format!("{} build weapons", build.label()));
        if state.weapon_build.loading {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                app.handle_refresh(Screen::Weapons);
            }
        });
    });

    if let Some(error) = &state.weapon_build.error {
        ui.colored_label(theme.error, format!("Request failed: {}", error));
    }

    ui.add_space(6.0);
    ui.separator();

    match &state.weapon_build.data {
        Some(weapons) if weapons.is_empty() => {
            render_empty_state(ui, "No weapons recommended for this build", None, theme);
        }
        Some(weapons) => {
            render_card_grid(ui, "weapons_build_grid", weapons, 3, |ui, weapon| {
                render_weapon_card(ui, weapon, theme);
            });
        }
        None => {
            render_empty_state(ui, "Loading...", None, theme);
        }
    }
}

fn render_weapon_card(ui: &mut egui::Ui, weapon: &Weapon, theme: &Theme) {
    ui.vertical(|ui| {
        ui.colored_label(theme.selected, &weapon.name);

        if let Some(category) = &weapon.category {
            ui.colored_label(theme.dim, category);
        }

        if let Some(weight) = weapon.weight {
            card_field(ui, theme, "Weight:", &format!("{:.1}", weight));
        }

        let total = weapon.total_attack();
        if total > 0 {
            card_field(ui, theme, "Attack:", &total.to_string());
        }

        if let Some(req) = &weapon.required_attributes {
            let req_total = req.total();
            if req_total > 0 {
                card_field(ui, theme, "Req total:", &req_total.to_string());
            }
        }

        if let Some(scaling) = &weapon.scales_with {
            let grades: Vec<String> = [
                ("STR", &scaling.strength),
                ("DEX", &scaling.dexterity),
                ("INT", &scaling.intelligence),
                ("FAI", &scaling.faith),
                ("ARC", &scaling.arcane),
            ]
            .iter()
            .filter_map(|(stat, grade)| {
                grade.as_ref().map(|g| format!("{} {}", stat, g))
            })
            .collect();
            if !grades.is_empty() {
                ui.colored_label(theme.dim, grades.join("  "));
            }
        }
    });
}
