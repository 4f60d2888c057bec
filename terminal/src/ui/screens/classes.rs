//! # Classes Screen
//!
//! Starting class explorer rendered as a stat table: one row per class,
//! one column per attribute. A table beats cards here because comparing
//! builds is a cross-row read.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::tables::{render_table, TableConfig};
use shared::ClassDef;

const STAT_HEADERS: [&str; 11] = [
    "Class", "Lvl", "Vig", "Mnd", "End", "Str", "Dex", "Int", "Fai", "Arc", "Total",
];

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    super::render_explorer(
        ui,
        app,
        Screen::Classes,
        &state.classes,
        &theme,
        "No classes found",
        |ui, page, theme| {
            render_table(
                ui,
                "classes_table",
                TableConfig {
                    num_columns: STAT_HEADERS.len(),
                    scrollable: true,
                    ..Default::default()
                },
                &STAT_HEADERS,
                theme,
                |ui| {
                    for class in &page.items {
                        render_class_row(ui, class, theme);
                        ui.end_row();
                    }
                },
            );
        },
    );
}

fn render_class_row(ui: &mut egui::Ui, class: &ClassDef, theme: &Theme) {
    ui.colored_label(theme.normal, &class.name);

    let stats = class.stats.as_ref();
    let cell = |value: Option<u32>| match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    };

    ui.label(cell(stats.and_then(|s| s.level)));
    ui.label(cell(stats.and_then(|s| s.vigor)));
    ui.label(cell(stats.and_then(|s| s.mind)));
    ui.label(cell(stats.and_then(|s| s.endurance)));
    ui.label(cell(stats.and_then(|s| s.strength)));
    ui.label(cell(stats.and_then(|s| s.dexterity)));
    ui.label(cell(stats.and_then(|s| s.intelligence)));
    ui.label(cell(stats.and_then(|s| s.faith)));
    ui.label(cell(stats.and_then(|s| s.arcane)));

    match stats {
        Some(s) => ui.colored_label(theme.selected, s.total().to_string()),
        None => ui.colored_label(theme.dim, "-"),
    };
}
