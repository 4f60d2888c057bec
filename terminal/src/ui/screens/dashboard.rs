//! # Dashboard Screen
//!
//! Summary view: catalogue totals, weapon category distribution, boss tier
//! distribution, weapon averages, top damage ranking, and the great-rune /
//! remembrance boss lists.

use crate::app::{App, AppState, DashboardData, Screen};
use crate::ui::charts;
use crate::ui::theme::Theme;
use crate::ui::widgets::tables::render_empty_state;
use shared::Boss;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.heading("Dashboard");
        if state.dashboard.loading {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Refresh").clicked() {
                app.handle_refresh(Screen::Dashboard);
            }
        });
    });

    // The whole refresh failed as a unit; the previous dashboard, if any,
    // stays on screen below this banner.
    if let Some(error) = &state.dashboard.error {
        ui.colored_label(theme.error, format!("Refresh failed: {}", error));
    }

    ui.add_space(6.0);
    ui.separator();

    match &state.dashboard.data {
        Some(data) => render_dashboard(ui, data, &theme),
        None if state.dashboard.loading => {
            render_empty_state(ui, "Loading dashboard...", None, &theme)
        }
        None => render_empty_state(
            ui,
            "Dashboard unavailable",
            Some("Check that the backend is running, then hit Refresh"),
            &theme,
        ),
    }
}

fn render_dashboard(ui: &mut egui::Ui, data: &DashboardData, theme: &Theme) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            render_totals(ui, data, theme);
            ui.add_space(10.0);

            ui.columns(2, |columns| {
                columns[0].group(|ui| {
                    ui.colored_label(theme.selected, "Weapons by category");
                    charts::render_bar_chart(
                        ui,
                        "category_chart",
                        &data.category_counts,
                        theme.colors.gold_primary,
                        180.0,
                    );
                });
                columns[1].group(|ui| {
                    ui.colored_label(theme.selected, "Bosses by tier");
                    charts::render_bar_chart(
                        ui,
                        "tier_chart",
                        &data.tier_distribution,
                        theme.colors.blue_info,
                        180.0,
                    );
                });
            });

            ui.add_space(10.0);

            if let Some(avg) = &data.averages {
                ui.group(|ui| {
                    ui.colored_label(theme.selected, "Weapon averages");
                    ui.horizontal(|ui| {
                        if let Some(weight) = avg.avg_weight {
                            ui.label(format!("Avg weight: {:.1}", weight));
                            ui.separator();
                        }
                        if let Some(damage) = avg.avg_physical_damage {
                            ui.label(format!("Avg physical damage: {:.1}", damage));
                            ui.separator();
                        }
                        ui.label(format!("Weapons aggregated: {}", avg.total_weapons));
                    });
                });
                ui.add_space(10.0);
            }

            if !data.top_damage.is_empty() {
                ui.group(|ui| {
                    ui.colored_label(theme.selected, "Top damage weapons");
                    let ranking: Vec<(String, f64)> = data
                        .top_damage
                        .iter()
                        .map(|entry| {
                            let label = match &entry.category {
                                Some(category) => format!("{} ({})", entry.name, category),
                                None => entry.name.clone(),
                            };
                            (label, entry.damage.unwrap_or(0.0))
                        })
                        .collect();
                    charts::render_ranking(ui, &ranking, theme.colors.gold_primary, theme.dim);
                });
                ui.add_space(10.0);
            }

            ui.columns(2, |columns| {
                render_boss_list(
                    &mut columns[0],
                    "Great Rune bosses",
                    &data.great_rune_bosses,
                    theme,
                );
                render_boss_list(
                    &mut columns[1],
                    "Remembrance bosses",
                    &data.remembrance_bosses,
                    theme,
                );
            });
        });
}

fn render_totals(ui: &mut egui::Ui, data: &DashboardData, theme: &Theme) {
    ui.columns(4, |columns| {
        let totals = [
            ("Weapons", data.weapon_total),
            ("Armors", data.armor_total),
            ("Bosses", data.boss_total),
            ("Classes", data.class_total),
        ];
        for (column, (label, total)) in columns.iter_mut().zip(totals) {
            column.group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.colored_label(theme.dim, label);
                    ui.heading(total.to_string());
                });
            });
        }
    });
}

fn render_boss_list(ui: &mut egui::Ui, title: &str, bosses: &[Boss], theme: &Theme) {
    ui.group(|ui| {
        ui.colored_label(theme.selected, title);
        if bosses.is_empty() {
            ui.colored_label(theme.dim, "None");
            return;
        }
        for boss in bosses {
            ui.horizontal(|ui| {
                ui.label(&boss.name);
                if let Some(region) = &boss.region {
                    ui.colored_label(theme.dim, region);
                }
            });
        }
    });
}
