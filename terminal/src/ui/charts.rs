//! # Chart Module
//!
//! Dashboard chart rendering using egui_plot bar charts.

use egui::Color32;
use egui_plot::{Bar, BarChart, Plot};

/// Render a vertical bar chart from labeled counts.
///
/// Bars are placed at integer x positions; the label shows in the hover
/// tooltip and in a legend row under the plot, since categorical axis
/// labels get unreadable past a handful of bars.
pub fn render_bar_chart(
    ui: &mut egui::Ui,
    id: &str,
    data: &[(String, u64)],
    color: Color32,
    height: f32,
) {
    if data.is_empty() {
        ui.label("No data");
        return;
    }

    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            Bar::new(i as f64, *count as f64)
                .width(0.6)
                .name(label)
                .fill(color)
        })
        .collect();

    Plot::new(id.to_string())
        .height(height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(id, bars));
        });
}

/// Render a horizontal ranking: labels with value-proportional bars.
///
/// Used for the top-damage list where names matter more than axis scale.
pub fn render_ranking(
    ui: &mut egui::Ui,
    data: &[(String, f64)],
    color: Color32,
    dim: Color32,
) {
    let max = data
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::MIN, f64::max)
        .max(1.0);

    for (label, value) in data {
        ui.horizontal(|ui| {
            ui.add_sized([180.0, 16.0], egui::Label::new(label).truncate());

            let fraction = (*value / max).clamp(0.0, 1.0) as f32;
            let full_width = (ui.available_width() - 70.0).max(40.0);
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(full_width * fraction, 12.0),
                egui::Sense::hover(),
            );
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(2), color);

            ui.colored_label(dim, format!("{:.0}", value));
        });
    }
}
