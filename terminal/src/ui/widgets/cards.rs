//! # Card Grid
//!
//! Grid of framed entity cards used by the weapons, armors, and bosses
//! explorers. The grid only lays cards out; each screen supplies a closure
//! that draws the card body for its entity type.

use egui;

/// Render a scrollable grid of cards, `columns` per row.
pub fn render_card_grid<T, F>(
    ui: &mut egui::Ui,
    id: &str,
    items: &[T],
    columns: usize,
    render_card: F,
) where
    F: Fn(&mut egui::Ui, &T),
{
    let columns = columns.max(1);
    let card_width = (ui.available_width() / columns as f32) - 14.0;

    egui::ScrollArea::vertical()
        .id_salt(id)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in items.chunks(columns) {
                ui.horizontal(|ui| {
                    for item in row {
                        ui.group(|ui| {
                            ui.set_width(card_width);
                            render_card(ui, item);
                        });
                    }
                });
                ui.add_space(6.0);
            }
        });
}

/// One labeled line inside a card body, dimmed label and plain value.
pub fn card_field(ui: &mut egui::Ui, theme: &crate::ui::theme::Theme, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, label);
        ui.label(value);
    });
}
