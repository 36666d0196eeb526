//! Reusable UI components
//!
//! Standalone widgets shared by the prediction and retrain panels.

use crate::theme;
use eframe::egui;

/// Single-line numeric entry. Keystrokes other than digits, sign and
/// (for decimal fields) a point are dropped.
pub fn numeric_field(ui: &mut egui::Ui, value: &mut String, decimal: bool) -> egui::Response {
    let mut response = ui.add(
        egui::TextEdit::singleline(value)
            .desired_width(theme::FIELD_WIDTH)
            .hint_text(if decimal { "0.0" } else { "0" }),
    );
    if response.changed() {
        let before = value.len();
        value.retain(|c| c.is_ascii_digit() || c == '-' || (decimal && c == '.'));
        if value.len() != before {
            response.mark_changed();
        }
    }
    response
}

/// Drop-down over coded options. Returns true if the selection changed.
pub fn choice_field(
    ui: &mut egui::Ui,
    id: impl std::hash::Hash,
    value: &mut String,
    options: &[(&'static str, &'static str)],
) -> bool {
    let selected = options
        .iter()
        .find(|(code, _)| *code == value.as_str())
        .map(|(_, label)| *label)
        .unwrap_or("Select...");
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .width(theme::FIELD_WIDTH)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for (code, label) in options {
                if ui.selectable_value(value, code.to_string(), *label).changed() {
                    changed = true;
                }
            }
        });
    changed
}

/// Spinner with a caption; stands in for the submit button while a request runs
pub fn busy_indicator(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.add(egui::Spinner::new().color(theme::ACCENT));
        ui.add(
            egui::Label::new(egui::RichText::new(text).color(theme::TEXT_MUTED))
                .selectable(false),
        );
    });
}

/// One cell of the retrain metrics grid
pub fn metric_tile(ui: &mut egui::Ui, label: &str, value: &str) {
    egui::Frame::new()
        .fill(theme::BG_INPUT)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_min_width(110.0);
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(label)
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                ui.label(
                    egui::RichText::new(value)
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
            });
        });
}
