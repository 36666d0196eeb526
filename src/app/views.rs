//! Panel rendering: header, prediction form, retrain form and status panel

use super::form::{FieldKind, FIELDS};
use super::presenter::{status_view, StatusKind};
use super::App;
use crate::constants::APP_VERSION;
use crate::theme;
use crate::ui::components::{busy_indicator, choice_field, metric_tile, numeric_field};
use crate::utils;
use eframe::egui;
use tracing::{debug, warn};

impl App {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .exact_height(64.0)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(theme::SPACING_XL as i8, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.logo_texture.is_none() {
                        self.logo_texture = utils::rasterize_logo(theme::LOGO_SIZE as u32 * 2)
                            .map(|(pixels, w, h)| {
                                ctx.load_texture(
                                    "logo",
                                    egui::ColorImage::from_rgba_unmultiplied(
                                        [w as usize, h as usize],
                                        &pixels,
                                    ),
                                    egui::TextureOptions::LINEAR,
                                )
                            });
                    }
                    if let Some(texture) = &self.logo_texture {
                        ui.image(egui::load::SizedTexture::new(
                            texture.id(),
                            egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE),
                        ));
                    }
                    ui.vertical(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Heart Risk Desktop")
                                    .size(theme::FONT_TITLE)
                                    .strong(),
                            )
                            .selectable(false),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(self.client.base_url())
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(theme::button(format!("{}  Settings", egui_phosphor::regular::GEAR)))
                            .clicked()
                        {
                            self.server_url_draft = self.client.base_url().to_string();
                            self.show_settings = true;
                        }
                        let logs = ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("v{}  •  Open logs", APP_VERSION))
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_DIM),
                            )
                            .sense(egui::Sense::click()),
                        );
                        if logs.clicked() {
                            if let Err(e) = open::that(self.logs_dir()) {
                                warn!(error = %e, "Failed to open logs folder");
                            }
                        }
                    });
                });
            });
    }

    // ========================================================================
    // PREDICTION FORM
    // ========================================================================

    pub(crate) fn render_predict_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    theme::card_frame().show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        theme::section_label(ui, "PATIENT DATA");
                        ui.add_space(theme::SPACING_MD);

                        // Modal or alert open: the form is covered
                        let editable = !matches!(
                            self.predict.state(),
                            crate::types::UiState::Presenting(_)
                        );
                        ui.add_enabled_ui(editable, |ui| self.render_predict_fields(ui));

                        ui.add_space(theme::SPACING_LG);
                        if self.predict.is_loading() {
                            busy_indicator(ui, "Analyzing...");
                        } else {
                            let submit = ui.add_enabled(
                                self.predict.is_idle(),
                                theme::button_accent(format!(
                                    "{}  Predict",
                                    egui_phosphor::regular::HEARTBEAT
                                )),
                            );
                            if submit.clicked() {
                                self.submit_predict(ctx);
                            }
                        }
                    });
                });
            });
    }

    fn render_predict_fields(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("predict_fields")
            .num_columns(2)
            .spacing(egui::vec2(theme::SPACING_XL, theme::SPACING_MD))
            .show(ui, |ui| {
                for (idx, spec) in FIELDS.iter().enumerate() {
                    ui.label(
                        egui::RichText::new(spec.label)
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_SECONDARY),
                    );
                    let Some(value) = self.predict_form.value_mut(idx) else {
                        ui.end_row();
                        continue;
                    };
                    match spec.kind {
                        FieldKind::Number { decimal, .. } => {
                            if numeric_field(ui, value, decimal).changed() {
                                self.predict_form.guard(idx);
                            }
                        }
                        FieldKind::Choice(options) => {
                            if choice_field(ui, spec.name, value, options) {
                                debug!(field = spec.name, value = %value, "Choice changed");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    // ========================================================================
    // RETRAIN FORM & STATUS
    // ========================================================================

    pub(crate) fn render_retrain_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("retrain_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin {
                        left: 0,
                        right: theme::SPACING_XL as i8,
                        top: theme::SPACING_XL as i8,
                        bottom: theme::SPACING_XL as i8,
                    }),
            )
            .show(ctx, |ui| {
                theme::card_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    theme::section_label(ui, "RETRAIN MODEL");
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new("Upload a labelled dataset (CSV, Excel or JSON).")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    );
                    ui.add_space(theme::SPACING_MD);

                    let picker = ui.add_enabled(
                        !self.retrain.is_loading(),
                        theme::button(format!(
                            "{}  {}",
                            egui_phosphor::regular::FILE_ARROW_UP,
                            self.dataset.label()
                        ))
                        .min_size(egui::vec2(ui.available_width(), 32.0)),
                    );
                    if picker.clicked() {
                        self.choose_dataset();
                    }

                    ui.add_space(theme::SPACING_MD);
                    if self.retrain.is_loading() {
                        busy_indicator(ui, "Retraining model...");
                    } else if ui
                        .add(theme::button_accent(format!(
                            "{}  Retrain",
                            egui_phosphor::regular::ARROWS_CLOCKWISE
                        )))
                        .clicked()
                    {
                        self.submit_retrain(ctx);
                    }

                    self.render_status_panel(ui);
                });
            });
    }

    fn render_status_panel(&self, ui: &mut egui::Ui) {
        let Some(outcome) = self.retrain.outcome() else {
            return;
        };
        let view = status_view(outcome);
        let success = view.kind == StatusKind::Success;

        ui.add_space(theme::SPACING_LG);
        theme::status_frame(success).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(view.icon.glyph())
                        .size(theme::FONT_HEADING)
                        .color(theme::status_color(success)),
                );
                ui.label(
                    egui::RichText::new(&view.message)
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_PRIMARY),
                );
            });

            if !view.metrics.is_empty() {
                ui.add_space(theme::SPACING_MD);
                egui::Grid::new("retrain_metrics")
                    .num_columns(2)
                    .spacing(egui::vec2(theme::SPACING_MD, theme::SPACING_MD))
                    .show(ui, |ui| {
                        for (i, metric) in view.metrics.iter().enumerate() {
                            metric_tile(ui, metric.label, &metric.value);
                            if i % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
            }
        });
    }
}
