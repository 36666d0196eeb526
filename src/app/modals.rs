//! Modal dialogs (prediction result, prediction error alert, settings)

use super::presenter::prediction_view;
use super::App;
use crate::constants::DEFAULT_SERVER_URL;
use crate::theme;
use crate::types::{Outcome, UiState};
use eframe::egui;

/// What the user did with the prediction modal this frame
enum ModalAction {
    None,
    Close,
    PredictAgain,
}

impl App {
    pub(crate) fn render_prediction_dialogs(&mut self, ctx: &egui::Context) {
        let UiState::Presenting(outcome) = self.predict.state() else {
            return;
        };
        let action = match outcome {
            Outcome::Success(prediction) => {
                let view = prediction_view(prediction);
                let mut action = ModalAction::None;
                let modal = egui::Modal::new(egui::Id::new("prediction_modal"))
                    .backdrop_color(egui::Color32::from_black_alpha(180))
                    .frame(theme::modal_frame());
                let response = modal.show(ctx, |ui| {
                    ui.set_width(theme::MODAL_WIDTH);
                    ui.vertical_centered(|ui| {
                        ui.add_space(theme::SPACING_MD);
                        let color = if view.at_risk {
                            theme::STATUS_WARNING
                        } else {
                            theme::STATUS_SUCCESS
                        };
                        ui.label(egui::RichText::new(view.icon.glyph()).size(44.0).color(color));
                        ui.add_space(theme::SPACING_MD);
                        ui.label(
                            egui::RichText::new(&view.message)
                                .size(theme::FONT_HEADING)
                                .strong(),
                        );
                        ui.add_space(theme::SPACING_SM);
                        ui.label(egui::RichText::new(view.advice).color(theme::TEXT_MUTED));
                        if let Some(probability) = &view.probability {
                            ui.add_space(theme::SPACING_SM);
                            ui.label(
                                egui::RichText::new(probability)
                                    .size(theme::FONT_BODY)
                                    .color(theme::TEXT_SECONDARY),
                            );
                        }
                        ui.add_space(theme::SPACING_XL);
                        ui.horizontal(|ui| {
                            if ui
                                .add(theme::button_accent(format!(
                                    "{}  Predict Again",
                                    egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                                )))
                                .clicked()
                            {
                                action = ModalAction::PredictAgain;
                            }
                            if ui
                                .add(theme::button(format!("{}  Close", egui_phosphor::regular::X)))
                                .clicked()
                            {
                                action = ModalAction::Close;
                            }
                        });
                    });
                });
                // Backdrop click or Escape
                if response.should_close() && matches!(action, ModalAction::None) {
                    action = ModalAction::Close;
                }
                action
            }
            Outcome::Failure(reason) => {
                let reason = reason.clone();
                let mut action = ModalAction::None;
                let modal = egui::Modal::new(egui::Id::new("prediction_alert"))
                    .backdrop_color(egui::Color32::from_black_alpha(180))
                    .frame(theme::modal_frame());
                modal.show(ctx, |ui| {
                    ui.set_width(theme::MODAL_WIDTH - 40.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::WARNING_CIRCLE)
                                .size(theme::FONT_TITLE)
                                .color(theme::STATUS_ERROR),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Prediction failed")
                                    .size(theme::FONT_HEADING)
                                    .strong(),
                            )
                            .selectable(false),
                        );
                    });
                    ui.add_space(theme::SPACING_MD);
                    ui.add(egui::Label::new(reason.as_str()).wrap());
                    ui.add_space(theme::SPACING_XL);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(theme::button_accent("OK")).clicked() {
                            action = ModalAction::Close;
                        }
                    });
                });
                // Blocking: only the OK button dismisses
                action
            }
        };

        match action {
            ModalAction::None => {}
            ModalAction::Close => self.dismiss_prediction(false),
            ModalAction::PredictAgain => self.dismiss_prediction(true),
        }
    }

    pub(crate) fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }
        let mut save = false;
        let modal_response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(theme::MODAL_WIDTH);
                ui.add(
                    egui::Label::new(egui::RichText::new("Settings").size(theme::FONT_HEADING).strong())
                        .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Prediction Server").size(theme::FONT_LABEL).color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);
                let edit = ui.add(
                    egui::TextEdit::singleline(&mut self.server_url_draft)
                        .hint_text(DEFAULT_SERVER_URL)
                        .desired_width(f32::INFINITY),
                );
                if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    save = true;
                }
                ui.label(
                    egui::RichText::new("Requests already running keep their original server.")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );

                ui.add_space(theme::SPACING_XL);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(theme::button_accent("Save")).clicked() {
                        save = true;
                    }
                    if ui.add(theme::button("Cancel")).clicked() {
                        self.show_settings = false;
                    }
                });
            });

        if save {
            let url = self.server_url_draft.clone();
            self.apply_server_url(&url);
            self.show_settings = false;
        } else if modal_response.should_close() {
            self.show_settings = false;
        }
    }
}
