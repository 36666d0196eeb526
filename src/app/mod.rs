//! App module - contains the main application state and logic

mod client;
mod dataset;
mod form;
mod modals;
mod presenter;
mod submission;
mod views;

use crate::settings::Settings;
use crate::theme;
use crate::types::{Prediction, RetrainSummary};
use client::ServiceClient;
use dataset::DatasetSelection;
use eframe::egui;
use form::PredictForm;
use std::path::PathBuf;
use submission::Submission;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Prediction form
    pub(crate) predict_form: PredictForm,
    pub(crate) predict: Submission<Prediction>,
    // Retrain form
    pub(crate) dataset: DatasetSelection,
    pub(crate) retrain: Submission<RetrainSummary>,
    // Service
    pub(crate) client: ServiceClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) show_settings: bool,
    pub(crate) server_url_draft: String,
    // Window
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons as a fallback in the default proportional family
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let server_url = settings.effective_server_url();
        info!(server = %server_url, "Service client configured");

        Self {
            predict_form: PredictForm::default(),
            predict: Submission::new("predict"),
            dataset: DatasetSelection::default(),
            retrain: Submission::new("retrain"),
            client: ServiceClient::new(&server_url),
            runtime,
            server_url_draft: server_url,
            settings,
            data_dir,
            show_settings: false,
            logo_texture: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
        }
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.save(&self.data_dir);
    }

    /// Point the client at a new server; in-flight requests keep their old client
    pub fn apply_server_url(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() || url == self.client.base_url() {
            return;
        }
        info!(server = %url, "Server URL changed");
        self.client = ServiceClient::new(url);
        self.settings.server_url = self.client.base_url().to_string();
        self.save_settings();
    }

    pub fn choose_dataset(&mut self) {
        let picked = dataset::pick_dataset(&self.settings.dataset_dir_or_default());
        if let Some(dir) = picked.as_deref().and_then(|p| p.parent()) {
            self.settings.last_dataset_dir = Some(dir.to_string_lossy().into_owned());
        }
        self.dataset.select(picked);
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
