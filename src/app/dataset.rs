//! Dataset file selection for the retrain form

use crate::constants::{DATASET_EXTENSIONS, DATASET_PLACEHOLDER};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Tracks the single dataset file picked for retraining
#[derive(Debug, Default, Clone)]
pub struct DatasetSelection {
    path: Option<PathBuf>,
}

impl DatasetSelection {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_none()
    }

    /// Record the picker's result; `None` means the picker was dismissed empty
    pub fn select(&mut self, path: Option<PathBuf>) {
        debug!(path = ?path, "Dataset selection changed");
        self.path = path;
    }

    pub fn reset(&mut self) {
        self.path = None;
    }

    /// Text for the picker's label
    pub fn label(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DATASET_PLACEHOLDER.to_string())
    }
}

/// Open the native picker for a dataset file
pub fn pick_dataset(start_dir: &Path) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Choose Dataset File")
        .set_directory(start_dir)
        .add_filter("Datasets", DATASET_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_selection() {
        let mut selection = DatasetSelection::default();
        assert_eq!(selection.label(), "Choose Dataset File");

        selection.select(Some(PathBuf::from("/data/heart.csv")));
        assert_eq!(selection.label(), "heart.csv");
        assert!(!selection.is_empty());

        selection.select(None);
        assert_eq!(selection.label(), "Choose Dataset File");
    }

    #[test]
    fn reset_restores_placeholder() {
        let mut selection = DatasetSelection::default();
        selection.select(Some(PathBuf::from("records.xlsx")));
        selection.reset();
        assert!(selection.is_empty());
        assert_eq!(selection.label(), DATASET_PLACEHOLDER);
    }
}
