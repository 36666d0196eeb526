//! Application constants and configuration

pub const APP_NAME: &str = "Heart Risk Desktop";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
/// Overrides the configured server URL for the current session
pub const SERVER_URL_ENV: &str = "HEART_RISK_SERVER";

pub const PREDICT_PATH: &str = "/predict";
pub const RETRAIN_PATH: &str = "/retrain";
pub const RETRAIN_FILE_FIELD: &str = "file";

pub const DATASET_EXTENSIONS: &[&str] = &["csv", "xlsx", "json"];
pub const DATASET_PLACEHOLDER: &str = "Choose Dataset File";

// User-facing messages
pub const MISSING_DATASET: &str = "Please select a dataset file first";
pub const TRANSPORT_ERROR: &str =
    "Could not reach the prediction service. Please try again.";
pub const SERVER_ERROR: &str = "Server error";
pub const RETRAIN_FAILED: &str = "Retraining failed";
pub const RETRAIN_SUCCEEDED: &str = "Model retrained successfully";

pub const ADVICE_AT_RISK: &str = "Please consult a healthcare professional.";
pub const ADVICE_HEALTHY: &str = "Maintain your healthy habits!";
