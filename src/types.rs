//! Common types and data structures

use serde::{de, Deserialize, Deserializer};
use std::fmt;

/// Terminal result of one submission
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(String),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Presentation state of a single form
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState<T> {
    #[default]
    Idle,
    Loading,
    Presenting(Outcome<T>),
}

// ============================================================================
// PREDICT
// ============================================================================

/// Successful prediction payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    #[serde(alias = "prediction", deserialize_with = "risk_class")]
    pub result: u8,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_probability")]
    pub probability: Option<f64>,
}

impl Prediction {
    pub fn is_at_risk(&self) -> bool {
        self.result == 1
    }
}

/// Body returned by the predict endpoint
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PredictReply {
    Rejected {
        #[serde(deserialize_with = "error_text")]
        error: String,
    },
    Prediction(Prediction),
}

/// Only the two known classes are accepted; anything else fails the decode.
fn risk_class<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        class @ (0 | 1) => Ok(class),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Unsigned(other.into()),
            &"0 or 1",
        )),
    }
}

/// Error strings pass through; structured errors are shown as compact JSON. `null` is not an error.
fn error_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Null => Err(de::Error::custom("error is null")),
        other => Ok(other.to_string()),
    }
}

/// Probabilities that are not numbers in [0, 1] (e.g. "Not available") decode as absent.
fn lenient_probability<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_f64())
        .filter(|p| (0.0..=1.0).contains(p)))
}

// ============================================================================
// RETRAIN
// ============================================================================

/// Metric value exactly as the server sent it
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

/// Evaluation metrics reported after retraining
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metrics {
    pub accuracy: MetricValue,
    pub precision: MetricValue,
    pub recall: MetricValue,
    pub f1_score: MetricValue,
}

/// Successful retrain payload
#[derive(Debug, Clone, PartialEq)]
pub struct RetrainSummary {
    pub message: String,
    pub metrics: Option<Metrics>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrainStatus {
    Success,
    #[serde(other)]
    Other,
}

/// Body returned by the retrain endpoint
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RetrainReply {
    Report {
        status: RetrainStatus,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        error: Option<String>,
        #[serde(default, deserialize_with = "lenient_metrics")]
        metrics: Option<Metrics>,
    },
    Rejected {
        error: String,
    },
    Notice {
        #[serde(alias = "detail")]
        message: String,
    },
}

/// An incomplete or malformed metrics object counts as absent.
fn lenient_metrics<'de, D>(deserializer: D) -> Result<Option<Metrics>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

impl RetrainReply {
    /// Human-readable text carried by the reply, if any
    pub fn into_message(self) -> Option<String> {
        match self {
            RetrainReply::Report { message, error, .. } => message.or(error),
            RetrainReply::Rejected { error } => Some(error),
            RetrainReply::Notice { message } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_reply_prefers_error_field() {
        let reply: PredictReply =
            serde_json::from_str(r#"{"error": "Invalid input", "result": 1}"#).unwrap();
        assert!(matches!(reply, PredictReply::Rejected { error } if error == "Invalid input"));
    }

    #[test]
    fn prediction_accepts_legacy_field_names() {
        let reply: PredictReply = serde_json::from_str(
            r#"{"prediction": 1, "probability": "Not available", "message": "Consult a doctor."}"#,
        )
        .unwrap();
        match reply {
            PredictReply::Prediction(p) => {
                assert!(p.is_at_risk());
                assert_eq!(p.probability, None);
                assert_eq!(p.message, "Consult a doctor.");
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn retrain_reply_variants() {
        let report: RetrainReply = serde_json::from_str(
            r#"{"status": "success", "message": "done",
                "metrics": {"accuracy": 0.91, "precision": "0.88", "recall": 0.8, "f1_score": "0.84"}}"#,
        )
        .unwrap();
        match report {
            RetrainReply::Report { status, metrics, .. } => {
                assert_eq!(status, RetrainStatus::Success);
                let metrics = metrics.unwrap();
                assert_eq!(metrics.accuracy.to_string(), "0.91");
                assert_eq!(metrics.precision.to_string(), "0.88");
            }
            other => panic!("unexpected reply: {:?}", other),
        }

        let failed: RetrainReply =
            serde_json::from_str(r#"{"status": "error", "message": "bad columns"}"#).unwrap();
        assert!(matches!(failed, RetrainReply::Report { status: RetrainStatus::Other, .. }));

        let bare: RetrainReply = serde_json::from_str(r#"{"error": "disk full"}"#).unwrap();
        assert_eq!(bare.into_message().as_deref(), Some("disk full"));

        let detail: RetrainReply = serde_json::from_str(r#"{"detail": "Not Found"}"#).unwrap();
        assert_eq!(detail.into_message().as_deref(), Some("Not Found"));
    }

    #[test]
    fn unknown_risk_class_is_rejected() {
        assert!(serde_json::from_str::<PredictReply>(r#"{"result": 2, "message": "?"}"#).is_err());
        let reply: PredictReply = serde_json::from_str(r#"{"result": 0}"#).unwrap();
        assert!(matches!(reply, PredictReply::Prediction(p) if !p.is_at_risk()));
    }

    #[test]
    fn structured_error_is_rendered_as_text() {
        let reply: PredictReply =
            serde_json::from_str(r#"{"error": {"field": "age"}}"#).unwrap();
        assert!(matches!(reply, PredictReply::Rejected { error } if error == r#"{"field":"age"}"#));

        // A null error does not hide a prediction
        let reply: PredictReply =
            serde_json::from_str(r#"{"error": null, "result": 1, "message": "High risk"}"#).unwrap();
        assert!(matches!(reply, PredictReply::Prediction(p) if p.is_at_risk()));
    }

    #[test]
    fn malformed_metrics_do_not_hide_status() {
        for body in [
            r#"{"status": "success", "message": "done", "metrics": {"accuracy": 0.9}}"#,
            r#"{"status": "success", "message": "done",
                "metrics": {"accuracy": 0.9, "precision": null, "recall": 0.8, "f1_score": 0.8}}"#,
            r#"{"status": "success", "message": "done", "metrics": null}"#,
        ] {
            let reply: RetrainReply = serde_json::from_str(body).unwrap();
            assert!(
                matches!(
                    reply,
                    RetrainReply::Report { status: RetrainStatus::Success, metrics: None, .. }
                ),
                "body {}",
                body
            );
        }
    }
}
