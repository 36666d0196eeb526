//! Outcome -> view model. Rendering of these lives in `modals` and `views`.

use crate::constants::{ADVICE_AT_RISK, ADVICE_HEALTHY};
use crate::types::{Metrics, Outcome, Prediction, RetrainSummary};
use crate::utils::format_probability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultIcon {
    Warning,
    Heart,
    Success,
    Error,
}

impl ResultIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ResultIcon::Warning => egui_phosphor::regular::WARNING,
            ResultIcon::Heart => egui_phosphor::regular::HEARTBEAT,
            ResultIcon::Success => egui_phosphor::regular::CHECK_CIRCLE,
            ResultIcon::Error => egui_phosphor::regular::X_CIRCLE,
        }
    }
}

/// Content of the prediction modal
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub icon: ResultIcon,
    pub message: String,
    pub advice: &'static str,
    pub probability: Option<String>,
    pub at_risk: bool,
}

pub fn prediction_view(prediction: &Prediction) -> PredictionView {
    let at_risk = prediction.is_at_risk();
    PredictionView {
        icon: if at_risk { ResultIcon::Warning } else { ResultIcon::Heart },
        message: prediction.message.clone(),
        advice: if at_risk { ADVICE_AT_RISK } else { ADVICE_HEALTHY },
        probability: prediction
            .probability
            .map(|p| format!("Probability: {}", format_probability(p))),
        at_risk,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricEntry {
    pub label: &'static str,
    pub value: String,
}

/// Content of the retrain status panel
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub kind: StatusKind,
    pub icon: ResultIcon,
    pub message: String,
    /// Empty unless the server reported metrics
    pub metrics: Vec<MetricEntry>,
}

fn metric_entries(metrics: &Metrics) -> Vec<MetricEntry> {
    [
        ("Accuracy", &metrics.accuracy),
        ("Precision", &metrics.precision),
        ("Recall", &metrics.recall),
        ("F1 Score", &metrics.f1_score),
    ]
    .into_iter()
    .map(|(label, value)| MetricEntry {
        label,
        value: value.to_string(),
    })
    .collect()
}

pub fn status_view(outcome: &Outcome<RetrainSummary>) -> StatusView {
    match outcome {
        Outcome::Success(summary) => StatusView {
            kind: StatusKind::Success,
            icon: ResultIcon::Success,
            message: summary.message.clone(),
            metrics: summary
                .metrics
                .as_ref()
                .map(metric_entries)
                .unwrap_or_default(),
        },
        Outcome::Failure(reason) => StatusView {
            kind: StatusKind::Error,
            icon: ResultIcon::Error,
            message: reason.clone(),
            metrics: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetricValue;

    #[test]
    fn healthy_prediction_view() {
        let view = prediction_view(&Prediction {
            result: 0,
            message: "Healthy".into(),
            probability: Some(0.87),
        });
        assert_eq!(view.icon, ResultIcon::Heart);
        assert_eq!(view.message, "Healthy");
        assert_eq!(view.advice, "Maintain your healthy habits!");
        assert_eq!(view.probability.as_deref(), Some("Probability: 87.0%"));
    }

    #[test]
    fn at_risk_prediction_view() {
        let view = prediction_view(&Prediction {
            result: 1,
            message: "High risk".into(),
            probability: None,
        });
        assert_eq!(view.icon, ResultIcon::Warning);
        assert_eq!(view.advice, ADVICE_AT_RISK);
        assert_eq!(view.probability, None);
        assert!(view.at_risk);
    }

    #[test]
    fn metrics_render_verbatim_in_order() {
        let outcome = Outcome::Success(RetrainSummary {
            message: "Model retrained".into(),
            metrics: Some(Metrics {
                accuracy: MetricValue::Text("91.80%".into()),
                precision: MetricValue::Number(serde_json::Number::from_f64(0.875).unwrap()),
                recall: MetricValue::Text("0.80".into()),
                f1_score: MetricValue::Number(1u8.into()),
            }),
        });
        let view = status_view(&outcome);
        assert_eq!(view.kind, StatusKind::Success);
        let rows: Vec<(&str, &str)> = view
            .metrics
            .iter()
            .map(|m| (m.label, m.value.as_str()))
            .collect();
        assert_eq!(
            rows,
            [
                ("Accuracy", "91.80%"),
                ("Precision", "0.875"),
                ("Recall", "0.80"),
                ("F1 Score", "1"),
            ]
        );
    }

    #[test]
    fn success_without_metrics_is_header_only() {
        let view = status_view(&Outcome::Success(RetrainSummary {
            message: "ok".into(),
            metrics: None,
        }));
        assert_eq!(view.icon, ResultIcon::Success);
        assert!(view.metrics.is_empty());
    }

    #[test]
    fn failure_uses_error_styling() {
        let view = status_view(&Outcome::Failure("disk full".into()));
        assert_eq!(view.kind, StatusKind::Error);
        assert_eq!(view.icon, ResultIcon::Error);
        assert_eq!(view.message, "disk full");
        assert!(view.metrics.is_empty());
    }
}
