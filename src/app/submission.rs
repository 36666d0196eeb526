//! Submission lifecycle: at most one request in flight per form

use super::dataset::DatasetSelection;
use super::form::PredictForm;
use super::App;
use crate::constants::{MISSING_DATASET, TRANSPORT_ERROR};
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

/// Owns the `UiState` of one form and the channel of its in-flight request
pub struct Submission<T> {
    name: &'static str,
    state: UiState<T>,
    pending: Option<oneshot::Receiver<Outcome<T>>>,
}

impl<T> Submission<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: UiState::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> &UiState<T> {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, UiState::Idle)
    }

    /// The loading indicator is shown exactly while this is true
    pub fn is_loading(&self) -> bool {
        matches!(self.state, UiState::Loading)
    }

    pub fn outcome(&self) -> Option<&Outcome<T>> {
        match &self.state {
            UiState::Presenting(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Idle -> Loading. Anything else is rejected as a no-op.
    fn begin(&mut self) -> bool {
        if !self.is_idle() {
            debug!(form = self.name, "Submission ignored, form is busy");
            return false;
        }
        info!(form = self.name, "Submission started");
        self.state = UiState::Loading;
        true
    }

    /// Idle -> Presenting(Failure) without touching the network
    fn fail_fast(&mut self, reason: &str) {
        info!(form = self.name, reason = reason, "Submission failed before sending");
        self.state = UiState::Presenting(Outcome::Failure(reason.to_string()));
    }

    /// Loading -> Presenting. Returns false when no request was in flight.
    pub fn finish(&mut self, outcome: Outcome<T>) -> bool {
        if !self.is_loading() {
            warn!(form = self.name, "Outcome arrived with no request in flight");
            return false;
        }
        self.pending = None;
        info!(form = self.name, success = outcome.is_success(), "Submission finished");
        self.state = UiState::Presenting(outcome);
        true
    }

    /// Presenting -> Idle
    pub fn dismiss(&mut self) -> bool {
        if matches!(self.state, UiState::Presenting(_)) {
            debug!(form = self.name, "Result dismissed");
            self.state = UiState::Idle;
            true
        } else {
            false
        }
    }

    /// Sender the background task reports its outcome through
    pub fn channel(&mut self) -> oneshot::Sender<Outcome<T>> {
        let (tx, rx) = oneshot::channel();
        self.pending = Some(rx);
        tx
    }

    /// Collect a finished request. Returns true when this call left Loading.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(outcome) => self.finish(outcome),
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                warn!(form = self.name, "Request task ended without a result");
                self.finish(Outcome::Failure(TRANSPORT_ERROR.to_string()))
            }
        }
    }
}

impl Submission<Prediction> {
    /// Start a predict submission. Returns the fields to send, or None if rejected.
    pub fn start_predict(&mut self, form: &PredictForm) -> Option<Vec<(String, String)>> {
        self.begin().then(|| form.encode())
    }
}

impl Submission<RetrainSummary> {
    /// Start a retrain submission. Returns the dataset to upload, or None when
    /// no request should be sent.
    pub fn start_retrain(&mut self, dataset: &DatasetSelection) -> Option<PathBuf> {
        if self.is_loading() {
            debug!(form = self.name, "Submission ignored, upload in progress");
            return None;
        }
        // A new attempt replaces whatever status is showing
        self.dismiss();
        let Some(path) = dataset.path().map(|p| p.to_path_buf()) else {
            self.fail_fast(MISSING_DATASET);
            return None;
        };
        self.begin().then_some(path)
    }

    /// Poll the retrain request; a successful upload clears the dataset selection.
    pub fn settle(&mut self, dataset: &mut DatasetSelection) -> bool {
        let finished = self.poll();
        if finished && matches!(self.outcome(), Some(Outcome::Success(_))) {
            dataset.reset();
        }
        finished
    }
}

impl App {
    pub fn submit_predict(&mut self, ctx: &egui::Context) {
        let Some(fields) = self.predict.start_predict(&self.predict_form) else {
            return;
        };
        let tx = self.predict.channel();
        let client = self.client.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let outcome = client.predict(fields).await;
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }

    pub fn submit_retrain(&mut self, ctx: &egui::Context) {
        let Some(dataset) = self.retrain.start_retrain(&self.dataset) else {
            return;
        };
        info!(dataset = %dataset.display(), "Uploading dataset for retraining");
        let tx = self.retrain.channel();
        let client = self.client.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let outcome = client.retrain(dataset).await;
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }

    /// Pick up finished requests; called once per frame
    pub fn poll_submissions(&mut self) {
        self.predict.poll();
        self.retrain.settle(&mut self.dataset);
    }

    /// Close the prediction modal or alert
    pub fn dismiss_prediction(&mut self, predict_again: bool) {
        if self.predict.dismiss() && predict_again {
            self.predict_form.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> Prediction {
        Prediction {
            result: 0,
            message: "Healthy".into(),
            probability: Some(0.87),
        }
    }

    #[test]
    fn predict_lifecycle() {
        let mut sub = Submission::<Prediction>::new("predict");
        let form = PredictForm::default();

        let fields = sub.start_predict(&form).unwrap();
        assert_eq!(fields.len(), 13);
        assert!(sub.is_loading());

        let tx = sub.channel();
        assert!(!sub.poll());
        assert!(sub.is_loading());

        tx.send(Outcome::Success(healthy())).unwrap();
        assert!(sub.poll());
        assert_eq!(sub.state(), &UiState::Presenting(Outcome::Success(healthy())));

        assert!(sub.dismiss());
        assert!(sub.is_idle());
    }

    #[test]
    fn second_submission_is_rejected_while_busy() {
        let mut sub = Submission::<Prediction>::new("predict");
        let form = PredictForm::default();
        assert!(sub.start_predict(&form).is_some());
        assert!(sub.start_predict(&form).is_none());
        assert!(sub.is_loading());

        sub.finish(Outcome::Failure("nope".into()));
        // Modal still open
        assert!(sub.start_predict(&form).is_none());
    }

    #[test]
    fn loading_is_left_exactly_once() {
        let mut sub = Submission::<Prediction>::new("predict");
        sub.start_predict(&PredictForm::default());
        assert!(sub.finish(Outcome::Failure("first".into())));
        assert!(!sub.finish(Outcome::Success(healthy())));
        assert_eq!(sub.outcome(), Some(&Outcome::Failure("first".into())));
    }

    #[test]
    fn dropped_task_still_ends_loading() {
        let mut sub = Submission::<Prediction>::new("predict");
        sub.start_predict(&PredictForm::default());
        let tx = sub.channel();
        drop(tx);
        assert!(sub.poll());
        assert_eq!(sub.outcome(), Some(&Outcome::Failure(TRANSPORT_ERROR.into())));
        assert!(!sub.poll());
    }

    #[test]
    fn retrain_without_file_fails_immediately() {
        let mut sub = Submission::<RetrainSummary>::new("retrain");
        let dataset = DatasetSelection::default();
        assert!(sub.start_retrain(&dataset).is_none());
        assert!(!sub.is_loading());
        assert_eq!(
            sub.state(),
            &UiState::Presenting(Outcome::Failure("Please select a dataset file first".into()))
        );
    }

    #[test]
    fn retrain_replaces_previous_status() {
        let mut sub = Submission::<RetrainSummary>::new("retrain");
        let mut dataset = DatasetSelection::default();
        sub.start_retrain(&dataset);
        assert!(sub.outcome().is_some());

        dataset.select(Some(PathBuf::from("heart.csv")));
        assert_eq!(sub.start_retrain(&dataset), Some(PathBuf::from("heart.csv")));
        assert!(sub.is_loading());
        assert!(sub.outcome().is_none());

        // Busy: ignored without touching state
        assert_eq!(sub.start_retrain(&dataset), None);
        assert!(sub.is_loading());
    }

    #[test]
    fn retrain_success_resets_selection() {
        let mut sub = Submission::<RetrainSummary>::new("retrain");
        let mut dataset = DatasetSelection::default();
        dataset.select(Some(PathBuf::from("heart.csv")));
        sub.start_retrain(&dataset);
        let tx = sub.channel();
        tx.send(Outcome::Success(RetrainSummary {
            message: "done".into(),
            metrics: None,
        }))
        .unwrap();

        assert!(sub.settle(&mut dataset));
        assert!(dataset.is_empty());
    }

    #[test]
    fn retrain_failure_keeps_selection() {
        let mut sub = Submission::<RetrainSummary>::new("retrain");
        let mut dataset = DatasetSelection::default();
        dataset.select(Some(PathBuf::from("heart.csv")));
        sub.start_retrain(&dataset);
        let tx = sub.channel();
        tx.send(Outcome::Failure("disk full".into())).unwrap();

        assert!(sub.settle(&mut dataset));
        assert_eq!(dataset.label(), "heart.csv");
        assert_eq!(sub.outcome(), Some(&Outcome::Failure("disk full".into())));
    }
}
