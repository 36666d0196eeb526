//! HTTP client for the prediction service and response interpretation

use crate::constants::*;
use crate::types::*;
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}

/// Cheap to clone; clones share the connection pool
#[derive(Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn with_http(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit the prediction form. Never fails: transport problems become the generic failure.
    pub async fn predict(&self, fields: Vec<(String, String)>) -> Outcome<Prediction> {
        let url = self.endpoint(PREDICT_PATH);
        debug!(url = %url, fields = fields.len(), "Sending predict request");
        match self.post_form(&url, &fields).await {
            Ok((status, body)) => interpret_predict(status, &body),
            Err(e) => {
                warn!(error = %e, url = %url, "Predict request failed");
                Outcome::Failure(TRANSPORT_ERROR.to_string())
            }
        }
    }

    /// Upload a dataset for retraining. Never fails: transport problems become the generic failure.
    pub async fn retrain(&self, dataset: PathBuf) -> Outcome<RetrainSummary> {
        let url = self.endpoint(RETRAIN_PATH);
        debug!(url = %url, dataset = %dataset.display(), "Sending retrain request");
        match self.post_dataset(&url, &dataset).await {
            Ok((status, body)) => interpret_retrain(status, &body),
            Err(e) => {
                warn!(error = %e, url = %url, "Retrain request failed");
                Outcome::Failure(TRANSPORT_ERROR.to_string())
            }
        }
    }

    async fn post_form(
        &self,
        url: &str,
        fields: &[(String, String)],
    ) -> Result<(StatusCode, Vec<u8>), TransportError> {
        let response = self.http.post(url).form(fields).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok((status, body.to_vec()))
    }

    async fn post_dataset(
        &self,
        url: &str,
        dataset: &Path,
    ) -> Result<(StatusCode, Vec<u8>), TransportError> {
        let bytes = tokio::fs::read(dataset).await?;
        let file_name = dataset
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string());
        debug!(file = %file_name, size = bytes.len(), "Dataset loaded");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part(RETRAIN_FILE_FIELD, part);
        let response = self.http.post(url).multipart(form).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok((status, body.to_vec()))
    }
}

/// Turn a predict response into an outcome
pub fn interpret_predict(status: StatusCode, body: &[u8]) -> Outcome<Prediction> {
    match serde_json::from_slice::<PredictReply>(body) {
        Ok(PredictReply::Rejected { error }) => {
            info!(status = %status, error = %error, "Prediction rejected by server");
            Outcome::Failure(error)
        }
        Ok(PredictReply::Prediction(prediction)) if status.is_success() => {
            info!(
                result = prediction.result,
                probability = ?prediction.probability,
                "Prediction received"
            );
            Outcome::Success(prediction)
        }
        Ok(PredictReply::Prediction(_)) => {
            warn!(status = %status, "Prediction body returned with failure status");
            Outcome::Failure(TRANSPORT_ERROR.to_string())
        }
        Err(e) => {
            warn!(status = %status, error = %e, "Undecodable predict response");
            Outcome::Failure(TRANSPORT_ERROR.to_string())
        }
    }
}

/// Turn a retrain response into an outcome
pub fn interpret_retrain(status: StatusCode, body: &[u8]) -> Outcome<RetrainSummary> {
    let reply = serde_json::from_slice::<RetrainReply>(body);

    if !status.is_success() {
        let message = match reply {
            Ok(reply) => reply.into_message(),
            Err(e) => {
                debug!(error = %e, "Retrain error body is not JSON");
                None
            }
        }
        .unwrap_or_else(|| SERVER_ERROR.to_string());
        warn!(status = %status, message = %message, "Retrain failed on server");
        return Outcome::Failure(message);
    }

    match reply {
        Ok(RetrainReply::Report {
            status: RetrainStatus::Success,
            message,
            metrics,
            ..
        }) => {
            info!(has_metrics = metrics.is_some(), "Model retrained");
            Outcome::Success(RetrainSummary {
                message: message.unwrap_or_else(|| RETRAIN_SUCCEEDED.to_string()),
                metrics,
            })
        }
        Ok(reply) => {
            let message = reply
                .into_message()
                .unwrap_or_else(|| RETRAIN_FAILED.to_string());
            warn!(message = %message, "Retrain reported failure");
            Outcome::Failure(message)
        }
        Err(e) => {
            warn!(error = %e, "Undecodable retrain response");
            Outcome::Failure(TRANSPORT_ERROR.to_string())
        }
    }
}
