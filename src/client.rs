use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

use crate::mode::Transport;
use crate::submission::{Submission, UploadedFile};

pub const SERVER_ERROR_MESSAGE: &str = "Internal server error.";
const UPLOAD_FAILED_MESSAGE: &str = "Upload failed.";
const UNREACHABLE_MESSAGE: &str = "Could not reach the scoring service.";
const MALFORMED_MESSAGE: &str = "Unexpected response from the scoring service.";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("scoring service returned {0}")]
    Server(reqwest::StatusCode),
    #[error("upload failed: {}", detail.as_deref().unwrap_or("no detail"))]
    Upload { detail: Option<String> },
    #[error("scoring service rejected the submission: {0}")]
    Rejected(String),
    #[error("scoring service unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("malformed scoring response")]
    Malformed,
}

impl SubmitError {
    /// Banner text shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Server(_) => SERVER_ERROR_MESSAGE.to_string(),
            SubmitError::Upload { detail } => detail
                .clone()
                .unwrap_or_else(|| UPLOAD_FAILED_MESSAGE.to_string()),
            SubmitError::Rejected(message) => message.clone(),
            SubmitError::Unreachable(_) => UNREACHABLE_MESSAGE.to_string(),
            SubmitError::Malformed => MALFORMED_MESSAGE.to_string(),
        }
    }
}

/// Body of every scoring endpoint: `{"result": n}` or `{"error": "..."}`.
#[derive(Debug, Default, Deserialize)]
struct ScoreResponse {
    #[serde(default)]
    result: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the external scoring service.
#[derive(Clone, Debug)]
pub struct ScoringClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScoringClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn submit(&self, submission: &Submission) -> Result<f64, SubmitError> {
        let mode = submission.mode();
        let url = format!("{}{}", self.base_url, mode.endpoint());
        let transport = mode.transport();

        let request = match submission {
            Submission::Image(file) | Submission::Pdf(file) => {
                self.http.post(&url).multipart(upload_form(file)?)
            }
            Submission::Url(link) => self.http.post(&url).json(&json!({ "url": link })),
            Submission::Text(text) => self.http.post(&url).json(&json!({ "text": text })),
        };

        let resp = request.send().await.map_err(|e| {
            warn!("[rigorcheck] POST {} failed: {:?}", url, e);
            match transport {
                Transport::Multipart => SubmitError::Upload { detail: None },
                Transport::Json => SubmitError::Unreachable(e),
            }
        })?;

        let status = resp.status();
        if status.is_server_error() {
            warn!("[rigorcheck] POST {} returned {}", url, status);
            return Err(SubmitError::Server(status));
        }

        let body = resp.bytes().await.map_err(|e| {
            warn!("[rigorcheck] Reading response from {} failed: {:?}", url, e);
            match transport {
                Transport::Multipart => SubmitError::Upload { detail: None },
                Transport::Json => SubmitError::Unreachable(e),
            }
        })?;
        let parsed: Option<ScoreResponse> = serde_json::from_slice(&body).ok();

        if transport == Transport::Multipart && !status.is_success() {
            warn!("[rigorcheck] Upload to {} returned {}", url, status);
            return Err(SubmitError::Upload {
                detail: parsed.and_then(|p| p.error),
            });
        }

        match parsed {
            Some(ScoreResponse {
                result: Some(score),
                ..
            }) => {
                info!("[rigorcheck] {} submission scored {}", mode, score);
                Ok(score)
            }
            Some(ScoreResponse {
                error: Some(message),
                ..
            }) => {
                info!("[rigorcheck] {} submission rejected: {}", mode, message);
                Err(SubmitError::Rejected(message))
            }
            _ => {
                warn!("[rigorcheck] Unexpected {} response from {}", status, url);
                Err(SubmitError::Malformed)
            }
        }
    }
}

fn upload_form(file: &UploadedFile) -> Result<reqwest::multipart::Form, SubmitError> {
    let part = reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
    let part = match file.content_type.as_deref() {
        Some(ct) => part.mime_str(ct).map_err(|e| {
            warn!("[rigorcheck] Rejected content type {:?}: {:?}", ct, e);
            SubmitError::Upload { detail: None }
        })?,
        None => part,
    };
    Ok(reqwest::multipart::Form::new().part("file", part))
}
