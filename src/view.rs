//! The proof submission view as one immutable value.
//!
//! Every user interaction and every scoring response becomes an [`Action`];
//! [`reduce`] maps the current [`ViewState`] and an action to the next state
//! without side effects. Handlers own the I/O and only ever store what
//! `reduce` returns.

use serde::Serialize;

use crate::mode::InputMode;

/// Monotonic per-session request counter. Zero means nothing was ever sent.
pub type RequestId = u64;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Loading,
    Error { message: String },
    Result { score: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewState {
    pub mode: InputMode,
    pub submission: SubmissionState,
    /// Text mode draft. Empty outside text mode and once a result is shown.
    pub draft: String,
    pub latest_request: RequestId,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            submission: SubmissionState::Idle,
            draft: String::new(),
            latest_request: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SelectMode(InputMode),
    EditDraft(String),
    /// A request is about to be sent; issues the next request id.
    Submit,
    /// Input failed client-side validation. Counts as a submission so that
    /// an older in-flight response cannot replace the message.
    Reject(String),
    Complete {
        request: RequestId,
        outcome: Result<f64, String>,
    },
    DismissError,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        self.submission == SubmissionState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.submission {
            SubmissionState::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self.submission {
            SubmissionState::Result { score } => Some(score),
            _ => None,
        }
    }
}

pub fn reduce(state: &ViewState, action: Action) -> ViewState {
    let mut next = state.clone();
    match action {
        Action::SelectMode(mode) => {
            if let SubmissionState::Error { .. } = next.submission {
                next.submission = SubmissionState::Idle;
            }
            if mode != InputMode::Text {
                next.draft.clear();
            }
            next.mode = mode;
        }
        Action::EditDraft(text) => {
            if next.mode == InputMode::Text {
                next.draft = text;
            }
        }
        Action::Submit => {
            next.latest_request += 1;
            next.submission = SubmissionState::Loading;
        }
        Action::Reject(message) => {
            next.latest_request += 1;
            next.submission = SubmissionState::Error { message };
        }
        Action::Complete { request, outcome } => {
            if request != next.latest_request {
                return next;
            }
            next.submission = match outcome {
                Ok(score) => {
                    next.draft.clear();
                    SubmissionState::Result { score }
                }
                Err(message) => SubmissionState::Error { message },
            };
        }
        Action::DismissError => {
            if let SubmissionState::Error { .. } = next.submission {
                next.submission = SubmissionState::Idle;
            }
        }
    }
    next
}
