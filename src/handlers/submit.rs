use axum::extract::multipart::MultipartError;
use axum::extract::rejection::FormRejection;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::back_home;
use crate::mode::InputMode;
use crate::session::SessionStore;
use crate::state::AppState;
use crate::submission::{prepare, Plan, Submission, UploadedFile, UPLOAD_TOO_LARGE};
use crate::view::Action;

#[derive(Deserialize)]
pub struct UrlForm {
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize)]
pub struct TextForm {
    #[serde(default)]
    pub text: String,
}

pub async fn submit_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    match read_file(multipart).await {
        Ok(file) => run(state, &headers, Submission::Image(file)),
        Err(message) => reject(state, &headers, InputMode::Image, message),
    }
}

pub async fn submit_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    match read_file(multipart).await {
        Ok(file) => run(state, &headers, Submission::Pdf(file)),
        Err(message) => reject(state, &headers, InputMode::Pdf, message),
    }
}

pub async fn submit_url(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<UrlForm>, FormRejection>,
) -> Response {
    match form {
        Ok(Form(form)) => run(state, &headers, Submission::Url(form.url)),
        Err(e) => reject(state, &headers, InputMode::Url, form_failure(e)),
    }
}

pub async fn submit_text(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<TextForm>, FormRejection>,
) -> Response {
    match form {
        Ok(Form(form)) => run(state, &headers, Submission::Text(form.text)),
        Err(e) => reject(state, &headers, InputMode::Text, form_failure(e)),
    }
}

/// Pulls the `file` part out of an upload form. A form without one yields an
/// empty file, which the submission check ignores.
async fn read_file(mut multipart: Multipart) -> Result<UploadedFile, &'static str> {
    let mut upload = UploadedFile {
        file_name: String::new(),
        content_type: None,
        bytes: Vec::new(),
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(multipart_failure(e)),
        };
        if field.name() != Some("file") {
            continue;
        }
        upload.file_name = field.file_name().unwrap_or_default().to_string();
        upload.content_type = field.content_type().map(str::to_string);
        upload.bytes = field.bytes().await.map_err(multipart_failure)?.to_vec();
        break;
    }

    Ok(upload)
}

fn multipart_failure(e: MultipartError) -> &'static str {
    warn!("[rigorcheck] Failed to read upload: {}", e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UPLOAD_TOO_LARGE
    } else {
        "Upload failed."
    }
}

fn form_failure(e: FormRejection) -> &'static str {
    warn!("[rigorcheck] Failed to read form: {}", e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UPLOAD_TOO_LARGE
    } else {
        "Submission could not be read."
    }
}

pub const TOO_MANY_SUBMISSIONS: &str = "Too many submissions. Try again shortly.";

/// Answers a submission turned away by the rate limiter with the usual
/// redirect, leaving the reason on the page.
pub(crate) fn throttled(sessions: &SessionStore, headers: &HeaderMap) -> Response {
    let (id, fresh) = sessions.resolve(headers);
    warn!("[rigorcheck] Session {} hit the submission rate limit", id);
    sessions.dispatch(id, Action::Reject(TOO_MANY_SUBMISSIONS.to_string()));
    back_home(id, fresh)
}

/// Submissions only count for the mode the session has selected; a form left
/// open in another tab on a different mode is dropped.
fn is_active(state: &AppState, id: &Uuid, mode: InputMode) -> bool {
    let active = state.sessions.view(id).mode;
    if active != mode {
        info!(
            "[rigorcheck] Session {} posted a {} submission while in {} mode, ignoring",
            id, mode, active
        );
    }
    active == mode
}

fn reject(state: AppState, headers: &HeaderMap, mode: InputMode, message: &str) -> Response {
    let (id, fresh) = state.sessions.resolve(headers);
    if is_active(&state, &id, mode) {
        state.sessions.dispatch(id, Action::Reject(message.to_string()));
    }
    back_home(id, fresh)
}

/// Validates the submission, then scores it in the background while the page
/// shows the loading state.
fn run(state: AppState, headers: &HeaderMap, submission: Submission) -> Response {
    let (id, fresh) = state.sessions.resolve(headers);
    let mode = submission.mode();
    if !is_active(&state, &id, mode) {
        return back_home(id, fresh);
    }

    match prepare(submission, state.config.max_upload_bytes) {
        Plan::Ignore => {}
        Plan::Reject(message) => {
            info!("[rigorcheck] Rejected {} submission: {}", mode, message);
            state.sessions.dispatch(id, Action::Reject(message.to_string()));
        }
        Plan::Send(submission) => {
            if let Submission::Text(text) = &submission {
                state.sessions.dispatch(id, Action::EditDraft(text.clone()));
            }
            let request = state.sessions.dispatch(id, Action::Submit).latest_request;
            info!(
                "[rigorcheck] Session {} sent {} submission (request {})",
                id, mode, request
            );
            let sessions = state.sessions.clone();
            let client = state.client.clone();
            tokio::spawn(async move {
                let outcome = client.submit(&submission).await.map_err(|e| {
                    warn!("[rigorcheck] Request {} for session {} failed: {}", request, id, e);
                    e.user_message()
                });
                let view = sessions.dispatch(id, Action::Complete { request, outcome });
                if view.latest_request != request {
                    info!(
                        "[rigorcheck] Dropped stale response {} for session {}",
                        request, id
                    );
                }
            });
        }
    }

    back_home(id, fresh)
}
