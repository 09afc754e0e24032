use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use super::{back_home, with_session, ErrorResponse};
use crate::mode::InputMode;
use crate::state::AppState;
use crate::templates::page;
use crate::verdict::{gauge_fraction, verdict, Certification};
use crate::view::{Action, SubmissionState, ViewState};

/// JSON rendition of the page: the raw view plus what the result card shows.
#[derive(Serialize)]
pub struct ViewReport {
    #[serde(flatten)]
    pub view: ViewState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gauge: Option<f64>,
}

impl From<ViewState> for ViewReport {
    fn from(view: ViewState) -> Self {
        match view.submission {
            SubmissionState::Result { score } => Self {
                verdict: Some(verdict(score)),
                certification: Certification::for_score(score).map(|c| c.label()),
                gauge: Some(gauge_fraction(score)),
                view,
            },
            _ => Self {
                view,
                verdict: None,
                certification: None,
                gauge: None,
            },
        }
    }
}

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, fresh) = state.sessions.resolve(&headers);
    let view = state.sessions.view(&id);

    // Content negotiation: JSON if Accept: application/json, HTML otherwise
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("text/html");

    if accept.contains("application/json") {
        with_session(Json(ViewReport::from(view)), id, fresh)
    } else {
        with_session(Html(page::render(&view)), id, fresh)
    }
}

#[derive(Deserialize)]
pub struct ModeForm {
    pub mode: String,
}

pub async fn select_mode(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ModeForm>,
) -> Response {
    let mode = match InputMode::from_str(&form.mode) {
        Some(mode) => mode,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Unknown input mode: {}", form.mode),
                    hint: Some("Use one of image, pdf, url, text".to_string()),
                }),
            )
                .into_response();
        }
    };

    let (id, fresh) = state.sessions.resolve(&headers);
    state.sessions.dispatch(id, Action::SelectMode(mode));
    back_home(id, fresh)
}

pub async fn dismiss(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, fresh) = state.sessions.resolve(&headers);
    state.sessions.dispatch(id, Action::DismissError);
    back_home(id, fresh)
}
