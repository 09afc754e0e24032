pub mod health;
pub mod page;
pub mod submit;
pub mod svg;

use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::session::session_cookie;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Attaches the session cookie when the session was minted by this request.
pub(crate) fn with_session(response: impl IntoResponse, id: Uuid, fresh: bool) -> Response {
    if fresh {
        ([(header::SET_COOKIE, session_cookie(&id))], response).into_response()
    } else {
        response.into_response()
    }
}

/// Post/redirect/get back to the page.
pub(crate) fn back_home(id: Uuid, fresh: bool) -> Response {
    with_session(Redirect::to("/"), id, fresh)
}
