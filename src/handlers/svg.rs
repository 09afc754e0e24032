use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::ErrorResponse;
use crate::templates::{badge as badge_svg, gauge as gauge_svg};
use crate::verdict::Certification;

fn parse_score(raw: &str) -> Result<f64, Response> {
    match raw.parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(score),
        _ => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid score: {}", raw),
                hint: Some("Use a finite number, e.g. /gauge/250 or /badge/-12.5".to_string()),
            }),
        )
            .into_response()),
    }
}

fn svg(body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        body,
    )
        .into_response()
}

pub async fn gauge(Path(raw): Path<String>) -> Response {
    match parse_score(&raw) {
        Ok(score) => svg(gauge_svg::render(score)),
        Err(response) => response,
    }
}

pub async fn badge(Path(raw): Path<String>) -> Response {
    let score = match parse_score(&raw) {
        Ok(score) => score,
        Err(response) => return response,
    };
    match Certification::for_score(score) {
        Some(certification) => svg(badge_svg::render(certification)),
        None => (StatusCode::NOT_FOUND, "No certification for this score").into_response(),
    }
}
