//! rigorcheck: a single-page front-end that sends a mathematical proof to an
//! external rigor-scoring service and shows the verdict.

pub mod client;
pub mod config;
pub mod handlers;
pub mod mode;
pub mod session;
pub mod state;
pub mod submission;
pub mod templates;
pub mod validate;
pub mod verdict;
pub mod view;

use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Router;
use std::time::Duration;
use tower::buffer::BufferLayer;
use tower::limit::RateLimitLayer;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::state::AppState;

/// Multipart framing on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_app(state: AppState) -> Router {
    // CORS configuration
    let cors = if let Some(ref origins) = state.config.cors_origins {
        let origins: Vec<_> = origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let submit_rate_limit = ServiceBuilder::new()
        .layer(HandleErrorLayer::new({
            let sessions = state.sessions.clone();
            move |headers: HeaderMap, _: tower::BoxError| {
                let sessions = sessions.clone();
                async move { handlers::submit::throttled(&sessions, &headers) }
            }
        }))
        .layer(BufferLayer::new(32))
        .layer(RateLimitLayer::new(30, Duration::from_secs(60)));

    let body_limit = state.config.max_upload_bytes + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/", get(handlers::page::index))
        .route("/mode", post(handlers::page::select_mode))
        .route("/dismiss", post(handlers::page::dismiss))
        .route(
            "/submit/image",
            post(handlers::submit::submit_image).layer(submit_rate_limit.clone()),
        )
        .route(
            "/submit/pdf",
            post(handlers::submit::submit_pdf).layer(submit_rate_limit.clone()),
        )
        .route(
            "/submit/url",
            post(handlers::submit::submit_url).layer(submit_rate_limit.clone()),
        )
        .route(
            "/submit/text",
            post(handlers::submit::submit_text).layer(submit_rate_limit),
        )
        .route("/gauge/:score", get(handlers::svg::gauge))
        .route("/badge/:score", get(handlers::svg::badge))
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state)
}
