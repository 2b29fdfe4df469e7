// mailgen-server: email drafting forms backed by a text generation service

pub mod composer;
pub mod config;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod openapi;
pub mod prompt;
pub mod utils;
pub mod validation;


use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use crate::config::AppState;
use crate::openapi::ApiDoc;

// API routes, OpenAPI document and the static form pages
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/generate-email", post(handlers::emails::generate_email))
        .route("/api/generate-cold-email", post(handlers::emails::generate_cold_email))
        .route("/api/convert-tone", post(handlers::tone::convert_tone))
        .route(
            "/api/generate-subject-lines",
            post(handlers::subject_lines::generate_subject_lines),
        )
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .fallback_service(static_files)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
