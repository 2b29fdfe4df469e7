pub mod emails;
pub mod subject_lines;
pub mod tone;

use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::composer::ComposeError;
use crate::prompt::UseCase;
use crate::utils::AppError;

// Log the real cause, hand the caller only the use case's static message
pub(crate) fn generation_failure(use_case: UseCase, err: ComposeError) -> AppError {
    match &err {
        ComposeError::MissingField(_) => {
            error!(%use_case, error = %err, "Template wiring error")
        }
        ComposeError::GenerationFailed(_) => {
            error!(%use_case, error = %err, "Generation Error")
        }
    }
    AppError::InternalServerError(use_case.failure_message().to_string())
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
pub(crate) fn test_state(generator: std::sync::Arc<dyn crate::models::TextGenerator>) -> crate::config::AppState {
    crate::config::AppState::with_generator(generator, &crate::config::Config::default())
}
