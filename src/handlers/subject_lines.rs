use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::generation_failure;
use crate::config::AppState;
use crate::prompt::{FieldSet, UseCase};
use crate::utils::AppError;
use crate::validation::{required_min, ValidationError};

// Subject line request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SubjectLinesRequest {
    #[schema(example = "Spring sale announcement for our shoe store")]
    pub description: Option<String>,
}

impl SubjectLinesRequest {
    pub fn into_fields(self) -> Result<FieldSet, ValidationError> {
        let description = required_min(
            &self.description,
            "description",
            10,
            "Description must be at least 10 characters",
        )?;
        Ok(FieldSet::new().with("description", description))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubjectLinesResponse {
    /// Non-empty lines, bold spans as `<strong>` tags
    pub subject_lines: Vec<String>,
}

// Suggest subject lines
#[utoipa::path(
    post,
    path = "/api/generate-subject-lines",
    tag = "emails",
    summary = "Suggest subject lines for an email",
    request_body = SubjectLinesRequest,
    responses(
        (status = 200, description = "Subject lines, possibly empty", body = SubjectLinesResponse),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Generation failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn generate_subject_lines(
    State(state): State<AppState>,
    payload: Result<Json<SubjectLinesRequest>, JsonRejection>,
) -> Result<Json<SubjectLinesResponse>, AppError> {
    let Json(payload) = payload?;
    let fields = payload.into_fields()?;

    let subject_lines = state
        .composer
        .compose_lines(UseCase::SubjectLines, &fields)
        .await
        .map_err(|e| generation_failure(UseCase::SubjectLines, e))?;

    Ok(Json(SubjectLinesResponse { subject_lines }))
}
