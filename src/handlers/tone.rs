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
use crate::validation::{required, required_min, Tone, ValidationError};

// Tone conversion request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertToneRequest {
    pub email_text: Option<String>,
    #[schema(value_type = Tone)]
    pub tone: Option<String>,
}

impl ConvertToneRequest {
    pub fn into_fields(self) -> Result<FieldSet, ValidationError> {
        let email_text = required_min(
            &self.email_text,
            "emailText",
            10,
            "Email text must be at least 10 characters",
        )?;
        let tone: Tone = required(&self.tone, "tone")?.parse()?;

        Ok(FieldSet::new()
            .with("emailText", email_text)
            .with("tone", tone.as_str()))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertToneResponse {
    pub converted_email: String,
}

// Rewrite an email in another tone
#[utoipa::path(
    post,
    path = "/api/convert-tone",
    tag = "emails",
    summary = "Convert the tone of an email",
    request_body = ConvertToneRequest,
    responses(
        (status = 200, description = "Converted email", body = ConvertToneResponse),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Generation failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn convert_tone(
    State(state): State<AppState>,
    payload: Result<Json<ConvertToneRequest>, JsonRejection>,
) -> Result<Json<ConvertToneResponse>, AppError> {
    let Json(payload) = payload?;
    let fields = payload.into_fields()?;

    let converted_email = state
        .composer
        .compose_text(UseCase::ToneConversion, &fields)
        .await
        .map_err(|e| generation_failure(UseCase::ToneConversion, e))?;

    Ok(Json(ConvertToneResponse { converted_email }))
}
