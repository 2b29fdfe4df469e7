use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::generation_failure;
use crate::config::AppState;
use crate::prompt::{bullet_list, FieldSet, UseCase};
use crate::utils::AppError;
use crate::validation::{required, required_min, Purpose, ValidationError};

// Email generation request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateEmailRequest {
    #[schema(example = "John Doe")]
    pub recipient_name: Option<String>,
    #[schema(value_type = Purpose)]
    pub purpose: Option<String>,
    /// Comma separated list
    #[schema(example = "met yesterday,send proposal")]
    pub key_points: Option<String>,
}

impl GenerateEmailRequest {
    pub fn into_fields(self) -> Result<FieldSet, ValidationError> {
        let recipient_name = required_min(
            &self.recipient_name,
            "recipientName",
            2,
            "Name must be at least 2 characters",
        )?;
        let purpose: Purpose = required(&self.purpose, "purpose")?.parse()?;
        let key_points = required_min(
            &self.key_points,
            "keyPoints",
            2,
            "Please provide at least 2 key points",
        )?;

        Ok(FieldSet::new()
            .with("recipientName", recipient_name)
            .with("purpose", purpose.as_str())
            .with("keyPoints", bullet_list(key_points)))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateEmailResponse {
    pub email: String,
}

// Cold email request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColdEmailRequest {
    pub recipient_name: Option<String>,
    pub recipient_company: Option<String>,
    pub your_name: Option<String>,
    pub your_company: Option<String>,
    pub product_service: Option<String>,
    pub key_benefits: Option<String>,
    pub call_to_action: Option<String>,
}

impl ColdEmailRequest {
    pub fn into_fields(self) -> Result<FieldSet, ValidationError> {
        let checks: [(&Option<String>, &'static str, usize, &'static str); 7] = [
            (&self.recipient_name, "recipientName", 2, "Recipient name must be at least 2 characters"),
            (&self.recipient_company, "recipientCompany", 2, "Recipient company must be at least 2 characters"),
            (&self.your_name, "yourName", 2, "Your name must be at least 2 characters"),
            (&self.your_company, "yourCompany", 2, "Your company must be at least 2 characters"),
            (&self.product_service, "productService", 2, "Product/Service must be at least 2 characters"),
            (&self.key_benefits, "keyBenefits", 10, "Key benefits must be at least 10 characters"),
            (&self.call_to_action, "callToAction", 2, "Call to action must be at least 2 characters"),
        ];

        let mut fields = FieldSet::new();
        for (value, name, min, message) in checks {
            fields.insert(name, required_min(value, name, min, message)?);
        }
        Ok(fields)
    }
}

// Generate an email
#[utoipa::path(
    post,
    path = "/api/generate-email",
    tag = "emails",
    summary = "Generate an email",
    description = "Drafts a formal email from a recipient, a purpose and comma separated key points",
    request_body = GenerateEmailRequest,
    responses(
        (status = 200, description = "Generated email", body = GenerateEmailResponse),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Generation failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn generate_email(
    State(state): State<AppState>,
    payload: Result<Json<GenerateEmailRequest>, JsonRejection>,
) -> Result<Json<GenerateEmailResponse>, AppError> {
    let Json(payload) = payload?;
    let fields = payload.into_fields()?;

    let email = state
        .composer
        .compose_text(UseCase::Email, &fields)
        .await
        .map_err(|e| generation_failure(UseCase::Email, e))?;

    Ok(Json(GenerateEmailResponse { email }))
}

// Generate a cold email
#[utoipa::path(
    post,
    path = "/api/generate-cold-email",
    tag = "emails",
    summary = "Generate a personalized cold email",
    request_body = ColdEmailRequest,
    responses(
        (status = 200, description = "Generated email", body = GenerateEmailResponse),
        (status = 400, description = "Invalid input", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Generation failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn generate_cold_email(
    State(state): State<AppState>,
    payload: Result<Json<ColdEmailRequest>, JsonRejection>,
) -> Result<Json<GenerateEmailResponse>, AppError> {
    let Json(payload) = payload?;
    let fields = payload.into_fields()?;

    let email = state
        .composer
        .compose_text(UseCase::ColdEmail, &fields)
        .await
        .map_err(|e| generation_failure(UseCase::ColdEmail, e))?;

    Ok(Json(GenerateEmailResponse { email }))
}
