use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::handlers;
use crate::validation::{Purpose, Tone};

// Error envelope returned by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable message, safe to show to end users
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "mailgen-server",
        description = "Prompt templating front-end for a text generation service"
    ),
    paths(
        handlers::emails::generate_email,
        handlers::emails::generate_cold_email,
        handlers::tone::convert_tone,
        handlers::subject_lines::generate_subject_lines,
        handlers::health,
    ),
    components(schemas(ErrorResponse, Purpose, Tone)),
    tags(
        (name = "emails", description = "Email drafting"),
        (name = "system", description = "Service status")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_endpoints() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in [
            "/api/generate-email",
            "/api/convert-tone",
            "/api/generate-cold-email",
            "/api/generate-subject-lines",
            "/api/health",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == path), "missing {}", path);
        }
    }

    #[test]
    fn test_openapi_has_error_schema() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("ErrorResponse"));
        assert!(schemas.contains_key("Purpose"));
    }
}
