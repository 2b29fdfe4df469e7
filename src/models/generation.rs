// Text generation interface and related structure definitions
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Per-call generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub model: String,
    pub temperature: f32,
}

impl GenerationOptions {
    pub fn new(model: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            temperature,
        }
    }
}

// One typed piece of a multi-part result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Fragment {
    Text {
        #[serde(default)]
        text: String,
    },
    #[serde(other)]
    Other,
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text { text: text.into() }
    }
}

// Raw provider output: a plain string or a fragment sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Text(String),
    Fragments(Vec<Fragment>),
}

impl From<&str> for GenerationResult {
    fn from(text: &str) -> Self {
        GenerationResult::Text(text.to_string())
    }
}

impl From<String> for GenerationResult {
    fn from(text: String) -> Self {
        GenerationResult::Text(text)
    }
}

impl From<Vec<Fragment>> for GenerationResult {
    fn from(fragments: Vec<Fragment>) -> Self {
        GenerationResult::Fragments(fragments)
    }
}

// Everything that can go wrong talking to the provider
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request to generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service returned {status}: {body}")]
    Provider { status: StatusCode, body: String },

    #[error("prompt blocked by generation service: {0}")]
    Blocked(String),

    #[error("generation service returned no content")]
    EmptyResponse,

    #[error("malformed generation response: {0}")]
    Malformed(String),

    #[error("invalid generation endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

// Text generation service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    // Provider name for logs
    fn provider(&self) -> &'static str;

    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, GenerationError>;
}
