// Template -> generation -> normalization pipeline shared by the handlers
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::models::{GenerationError, GenerationOptions, GenerationResult, TextGenerator};
use crate::normalizer::{normalize, normalize_lines};
use crate::prompt::{FieldSet, PromptError, UseCase};

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("missing value for template field `{0}`")]
    MissingField(String),

    #[error("generation failed: {0}")]
    GenerationFailed(#[source] GenerationError),
}

impl From<PromptError> for ComposeError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::MissingField(name) => ComposeError::MissingField(name),
        }
    }
}

impl From<GenerationError> for ComposeError {
    fn from(err: GenerationError) -> Self {
        ComposeError::GenerationFailed(err)
    }
}

pub struct Composer {
    generator: Arc<dyn TextGenerator>,
    settings: GenerationConfig,
}

impl Composer {
    pub fn new(generator: Arc<dyn TextGenerator>, settings: GenerationConfig) -> Self {
        Self { generator, settings }
    }

    pub fn settings(&self) -> &GenerationConfig {
        &self.settings
    }

    pub fn options_for(&self, use_case: UseCase) -> GenerationOptions {
        self.settings.options_for(use_case)
    }

    /// Fill the use case's template
    pub fn render(&self, use_case: UseCase, fields: &FieldSet) -> Result<String, ComposeError> {
        Ok(use_case.template().format(fields)?)
    }

    /// Render and send one prompt; the raw result is returned as-is
    pub async fn generate(
        &self,
        use_case: UseCase,
        fields: &FieldSet,
    ) -> Result<GenerationResult, ComposeError> {
        let prompt = self.render(use_case, fields)?;
        let options = self.options_for(use_case);
        debug!(%use_case, model = %options.model, "Generating");
        Ok(self.generator.generate(&prompt, &options).await?)
    }

    /// Single-text use cases; a blank reply counts as no content
    pub async fn compose_text(
        &self,
        use_case: UseCase,
        fields: &FieldSet,
    ) -> Result<String, ComposeError> {
        let text = normalize(self.generate(use_case, fields).await?);
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse.into());
        }
        Ok(text)
    }

    pub async fn compose_lines(
        &self,
        use_case: UseCase,
        fields: &FieldSet,
    ) -> Result<Vec<String>, ComposeError> {
        self.generate(use_case, fields).await.map(normalize_lines)
    }
}
