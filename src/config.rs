use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use tracing::{info, warn};

use crate::composer::Composer;
use crate::models::{
    GeminiClient, GenerationError, GenerationOptions, OpenAIClient, TextGenerator,
};
use crate::prompt::UseCase;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

// Service configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Generation service backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    OpenAI,
}

impl Provider {
    // Conventional variable holding the provider's key
    pub fn api_key_env(self) -> &'static str {
        match self {
            Provider::Gemini => "GOOGLE_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub provider: Provider,
    pub api_key: String,
    pub base_url: Option<String>,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub models: ModelsConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            api_key: String::new(),
            base_url: None,
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: 60,
            models: ModelsConfig::default(),
        }
    }
}

// One model identifier per use case
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub email: String,
    pub tone_conversion: String,
    pub cold_email: String,
    pub subject_lines: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            email: DEFAULT_MODEL.to_string(),
            tone_conversion: DEFAULT_MODEL.to_string(),
            cold_email: DEFAULT_MODEL.to_string(),
            subject_lines: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ModelsConfig {
    pub fn for_use_case(&self, use_case: UseCase) -> &str {
        match use_case {
            UseCase::Email => &self.email,
            UseCase::ToneConversion => &self.tone_conversion,
            UseCase::ColdEmail => &self.cold_email,
            UseCase::SubjectLines => &self.subject_lines,
        }
    }
}

impl GenerationConfig {
    pub fn options_for(&self, use_case: UseCase) -> GenerationOptions {
        GenerationOptions::new(self.models.for_use_case(use_case), self.temperature)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    // Configured key, else the provider's conventional variable
    pub fn resolved_api_key(&self) -> Option<String> {
        if !self.api_key.is_empty() {
            return Some(self.api_key.clone());
        }
        std::env::var(self.provider.api_key_env())
            .ok()
            .filter(|key| !key.is_empty())
    }

    pub fn build_generator(&self) -> Result<Arc<dyn TextGenerator>, GenerationError> {
        let api_key = self.resolved_api_key().unwrap_or_else(|| {
            warn!(
                "No API key configured; set generation.api_key or {}",
                self.provider.api_key_env()
            );
            String::new()
        });

        let generator: Arc<dyn TextGenerator> = match self.provider {
            Provider::Gemini => Arc::new(
                GeminiClient::new(api_key, self.base_url.clone()).with_timeout(self.timeout())?,
            ),
            Provider::OpenAI => Arc::new(
                OpenAIClient::new(api_key, self.base_url.clone()).with_timeout(self.timeout())?,
            ),
        };
        Ok(generator)
    }
}

impl Config {
    pub const ENV_PREFIX: &'static str = "MAILGEN";

    /// Load `config.toml` (or the file named by `MAILGEN_CONFIG`) plus
    /// `MAILGEN_*` environment overrides
    pub fn from_file() -> anyhow::Result<Self> {
        let path = std::env::var("MAILGEN_CONFIG").unwrap_or_else(|_| "config".to_string());
        Self::load(&path)
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path))?;

        settings
            .try_deserialize()
            .context("invalid configuration")
    }
}

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<Composer>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, GenerationError> {
        let generator = config.generation.build_generator()?;
        info!(
            provider = generator.provider(),
            temperature = config.generation.temperature,
            "Generation client ready"
        );
        Ok(Self::with_generator(generator, config))
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>, config: &Config) -> Self {
        Self {
            composer: Arc::new(Composer::new(generator, config.generation.clone())),
            static_dir: config.server.static_dir.clone(),
        }
    }
}
