// Model module definition
mod gemini;
mod generation;
mod openai;

#[cfg(test)]
pub(crate) mod fake;

// Re-export module content
pub use gemini::{GeminiClient, DEFAULT_GEMINI_BASE_URL};
pub use generation::{Fragment, GenerationError, GenerationOptions, GenerationResult, TextGenerator};
pub use openai::{OpenAIClient, DEFAULT_OPENAI_BASE_URL};

#[cfg(test)]
pub use generation::MockTextGenerator;
