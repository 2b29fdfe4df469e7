// In-memory generator for tests
use async_trait::async_trait;
use std::sync::Mutex;

use super::generation::{GenerationError, GenerationOptions, GenerationResult, TextGenerator};

// Canned reply: a result or the message of a Malformed error
type Reply = Result<GenerationResult, String>;

// Returns a fixed reply and records every prompt it receives
pub struct FakeGenerator {
    reply: Reply,
    calls: Mutex<Vec<(String, GenerationOptions)>>,
}

impl FakeGenerator {
    pub fn replying(result: impl Into<GenerationResult>) -> Self {
        Self {
            reply: Ok(result.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(cause: &str) -> Self {
        Self {
            reply: Err(cause.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, GenerationOptions)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(prompt, _)| prompt.clone())
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    fn provider(&self) -> &'static str {
        "fake"
    }

    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), options.clone()));
        self.reply.clone().map_err(GenerationError::Malformed)
    }
}
