// OpenAI-compatible chat completions implementation
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use super::generation::{GenerationError, GenerationOptions, GenerationResult, TextGenerator};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Serialize)]
struct OpenAIMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAIMessage<'a>>,
    temperature: f32,
}

// Only the fields needed to extract the reply
#[derive(Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
    model: Option<String>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIReply,
    finish_reason: Option<String>,
}

// `content` is either a string or a list of typed parts
#[derive(Deserialize)]
struct OpenAIReply {
    content: Option<GenerationResult>,
    refusal: Option<String>,
}

// OpenAI model client
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
    additional_headers: HashMap<String, String>,
}

impl OpenAIClient {
    /// Create a new OpenAI-compatible client
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            additional_headers: HashMap::new(),
        }
    }

    /// Bound every outbound request by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, GenerationError> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Add additional request headers
    pub fn with_additional_header(mut self, key: String, value: String) -> Self {
        self.additional_headers.insert(key, value);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn into_result(response: OpenAIResponse) -> Result<GenerationResult, GenerationError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(GenerationError::EmptyResponse)?;

    if let Some(refusal) = choice.message.refusal {
        return Err(GenerationError::Blocked(refusal));
    }

    match choice.message.content {
        Some(content) => Ok(content),
        None => match choice.finish_reason {
            Some(reason) if reason == "content_filter" => Err(GenerationError::Blocked(reason)),
            _ => Err(GenerationError::EmptyResponse),
        },
    }
}

#[async_trait]
impl TextGenerator for OpenAIClient {
    fn provider(&self) -> &'static str {
        "openai"
    }

    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, GenerationError> {
        let request_body = OpenAIRequest {
            model: &options.model,
            messages: vec![OpenAIMessage {
                role: "user",
                content: prompt,
            }],
            temperature: options.temperature,
        };

        // Build complete API path, concatenating base_url with specific endpoint
        let api_url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let mut request = self
            .client
            .post(&api_url)
            .header("Authorization", format!("Bearer {}", self.api_key));
        for (key, value) in &self.additional_headers {
            request = request.header(key, value);
        }

        debug!(model = %options.model, prompt_chars = prompt.len(), "Sending chat completion request");
        let response = request.json(&request_body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(GenerationError::Provider { status, body });
        }

        let text = response.text().await?;
        let parsed: OpenAIResponse =
            serde_json::from_str(&text).map_err(|e| GenerationError::Malformed(e.to_string()))?;
        if let Some(model) = parsed.model.as_deref() {
            debug!(served_by = model, "Chat completion received");
        }
        into_result(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fragment;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<GenerationResult, GenerationError> {
        into_result(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_string_content() {
        let result = parse(json!({
            "model": "gpt-4o-mini",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hello"}, "finish_reason": "stop"}]
        }))
        .unwrap();
        assert_eq!(result, GenerationResult::Text("Hello".to_string()));
    }

    #[test]
    fn test_part_list_content() {
        let result = parse(json!({
            "choices": [{"message": {"role": "assistant", "content": [
                {"type": "text", "text": "foo"},
                {"type": "refusal", "refusal": "no"},
                {"type": "text", "text": "bar"}
            ]}}]
        }))
        .unwrap();
        assert_eq!(
            result,
            GenerationResult::Fragments(vec![Fragment::text("foo"), Fragment::Other, Fragment::text("bar")])
        );
    }

    #[test]
    fn test_refusal_is_blocked() {
        let err = parse(json!({
            "choices": [{"message": {"role": "assistant", "content": null, "refusal": "I can't help"}}]
        }))
        .unwrap_err();
        assert!(matches!(err, GenerationError::Blocked(reason) if reason == "I can't help"));
    }

    #[test]
    fn test_no_choices_is_empty() {
        let err = parse(json!({"choices": []})).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_generate_against_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_header("x-trace", "1")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "Write something"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"choices": [{"message": {"role": "assistant", "content": "Done"}}]}).to_string(),
            )
            .create_async()
            .await;

        let client = OpenAIClient::new("sk-test".to_string(), Some(server.url()))
            .with_additional_header("x-trace".to_string(), "1".to_string());
        let result = client
            .generate("Write something", &GenerationOptions::new("gpt-4o-mini", 0.7))
            .await
            .unwrap();

        assert_eq!(result, GenerationResult::Text("Done".to_string()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_provider_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let client = OpenAIClient::new("sk-test".to_string(), Some(server.url()));
        let err = client
            .generate("hi", &GenerationOptions::new("gpt-4o-mini", 0.7))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Provider { status, .. } if status.as_u16() == 500));
    }
}
