use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when requesting a completion
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Completion was empty or malformed")]
    EmptyCompletion,
}

/// Completion capability injected into every component
///
/// The system role scopes the model's persona per operation; the model id
/// is construction state on the client and read-only afterwards. Carried in
/// `AppState` as `Arc<dyn CompletionClient>` so tests can swap in scripted
/// doubles.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_role: &str, user_prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

/// Client for an OpenAI-compatible chat completion API
pub struct OpenAiClient {
    api_base: String,
    api_key: String,
    model: String,
    client: Client,
}

impl OpenAiClient {
    /// Create a new completion client
    ///
    /// Timeouts live here, not in component logic: a slow or hung remote
    /// call surfaces as a `RequestError` after `timeout_secs`.
    pub fn new(api_base: String, api_key: String, model: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_base,
            api_key,
            model,
            client,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, system_role: &str, user_prompt: &str) -> Result<String, LlmError> {
        let url = format!(
            "{}/chat/completions",
            self.api_base.trim_end_matches('/')
        );

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_role.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Completion request failed: {} - {}", status, body);
            return Err(LlmError::ApiError(format!(
                "Completion request failed: {}",
                status
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;

        let text = completion
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or(LlmError::EmptyCompletion)?;

        if text.trim().is_empty() {
            return Err(LlmError::EmptyCompletion);
        }

        tracing::debug!("Received completion ({} chars)", text.len());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenAiClient::new(
            "https://api.openai.com/v1".to_string(),
            "test_key".to_string(),
            "gpt-4".to_string(),
            30,
        );

        assert_eq!(client.api_base, "https://api.openai.com/v1");
        assert_eq!(client.model(), "gpt-4");
    }

    #[tokio::test]
    async fn test_complete_parses_chat_response() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices": [{"message": {"role": "assistant", "content": "Strengths:\n- RAG expertise"}}]}"#,
            )
            .create_async()
            .await;

        let client = OpenAiClient::new(server.url(), "test_key".to_string(), "gpt-4".to_string(), 5);

        let text = client
            .complete("You are an analyzer.", "Analyze this profile.")
            .await
            .unwrap();

        assert!(text.contains("RAG expertise"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_maps_api_errors() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body(r#"{"error": "rate limited"}"#)
            .create_async()
            .await;

        let client = OpenAiClient::new(server.url(), "test_key".to_string(), "gpt-4".to_string(), 5);

        let result = client.complete("role", "prompt").await;
        assert!(matches!(result, Err(LlmError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_complete_rejects_empty_choices() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let client = OpenAiClient::new(server.url(), "test_key".to_string(), "gpt-4".to_string(), 5);

        let result = client.complete("role", "prompt").await;
        assert!(matches!(result, Err(LlmError::EmptyCompletion)));
    }
}
