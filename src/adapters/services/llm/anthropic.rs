//! Anthropic LLM service adapter
//!
//! Implements the TextGenerationPort for Anthropic's Messages API.
//! Upstream failures are classified so the retry helper can tell transient
//! overload/rate-limit conditions apart from everything else.

use crate::error::{AppError, Result};
use crate::ports::llm::{GenerationConfig, TextGenerationPort};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Anthropic's non-standard "overloaded" status code
const OVERLOADED_STATUS: u16 = 529;

/// Anthropic service implementation
pub struct AnthropicService {
    client: Client,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: String,
}

/// Error envelope returned by the API on failure responses
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(rename = "type")]
    error_type: String,
    message: String,
}

impl AnthropicService {
    /// Create a new Anthropic service with the given API key
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, api_key })
    }

    /// Map a failure response to the error taxonomy
    ///
    /// Overload is signalled by status 529, an "overloaded_error" type tag,
    /// or an "overloaded" substring in the message; rate limiting by status
    /// 429 or a "rate_limit_error" type tag. Anything else is unclassified.
    fn classify_error(status: StatusCode, body: &str) -> AppError {
        let (error_type, message) = match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(envelope) => (envelope.error.error_type, envelope.error.message),
            Err(_) => (String::new(), body.to_string()),
        };

        if status.as_u16() == OVERLOADED_STATUS
            || error_type == "overloaded_error"
            || message.to_lowercase().contains("overloaded")
        {
            AppError::Overloaded(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS || error_type == "rate_limit_error" {
            AppError::RateLimited(message)
        } else {
            AppError::Llm(format!("Messages request failed ({}): {}", status, message))
        }
    }
}

#[async_trait]
impl TextGenerationPort for AnthropicService {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        let request_body = MessagesRequest {
            model: config.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        log::info!(
            "Calling Anthropic messages API with model: {}",
            config.model
        );

        let response = self
            .client
            .post(format!("{}/messages", ANTHROPIC_API_BASE))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Messages request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::classify_error(status, &error_text));
        }

        let messages_response: MessagesResponse = response.json().await.map_err(|e| {
            AppError::Llm(format!("Failed to parse messages response: {}", e))
        })?;

        let content = messages_response
            .content
            .iter()
            .find(|block| block.block_type == "text")
            .map(|block| block.text.clone())
            .ok_or_else(|| AppError::Llm("No text content blocks returned".to_string()))?;

        log::info!(
            "Anthropic completion successful, generated {} characters",
            content.len()
        );

        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
