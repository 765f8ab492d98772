/// Text-generation port trait
///
/// Defines the interface for hosted text-generation services.
/// Implementations: Anthropic. The port is injected into the server state
/// rather than constructed at module scope so the retry helper and the
/// analysis handler stay testable without a live network dependency.
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for generation requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Model identifier (e.g., "claude-sonnet-4-20250514")
    pub model: String,

    /// Maximum tokens in response
    pub max_tokens: u32,

    /// Temperature for generation (0.0 to 1.0)
    pub temperature: Option<f32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 3000,
            temperature: Some(0.3), // Lower temperature for more focused reports
        }
    }
}

/// Port trait for text-generation services
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerationPort: Send + Sync {
    /// Generate text for a single prompt
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
