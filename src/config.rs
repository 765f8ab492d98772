//! Environment-driven application configuration
//!
//! The API credential comes from the environment so a missing key surfaces
//! as a setup failure at startup, distinct from runtime failures.

use crate::error::{AppError, Result};
use crate::ports::llm::GenerationConfig;
use std::net::SocketAddr;

/// Environment variable holding the Anthropic API key
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Environment variable overriding the listen address
pub const BIND_ADDR_VAR: &str = "INSIGHTS_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

/// Application configuration loaded at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Anthropic API key
    pub api_key: String,

    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,

    /// Fixed generation settings used for every analysis
    pub generation: GenerationConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| AppError::Config(format!("{} is not set", API_KEY_VAR)))?;

        let bind_addr = std::env::var(BIND_ADDR_VAR)
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid {}: {}", BIND_ADDR_VAR, e)))?;

        Ok(Self {
            api_key,
            bind_addr,
            generation: GenerationConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr_parses() {
        let addr: SocketAddr = DEFAULT_BIND_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 8787);
    }

    #[test]
    fn test_generation_defaults() {
        let generation = GenerationConfig::default();
        assert_eq!(generation.model, "claude-sonnet-4-20250514");
        assert_eq!(generation.max_tokens, 3000);
    }
}
