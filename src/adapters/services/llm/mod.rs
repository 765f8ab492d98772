//! LLM service adapters
//!
//! Implementations of the TextGenerationPort trait:
//! - Anthropic (Claude)

pub mod anthropic;

pub use anthropic::AnthropicService;
