//! Interview Insights
//!
//! A small web service that turns customer-interview transcripts into an
//! AI-generated product-discovery report: identified problems, recommended
//! features, and a single top-priority recommendation.
//!
//! The core is deliberately thin: one retry-wrapped call to a hosted
//! text-generation API (`utils::retry`, `adapters::services::llm`) and a
//! line-oriented parser (`domain::parser`) that turns the model's free-form
//! response into typed records.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod server;
pub mod utils;

pub use config::AppConfig;
pub use error::{AppError, Result};
