//! HTTP server boundary
//!
//! Hosts the analysis endpoint; everything request-scoped flows through
//! `AppState`, so concurrent requests share nothing mutable.

pub mod handlers;
pub mod routing;
pub mod types;

use crate::adapters::services::llm::AnthropicService;
use crate::config::AppConfig;
use crate::ports::llm::{GenerationConfig, TextGenerationPort};
use anyhow::Result;
use axum::serve;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Injected text-generation service
    pub llm: Arc<dyn TextGenerationPort>,

    /// Fixed generation settings for every analysis
    pub generation: GenerationConfig,
}

/// Start the HTTP server with the Anthropic adapter
pub async fn start_server(config: AppConfig) -> Result<()> {
    let llm = AnthropicService::new(config.api_key)?;
    let state = AppState {
        llm: Arc::new(llm),
        generation: config.generation,
    };

    let app = routing::create_router(state).layer(CorsLayer::permissive());

    log::info!("Starting interview-insights server on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;

    serve(listener, app).await?;
    Ok(())
}
