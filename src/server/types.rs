//! Wire types for the HTTP API

use crate::domain::models::DiscoveryReport;
use crate::error::AppError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Request body for POST /api/analyze
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Ordered list of raw interview transcripts
    #[serde(default)]
    pub transcripts: Option<Vec<String>>,
}

/// Response body for a successful analysis
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Raw analysis text as returned by the model
    pub analysis: String,

    /// Typed records extracted from the analysis text
    pub report: DiscoveryReport,

    /// How many transcripts went into the prompt
    pub transcript_count: usize,

    /// Unix timestamp of when the report was produced
    pub generated_at: i64,
}

/// Coarse failure classification for the presentation layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStatus {
    BadInput,
    ServiceUnavailable,
    Error,
}

/// Error body returned for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: ErrorStatus,
}

impl ErrorResponse {
    /// Map an application error to an HTTP status and wire body
    ///
    /// Client-input failures keep their specific message; upstream
    /// exhaustion and unclassified failures collapse to a single
    /// user-facing message each.
    pub fn from_app_error(error: &AppError) -> (StatusCode, Self) {
        match error {
            AppError::InvalidInput(_) | AppError::NoValidContent(_) => (
                StatusCode::BAD_REQUEST,
                Self {
                    error: error.to_string(),
                    status: ErrorStatus::BadInput,
                },
            ),
            AppError::Overloaded(_) | AppError::RateLimited(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Self {
                    error: "The analysis service is temporarily unavailable. Please try again shortly.".to_string(),
                    status: ErrorStatus::ServiceUnavailable,
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Self {
                    error: format!("Analysis failed: {}", error),
                    status: ErrorStatus::Error,
                },
            ),
        }
    }
}

/// Response body for GET /status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub provider: String,
    pub configured: bool,
}
