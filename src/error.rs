/// Error types for Interview Insights
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No valid content: {0}")]
    NoValidContent(String),

    #[error("Service overloaded: {0}")]
    Overloaded(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM service error: {0}")]
    Llm(String),

    #[error("Max retries exceeded")]
    MaxRetriesExceeded,

    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Whether this error indicates a transient upstream condition worth retrying.
    ///
    /// Only overload and rate-limit responses qualify; everything else
    /// (bad input, missing configuration, unclassified failures) surfaces
    /// immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Overloaded(_) | AppError::RateLimited(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Convert AppError to a string for wire responses
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.to_string()
    }
}
