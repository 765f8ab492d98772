//! HTTP endpoint handlers

use crate::domain::{parse_analysis, prompts::build_analysis_prompt};
use crate::error::{AppError, Result};
use crate::server::types::{
    AnalyzeRequest, AnalyzeResponse, ErrorResponse, StatusResponse,
};
use crate::server::AppState;
use crate::utils::retry::{retry_with_backoff, DEFAULT_MAX_ATTEMPTS};
use axum::extract::{Json, State};
use axum::http::StatusCode;
use chrono::Utc;

/// Base backoff delay for the analysis call, in milliseconds
const ANALYZE_BASE_DELAY_MS: u64 = 1500;

/// GET /status - service health and configuration
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        provider: state.llm.provider_name().to_string(),
        configured: state.llm.is_configured(),
    })
}

/// POST /api/analyze - run a discovery analysis over a set of transcripts
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> std::result::Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    match run_analysis(&state, request).await {
        Ok(response) => Ok(Json(response)),
        Err(error) => {
            log::error!("Analysis request failed: {}", error);
            let (status, body) = ErrorResponse::from_app_error(&error);
            Err((status, Json(body)))
        }
    }
}

/// Validate input, call the model through the retry helper, parse the result
async fn run_analysis(state: &AppState, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    let transcripts = validate_transcripts(request.transcripts)?;

    log::info!("Analyzing {} transcripts", transcripts.len());
    let prompt = build_analysis_prompt(&transcripts);

    let llm = &state.llm;
    let generation = &state.generation;
    let prompt_ref = prompt.as_str();
    let analysis = retry_with_backoff(
        || llm.generate(prompt_ref, generation),
        DEFAULT_MAX_ATTEMPTS,
        ANALYZE_BASE_DELAY_MS,
    )
    .await?;

    let report = parse_analysis(&analysis);
    log::info!(
        "Analysis complete: {} problems, {} features, top priority: {}",
        report.problems.len(),
        report.features.len(),
        report.top_priority.is_some()
    );

    Ok(AnalyzeResponse {
        analysis,
        report,
        transcript_count: transcripts.len(),
        generated_at: Utc::now().timestamp(),
    })
}

/// Reject absent/empty lists, then drop whitespace-only entries
///
/// The two failure modes are distinct: a missing or empty list is an
/// invalid request, while a list whose every entry trims to nothing is a
/// no-valid-content condition. Both are raised before any remote call.
fn validate_transcripts(transcripts: Option<Vec<String>>) -> Result<Vec<String>> {
    let transcripts = transcripts
        .filter(|list| !list.is_empty())
        .ok_or_else(|| AppError::InvalidInput("transcripts must be a non-empty list".to_string()))?;

    let valid: Vec<String> = transcripts
        .into_iter()
        .filter(|t| !t.trim().is_empty())
        .collect();

    if valid.is_empty() {
        return Err(AppError::NoValidContent(
            "every transcript was empty".to_string(),
        ));
    }

    Ok(valid)
}
