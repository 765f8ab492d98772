//! Prompt template for product-discovery analysis
//!
//! The template pins the exact section headers and field labels the response
//! parser recognizes, so template and parser must be kept in sync.

/// Default prompt templates for analysis
pub struct PromptTemplates;

impl PromptTemplates {
    /// Get the discovery-analysis prompt template
    ///
    /// Contains a single `{interviews}` placeholder for the serialized
    /// transcripts.
    pub fn discovery_analysis() -> &'static str {
        r#"You are a product-discovery analyst. Analyze the following customer interview transcripts and produce a product-discovery report.

Interview Transcripts:
{interviews}

Respond in exactly the following format, using these section headers and field labels verbatim.

PROBLEMS IDENTIFIED
List at least 3 problems. For each problem:
Problem: <short problem statement>
Mentioned in: <how many interviews mention it, e.g. 2/3>
Impact: <High, Medium, or Low>
Evidence:
- "<direct quote from a transcript>"

RECOMMENDED FEATURES
List at least 3 features. For each feature:
Feature: <feature name>
Why: <which problem it addresses and how>
Effort: <Small, Medium, or Large>
Priority: <P0, P1, or P2>

TOP PRIORITY
What to build first: <the single most important feature>
Why: <rationale>
Expected impact: <expected effect on customers>
Customer evidence: <the strongest supporting quote>"#
    }
}

/// Serialize transcripts into one numbered-interview block
///
/// Deterministic: the same ordered input always produces the same string.
/// Callers filter out empty/whitespace-only transcripts before this point.
pub fn format_transcripts(transcripts: &[String]) -> String {
    transcripts
        .iter()
        .enumerate()
        .map(|(i, text)| format!("--- Interview {} ---\n{}", i + 1, text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the full analysis prompt for a set of transcripts
pub fn build_analysis_prompt(transcripts: &[String]) -> String {
    PromptTemplates::discovery_analysis().replace("{interviews}", &format_transcripts(transcripts))
}
