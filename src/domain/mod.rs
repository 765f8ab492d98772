/// Domain layer - core business models
///
/// These models are platform-agnostic and represent the discovery report,
/// the prompt that produces it, and the parser that extracts it.
pub mod models;
pub mod parser;
pub mod prompts;

pub use models::{DiscoveryReport, Feature, Problem, TopPriority};
pub use parser::parse_analysis;
pub use prompts::{build_analysis_prompt, PromptTemplates};
