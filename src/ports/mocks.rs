//! Mock implementations for testing

use crate::error::{AppError, Result};
use crate::ports::llm::{GenerationConfig, TextGenerationPort};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted text-generation mock for testing
///
/// Returns a queued sequence of results, one per call, so retry behavior
/// can be exercised deterministically (e.g. two overload errors followed
/// by a success).
#[derive(Clone, Default)]
pub struct ScriptedGeneration {
    responses: Arc<Mutex<VecDeque<Result<String>>>>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next result to return
    pub fn push(&self, response: Result<String>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Number of generate calls made so far
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TextGenerationPort for ScriptedGeneration {
    async fn generate(&self, _prompt: &str, _config: &GenerationConfig) -> Result<String> {
        *self.calls.lock().unwrap() += 1;
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Other("mock script exhausted".to_string())))
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_sequence_and_exhaustion() {
        let mock = ScriptedGeneration::new();
        mock.push(Ok("first".to_string()));
        mock.push(Err(AppError::Overloaded("busy".to_string())));

        let config = GenerationConfig::default();
        let result = tokio_test::block_on(mock.generate("prompt", &config));
        assert_eq!(result.unwrap(), "first");

        let result = tokio_test::block_on(mock.generate("prompt", &config));
        assert!(matches!(result, Err(AppError::Overloaded(_))));

        // Past the end of the script
        let result = tokio_test::block_on(mock.generate("prompt", &config));
        assert!(matches!(result, Err(AppError::Other(_))));
        assert_eq!(mock.call_count(), 3);
    }
}
