//! Mock synthesizer for testing and offline demos.
//!
//! Provides deterministic responses based on input patterns, so the guard
//! and pipeline can be exercised without a model server.

use async_trait::async_trait;

use crate::error::{DeptSqlError, Result};
use crate::synth::{SynthesisOptions, Synthesizer};

/// Mock synthesizer that returns canned SQL based on question patterns.
#[derive(Debug, Clone, Default)]
pub struct MockSynthesizer {
    /// Custom response mappings (pattern -> response), checked first.
    custom_responses: Vec<(String, String)>,
}

impl MockSynthesizer {
    /// Creates a new mock synthesizer with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a custom response mapping.
    ///
    /// When the prompt contains `pattern` (case-insensitive), the mock
    /// returns `response` verbatim.
    pub fn with_response(
        mut self,
        pattern: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        self.custom_responses
            .push((pattern.into(), response.into()));
        self
    }

    /// Generates a canned response for the given prompt.
    fn mock_response(&self, prompt: &str) -> String {
        let prompt_lower = prompt.to_lowercase();

        for (pattern, response) in &self.custom_responses {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return response.clone();
            }
        }

        // The prompt embeds the question after the few-shot examples; only
        // match on the tail so the examples themselves never trigger.
        let question = prompt_lower
            .rsplit("current question:")
            .next()
            .unwrap_or(&prompt_lower)
            .to_string();

        if question.contains("all departments") || question.contains("show departments") {
            return "```sql\nSELECT * FROM Departments;\n```".to_string();
        }

        if question.contains("department names") || question.contains("list") {
            return "SELECT Name FROM Departments;".to_string();
        }

        if question.contains("manager") {
            return "SELECT Name, Manager FROM Departments;".to_string();
        }

        "Name = 'Sales'".to_string()
    }
}

#[async_trait]
impl Synthesizer for MockSynthesizer {
    async fn synthesize(&self, prompt: &str, _options: &SynthesisOptions) -> Result<String> {
        Ok(self.mock_response(prompt))
    }
}

/// Synthesizer whose every call fails, for exercising the per-request
/// failure path without a model server.
#[derive(Debug, Clone)]
pub struct FailingSynthesizer {
    message: String,
}

impl FailingSynthesizer {
    /// Creates a failing synthesizer with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingSynthesizer {
    fn default() -> Self {
        Self::new("simulated model failure")
    }
}

#[async_trait]
impl Synthesizer for FailingSynthesizer {
    async fn synthesize(&self, _prompt: &str, _options: &SynthesisOptions) -> Result<String> {
        Err(DeptSqlError::synthesis(self.message.clone()))
    }
}
