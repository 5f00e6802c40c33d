//! Query synthesis: turning natural-language questions into candidate SQL.
//!
//! Provides the trait for text-generation backends plus the concrete clients.
//! Whatever comes back from a synthesizer is untrusted and must go through
//! the query guard before execution.

pub mod mock;
pub mod ollama;
pub mod prompt;

pub use mock::{FailingSynthesizer, MockSynthesizer};
pub use ollama::{OllamaConfig, OllamaSynthesizer};
pub use prompt::build_prompt;

use async_trait::async_trait;
use std::str::FromStr;

use crate::error::Result;

/// Sampling options for a synthesis call.
///
/// Fixed per deployment; the defaults match the demo's tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisOptions {
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling probability mass.
    pub nucleus_p: f32,
    /// Maximum number of generated tokens.
    pub max_output_length: u32,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            nucleus_p: 0.8,
            max_output_length: 128,
        }
    }
}

/// Trait for text-generation backends that produce candidate SQL.
///
/// Implementations must be thread-safe (Send + Sync); a single client is
/// built at startup and shared for the process lifetime.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Generates a completion for the given prompt.
    ///
    /// Returns the raw model output. Callers must treat it as untrusted.
    async fn synthesize(&self, prompt: &str, options: &SynthesisOptions) -> Result<String>;
}

/// Synthesizer backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SynthesizerProvider {
    /// Local Ollama-compatible model server.
    #[default]
    Ollama,
    /// Deterministic canned responses (no model required).
    Mock,
}

impl SynthesizerProvider {
    /// Returns the provider as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::Mock => "mock",
        }
    }
}

impl FromStr for SynthesizerProvider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "mock" => Ok(Self::Mock),
            _ => Err(format!("Unknown synthesizer provider: {}", s)),
        }
    }
}

impl std::fmt::Display for SynthesizerProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = SynthesisOptions::default();
        assert_eq!(opts.temperature, 0.3);
        assert_eq!(opts.nucleus_p, 0.8);
        assert_eq!(opts.max_output_length, 128);
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!(
            "ollama".parse::<SynthesizerProvider>().unwrap(),
            SynthesizerProvider::Ollama
        );
        assert_eq!(
            "Mock".parse::<SynthesizerProvider>().unwrap(),
            SynthesizerProvider::Mock
        );
        assert!("gpt".parse::<SynthesizerProvider>().is_err());
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(format!("{}", SynthesizerProvider::Ollama), "ollama");
        assert_eq!(format!("{}", SynthesizerProvider::Mock), "mock");
    }

    #[tokio::test]
    async fn test_mock_implements_trait() {
        let client: Box<dyn Synthesizer> = Box::new(MockSynthesizer::new());
        let response = client
            .synthesize("Show all departments", &SynthesisOptions::default())
            .await
            .unwrap();
        assert!(response.to_uppercase().contains("SELECT"));
    }
}
