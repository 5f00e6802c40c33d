//! Ollama synthesizer implementation.
//!
//! Talks to a local Ollama-compatible model server over HTTP. The demo was
//! tuned against small instruction-following models; any model the server
//! hosts will do, since the guard assumes nothing about output quality.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{DeptSqlError, Result};
use crate::synth::{SynthesisOptions, Synthesizer};

/// Default timeout for generation requests.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default Ollama API URL.
const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Ollama client configuration.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL for the Ollama API.
    pub base_url: String,
    /// Model to use (e.g., "llama3.2:3b", "qwen2.5-coder").
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl OllamaConfig {
    /// Creates a new config with the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: model.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Sets the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new("llama3.2:3b")
    }
}

/// Synthesizer backed by a local Ollama instance.
#[derive(Debug, Clone)]
pub struct OllamaSynthesizer {
    config: OllamaConfig,
    client: Client,
}

impl OllamaSynthesizer {
    /// Creates a new Ollama synthesizer with the given configuration.
    ///
    /// Failure here is fatal for the process: without a working HTTP client
    /// no question can ever be answered.
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DeptSqlError::synthesis(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Checks if the model server is available at the configured URL.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.config.base_url);
        self.client.get(&url).send().await.is_ok()
    }

    /// Returns the generate API endpoint URL.
    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url)
    }
}

#[async_trait]
impl Synthesizer for OllamaSynthesizer {
    async fn synthesize(&self, prompt: &str, options: &SynthesisOptions) -> Result<String> {
        let request = GenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            options: GenerateOptions {
                temperature: options.temperature,
                top_p: options.nucleus_p,
                num_predict: options.max_output_length,
            },
        };

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeptSqlError::synthesis("Request timed out. Try again.")
                } else if e.is_connect() {
                    DeptSqlError::synthesis(
                        "Failed to connect to the model server. Is it running? Try: ollama serve",
                    )
                } else {
                    DeptSqlError::synthesis(format!("Request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DeptSqlError::synthesis(format!(
                "Model server returned {}: {}",
                status, body
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DeptSqlError::synthesis(format!("Invalid response: {}", e)))?;

        Ok(body.response)
    }
}

/// Request body for the Ollama generate API.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

/// Sampling options in Ollama's naming.
#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
    num_predict: u32,
}

/// Response body from the Ollama generate API.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}
