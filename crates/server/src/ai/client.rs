//! Ollama client for the `/api/generate` and `/api/tags` endpoints

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// Low temperature keeps the report close to the supplied facts
const TEMPERATURE: f32 = 0.3;
const TOP_P: f32 = 0.9;

/// Default timeout for the `/api/tags` reachability probe
const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Failure talking to the model server
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Cannot connect to Ollama at {0}")]
    Connection(String),

    #[error("Ollama request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Ollama API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse Ollama response: {0}")]
    Parse(String),
}

/// Client for a local Ollama instance
#[derive(Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    timeout_secs: u64,
    health_timeout: Duration,
}

/// Request body for `/api/generate`
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

/// Fixed sampling parameters
#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
}

/// Non-streaming response from `/api/generate`
#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaClient {
    /// Create a client for the given server, model and generation timeout
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Result<Self, InferenceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| InferenceError::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            timeout_secs,
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
        })
    }

    /// Override how long `check_health` waits for `/api/tags`
    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    pub fn from_config(config: &Config) -> Result<Self, InferenceError> {
        Self::new(
            &config.ollama_url,
            &config.ollama_model,
            config.ollama_timeout_secs,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run a single non-streaming generation and return the response text
    pub async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::Parse(e.to_string()))?;

        Ok(parsed.response)
    }

    /// Whether the model server answers `/api/tags` successfully
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);

        match self.http.get(&url).timeout(self.health_timeout).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Ollama health probe rejected");
                false
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ollama health probe failed");
                false
            }
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> InferenceError {
        if e.is_connect() {
            InferenceError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            InferenceError::Timeout(self.timeout_secs)
        } else {
            InferenceError::Http(e.to_string())
        }
    }
}
