use crate::domain::error::DomainError;
use crate::domain::ports::language_model::LanguageModel;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Completion model served by a local Ollama instance (`/api/generate`).
///
/// Deterministic sampling (temperature 0), one request per call, no
/// timeout beyond the HTTP client's defaults.
pub struct OllamaModel {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaModel {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }
}

#[async_trait]
impl LanguageModel for OllamaModel {
    async fn invoke(&self, prompt: &str) -> Result<String, DomainError> {
        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "invoking model");

        let resp = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
                options: GenerateOptions { temperature: 0.0 },
            })
            .send()
            .await
            .map_err(|e| DomainError::Model(format!("Ollama request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Model(format!("Ollama API {status}: {body}")));
        }

        let body: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Model(format!("Ollama response unreadable: {e}")))?;
        Ok(body.response)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
