//! Gemini API client
//!
//! - Endpoint: POST /v1beta/models/{model}:generateContent
//! - Auth: `x-goog-api-key` header
//! - No request timeout: the transport's defaults apply

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::{BridgeError, Result};
use crate::gateway::model::{GenerationRequest, GenerativeModel};
use crate::gateway::prompt::GenerationConfig;

/// Default Gemini API endpoint
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    /// Create client against the public Gemini endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_GEMINI_URL)
    }

    /// Create client against a custom endpoint (proxy, test server)
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder().build().map_err(BridgeError::HttpError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a model's generateContent call
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let url = self.endpoint(&request.model);
        let body = GenerateContentRequest::from_prompt(&request.prompt, request.config);

        tracing::debug!(model = %request.model, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &request.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BridgeError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| BridgeError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            tracing::warn!(%status, "Gemini API returned an error status");
            return Err(BridgeError::Transport(api_error_message(status, &raw)));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&raw)?;
        Ok(parsed.text())
    }
}

/// Prefer the service's own error message; fall back to the status line
fn api_error_message(status: reqwest::StatusCode, raw: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(raw)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// generateContent request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str, config: GenerationConfig) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: config,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// generateContent response body (only the fields we read)
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate; empty when nothing usable came back
    fn text(&self) -> String {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            tracing::warn!(block_reason = reason, "prompt was blocked");
        }

        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}
