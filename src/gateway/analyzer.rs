//! Symptom analyzer: the gateway boundary
//!
//! `analyze_outcome` reports what happened; `analyze` folds every failure
//! into the apology text so the chat panel only ever sees a string.

use crate::errors::BridgeError;
use crate::gateway::model::{GenerationRequest, GenerativeModel};
use crate::gateway::prompt::{build_prompt, GenerationConfig, DEFAULT_MODEL};

/// Fixed opening of every fallback message
pub const APOLOGY_PREAMBLE: &str = "I apologize, but I encountered an error";

const APOLOGY_SUBJECT: &str = "while analyzing your symptoms";

const APOLOGY_ADVICE: &str = "Please try again or consult a healthcare professional.";

/// Result of one analysis attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Model text, verbatim
    Success(String),
    /// No credential configured; no call was made
    ConfigError,
    /// The call failed; carries the underlying message
    TransportError(String),
    /// The call succeeded with no usable text
    EmptyResponse,
}

impl AnalysisOutcome {
    /// Collapse to the string shown in the transcript
    pub fn into_display_text(self) -> String {
        match self {
            AnalysisOutcome::Success(text) => text,
            AnalysisOutcome::ConfigError => {
                fallback_message(Some(&BridgeError::MissingCredential.to_string()))
            }
            AnalysisOutcome::TransportError(detail) => fallback_message(Some(&detail)),
            AnalysisOutcome::EmptyResponse => {
                fallback_message(Some(&BridgeError::EmptyResponse.to_string()))
            }
        }
    }
}

impl From<BridgeError> for AnalysisOutcome {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::MissingCredential => AnalysisOutcome::ConfigError,
            BridgeError::EmptyResponse => AnalysisOutcome::EmptyResponse,
            BridgeError::Transport(detail) => AnalysisOutcome::TransportError(detail),
            other => AnalysisOutcome::TransportError(other.to_string()),
        }
    }
}

/// Build the apology text, embedding the error message when there is one
pub fn fallback_message(detail: Option<&str>) -> String {
    match detail.map(str::trim).filter(|d| !d.is_empty()) {
        Some(detail) => format!(
            "{} {}: {}. {}",
            APOLOGY_PREAMBLE, APOLOGY_SUBJECT, detail, APOLOGY_ADVICE
        ),
        None => format!("{} {}. {}", APOLOGY_PREAMBLE, APOLOGY_SUBJECT, APOLOGY_ADVICE),
    }
}

/// Gateway from free-text symptoms to the generative model
pub struct SymptomAnalyzer<M> {
    model: M,
    api_key: Option<String>,
    model_name: String,
    config: GenerationConfig,
}

impl<M: GenerativeModel> SymptomAnalyzer<M> {
    /// Create analyzer with the default model and sampling parameters
    pub fn new(model: M, api_key: Option<String>) -> Self {
        Self::with_model_name(model, api_key, DEFAULT_MODEL)
    }

    pub fn with_model_name(model: M, api_key: Option<String>, model_name: &str) -> Self {
        SymptomAnalyzer {
            model,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model_name: model_name.to_string(),
            config: GenerationConfig::SYMPTOM_ANALYSIS,
        }
    }

    /// Whether a credential is present
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Run one analysis and report its outcome; makes at most one model call
    pub async fn analyze_outcome(&self, symptoms: &str) -> AnalysisOutcome {
        let api_key = match &self.api_key {
            Some(key) => key.clone(),
            None => {
                tracing::error!("symptom analysis requested without a configured API key");
                return AnalysisOutcome::ConfigError;
            }
        };

        let request = GenerationRequest {
            api_key,
            model: self.model_name.clone(),
            prompt: build_prompt(symptoms),
            config: self.config,
        };

        match self.model.generate(&request).await {
            Ok(text) if text.trim().is_empty() => {
                tracing::error!("model returned an empty response");
                AnalysisOutcome::EmptyResponse
            }
            Ok(text) => {
                tracing::debug!(chars = text.len(), "analysis succeeded");
                AnalysisOutcome::Success(text)
            }
            Err(err) => {
                tracing::error!(error = %err, "error analyzing symptoms");
                AnalysisOutcome::from(err)
            }
        }
    }

    /// Analyze symptoms; always resolves with display text
    pub async fn analyze(&self, symptoms: &str) -> String {
        self.analyze_outcome(symptoms).await.into_display_text()
    }
}
