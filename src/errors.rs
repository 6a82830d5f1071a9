//! Error types for HealthBridge
//!
//! Library code returns `BridgeError`; the binary and config loading use
//! `anyhow` with context on top of it.

use thiserror::Error;

/// Main error type for the HealthBridge platform
#[derive(Error, Debug)]
pub enum BridgeError {
    /// No API credential was configured
    #[error("Gemini API key is not configured")]
    MissingCredential,

    /// The generative-AI call failed (network, auth, rate limit, ...)
    #[error("{0}")]
    Transport(String),

    /// The call succeeded but produced no usable text
    #[error("No response received from AI model")]
    EmptyResponse,

    /// Form input rejected before any simulated submission
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for HealthBridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

impl BridgeError {
    /// Shorthand for form validation failures
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        BridgeError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
