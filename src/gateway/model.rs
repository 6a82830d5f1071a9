//! The seam between the analyzer and whatever produces text

use async_trait::async_trait;
use std::fmt;

use crate::errors::Result;
use crate::gateway::prompt::GenerationConfig;

/// One text-generation call: credential, model identifier, prompt, sampling parameters
#[derive(Clone, PartialEq)]
pub struct GenerationRequest {
    pub api_key: String,
    pub model: String,
    pub prompt: String,
    pub config: GenerationConfig,
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("prompt_len", &self.prompt.len())
            .field("config", &self.config)
            .finish()
    }
}

/// A text-generation backend
///
/// Implementations return the generated text as-is; an empty string is a
/// legitimate return value and is judged by the caller.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

#[async_trait]
impl<M: GenerativeModel + ?Sized> GenerativeModel for std::sync::Arc<M> {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        (**self).generate(request).await
    }
}
