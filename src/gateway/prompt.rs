//! Prompt template and generation parameters
//!
//! Both are policy constants: nothing here is user-tunable at runtime.

use serde::Serialize;

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Sampling parameters sent with every analysis request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    pub const SYMPTOM_ANALYSIS: GenerationConfig = GenerationConfig {
        temperature: 1.0,
        top_p: 0.95,
        top_k: 40,
        max_output_tokens: 8192,
    };
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::SYMPTOM_ANALYSIS
    }
}

const DISCLAIMER: &str = "Note: This is for informational purposes only. Always consult a healthcare professional for proper diagnosis and treatment.";

/// Wrap raw symptom text in the four-section analysis template
pub fn build_prompt(symptoms: &str) -> String {
    format!(
        r#"As a medical AI assistant, analyze the following symptoms and provide a detailed response:
{symptoms}

Please include:
1. Possible conditions or diseases
2. Severity assessment
3. Recommended next steps
4. Whether immediate medical attention is needed

{DISCLAIMER}"#
    )
}
