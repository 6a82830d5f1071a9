//! Symptom analysis gateway
//!
//! Wraps the external generative-AI call behind a boundary that never
//! fails: every error is folded into a display string for the chat panel.

pub mod analyzer;
pub mod client;
pub mod model;
pub mod prompt;

// Re-export commonly used types
pub use analyzer::{AnalysisOutcome, SymptomAnalyzer, APOLOGY_PREAMBLE};
pub use client::{GeminiClient, DEFAULT_GEMINI_URL};
pub use model::{GenerationRequest, GenerativeModel};
pub use prompt::{build_prompt, GenerationConfig, DEFAULT_MODEL};
