//! Symptom chat: transcript plus the session driving the gateway

pub mod session;
pub mod transcript;

pub use session::ChatSession;
pub use transcript::{ChatMessage, Transcript, GREETING};
