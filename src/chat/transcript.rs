//! Append-only chat transcript
//!
//! Insertion order is display order. Messages are never edited, removed or
//! deduplicated; the whole transcript is dropped when the chat panel closes.

use chrono::{DateTime, Utc};

/// Opening assistant message of every chat
pub const GREETING: &str = "Hello! I'm your AI health assistant. Please describe your symptoms in detail (e.g., location, duration, severity) and I'll help analyze them. Remember, this is for informational purposes only - always consult a healthcare professional for proper diagnosis and treatment.";

/// One entry in the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub is_from_assistant: bool,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage {
            text: text.into(),
            is_from_assistant: false,
            sent_at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        ChatMessage {
            text: text.into(),
            is_from_assistant: true,
            sent_at: Utc::now(),
        }
    }

    /// Label shown under the message
    pub fn author(&self) -> &'static str {
        if self.is_from_assistant {
            "AI Assistant"
        } else {
            "You"
        }
    }
}

/// Ordered chat history
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Empty transcript
    pub fn new() -> Self {
        Transcript::default()
    }

    /// Transcript opened with the assistant greeting
    pub fn with_greeting() -> Self {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::assistant(GREETING));
        transcript
    }

    /// Append a message and return a reference to it
    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }
}
