//! Chat session: one user line in, one assistant line out

use std::sync::Arc;

use crate::chat::transcript::{ChatMessage, Transcript};
use crate::gateway::{GenerativeModel, SymptomAnalyzer};

/// Chat panel state bound to a symptom analyzer
///
/// `send` borrows the session mutably for the whole gateway call, so a
/// session never has two analyses in flight. The caller owns the loading
/// indicator around that await.
pub struct ChatSession<M> {
    analyzer: Arc<SymptomAnalyzer<M>>,
    transcript: Transcript,
}

impl<M: GenerativeModel> ChatSession<M> {
    /// Open a chat with the assistant greeting
    pub fn new(analyzer: Arc<SymptomAnalyzer<M>>) -> Self {
        Self::with_transcript(analyzer, Transcript::with_greeting())
    }

    pub fn with_transcript(analyzer: Arc<SymptomAnalyzer<M>>, transcript: Transcript) -> Self {
        ChatSession {
            analyzer,
            transcript,
        }
    }

    /// Submit a line of user input
    ///
    /// Blank input is ignored and returns `None`. Otherwise the user message
    /// and then the assistant reply (or fallback) are appended, and the reply
    /// is returned.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage::user(input));

        let reply = self.analyzer.analyze(input).await;

        Some(self.transcript.push(ChatMessage::assistant(reply)))
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
