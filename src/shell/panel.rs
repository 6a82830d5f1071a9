//! Which feature panel is open
//!
//! At most one panel is active. Its state lives inside the variant, so
//! closing a panel drops everything it held.

use crate::chat::ChatSession;
use crate::services::consultation::{ConsultationRequest, FormField};

/// Panel identity, without state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Chat,
    Consultation,
    Medicine,
    Transport,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Chat => "AI Health Assistant",
            PanelKind::Consultation => "Schedule Teleconsultation",
            PanelKind::Medicine => "Medicine Availability Tracker",
            PanelKind::Transport => "Emergency Transport",
        }
    }

    /// Prompt suffix while this panel is active
    pub fn prompt_tag(&self) -> &'static str {
        match self {
            PanelKind::Chat => "chat",
            PanelKind::Consultation => "consult",
            PanelKind::Medicine => "medicine",
            PanelKind::Transport => "transport",
        }
    }
}

/// Consultation form being filled in one field at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationForm {
    request: ConsultationRequest,
    current: FormField,
}

/// What filling a field led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormProgress {
    /// Ask for this field next
    Next(FormField),
    /// Every field is set
    Complete(ConsultationRequest),
}

impl Default for ConsultationForm {
    fn default() -> Self {
        ConsultationForm {
            request: ConsultationRequest::default(),
            current: FormField::Name,
        }
    }
}

impl ConsultationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field awaiting input
    pub fn current(&self) -> FormField {
        self.current
    }

    /// Fill the current field; an invalid value leaves the form unchanged
    pub fn fill(&mut self, value: &str) -> crate::errors::Result<FormProgress> {
        self.current.check(value)?;
        self.request.set(self.current, value);

        match self.current.next() {
            Some(next) => {
                self.current = next;
                Ok(FormProgress::Next(next))
            }
            None => Ok(FormProgress::Complete(std::mem::take(&mut self.request))),
        }
    }
}

/// Active panel plus its state
pub enum Panel<M> {
    None,
    Chat(ChatSession<M>),
    Consultation(ConsultationForm),
    Medicine,
    Transport,
}

impl<M> Panel<M> {
    pub fn kind(&self) -> Option<PanelKind> {
        match self {
            Panel::None => None,
            Panel::Chat(_) => Some(PanelKind::Chat),
            Panel::Consultation(_) => Some(PanelKind::Consultation),
            Panel::Medicine => Some(PanelKind::Medicine),
            Panel::Transport => Some(PanelKind::Transport),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Panel::None)
    }
}
