//! Interactive shell: the landing screen and the four feature panels
//!
//! The shell owns the active panel and routes each input line either to a
//! slash command or to whichever panel is open. `handle_line` returns the
//! events it produced so the caller (and tests) can see what happened;
//! rendering goes through `DisplayManager`.

pub mod commands;
pub mod display;
pub mod input;
pub mod landing;
pub mod panel;

use std::sync::Arc;

use crate::chat::{ChatMessage, ChatSession};
use crate::config::SimulationConfig;
use crate::gateway::{GenerativeModel, SymptomAnalyzer};
use crate::services::{
    ConsultationConfirmation, ConsultationDesk, MedicineCatalog, MedicineRecord,
    TransportConfirmation, TransportDispatcher, TransportRequest,
};
use crate::shell::commands::Command;
use crate::shell::panel::{ConsultationForm, FormProgress};

pub use crate::shell::display::DisplayManager;
pub use crate::shell::input::InputHandler;
pub use crate::shell::panel::{Panel, PanelKind};

const PICKUP_PROMPT: &str = "Pickup Location";
const SEARCH_PROMPT: &str = "Search medicines";

/// Something the shell wants shown
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    Landing,
    Help,
    Opened(PanelKind),
    Closed(PanelKind),
    /// A transcript entry to show
    Message(ChatMessage),
    /// Ask the user for the next piece of input
    Prompt(&'static str),
    Medicines {
        query: String,
        results: Vec<&'static MedicineRecord>,
    },
    ConsultationBooked(ConsultationConfirmation),
    TransportConfirmed(TransportConfirmation),
    /// Input refused; the panel stays as it was
    Rejected(String),
    /// Free text arrived with no panel open
    NoPanel,
    ClearScreen,
    Unknown(String),
    Exit,
}

/// Shell state: shared services plus the active panel
pub struct Shell<M> {
    analyzer: Arc<SymptomAnalyzer<M>>,
    desk: ConsultationDesk,
    dispatcher: TransportDispatcher,
    catalog: MedicineCatalog,
    panel: Panel<M>,
    display: DisplayManager,
}

impl<M: GenerativeModel> Shell<M> {
    pub fn new(
        analyzer: Arc<SymptomAnalyzer<M>>,
        simulation: &SimulationConfig,
        display: DisplayManager,
    ) -> Self {
        Shell {
            analyzer,
            desk: ConsultationDesk::new(simulation.consultation_delay()),
            dispatcher: TransportDispatcher::new(simulation.transport_delay()),
            catalog: MedicineCatalog::new(),
            panel: Panel::None,
            display,
        }
    }

    pub fn panel(&self) -> &Panel<M> {
        &self.panel
    }

    pub fn display(&self) -> &DisplayManager {
        &self.display
    }

    /// Readline prompt reflecting the active panel
    pub fn prompt(&self) -> String {
        match self.panel.kind() {
            Some(kind) => format!("healthbridge/{}> ", kind.prompt_tag()),
            None => "healthbridge> ".to_string(),
        }
    }

    /// Handle one line of input
    pub async fn handle_line(&mut self, line: &str) -> Vec<ShellEvent> {
        if line.trim().is_empty() {
            return Vec::new();
        }

        if commands::is_command(line) {
            return self.execute(commands::parse(line));
        }

        self.route_to_panel(line).await
    }

    fn execute(&mut self, command: Command) -> Vec<ShellEvent> {
        match command {
            Command::Help => vec![ShellEvent::Help],
            Command::Home => {
                let mut events = self.close();
                events.push(ShellEvent::Landing);
                events
            }
            Command::Open(kind) => self.open(kind),
            Command::Medicine { query } => {
                let mut events = self.open(PanelKind::Medicine);
                if let Some(query) = query {
                    events.push(self.search(&query));
                }
                events
            }
            Command::Close => self.close(),
            Command::Clear => vec![ShellEvent::ClearScreen],
            Command::Exit => vec![ShellEvent::Exit],
            Command::Unknown { input } => vec![ShellEvent::Unknown(input)],
        }
    }

    /// Open a panel, replacing whatever was open
    fn open(&mut self, kind: PanelKind) -> Vec<ShellEvent> {
        tracing::debug!(panel = ?kind, "opening panel");

        let mut events = vec![ShellEvent::Opened(kind)];
        self.panel = match kind {
            PanelKind::Chat => {
                let session = ChatSession::new(Arc::clone(&self.analyzer));
                events.extend(session.transcript().iter().cloned().map(ShellEvent::Message));
                Panel::Chat(session)
            }
            PanelKind::Consultation => {
                let form = ConsultationForm::new();
                events.push(ShellEvent::Prompt(form.current().label()));
                Panel::Consultation(form)
            }
            PanelKind::Medicine => {
                events.push(ShellEvent::Prompt(SEARCH_PROMPT));
                Panel::Medicine
            }
            PanelKind::Transport => {
                events.push(ShellEvent::Prompt(PICKUP_PROMPT));
                Panel::Transport
            }
        };
        events
    }

    /// Close the active panel, dropping its state
    fn close(&mut self) -> Vec<ShellEvent> {
        match std::mem::replace(&mut self.panel, Panel::None).kind() {
            Some(kind) => vec![ShellEvent::Closed(kind)],
            None => Vec::new(),
        }
    }

    fn search(&self, query: &str) -> ShellEvent {
        ShellEvent::Medicines {
            query: query.to_string(),
            results: self.catalog.search(query),
        }
    }

    async fn route_to_panel(&mut self, text: &str) -> Vec<ShellEvent> {
        match &mut self.panel {
            Panel::None => vec![ShellEvent::NoPanel],
            Panel::Chat(session) => {
                let spinner = self.display.start_spinner("Analyzing symptoms...");
                let reply = session.send(text).await.cloned();
                spinner.finish_and_clear();
                reply.map(ShellEvent::Message).into_iter().collect()
            }
            Panel::Consultation(form) => match form.fill(text) {
                Err(err) => vec![
                    ShellEvent::Rejected(err.to_string()),
                    ShellEvent::Prompt(form.current().label()),
                ],
                Ok(FormProgress::Next(field)) => vec![ShellEvent::Prompt(field.label())],
                Ok(FormProgress::Complete(request)) => {
                    let spinner = self.display.start_spinner("Scheduling consultation...");
                    let booked = self.desk.submit(request).await;
                    spinner.finish_and_clear();
                    match booked {
                        Ok(confirmation) => {
                            let mut events = vec![ShellEvent::ConsultationBooked(confirmation)];
                            events.extend(self.close());
                            events
                        }
                        Err(err) => {
                            let form = ConsultationForm::new();
                            let prompt = ShellEvent::Prompt(form.current().label());
                            self.panel = Panel::Consultation(form);
                            vec![ShellEvent::Rejected(err.to_string()), prompt]
                        }
                    }
                }
            },
            Panel::Medicine => vec![self.search(text.trim())],
            Panel::Transport => {
                let spinner = self.display.start_spinner("Finding a driver...");
                let dispatched = self.dispatcher.request(TransportRequest::new(text)).await;
                spinner.finish_and_clear();
                match dispatched {
                    Ok(confirmation) => {
                        let mut events = vec![ShellEvent::TransportConfirmed(confirmation)];
                        events.extend(self.close());
                        events
                    }
                    Err(err) => vec![
                        ShellEvent::Rejected(err.to_string()),
                        ShellEvent::Prompt(PICKUP_PROMPT),
                    ],
                }
            }
        }
    }
}
