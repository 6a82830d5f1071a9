//! Slash commands understood by the shell

use crate::shell::panel::PanelKind;

/// Shell command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Home,
    Open(PanelKind),
    /// Open the medicine panel, optionally searching right away
    Medicine { query: Option<String> },
    Close,
    Clear,
    Exit,
    Unknown { input: String },
}

/// Whether a line is a command rather than panel input
pub fn is_command(input: &str) -> bool {
    input.trim_start().starts_with('/')
}

/// Parse input string into a command
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(body) = trimmed.strip_prefix('/') else {
        return Command::Unknown { input: input.to_string() };
    };

    let mut parts = body.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("").to_lowercase();
    let rest = parts.next().map(str::trim).filter(|s| !s.is_empty());

    match name.as_str() {
        "help" | "h" | "?" => Command::Help,
        "home" | "landing" => Command::Home,
        "chat" | "ask" => Command::Open(PanelKind::Chat),
        "consult" | "consultation" | "book" => Command::Open(PanelKind::Consultation),
        "medicine" | "medicines" | "med" => Command::Medicine {
            query: rest.map(str::to_string),
        },
        "transport" | "ambulance" | "sos" => Command::Open(PanelKind::Transport),
        "close" | "back" => Command::Close,
        "clear" | "cls" => Command::Clear,
        "exit" | "quit" | "q" => Command::Exit,
        _ => Command::Unknown { input: input.to_string() },
    }
}

/// (command, description) rows for the help screen
pub const HELP_ROWS: &[(&str, &str)] = &[
    ("/chat", "Describe symptoms to the AI health assistant"),
    ("/consult", "Schedule a teleconsultation with a doctor"),
    ("/medicine [name]", "Check medicine availability"),
    ("/transport", "Request emergency transport"),
    ("/close", "Close the current panel"),
    ("/home", "Show the landing screen"),
    ("/clear, /cls", "Clear screen"),
    ("/help, /h", "Show this help message"),
    ("/exit, /quit, /q", "Exit"),
];
