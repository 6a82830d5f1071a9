//! Display manager for the shell's terminal output
//!
//! Colored text via `colored`, loading spinners via `indicatif`. Assistant
//! messages are markdown; they get light styling, never interpretation.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::chat::ChatMessage;
use crate::services::{ConsultationConfirmation, MedicineRecord, TransportConfirmation};
use crate::services::medicine::Availability;
use crate::shell::commands::HELP_ROWS;
use crate::shell::landing::{FEATURES, MISSION, STATS, TAGLINE, TITLE};
use crate::shell::{PanelKind, ShellEvent};

const RULE_WIDTH: usize = 64;

/// How a line of assistant markdown is presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Bullet,
    Quote,
    Plain,
}

/// Classify one markdown line and strip its marker
pub fn classify_line(line: &str) -> (LineKind, &str) {
    let trimmed = line.trim_start();

    if trimmed.starts_with('#') {
        return (LineKind::Heading, trimmed.trim_start_matches('#').trim_start());
    }
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
        .or_else(|| trimmed.strip_prefix("+ "))
    {
        return (LineKind::Bullet, rest);
    }
    if let Some(rest) = trimmed.strip_prefix('>') {
        return (LineKind::Quote, rest.trim_start());
    }
    (LineKind::Plain, line)
}

/// Split a line on `**` markers into (is_strong, text) spans
pub fn emphasis_spans(line: &str) -> Vec<(bool, &str)> {
    line.split("**")
        .enumerate()
        .filter(|(_, span)| !span.is_empty())
        .map(|(idx, span)| (idx % 2 == 1, span))
        .collect()
}

/// Display manager for shell UI
pub struct DisplayManager {
    hidden: bool,
    tick_interval: Duration,
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager {
            hidden: false,
            tick_interval: Duration::from_millis(100),
        }
    }

    /// Display that never draws spinners (scripted runs, tests)
    pub fn hidden() -> Self {
        DisplayManager {
            hidden: true,
            ..Self::new()
        }
    }

    /// Spinner shown while a call is outstanding; caller clears it
    pub fn start_spinner(&self, message: &str) -> ProgressBar {
        if self.hidden {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(self.tick_interval);
        pb
    }

    /// Render a batch of shell events
    pub fn render(&self, events: &[ShellEvent]) {
        for event in events {
            self.render_event(event);
        }
    }

    fn render_event(&self, event: &ShellEvent) {
        match event {
            ShellEvent::Landing => self.show_landing(),
            ShellEvent::Help => self.show_help(),
            ShellEvent::Opened(kind) => self.show_panel_header(*kind),
            ShellEvent::Closed(kind) => {
                println!("{}", format!("Closed {}.", kind.title()).dimmed());
            }
            ShellEvent::Message(message) => self.show_message(message),
            ShellEvent::Prompt(label) => println!("{}", format!("{}:", label).bold()),
            ShellEvent::Medicines { query, results } => self.show_medicines(query, results),
            ShellEvent::ConsultationBooked(confirmation) => self.show_booking(confirmation),
            ShellEvent::TransportConfirmed(confirmation) => self.show_dispatch(confirmation),
            ShellEvent::Rejected(reason) => self.show_error(reason),
            ShellEvent::NoPanel => {
                println!(
                    "{}",
                    "No panel is open. Pick a feature first (try /chat).".yellow()
                );
            }
            ShellEvent::ClearScreen => print!("\x1B[2J\x1B[1;1H"),
            ShellEvent::Unknown(input) => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
            }
            ShellEvent::Exit => println!("{}", "Take care. Goodbye!".green()),
        }
    }

    /// Landing screen: hero, stats, feature cards, mission
    pub fn show_landing(&self) {
        let rule = "=".repeat(RULE_WIDTH);
        println!("\n{}", rule.cyan());
        println!("  {}", TITLE.bold().cyan());
        println!("  {}", TAGLINE.dimmed());
        println!("{}\n", rule.cyan());

        let stats: Vec<String> = STATS
            .iter()
            .map(|(figure, label)| format!("{} {}", figure.bold().cyan(), label))
            .collect();
        println!("  {}\n", stats.join("   "));

        println!("{}", "Our Solutions".bold());
        for card in FEATURES {
            println!("  {:<12} {}", card.command.green(), card.title.bold());
            println!("  {:<12} {}", "", card.description.dimmed());
        }

        println!("\n  {}\n", MISSION.italic());
        println!(
            "Type {} to get started, {} for commands, {} to quit\n",
            "/chat".green(),
            "/help".green(),
            "/exit".green()
        );
    }

    pub fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(RULE_WIDTH).cyan());
        for (cmd, desc) in HELP_ROWS {
            println!("  {:<20} {}", cmd.green(), desc);
        }
        println!("\n{}", "Usage:".bold());
        println!("  - Open a panel, then type directly (no / prefix)");
        println!("  - Press {} or type {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }

    fn show_panel_header(&self, kind: PanelKind) {
        println!("\n{}", kind.title().bold().cyan());
        println!("{}", "-".repeat(RULE_WIDTH).cyan());
    }

    pub fn show_message(&self, message: &ChatMessage) {
        if message.is_from_assistant {
            for line in message.text.lines() {
                println!("  {}", render_markdown_line(line));
            }
        } else {
            println!("  {}", message.text.white().on_blue());
        }
        println!("  {}\n", message.author().dimmed());
    }

    fn show_medicines(&self, query: &str, results: &[&MedicineRecord]) {
        if results.is_empty() {
            println!("{}", format!("No medicines match \"{}\".", query).yellow());
            return;
        }
        for record in results {
            let level = match record.availability {
                Availability::High => record.availability.as_str().green(),
                Availability::Medium => record.availability.as_str().yellow(),
                Availability::Low => record.availability.as_str().red(),
            };
            println!("  {:<14} {:<8} {}", record.name.bold(), level, record.location.dimmed());
        }
    }

    fn show_booking(&self, confirmation: &ConsultationConfirmation) {
        println!("\n{} {}", "✓".green(), confirmation.message.green().bold());
        println!(
            "  {} on {}",
            confirmation.patient_name,
            confirmation.scheduled_for.format("%d %b %Y at %H:%M")
        );
        println!("  {}\n", format!("Reference: {}", confirmation.reference).dimmed());
    }

    fn show_dispatch(&self, confirmation: &TransportConfirmation) {
        println!("\n{} {}", "✓".green(), "Driver Confirmed!".green().bold());
        println!(
            "  Driver will arrive in approximately {} minutes",
            confirmation.eta_minutes
        );
        println!("  Vehicle: {}", confirmation.vehicle);
        println!("  {}\n", format!("Pickup: {}", confirmation.pickup_location).dimmed());
    }

    pub fn show_error(&self, message: &str) {
        println!("{} {}", "✗".red(), message.red());
    }
}

fn render_markdown_line(line: &str) -> String {
    let (kind, text) = classify_line(line);
    let body: String = emphasis_spans(text)
        .into_iter()
        .map(|(strong, span)| {
            if strong {
                span.bold().to_string()
            } else {
                span.to_string()
            }
        })
        .collect();

    match kind {
        LineKind::Heading => body.bold().cyan().to_string(),
        LineKind::Bullet => format!("  • {}", body),
        LineKind::Quote => format!("│ {}", body.italic()),
        LineKind::Plain => body,
    }
}
