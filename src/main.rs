//! HealthBridge - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;

use healthbridge::{
    chat::ChatMessage,
    cli::{Args, Commands, Verbosity},
    config::Config,
    gateway::{GeminiClient, SymptomAnalyzer},
    logging,
    services::MedicineCatalog,
    shell::{DisplayManager, InputHandler, Shell, ShellEvent},
};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = Args::parse();
    let verbosity = args.verbosity();
    logging::init(verbosity);

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let model_name = args
        .model
        .clone()
        .unwrap_or_else(|| config.gateway.model.clone());

    let client = GeminiClient::with_base_url(&config.gateway.base_url)?;
    let analyzer = SymptomAnalyzer::with_model_name(client, config.api_key(), &model_name);

    match args.command.take() {
        None | Some(Commands::Start) => run_shell(analyzer, &config, verbosity).await,
        Some(Commands::Analyze { symptoms }) => run_analyze(&analyzer, &symptoms, verbosity).await,
        Some(Commands::Medicines { query }) => {
            let catalog = MedicineCatalog::new();
            let query = query.unwrap_or_default();
            let results = catalog.search(&query);
            DisplayManager::new().render(&[ShellEvent::Medicines { query, results }]);
            Ok(())
        }
        Some(Commands::Config) => show_config(&args, &config, &analyzer),
    }
}

/// Interactive shell: landing screen, then one line at a time until /exit
async fn run_shell(
    analyzer: SymptomAnalyzer<GeminiClient>,
    config: &Config,
    verbosity: Verbosity,
) -> Result<()> {
    if !analyzer.is_configured() {
        tracing::warn!("GEMINI_API_KEY is not set; the symptom chat will reply with an error");
    }

    let display = if verbosity.show_progress() {
        DisplayManager::new()
    } else {
        DisplayManager::hidden()
    };
    let mut shell = Shell::new(Arc::new(analyzer), &config.simulation, display);

    let mut input = match Config::history_path() {
        Some(path) => InputHandler::with_history(path)?,
        None => InputHandler::new()?,
    };

    shell.display().show_landing();

    loop {
        let Some(line) = input.read_line(&shell.prompt())? else {
            break;
        };

        let events = shell.handle_line(&line).await;
        shell.display().render(&events);

        if events.contains(&ShellEvent::Exit) {
            break;
        }
    }

    if let Err(e) = input.save_history() {
        tracing::warn!(error = %e, "failed to save input history");
    }

    Ok(())
}

/// One-shot analysis: same gateway, same fallback text
async fn run_analyze(
    analyzer: &SymptomAnalyzer<GeminiClient>,
    words: &[String],
    verbosity: Verbosity,
) -> Result<()> {
    let symptoms = words.join(" ");
    if symptoms.trim().is_empty() {
        return Ok(());
    }

    let display = if verbosity.show_progress() {
        DisplayManager::new()
    } else {
        DisplayManager::hidden()
    };

    let spinner = display.start_spinner("Analyzing symptoms...");
    let reply = analyzer.analyze(&symptoms).await;
    spinner.finish_and_clear();

    display.show_message(&ChatMessage::assistant(reply));
    Ok(())
}

fn show_config(
    args: &Args,
    config: &Config,
    analyzer: &SymptomAnalyzer<GeminiClient>,
) -> Result<()> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let key_status = if analyzer.is_configured() {
        "configured".green()
    } else {
        "missing".red()
    };

    println!("{}", "HealthBridge Configuration".bold().cyan());
    println!("{}", "=".repeat(40).cyan());
    println!("  Config file:      {}", path.display());
    println!("  API key:          {}", key_status);
    println!("  Model:            {}", analyzer.model_name());
    println!("  Endpoint:         {}", config.gateway.base_url);
    println!(
        "  Consultation:     {}ms simulated delay",
        config.simulation.consultation_delay_ms
    );
    println!(
        "  Transport:        {}ms simulated delay",
        config.simulation.transport_delay_ms
    );
    Ok(())
}
