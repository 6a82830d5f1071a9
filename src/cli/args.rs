//! Command-line argument parsing for HealthBridge
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HealthBridge - AI symptom chat, teleconsultation, medicines and emergency transport
#[derive(Parser, Debug)]
#[command(name = "healthbridge")]
#[command(version)]
#[command(about = "Bridging healthcare gaps in rural communities from the terminal", long_about = None)]
pub struct Args {
    /// Configuration file path (default: ~/.healthbridge/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Gemini model to use (overrides the config file)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Verbosity level: -v (debug logs), -vv (trace logs)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand (interactive shell when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive shell
    Start,

    /// Analyze symptoms once and print the assistant's reply
    Analyze {
        /// Symptom description
        #[arg(value_name = "SYMPTOMS", required = true, num_args = 1..)]
        symptoms: Vec<String>,
    },

    /// Search the medicine availability list
    Medicines {
        /// Case-insensitive name fragment (all medicines when omitted)
        query: Option<String>,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Default log filter for this verbosity
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "healthbridge=debug,warn",
            Verbosity::VeryVerbose => "healthbridge=trace,info",
        }
    }

    /// Check if should show spinners
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}
