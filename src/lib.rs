//! HealthBridge - rural health assistant
//!
//! A terminal rendition of the AI Health Bridge platform: a symptom chat
//! backed by Gemini, plus simulated teleconsultation booking, medicine
//! availability and emergency transport panels.
//!
//! # Architecture
//!
//! - **gateway**: the one external call, folded into display text
//! - **chat**: append-only transcript and the session driving the gateway
//! - **services**: fixed-delay, hard-coded back-office simulations
//! - **shell**: landing screen, panels, commands, terminal rendering

pub mod errors;
pub use errors::{BridgeError, Result};

pub mod chat;
pub mod cli;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod services;
pub mod shell;
