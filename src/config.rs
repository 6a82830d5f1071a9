use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::gateway::client::DEFAULT_GEMINI_URL;
use crate::gateway::prompt::DEFAULT_MODEL;

/// Environment variables consulted for the Gemini credential, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "VITE_GEMINI_API_KEY"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_URL.to_string(),
        }
    }
}

/// Fixed delays used by the simulated back-office services
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub consultation_delay_ms: u64,
    pub transport_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            consultation_delay_ms: 1500,
            transport_delay_ms: 2000,
        }
    }
}

impl SimulationConfig {
    /// Simulation config with no waiting, for tests and scripted runs
    pub fn instant() -> Self {
        SimulationConfig {
            consultation_delay_ms: 0,
            transport_delay_ms: 0,
        }
    }

    pub fn consultation_delay(&self) -> Duration {
        Duration::from_millis(self.consultation_delay_ms)
    }

    pub fn transport_delay(&self) -> Duration {
        Duration::from_millis(self.transport_delay_ms)
    }
}

impl Config {
    /// Load configuration from the default path, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the given path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;

        Ok(home.join(".healthbridge").join("config.toml"))
    }

    /// Path of the interactive shell's input history
    pub fn history_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".healthbridge").join("history"))
    }

    /// Resolve the credential: environment first, then the config file
    pub fn api_key(&self) -> Option<String> {
        let from_env: Vec<Option<String>> = API_KEY_ENV_VARS
            .iter()
            .map(|name| std::env::var(name).ok())
            .collect();

        resolve_api_key(
            from_env
                .iter()
                .map(Option::as_deref)
                .chain(std::iter::once(self.gateway.api_key.as_deref())),
        )
    }
}

/// Pick the first usable credential in priority order; blank values count as absent
pub fn resolve_api_key<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(normalize_api_key)
        .find(|key| !key.is_empty())
}

/// Trim whitespace and strip surrounding quotes pasted along with a key
pub fn normalize_api_key(raw: &str) -> String {
    fn is_quote_char(c: char) -> bool {
        matches!(c, '"' | '\'' | '“' | '”' | '‘' | '’')
    }

    raw.trim().trim_matches(is_quote_char).trim().to_string()
}
