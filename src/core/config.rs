//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.jokewizard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::jokes::JokeQuery;
use crate::jokes::client::{DEFAULT_CATEGORY, DEFAULT_JOKEAPI_BASE_URL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JokeWizardConfig {
    #[serde(default)]
    pub jokeapi: JokeApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JokeApiConfig {
    pub base_url: Option<String>,
    pub category: Option<String>,
    pub safe_mode: Option<bool>,
    pub blacklist_flags: Option<Vec<String>>,
}

/// Values given on the command line. `None` / `false` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub category: Option<String>,
    pub safe_mode: bool,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub query: JokeQuery,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.jokewizard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jokewizard").join("config.toml"))
}

/// Load config from `~/.jokewizard/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `JokeWizardConfig::default()`.
pub fn load_config() -> Result<JokeWizardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(JokeWizardConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(JokeWizardConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<JokeWizardConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: JokeWizardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Joke Wizard Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [jokeapi]
# base_url = "https://v2.jokeapi.dev"   # Or set JOKEWIZARD_BASE_URL
# category = "Any"                      # Or set JOKEWIZARD_CATEGORY, e.g. "Programming,Pun"
# safe_mode = false
# blacklist_flags = ["nsfw", "religious", "political", "racist", "sexist", "explicit"]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &JokeWizardConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &JokeWizardConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("JOKEWIZARD_BASE_URL"))
        .or_else(|| config.jokeapi.base_url.clone())
        .unwrap_or_else(|| DEFAULT_JOKEAPI_BASE_URL.to_string());

    // Category: CLI → env → config → default
    let category = cli
        .category
        .clone()
        .or_else(|| env("JOKEWIZARD_CATEGORY"))
        .or_else(|| config.jokeapi.category.clone())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    // --safe-mode can only switch it on
    let safe_mode = cli.safe_mode || config.jokeapi.safe_mode.unwrap_or(false);

    ResolvedConfig {
        base_url,
        query: JokeQuery {
            category,
            safe_mode,
            blacklist_flags: config.jokeapi.blacklist_flags.clone().unwrap_or_default(),
        },
    }
}
