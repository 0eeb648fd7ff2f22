//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.academy/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Choices made inside the app (currently the theme toggle) are saved to
//! `~/.academy/state.json` and sit between the config file and env vars:
//! defaults → config file → saved state → env vars → CLI flags.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::Theme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AcademyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub username: Option<String>,
    pub theme: Option<Theme>,
    pub start_course: Option<String>,
}

/// Preferences written by the app itself, never edited by hand.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SavedState {
    #[serde(default)]
    pub theme: Option<Theme>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_USERNAME: &str = "Guest";

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub username: String,
    pub theme: Theme,
    /// Course to open on start-up. Validated against the catalog by the caller.
    pub start_course: Option<String>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub theme: Option<Theme>,
    pub course: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    State(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::State(e) => write!(f, "saved state parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.academy/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".academy").join("config.toml"))
}

/// Load config from `~/.academy/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AcademyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AcademyConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(AcademyConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<AcademyConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AcademyConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AcademyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_FILE: &str = r#"# Survival Code Academy configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# username = "Ada"           # Or ACADEMY_USER; falls back to $USER, then "Guest"
# theme = "dark"             # "dark" or "light"; or ACADEMY_THEME / --theme
# start_course = "python"    # "html", "css", "js", "python"; or ACADEMY_COURSE / --course
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_FILE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Saved State
// ============================================================================

/// Returns the path to `~/.academy/state.json`.
pub fn state_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".academy").join("state.json"))
}

/// Load saved state from `~/.academy/state.json`. A missing file is not an error.
pub fn load_state() -> Result<SavedState, ConfigError> {
    let Some(path) = state_path() else {
        return Ok(SavedState::default());
    };
    load_state_from(&path)
}

pub fn load_state_from(path: &Path) -> Result<SavedState, ConfigError> {
    if !path.exists() {
        return Ok(SavedState::default());
    }
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let state = serde_json::from_str(&contents).map_err(ConfigError::State)?;
    debug!("Saved state: {:?}", state);
    Ok(state)
}

/// Write `state` to `path`, creating the parent directory if needed.
pub fn save_state_to(path: &Path, state: &SavedState) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    atomic_write_json(path, state)?;
    info!("Saved state to {}", path.display());
    Ok(())
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing:
/// defaults → config file → saved state → env vars → CLI.
pub fn resolve(config: &AcademyConfig, saved: &SavedState, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, saved, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup, so tests never touch the
/// process environment.
pub fn resolve_with_env(
    config: &AcademyConfig,
    saved: &SavedState,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Username: env → config → $USER → default
    let username = env("ACADEMY_USER")
        .or_else(|| config.general.username.clone())
        .or_else(|| env("USER"))
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

    // Theme: CLI → env → saved state → config → default
    let theme = cli
        .theme
        .or_else(|| {
            env("ACADEMY_THEME").and_then(|raw| {
                let parsed = Theme::parse(&raw);
                if parsed.is_none() {
                    warn!("Ignoring unknown ACADEMY_THEME value: {}", raw);
                }
                parsed
            })
        })
        .or(saved.theme)
        .or(config.general.theme)
        .unwrap_or_default();

    // Start course: CLI → env → config
    let start_course = cli
        .course
        .clone()
        .or_else(|| env("ACADEMY_COURSE"))
        .or_else(|| config.general.start_course.clone());

    ResolvedConfig {
        username,
        theme,
        start_course,
    }
}
