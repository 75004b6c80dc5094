// SPDX-License-Identifier: MPL-2.0
//! This module loads the application's configuration from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Accounts service base URL and request timeout
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `LEDGER_LENS_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory

use crate::app::paths;
use crate::domain::network::{ApiBaseUrl, RequestTimeout};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[api].base_url`.
pub const ENV_API_URL: &str = "LEDGER_LENS_API_URL";

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Accounts service settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ApiConfig {
    /// Base URL; `/accounts` is appended.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds, clamped on use.
    #[serde(default)]
    pub timeout_secs: Option<u32>,
}

impl ApiConfig {
    /// Timeout with bounds applied.
    #[must_use]
    pub fn timeout(&self) -> RequestTimeout {
        self.timeout_secs
            .map(RequestTimeout::new)
            .unwrap_or_default()
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// API Endpoint Resolution
// =============================================================================

/// Picks the base URL: CLI, then environment, then config, then the default.
///
/// Candidates that fail to parse are logged and skipped.
pub fn resolve_api_base(
    cli_url: Option<&str>,
    env_url: Option<&str>,
    config: &ApiConfig,
) -> ApiBaseUrl {
    let candidates = [
        ("--api-url", cli_url),
        (ENV_API_URL, env_url),
        ("[api].base_url", config.base_url.as_deref()),
    ];

    for (source, raw) in candidates {
        let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
            continue;
        };
        match ApiBaseUrl::parse(raw) {
            Some(url) => return url,
            None => tracing::warn!(source, value = raw, "ignoring invalid API base URL"),
        }
    }

    ApiBaseUrl::default()
}

/// Same as [`resolve_api_base`], reading the environment variable itself.
pub fn resolve_api_base_from_env(cli_url: Option<&str>, config: &ApiConfig) -> ApiBaseUrl {
    let env_url = std::env::var(ENV_API_URL).ok();
    resolve_api_base(cli_url, env_url.as_deref(), config)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(err) => (
                    Config::default(),
                    Some(format!("{}: {err}", path.display())),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
