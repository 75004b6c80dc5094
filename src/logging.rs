// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! The filter comes from `--log` when given, then `RUST_LOG`, then
//! [`DEFAULT_FILTER`].

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info,ledger_lens=debug";

/// Log output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human-readable output.
    Pretty,
    /// Single-line output.
    Compact,
}

#[allow(clippy::derivable_impls)]
impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        {
            LogFormat::Pretty
        }
        #[cfg(not(debug_assertions))]
        {
            LogFormat::Compact
        }
    }
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Whether to include file/line numbers.
    pub include_location: bool,
    /// Whether to include the target module.
    pub include_target: bool,
    /// Explicit filter directive (e.g. `"warn,ledger_lens=trace"`).
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            include_location: cfg!(debug_assertions),
            include_target: true,
            filter: None,
        }
    }
}

impl LogConfig {
    /// Default configuration with an optional explicit filter.
    #[must_use]
    pub fn with_filter(filter: Option<String>) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }
}

/// Builds the filter for `explicit`, falling back to `RUST_LOG` and then
/// [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns [`Error::Config`] when `explicit` is not a valid directive.
pub fn build_filter(explicit: Option<&str>) -> Result<EnvFilter> {
    match explicit {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| Error::Config(format!("invalid log filter '{directive}': {e}"))),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error when the filter is invalid or a subscriber is already
/// installed.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let env_filter = build_filter(config.filter.as_deref())?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.include_target)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    match config.format {
        LogFormat::Pretty => subscriber
            .pretty()
            .try_init()
            .map_err(|e| Error::Config(format!("failed to initialize pretty logger: {e}")))?,
        LogFormat::Compact => subscriber
            .compact()
            .try_init()
            .map_err(|e| Error::Config(format!("failed to initialize compact logger: {e}")))?,
    }

    tracing::debug!(format = ?config.format, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_is_parsed() {
        assert!(build_filter(Some("warn,ledger_lens=trace")).is_ok());
    }

    #[test]
    fn invalid_filter_is_a_config_error() {
        let result = build_filter(Some("ledger_lens=notalevel"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_filter_falls_back() {
        assert!(build_filter(None).is_ok());
    }

    #[test]
    fn with_filter_keeps_other_defaults() {
        let config = LogConfig::with_filter(Some("debug".to_string()));
        assert_eq!(config.filter.as_deref(), Some("debug"));
        assert!(config.include_target);
    }
}
