//! Logging System
//!
//! Structured logging on `tracing`. Logs always go to stderr so that stdout
//! carries only command output. Level and format come from flags, and
//! `TEMPLATE_LOG` / `TEMPLATE_LOG_FORMAT` override them.

use crate::config::EnvVars;
use crate::error::ConfigError;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Full filter directive, e.g. `template_cli=debug`
pub const LOG_ENV: &str = "TEMPLATE_LOG";

/// `text` or `json`
pub const LOG_FORMAT_ENV: &str = "TEMPLATE_LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text
    pub format: String,

    /// Enable colored output (text format only)
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
            color: true,
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. `TEMPLATE_LOG` / `TEMPLATE_LOG_FORMAT`
/// 2. `config` (built from CLI flags)
pub fn init_logging(config: &LoggingConfig, env: &EnvVars) -> Result<(), ConfigError> {
    let filter = build_env_filter(config, env)?;
    let format = determine_format(config, env)?;
    let base_subscriber = Registry::default().with(filter);

    let initialized = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    initialized.map_err(|e| ConfigError::Logging(e.to_string()))
}

/// Build the filter: `TEMPLATE_LOG` wins, then the configured level.
fn build_env_filter(config: &LoggingConfig, env: &EnvVars) -> Result<EnvFilter, ConfigError> {
    if let Some(directive) = env.get(LOG_ENV).filter(|d| !d.trim().is_empty()) {
        return EnvFilter::try_new(directive)
            .map_err(|e| ConfigError::parse(LOG_ENV, format!("invalid log directive: {}", e)));
    }

    let level = normalize_level(&config.level)?;
    Ok(EnvFilter::new(level))
}

fn normalize_level(level: &str) -> Result<&'static str, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(ConfigError::parse(
            "log level",
            format!(
                "'{}' (must be trace, debug, info, warn, error, or off)",
                other
            ),
        )),
    }
}

/// Determine output format from the environment or config
fn determine_format(config: &LoggingConfig, env: &EnvVars) -> Result<String, ConfigError> {
    if let Some(format) = env.get(LOG_FORMAT_ENV) {
        if format == "json" || format == "text" {
            return Ok(format.clone());
        }
    }

    let format = config.format.as_str();
    if format != "json" && format != "text" {
        return Err(ConfigError::parse(
            "log format",
            format!("'{}' (must be 'json' or 'text')", format),
        ));
    }

    Ok(format.to_string())
}
