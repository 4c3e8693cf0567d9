//! Error types for configuration resolution, prompting, and output formatting.

use crate::output::OutputKind;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration resolution and persistence errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Conflicting configuration: {0}")]
    Conflicting(String),

    #[error("Failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("Unknown configuration key: {0}")]
    NotFound(String),

    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },

    #[error("Unable to determine the user configuration directory")]
    NoConfigDirectory,

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl ConfigError {
    pub(crate) fn parse(origin: impl Into<String>, message: impl ToString) -> Self {
        ConfigError::Parse {
            origin: origin.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        ConfigError::Write {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::parse("configuration", err)
    }
}

/// Interactive prompt errors
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt aborted")]
    Aborted,

    #[error("Prompt I/O failure: {0}")]
    Io(String),

    #[error("No answer recorded for '{0}'")]
    Missing(String),

    #[error("Answer '{name}' is {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        #[allow(unreachable_patterns)]
        match &err {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                PromptError::Aborted
            }
            _ => PromptError::Io(err.to_string()),
        }
    }
}

/// Output formatting errors
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Output format '{output}' is not supported for this result")]
    Unsupported { output: OutputKind },

    #[error("Invalid query: {0}")]
    QueryInvalid(String),

    #[error("Encoding failed: {0}")]
    Encoding(String),
}

/// Top-level command error surfaced to the binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("{0}")]
    Usage(String),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Every failure maps to the same generic code; the error kind is only
    /// visible in the message.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
