//! CLI output: error mapping from domain errors to the message printed on stderr.

use crate::error::{CliError, ConfigError, PromptError};

/// Map a command error to the message shown to the user.
pub fn map_error(e: &CliError) -> String {
    match e {
        CliError::Config(ConfigError::NotFound(key)) => format!(
            "{} (expected one of: account, access-token, base-url, sandbox)",
            ConfigError::NotFound(key.clone())
        ),
        CliError::Prompt(PromptError::Aborted) => "Aborted, nothing was saved".to_string(),
        other => other.to_string(),
    }
}
