//! Configuration System
//!
//! Resolves one effective [`Config`] per invocation from layered sources:
//! compiled-in defaults, a profile config file, `TEMPLATE_*` environment
//! variables, and command-line flags. Higher-ranked sources override only the
//! keys they explicitly set. The result is read-only and passed explicitly to
//! every consumer.

use crate::error::ConfigError;
use serde::Deserialize;

mod document;
mod facade;
mod merge;
mod paths;
mod settings;
mod setup;
mod sources;

pub use document::{ConfigDocument, FileFormat};
pub use facade::{ConfigLoader, LoadedConfig};
pub use merge::ConfigResolver;
pub use paths::{capture_env, env_var_name, ConfigPaths, EnvVars};
pub use settings::{ConfigCommandService, ConfigSetResult, SettingKey};
pub use setup::{profile_setup_pipeline, ProfileSetup, SetupEnvironment};
pub use sources::{FlagOverrides, Layer};

/// Binary and config directory name
pub const APP_NAME: &str = "template";

/// Prefix for every bindable environment variable
pub const ENV_PREFIX: &str = "TEMPLATE";

/// Profile used when neither flag nor environment selects one
pub const DEFAULT_PROFILE: &str = "default";

/// Production API endpoint
pub const PRODUCTION_BASE_URL: &str = "https://api.example.com";

/// Sandbox API endpoint
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.example.com";

/// Option keys shared by files, environment variables, and flags.
pub mod keys {
    pub const ACCOUNT: &str = "account";
    pub const ACCESS_TOKEN: &str = "access-token";
    pub const BASE_URL: &str = "base-url";
    pub const SANDBOX: &str = "sandbox";
    pub const PROFILE: &str = "profile";
    pub const CONFIG_FILE: &str = "config-file";
    pub const OUTPUT: &str = "output";
    pub const QUERY: &str = "query";

    /// Keys a config file may set
    pub const FILE_KEYS: [&str; 4] = [ACCOUNT, ACCESS_TOKEN, BASE_URL, SANDBOX];

    /// Keys that participate in the merge
    pub const MERGED_KEYS: [&str; 5] = [ACCOUNT, ACCESS_TOKEN, BASE_URL, SANDBOX, PROFILE];
}

/// Source rank, lowest to highest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigSource {
    /// Compiled-in defaults
    Default = 0,
    /// Profile config file
    File = 1,
    /// `TEMPLATE_*` environment variables
    Environment = 2,
    /// Command-line flags
    Flag = 3,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
            ConfigSource::Flag => write!(f, "flag"),
        }
    }
}

/// Effective configuration for one invocation
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    account: Option<String>,

    #[serde(default)]
    access_token: Option<String>,

    #[serde(default)]
    base_url: Option<String>,

    #[serde(default)]
    sandbox: bool,

    profile: String,
}

impl Config {
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Explicit endpoint override, if any
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn sandbox(&self) -> bool {
        self.sandbox
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Endpoint the API client should talk to.
    pub fn api_base_url(&self) -> &str {
        match self.base_url() {
            Some(url) => url,
            None if self.sandbox => SANDBOX_BASE_URL,
            None => PRODUCTION_BASE_URL,
        }
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sandbox && self.base_url().is_some() {
            return Err(ConfigError::Conflicting(format!(
                "'{}' and '{}' cannot be set together",
                keys::BASE_URL,
                keys::SANDBOX
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("account", &self.account)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("base_url", &self.base_url)
            .field("sandbox", &self.sandbox)
            .field("profile", &self.profile)
            .finish()
    }
}
