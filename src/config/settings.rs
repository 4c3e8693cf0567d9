//! `config get|set|list`: the whitelisted settings and how they are read and written.

use super::{keys, Config, ConfigDocument, ConfigPaths, ConfigResolver, ProfileSetup};
use crate::error::ConfigError;
use crate::views::{ConfigEntry, ConfigList};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Shown in place of the access token in listings
const MASK: &str = "********";

/// A setting that `config get` and `config set` accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Account,
    BaseUrl,
    AccessToken,
    Sandbox,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::Account,
        SettingKey::AccessToken,
        SettingKey::BaseUrl,
        SettingKey::Sandbox,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Account => keys::ACCOUNT,
            SettingKey::BaseUrl => keys::BASE_URL,
            SettingKey::AccessToken => keys::ACCESS_TOKEN,
            SettingKey::Sandbox => keys::SANDBOX,
        }
    }

    pub fn value_type(&self) -> &'static str {
        match self {
            SettingKey::Sandbox => "bool",
            _ => "string",
        }
    }

    /// Validate and convert a raw command-line value for this key.
    pub fn coerce(&self, raw: &str) -> Result<Value, ConfigError> {
        match self {
            SettingKey::Sandbox => raw
                .trim()
                .parse::<bool>()
                .map(Value::Bool)
                .map_err(|_| ConfigError::parse(self.as_str(), format!("'{}' is not a boolean", raw))),
            SettingKey::Account => raw
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| ConfigError::parse(self.as_str(), format!("'{}' is not an integer", raw))),
            SettingKey::BaseUrl | SettingKey::AccessToken => Ok(Value::String(raw.to_string())),
        }
    }

    fn read(&self, config: &Config) -> String {
        match self {
            SettingKey::Account => config.account().unwrap_or_default().to_string(),
            SettingKey::BaseUrl => config.base_url().unwrap_or_default().to_string(),
            SettingKey::AccessToken => config.access_token().unwrap_or_default().to_string(),
            SettingKey::Sandbox => config.sandbox().to_string(),
        }
    }
}

impl FromStr for SettingKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConfigError::NotFound(s.to_string()))
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of `config set`.
#[derive(Debug, Clone)]
pub struct ConfigSetResult {
    pub key: SettingKey,
    pub config_path: PathBuf,
}

pub struct ConfigCommandService;

impl ConfigCommandService {
    /// Effective value of `key`. Unknown keys fail with [`ConfigError::NotFound`].
    pub fn get(config: &Config, key: &str) -> Result<String, ConfigError> {
        Ok(key.parse::<SettingKey>()?.read(config))
    }

    /// Validate `raw` for `key` and persist it to `target`.
    ///
    /// The file is only touched once the key and value are both valid.
    pub fn set(target: &Path, key: &str, raw: &str) -> Result<ConfigSetResult, ConfigError> {
        let key = key.parse::<SettingKey>()?;
        let value = key.coerce(raw)?;

        let mut document = ConfigDocument::read_or_empty(target)?;
        document.set(key.as_str(), value);
        document.save()?;

        info!(key = key.as_str(), config_path = %target.display(), "Configuration updated");
        Ok(ConfigSetResult {
            key,
            config_path: target.to_path_buf(),
        })
    }

    /// Every setting with its effective value; the access token is masked.
    pub fn list(config: &Config) -> ConfigList {
        let entries = SettingKey::ALL
            .iter()
            .map(|key| {
                let value = match key {
                    SettingKey::AccessToken if config.access_token().is_some() => MASK.to_string(),
                    _ => key.read(config),
                };
                ConfigEntry {
                    name: key.as_str().to_string(),
                    value_type: key.value_type().to_string(),
                    value,
                }
            })
            .collect();
        ConfigList { entries }
    }

    /// Validate and write the answers of an interactive setup as `<profile>.<ext>`.
    pub fn write_profile(
        setup: &ProfileSetup,
        paths: &ConfigPaths,
        profile: &str,
    ) -> Result<PathBuf, ConfigError> {
        ConfigResolver::resolve(&[setup.to_layer()])?;

        let path = paths.user_profile_path(profile, setup.format)?;
        setup.to_document(&path).save()?;

        let shadowing: Vec<PathBuf> = paths
            .profile_candidates(profile)
            .into_iter()
            .filter(|candidate| candidate != &path && candidate.is_file())
            .collect();
        for other in &shadowing {
            warn!(
                written = %path.display(),
                other = %other.display(),
                "Another config file exists for this profile; discovery order decides which is loaded"
            );
        }

        info!(profile, config_path = %path.display(), "Profile written");
        Ok(path)
    }
}
