//! Config file locations and environment variable naming.

use super::{FileFormat, APP_NAME, ENV_PREFIX};
use crate::error::ConfigError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// System-wide config directory, consulted after the per-user one
pub const SYSTEM_CONFIG_DIR: &str = "/etc/template";

/// Snapshot of `TEMPLATE_*` environment variables, taken once per invocation.
pub type EnvVars = BTreeMap<String, String>;

/// Environment variable bound to an option: `access-token` -> `TEMPLATE_ACCESS_TOKEN`.
pub fn env_var_name(option: &str) -> String {
    format!("{}_{}", ENV_PREFIX, option.replace('-', "_").to_uppercase())
}

/// Capture every `TEMPLATE_*` variable from the process environment.
/// Variables that are not valid UTF-8 are skipped.
pub fn capture_env() -> EnvVars {
    let prefix = format!("{}_", ENV_PREFIX);
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .filter(|(key, _)| key.starts_with(&prefix))
        .collect()
}

/// Directories searched for profile config files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    user_dir: Option<PathBuf>,
    system_dir: PathBuf,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl ConfigPaths {
    /// `<user-config-dir>/template` (honours `XDG_CONFIG_HOME`) and `/etc/template`.
    pub fn discover() -> Self {
        let user_dir =
            directories::BaseDirs::new().map(|dirs| dirs.config_dir().join(APP_NAME));
        Self {
            user_dir,
            system_dir: PathBuf::from(SYSTEM_CONFIG_DIR),
        }
    }

    /// Create paths with explicit directories.
    pub fn with_dirs(user_dir: Option<PathBuf>, system_dir: impl Into<PathBuf>) -> Self {
        Self {
            user_dir,
            system_dir: system_dir.into(),
        }
    }

    pub fn user_dir(&self) -> Option<&Path> {
        self.user_dir.as_deref()
    }

    pub fn system_dir(&self) -> &Path {
        &self.system_dir
    }

    /// Profile file candidates in discovery order: user dir first, then the
    /// system dir, each probed for every supported extension.
    pub fn profile_candidates(&self, profile: &str) -> Vec<PathBuf> {
        self.user_dir
            .iter()
            .map(PathBuf::as_path)
            .chain(std::iter::once(self.system_dir.as_path()))
            .flat_map(|dir| {
                FileFormat::DISCOVERY_EXTENSIONS
                    .iter()
                    .map(move |ext| dir.join(format!("{}.{}", profile, ext)))
            })
            .collect()
    }

    /// Path of a profile file under the per-user config directory.
    pub fn user_profile_path(
        &self,
        profile: &str,
        format: FileFormat,
    ) -> Result<PathBuf, ConfigError> {
        let dir = self.user_dir().ok_or(ConfigError::NoConfigDirectory)?;
        Ok(dir.join(format!("{}.{}", profile, format.extension())))
    }
}
