//! Configuration loading: profile selection, file discovery, and layer assembly.

use super::{
    env_var_name, keys, Config, ConfigDocument, ConfigPaths, ConfigResolver, EnvVars, FileFormat,
    FlagOverrides, Layer, DEFAULT_PROFILE,
};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Resolved configuration plus the file it was read from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    config: Config,
    file: Option<PathBuf>,
    explicit: Option<PathBuf>,
}

impl LoadedConfig {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Config file that contributed the File layer
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Config file named by `--config-file` or `TEMPLATE_CONFIG_FILE`, whether or not it exists
    pub fn explicit_file(&self) -> Option<&Path> {
        self.explicit.as_deref()
    }

    /// The config, after the cross-field checks pass.
    pub fn validated(&self) -> Result<&Config, ConfigError> {
        self.config.validate()?;
        Ok(&self.config)
    }

    /// Cross-field conflict in the resolved config, for callers that only report it.
    pub fn conflict(&self) -> Option<ConfigError> {
        self.config.validate().err()
    }
}

/// Configuration loader
///
/// Holds the search directories and a snapshot of the environment so that
/// resolution never reaches for process-global state.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    paths: ConfigPaths,
    env: EnvVars,
}

impl ConfigLoader {
    pub fn new(paths: ConfigPaths, env: EnvVars) -> Self {
        Self { paths, env }
    }

    /// Loader for the running process: platform directories and current environment.
    pub fn from_environment() -> Self {
        Self::new(ConfigPaths::discover(), super::capture_env())
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn env(&self) -> &EnvVars {
        &self.env
    }

    /// Value of the environment variable bound to `key`, ignoring empty values.
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.env
            .get(&env_var_name(key))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Active profile: flag, then environment, then the default.
    pub fn profile(&self, flags: &FlagOverrides) -> String {
        flags
            .profile
            .as_deref()
            .filter(|profile| !profile.is_empty())
            .or_else(|| self.env_value(keys::PROFILE))
            .unwrap_or(DEFAULT_PROFILE)
            .to_string()
    }

    /// Config files named explicitly: the flag, then the environment variable.
    fn explicit_paths(&self, flags: &FlagOverrides) -> [(&'static str, Option<PathBuf>); 2] {
        [
            (
                "--config-file",
                flags
                    .config_file
                    .clone()
                    .filter(|path| !path.as_os_str().is_empty()),
            ),
            (
                "TEMPLATE_CONFIG_FILE",
                self.env_value(keys::CONFIG_FILE).map(PathBuf::from),
            ),
        ]
    }

    /// Find the config file to load. First existing candidate wins.
    pub fn locate(&self, flags: &FlagOverrides, profile: &str) -> Option<PathBuf> {
        for (origin, path) in self.explicit_paths(flags) {
            let Some(path) = path else { continue };
            if path.is_file() {
                return Some(path);
            }
            warn!(
                origin,
                config_path = %path.display(),
                "Configuration file not found, continuing discovery"
            );
        }

        self.paths
            .profile_candidates(profile)
            .into_iter()
            .find(|candidate| candidate.is_file())
    }

    /// Load the effective configuration for `flags`.
    ///
    /// Conflicts are not checked here; commands that need credentials call
    /// [`LoadedConfig::validated`].
    pub fn load(&self, flags: &FlagOverrides) -> Result<LoadedConfig, ConfigError> {
        let profile = self.profile(flags);
        let file = self.locate(flags, &profile);

        let mut layers = Vec::with_capacity(3);
        match &file {
            Some(path) => {
                debug!(profile = profile.as_str(), config_path = %path.display(), "Loading config file");
                layers.push(Layer::from_document(&ConfigDocument::read(path)?));
            }
            None => debug!(profile = profile.as_str(), "No config file found"),
        }
        layers.push(Layer::from_env(&self.env));
        layers.push(Layer::from_flags(flags));

        let config = ConfigResolver::merge(&layers)?;
        let explicit = self
            .explicit_paths(flags)
            .into_iter()
            .find_map(|(_, path)| path);
        Ok(LoadedConfig {
            config,
            file,
            explicit,
        })
    }

    /// File that `config set` writes: the explicitly named file, then the active
    /// file, else a new TOML profile file.
    pub fn persist_path(&self, loaded: &LoadedConfig) -> Result<PathBuf, ConfigError> {
        match loaded.explicit_file().or(loaded.file()) {
            Some(path) => Ok(path.to_path_buf()),
            None => self
                .paths
                .user_profile_path(loaded.config().profile(), FileFormat::Toml),
        }
    }
}
