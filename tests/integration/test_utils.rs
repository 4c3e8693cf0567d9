//! Shared test utilities for integration tests
//!
//! Each fixture owns a temporary user and system config directory plus an
//! injected environment map, so tests never touch the real home directory or
//! process environment and can run in parallel.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use template_cli::cli::{Commands, GlobalArgs, RunContext};
use template_cli::config::{ConfigLoader, ConfigPaths, EnvVars};
use template_cli::error::CliError;
use template_cli::prompt::Prompter;

pub struct TestEnv {
    temp: TempDir,
    env: EnvVars,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
            env: EnvVars::new(),
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn user_dir(&self) -> PathBuf {
        self.temp.path().join("user")
    }

    pub fn system_dir(&self) -> PathBuf {
        self.temp.path().join("system")
    }

    pub fn paths(&self) -> ConfigPaths {
        ConfigPaths::with_dirs(Some(self.user_dir()), self.system_dir())
    }

    pub fn loader(&self) -> ConfigLoader {
        ConfigLoader::new(self.paths(), self.env.clone())
    }

    /// Write `content` to `<user-dir>/<file_name>`.
    pub fn write_user_file(&self, file_name: &str, content: &str) -> PathBuf {
        write_file(&self.user_dir(), file_name, content)
    }

    /// Write `content` to `<system-dir>/<file_name>`.
    pub fn write_system_file(&self, file_name: &str, content: &str) -> PathBuf {
        write_file(&self.system_dir(), file_name, content)
    }

    /// Run `command` and capture stdout.
    pub fn run(
        &self,
        global: &GlobalArgs,
        command: Commands,
        prompter: &mut dyn Prompter,
    ) -> Result<String, CliError> {
        let ctx = RunContext::new(self.loader(), global)?;
        let mut out = Vec::new();
        ctx.execute(&command, prompter, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }
}

fn write_file(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}
