//! Interactive profile setup (`template config`).

use super::{
    keys, Config, ConfigDocument, ConfigSource, FileFormat, Layer, PRODUCTION_BASE_URL,
};
use crate::error::PromptError;
use crate::prompt::{PromptPipeline, PromptStep, ResultSet};
use serde_json::Value;
use std::path::Path;

mod step {
    pub const ACCOUNT: &str = "account";
    pub const ACCESS_TOKEN: &str = "access-token";
    pub const ENVIRONMENT: &str = "environment";
    pub const BASE_URL: &str = "base-url";
    pub const FORMAT: &str = "format";
    pub const CONFIRM: &str = "confirm";
}

/// API environment a profile targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupEnvironment {
    Production,
    Sandbox,
    /// Custom endpoint
    Development,
}

impl SetupEnvironment {
    pub const ALL: [SetupEnvironment; 3] = [
        SetupEnvironment::Production,
        SetupEnvironment::Sandbox,
        SetupEnvironment::Development,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SetupEnvironment::Production => "production",
            SetupEnvironment::Sandbox => "sandbox",
            SetupEnvironment::Development => "development",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|env| env.as_str() == s)
    }

    /// Environment the current configuration points at.
    pub fn from_config(config: &Config) -> Self {
        if config.base_url().is_some() {
            SetupEnvironment::Development
        } else if config.sandbox() {
            SetupEnvironment::Sandbox
        } else {
            SetupEnvironment::Production
        }
    }
}

/// Build the profile setup questions, with defaults from `current`.
pub fn profile_setup_pipeline(current: &Config) -> PromptPipeline {
    let account = current.account().and_then(|a| a.parse::<i64>().ok());
    let base_url = current
        .base_url()
        .unwrap_or(PRODUCTION_BASE_URL)
        .to_string();
    let environment = SetupEnvironment::from_config(current);

    PromptPipeline::new()
        .step(PromptStep::number(step::ACCOUNT, "Account ID", account))
        .step(PromptStep::secret(
            step::ACCESS_TOKEN,
            "Access Token",
            current.access_token(),
        ))
        .step(PromptStep::select(
            step::ENVIRONMENT,
            "Environment",
            SetupEnvironment::ALL.map(|env| env.as_str()),
            Some(environment.as_str()),
        ))
        .step_with(move |answers| {
            let development = answers.text(step::ENVIRONMENT).ok()
                == Some(SetupEnvironment::Development.as_str());
            development
                .then(|| PromptStep::text(step::BASE_URL, "Base URL", Some(base_url.as_str())))
        })
        .step(PromptStep::select(
            step::FORMAT,
            "File format",
            FileFormat::ALL.map(|format| format.extension()),
            Some(FileFormat::Json.extension()),
        ))
        .step(PromptStep::confirm(
            step::CONFIRM,
            "Do you want to save?",
            Some(true),
        ))
}

/// Profile values collected by the setup pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSetup {
    pub account: i64,
    pub access_token: String,
    pub environment: SetupEnvironment,
    pub base_url: Option<String>,
    pub format: FileFormat,
}

impl ProfileSetup {
    /// Read the setup answers. Declining the final confirmation is an abort.
    pub fn from_answers(answers: &ResultSet) -> Result<Self, PromptError> {
        if !answers.flag(step::CONFIRM)? {
            return Err(PromptError::Aborted);
        }

        let environment = answers.text(step::ENVIRONMENT)?;
        let environment = SetupEnvironment::parse(environment)
            .ok_or_else(|| PromptError::Io(format!("unknown environment '{}'", environment)))?;
        let format = answers.text(step::FORMAT)?;
        let format = FileFormat::from_extension(format)
            .ok_or_else(|| PromptError::Io(format!("unknown file format '{}'", format)))?;

        let base_url = match environment {
            SetupEnvironment::Development => Some(answers.text(step::BASE_URL)?.to_string())
                .filter(|url| !url.is_empty()),
            _ => None,
        };

        Ok(Self {
            account: answers.number(step::ACCOUNT)?,
            access_token: answers.text(step::ACCESS_TOKEN)?.to_string(),
            environment,
            base_url,
            format,
        })
    }

    fn sandbox(&self) -> bool {
        self.environment == SetupEnvironment::Sandbox
    }

    /// The setup as a File-rank layer, for validation.
    pub fn to_layer(&self) -> Layer {
        let mut layer = Layer::new(ConfigSource::File, "profile setup")
            .with(keys::ACCOUNT, self.account)
            .with(keys::ACCESS_TOKEN, self.access_token.as_str());
        if let Some(url) = &self.base_url {
            layer.set(keys::BASE_URL, url.as_str());
        }
        if self.sandbox() {
            layer.set(keys::SANDBOX, true);
        }
        layer
    }

    /// The profile file contents. `base-url` and `sandbox` are only written when set.
    pub fn to_document(&self, path: &Path) -> ConfigDocument {
        let mut document = ConfigDocument::empty(path, self.format);
        document.set(keys::ACCOUNT, Value::from(self.account));
        document.set(keys::ACCESS_TOKEN, Value::from(self.access_token.clone()));
        if let Some(url) = &self.base_url {
            document.set(keys::BASE_URL, Value::from(url.clone()));
        }
        if self.sandbox() {
            document.set(keys::SANDBOX, Value::Bool(true));
        }
        document
    }
}
