//! Flag source: values passed explicitly on the command line.

use super::Layer;
use crate::config::{keys, ConfigSource};
use std::path::PathBuf;

/// Global flags that feed configuration resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    pub account: Option<String>,
    pub access_token: Option<String>,
    pub base_url: Option<String>,
    /// `--sandbox` only contributes when passed
    pub sandbox: bool,
    pub profile: Option<String>,
    pub config_file: Option<PathBuf>,
}

impl Layer {
    /// Build the Flag layer from the flags actually passed. Empty strings count as unset.
    pub fn from_flags(flags: &FlagOverrides) -> Self {
        let mut layer = Layer::new(ConfigSource::Flag, "flags");

        let strings = [
            (keys::ACCOUNT, &flags.account),
            (keys::ACCESS_TOKEN, &flags.access_token),
            (keys::BASE_URL, &flags.base_url),
            (keys::PROFILE, &flags.profile),
        ];
        for (key, value) in strings {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                layer.set(key, value);
            }
        }

        if flags.sandbox {
            layer.set(keys::SANDBOX, true);
        }

        layer
    }
}
