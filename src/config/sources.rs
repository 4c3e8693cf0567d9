//! Configuration layers: one partial contribution per source.
//!
//! A [`Layer`] holds only the keys its source explicitly sets. Layers are fed to
//! the `config` crate as [`config::Source`]s, so an absent key never erases a
//! value contributed by a lower-ranked layer.

use super::ConfigSource;
use config::{Map, Value, ValueKind};
use std::collections::BTreeMap;

mod environment;
mod flags;
mod profile_file;

pub use flags::FlagOverrides;

#[derive(Debug, Clone)]
pub struct Layer {
    source: ConfigSource,
    origin: String,
    values: BTreeMap<String, Value>,
}

impl Layer {
    pub fn new(source: ConfigSource, origin: impl Into<String>) -> Self {
        Self {
            source,
            origin: origin.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builder form of [`Layer::set`].
    pub fn with(mut self, key: &str, value: impl Into<ValueKind>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<ValueKind>) {
        let value = Value::new(Some(&self.origin), value);
        self.values.insert(key.to_string(), value);
    }

    pub fn source(&self) -> ConfigSource {
        self.source
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl config::Source for Layer {
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        Ok(self
            .values
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}
