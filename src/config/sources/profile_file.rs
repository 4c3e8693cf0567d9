//! File source: the profile config file, already parsed into a document.

use super::Layer;
use crate::config::{keys, ConfigDocument, ConfigSource};
use config::ValueKind;
use tracing::debug;

impl Layer {
    /// Build the File layer from a config document.
    ///
    /// Only file keys are taken; a null value counts as unset.
    pub fn from_document(document: &ConfigDocument) -> Self {
        let mut layer = Layer::new(ConfigSource::File, document.path().display().to_string());

        for (key, value) in document.entries() {
            if !keys::FILE_KEYS.contains(&key.as_str()) {
                debug!(
                    key = key.as_str(),
                    path = %document.path().display(),
                    "Ignoring unknown config file key"
                );
                continue;
            }
            if value.is_null() {
                continue;
            }
            layer.set(key, value_kind(value));
        }

        layer
    }
}

fn value_kind(value: &serde_json::Value) -> ValueKind {
    use serde_json::Value as Json;

    match value {
        Json::Null => ValueKind::Nil,
        Json::Bool(b) => ValueKind::Boolean(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => ValueKind::I64(i),
            None => ValueKind::Float(n.as_f64().unwrap_or_default()),
        },
        Json::String(s) => ValueKind::String(s.clone()),
        Json::Array(items) => ValueKind::Array(
            items
                .iter()
                .map(|item| config::Value::new(None, value_kind(item)))
                .collect(),
        ),
        Json::Object(map) => ValueKind::Table(
            map.iter()
                .map(|(k, v)| (k.clone(), config::Value::new(None, value_kind(v))))
                .collect(),
        ),
    }
}
