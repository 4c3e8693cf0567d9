//! Environment source: `TEMPLATE_<OPTION>` variables from a captured snapshot.

use super::Layer;
use crate::config::{env_var_name, keys, ConfigSource, EnvVars};

impl Layer {
    /// Build the Environment layer. Empty variables count as unset.
    pub fn from_env(env: &EnvVars) -> Self {
        let mut layer = Layer::new(ConfigSource::Environment, "environment");
        for key in keys::MERGED_KEYS {
            let name = env_var_name(key);
            if let Some(value) = env.get(&name).filter(|value| !value.is_empty()) {
                layer.set(key, value.as_str());
            }
        }
        layer
    }
}
