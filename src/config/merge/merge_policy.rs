//! Merge rules: compiled-in defaults and layer override order.

use crate::config::{keys, Layer, DEFAULT_PROFILE};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use tracing::debug;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default(keys::PROFILE, DEFAULT_PROFILE)?
        .set_default(keys::SANDBOX, false)
}

/// Overlay layers lowest rank first; a stable sort keeps caller order within a rank.
pub fn add_layers(
    mut builder: ConfigBuilder<DefaultState>,
    layers: &[Layer],
) -> ConfigBuilder<DefaultState> {
    let mut ordered: Vec<&Layer> = layers.iter().collect();
    ordered.sort_by_key(|layer| layer.source());

    for layer in ordered {
        if layer.is_empty() {
            continue;
        }
        debug!(
            source = %layer.source(),
            origin = layer.origin(),
            keys = ?layer.keys().collect::<Vec<_>>(),
            "Applying configuration layer"
        );
        builder = builder.add_source(layer.clone());
    }
    builder
}
