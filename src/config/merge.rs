//! Layer merging: turns ranked partial layers into one effective [`Config`].

use super::{Config, Layer};
use crate::error::ConfigError;

mod merge_policy;

/// Merges configuration layers by source rank.
pub struct ConfigResolver;

impl ConfigResolver {
    /// Merge `layers` and enforce cross-field invariants.
    pub fn resolve(layers: &[Layer]) -> Result<Config, ConfigError> {
        let config = Self::merge(layers)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge `layers` over the compiled-in defaults without validating.
    ///
    /// Each layer overrides only the keys it sets, so a key absent from a
    /// higher-ranked layer keeps its lower-ranked value.
    pub fn merge(layers: &[Layer]) -> Result<Config, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let merged = merge_policy::add_layers(builder, layers).build()?;

        merged
            .try_deserialize::<Config>()
            .map_err(|e| ConfigError::parse("merged configuration", e))
    }
}
