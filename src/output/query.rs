//! JMESPath filtering of JSON trees.

use crate::error::FormatError;

/// Evaluate `expression` against `tree`.
pub fn apply(tree: &serde_json::Value, expression: &str) -> Result<serde_json::Value, FormatError> {
    let compiled =
        jmespath::compile(expression).map_err(|e| FormatError::QueryInvalid(e.to_string()))?;

    let result = compiled
        .search(tree)
        .map_err(|e| FormatError::QueryInvalid(e.to_string()))?;

    serde_json::to_value(&*result).map_err(|e| FormatError::QueryInvalid(e.to_string()))
}
