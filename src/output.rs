//! Output formatting
//!
//! Renders a [`Renderable`] result as JSON, YAML, an aligned table, or labelled
//! text lines. Dispatch is by declared capability with no fallback: asking for
//! a format the value does not support is an error. Formatting is a pure
//! function of its inputs.

use crate::error::FormatError;
use std::str::FromStr;
use tracing::debug;

mod capability;
mod query;
mod table;

pub use capability::{JsonCapable, Renderable, TableCapable, TableRow, TextCapable};
pub use table::TableRenderer;

/// Width of the label column in text output, colon included
pub const TEXT_LABEL_WIDTH: usize = 20;

/// Requested output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum OutputKind {
    Json,
    Yaml,
    Table,
    Text,
}

impl OutputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Json => "json",
            OutputKind::Yaml => "yaml",
            OutputKind::Table => "table",
            OutputKind::Text => "text",
        }
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputKind::Json),
            "yaml" => Ok(OutputKind::Yaml),
            "table" => Ok(OutputKind::Table),
            "text" => Ok(OutputKind::Text),
            other => Err(format!(
                "invalid output '{}' (expected json, yaml, table, or text)",
                other
            )),
        }
    }
}

/// Output kind and optional JMESPath query for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub output: OutputKind,
    pub query: Option<String>,
}

impl FormatOptions {
    pub fn new(output: OutputKind) -> Self {
        Self {
            output,
            query: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// The query, if one was given and is not blank
    fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.trim().is_empty())
    }
}

pub struct OutputFormatter;

impl OutputFormatter {
    /// Render `value` as requested by `opts`.
    pub fn format(value: &dyn Renderable, opts: &FormatOptions) -> Result<Vec<u8>, FormatError> {
        let unsupported = || FormatError::Unsupported {
            output: opts.output,
        };

        let rendered = match opts.output {
            OutputKind::Json => {
                let tree = Self::json_tree(value.as_json().ok_or_else(unsupported)?, opts)?;
                let mut json = serde_json::to_string_pretty(&tree)
                    .map_err(|e| FormatError::Encoding(e.to_string()))?;
                json.push('\n');
                json
            }
            OutputKind::Yaml => {
                let tree = Self::json_tree(value.as_json().ok_or_else(unsupported)?, opts)?;
                serde_yaml::to_string(&tree).map_err(|e| FormatError::Encoding(e.to_string()))?
            }
            OutputKind::Table => {
                let table = value.as_table().ok_or_else(unsupported)?;
                Self::note_ignored_query(opts);
                TableRenderer::render(table.header(), &table.rows())
            }
            OutputKind::Text => {
                let text = value.as_text().ok_or_else(unsupported)?;
                Self::note_ignored_query(opts);
                Self::render_text(&text.text_lines())
            }
        };

        Ok(rendered.into_bytes())
    }

    /// JSON tree for `value`, filtered through the query when one is set.
    fn json_tree(
        value: &dyn JsonCapable,
        opts: &FormatOptions,
    ) -> Result<serde_json::Value, FormatError> {
        let tree = value
            .to_json_tree()
            .map_err(|e| FormatError::Encoding(e.to_string()))?;
        match opts.query() {
            Some(expression) => query::apply(&tree, expression),
            None => Ok(tree),
        }
    }

    fn render_text(lines: &[(String, String)]) -> String {
        lines
            .iter()
            .map(|(label, value)| {
                format!(
                    "{:<width$}{}\n",
                    format!("{}:", label),
                    value,
                    width = TEXT_LABEL_WIDTH
                )
            })
            .collect()
    }

    fn note_ignored_query(opts: &FormatOptions) {
        if let Some(expression) = opts.query() {
            debug!(output = %opts.output, query = expression, "Query ignored for this output");
        }
    }
}
