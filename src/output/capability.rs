//! Rendering capabilities a result type declares for itself.

use super::OutputKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Produces the JSON-equivalent tree of a value. YAML output is built from the same tree.
pub trait JsonCapable {
    fn to_json_tree(&self) -> Result<serde_json::Value, serde_json::Error>;
}

impl<T: Serialize> JsonCapable for T {
    fn to_json_tree(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// One table row: column name to cell text.
pub type TableRow = BTreeMap<&'static str, String>;

pub trait TableCapable {
    /// Column names, in display order
    fn header(&self) -> &'static [&'static str];

    fn rows(&self) -> Vec<TableRow>;
}

pub trait TextCapable {
    /// Label and value pairs, in display order
    fn text_lines(&self) -> Vec<(String, String)>;
}

/// A command result and the output formats it supports.
///
/// Each accessor defaults to `None`; a type opts into a format by returning
/// itself from the matching accessor.
pub trait Renderable {
    fn as_json(&self) -> Option<&dyn JsonCapable> {
        None
    }

    fn as_table(&self) -> Option<&dyn TableCapable> {
        None
    }

    fn as_text(&self) -> Option<&dyn TextCapable> {
        None
    }

    fn supports(&self, output: OutputKind) -> bool {
        match output {
            OutputKind::Json | OutputKind::Yaml => self.as_json().is_some(),
            OutputKind::Table => self.as_table().is_some(),
            OutputKind::Text => self.as_text().is_some(),
        }
    }
}
