//! Command result views
//!
//! The values commands hand to the output formatter, each declaring the
//! formats it can be rendered in.

use crate::output::{JsonCapable, Renderable, TableCapable, TableRow, TextCapable};
use crate::prompt::ResultSet;
use serde::Serialize;

/// Demo record listed by `foo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Foo {
    pub id: i64,
    pub name: String,
    pub age: String,
}

impl Foo {
    /// Fixed demo records served by `foo`.
    pub fn samples() -> Vec<Foo> {
        (1..=2)
            .map(|id| Foo {
                id,
                name: "First Name".to_string(),
                age: "19".to_string(),
            })
            .collect()
    }
}

/// `foo`: table, json, yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FooList(pub Vec<Foo>);

impl TableCapable for FooList {
    fn header(&self) -> &'static [&'static str] {
        &["ID", "NAME", "AGE"]
    }

    fn rows(&self) -> Vec<TableRow> {
        self.0
            .iter()
            .map(|foo| {
                TableRow::from([
                    ("ID", foo.id.to_string()),
                    ("NAME", foo.name.clone()),
                    ("AGE", foo.age.clone()),
                ])
            })
            .collect()
    }
}

impl Renderable for FooList {
    fn as_json(&self) -> Option<&dyn JsonCapable> {
        Some(self)
    }

    fn as_table(&self) -> Option<&dyn TableCapable> {
        Some(self)
    }
}

/// `foo --id N`: text, json, yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FooItem(pub Foo);

impl TextCapable for FooItem {
    fn text_lines(&self) -> Vec<(String, String)> {
        vec![
            ("ID".to_string(), self.0.id.to_string()),
            ("Name".to_string(), self.0.name.clone()),
            ("Age".to_string(), self.0.age.clone()),
        ]
    }
}

impl Renderable for FooItem {
    fn as_json(&self) -> Option<&dyn JsonCapable> {
        Some(self)
    }

    fn as_text(&self) -> Option<&dyn TextCapable> {
        Some(self)
    }
}

/// One row of `config list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: String,
}

/// `config list`: table, json, yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigList {
    pub entries: Vec<ConfigEntry>,
}

impl TableCapable for ConfigList {
    fn header(&self) -> &'static [&'static str] {
        &["NAME", "TYPE", "VALUE"]
    }

    fn rows(&self) -> Vec<TableRow> {
        self.entries
            .iter()
            .map(|entry| {
                TableRow::from([
                    ("NAME", entry.name.clone()),
                    ("TYPE", entry.value_type.clone()),
                    ("VALUE", entry.value.clone()),
                ])
            })
            .collect()
    }
}

impl Renderable for ConfigList {
    fn as_json(&self) -> Option<&dyn JsonCapable> {
        Some(self)
    }

    fn as_table(&self) -> Option<&dyn TableCapable> {
        Some(self)
    }
}

/// `version`: text, json, yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl TextCapable for VersionInfo {
    fn text_lines(&self) -> Vec<(String, String)> {
        vec![
            ("Name".to_string(), self.name.to_string()),
            ("Version".to_string(), self.version.to_string()),
        ]
    }
}

impl Renderable for VersionInfo {
    fn as_json(&self) -> Option<&dyn JsonCapable> {
        Some(self)
    }

    fn as_text(&self) -> Option<&dyn TextCapable> {
        Some(self)
    }
}

/// `bar`: prompt answers as text, json, yaml
impl TextCapable for ResultSet {
    fn text_lines(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(name, answer)| (name.to_string(), answer.to_string()))
            .collect()
    }
}

impl Renderable for ResultSet {
    fn as_json(&self) -> Option<&dyn JsonCapable> {
        Some(self)
    }

    fn as_text(&self) -> Option<&dyn TextCapable> {
        Some(self)
    }
}
