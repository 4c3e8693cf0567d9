//! Config file documents: format detection, parsing, and persistence.

use crate::error::ConfigError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk config file encoding, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Json,
    Yaml,
    Toml,
}

impl FileFormat {
    /// Formats offered when writing a new profile file
    pub const ALL: [FileFormat; 3] = [FileFormat::Json, FileFormat::Yaml, FileFormat::Toml];

    /// Extensions probed during discovery, in order
    pub const DISCOVERY_EXTENSIONS: [&'static str; 4] = ["yaml", "yml", "json", "toml"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "yaml" | "yml" => Some(FileFormat::Yaml),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Yaml => "yaml",
            FileFormat::Toml => "toml",
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// A single config file: its location, format, and top-level entries.
///
/// Entries are kept as loosely typed values so keys this tool does not know
/// about survive a read-modify-write cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    path: PathBuf,
    format: FileFormat,
    entries: BTreeMap<String, Value>,
}

impl ConfigDocument {
    /// An empty document that will be written to `path` in `format`.
    pub fn empty(path: impl Into<PathBuf>, format: FileFormat) -> Self {
        Self {
            path: path.into(),
            format,
            entries: BTreeMap::new(),
        }
    }

    /// Read and parse an existing config file.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let format = detect_format(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::parse(path.display().to_string(), e))?;
        Self::parse(path, format, &content)
    }

    /// Read `path` if it exists, otherwise start an empty document for it.
    pub fn read_or_empty(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::read(path)
        } else {
            Ok(Self::empty(path, detect_format(path)?))
        }
    }

    /// Parse `content` as a document in `format`.
    pub fn parse(
        path: impl Into<PathBuf>,
        format: FileFormat,
        content: &str,
    ) -> Result<Self, ConfigError> {
        let path = path.into();
        let origin = || path.display().to_string();

        let entries = match format {
            FileFormat::Json => serde_json::from_str::<BTreeMap<String, Value>>(content)
                .map_err(|e| ConfigError::parse(origin(), e))?,
            // An empty YAML document is valid and has no entries
            FileFormat::Yaml => serde_yaml::from_str::<Option<BTreeMap<String, Value>>>(content)
                .map_err(|e| ConfigError::parse(origin(), e))?
                .unwrap_or_default(),
            FileFormat::Toml => toml::from_str::<BTreeMap<String, Value>>(content)
                .map_err(|e| ConfigError::parse(origin(), e))?,
        };

        Ok(Self {
            path,
            format,
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    pub fn entries(&self) -> &BTreeMap<String, Value> {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Encode the entries in the document's format.
    pub fn render(&self) -> Result<String, ConfigError> {
        let rendered = match self.format {
            FileFormat::Json => serde_json::to_string_pretty(&self.entries)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| ConfigError::write(&self.path, e))?,
            FileFormat::Yaml => serde_yaml::to_string(&self.entries)
                .map_err(|e| ConfigError::write(&self.path, e))?,
            FileFormat::Toml => {
                toml::to_string(&self.entries).map_err(|e| ConfigError::write(&self.path, e))?
            }
        };
        Ok(rendered)
    }

    /// Write the document, creating parent directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let rendered = self.render()?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::write(parent, e))?;
        }
        std::fs::write(&self.path, rendered).map_err(|e| ConfigError::write(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), format = %self.format, "config file written");
        Ok(())
    }
}

fn detect_format(path: &Path) -> Result<FileFormat, ConfigError> {
    FileFormat::from_path(path).ok_or_else(|| {
        ConfigError::parse(
            path.display().to_string(),
            "unsupported config file extension (expected yaml, yml, json, or toml)",
        )
    })
}
