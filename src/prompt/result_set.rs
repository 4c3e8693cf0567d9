//! Ordered, named prompt answers with typed access.

use crate::error::PromptError;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single typed answer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Number(i64),
    Bool(bool),
}

impl Answer {
    pub fn kind(&self) -> &'static str {
        match self {
            Answer::Text(_) => "text",
            Answer::Number(_) => "number",
            Answer::Bool(_) => "bool",
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Text(s) => f.write_str(s),
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Answers keyed by step name, iterated in first-recorded order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(String, Answer)>,
}

impl ResultSet {
    /// Record `answer` under `name`. A repeated name replaces the earlier answer in place.
    pub fn record(&mut self, name: impl Into<String>, answer: Answer) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = answer,
            None => self.entries.push((name, answer)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, answer)| answer)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn text(&self, name: &str) -> Result<&str, PromptError> {
        match self.require(name)? {
            Answer::Text(s) => Ok(s),
            other => Err(mismatch(name, "text", other)),
        }
    }

    pub fn number(&self, name: &str) -> Result<i64, PromptError> {
        match self.require(name)? {
            Answer::Number(n) => Ok(*n),
            other => Err(mismatch(name, "number", other)),
        }
    }

    pub fn flag(&self, name: &str) -> Result<bool, PromptError> {
        match self.require(name)? {
            Answer::Bool(b) => Ok(*b),
            other => Err(mismatch(name, "bool", other)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.entries
            .iter()
            .map(|(name, answer)| (name.as_str(), answer))
    }

    fn require(&self, name: &str) -> Result<&Answer, PromptError> {
        self.get(name)
            .ok_or_else(|| PromptError::Missing(name.to_string()))
    }
}

fn mismatch(name: &str, expected: &'static str, found: &Answer) -> PromptError {
    PromptError::TypeMismatch {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, answer) in &self.entries {
            map.serialize_entry(name, answer)?;
        }
        map.end()
    }
}
