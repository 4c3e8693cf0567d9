//! Prompt steps: one named question with a declared answer type.

use super::{Answer, Prompter};
use crate::error::PromptError;

/// Question kind and its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    Text { default: Option<String> },
    Secret { default: Option<String> },
    Number { default: Option<i64> },
    Confirm { default: Option<bool> },
    /// Answered with the chosen option's text
    Select {
        options: Vec<String>,
        default: Option<usize>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptStep {
    name: String,
    message: String,
    kind: StepKind,
}

impl PromptStep {
    pub fn new(name: impl Into<String>, message: impl Into<String>, kind: StepKind) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind,
        }
    }

    pub fn text(name: impl Into<String>, message: impl Into<String>, default: Option<&str>) -> Self {
        Self::new(
            name,
            message,
            StepKind::Text {
                default: default.map(str::to_string),
            },
        )
    }

    pub fn secret(
        name: impl Into<String>,
        message: impl Into<String>,
        default: Option<&str>,
    ) -> Self {
        Self::new(
            name,
            message,
            StepKind::Secret {
                default: default.map(str::to_string),
            },
        )
    }

    pub fn number(name: impl Into<String>, message: impl Into<String>, default: Option<i64>) -> Self {
        Self::new(name, message, StepKind::Number { default })
    }

    pub fn confirm(
        name: impl Into<String>,
        message: impl Into<String>,
        default: Option<bool>,
    ) -> Self {
        Self::new(name, message, StepKind::Confirm { default })
    }

    /// A choice among `options`; `default` names one of them.
    pub fn select<I, S>(
        name: impl Into<String>,
        message: impl Into<String>,
        options: I,
        default: Option<&str>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let default = default.and_then(|d| options.iter().position(|o| o == d));
        Self::new(name, message, StepKind::Select { options, default })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    /// Ask this step's question on `prompter`.
    pub fn ask(&self, prompter: &mut dyn Prompter) -> Result<Answer, PromptError> {
        let message = self.message.as_str();
        match &self.kind {
            StepKind::Text { default } => prompter.text(message, default.as_deref()).map(Answer::Text),
            StepKind::Secret { default } => {
                prompter.secret(message, default.as_deref()).map(Answer::Text)
            }
            StepKind::Number { default } => prompter.number(message, *default).map(Answer::Number),
            StepKind::Confirm { default } => prompter.confirm(message, *default).map(Answer::Bool),
            StepKind::Select { options, default } => {
                let index = prompter.select(message, options, *default)?;
                options
                    .get(index)
                    .cloned()
                    .map(Answer::Text)
                    .ok_or_else(|| PromptError::Io(format!("selection {} out of range", index)))
            }
        }
    }
}
