//! Non-interactive prompters: step defaults, and replayed answers for tests.

use super::{Answer, Prompter};
use crate::error::PromptError;
use std::collections::VecDeque;

/// Answers every step with its default (`--no-interactive`).
///
/// A step without a default cannot be answered and aborts the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn text(&mut self, _message: &str, default: Option<&str>) -> Result<String, PromptError> {
        default.map(str::to_string).ok_or(PromptError::Aborted)
    }

    fn number(&mut self, _message: &str, default: Option<i64>) -> Result<i64, PromptError> {
        default.ok_or(PromptError::Aborted)
    }

    fn confirm(&mut self, _message: &str, default: Option<bool>) -> Result<bool, PromptError> {
        default.ok_or(PromptError::Aborted)
    }

    fn select(
        &mut self,
        _message: &str,
        _options: &[String],
        default: Option<usize>,
    ) -> Result<usize, PromptError> {
        default.ok_or(PromptError::Aborted)
    }
}

/// Replays queued answers in order and records each message asked.
///
/// Running out of answers behaves like the user cancelling.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            transcript: Vec::new(),
        }
    }

    /// Messages asked so far, in order
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> Result<Answer, PromptError> {
        self.transcript.push(message.to_string());
        self.answers.pop_front().ok_or(PromptError::Aborted)
    }
}

fn unexpected(expected: &str, answer: &Answer) -> PromptError {
    PromptError::Io(format!(
        "scripted answer is {}, expected {}",
        answer.kind(),
        expected
    ))
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str, _default: Option<&str>) -> Result<String, PromptError> {
        match self.next(message)? {
            Answer::Text(s) => Ok(s),
            other => Err(unexpected("text", &other)),
        }
    }

    fn number(&mut self, message: &str, _default: Option<i64>) -> Result<i64, PromptError> {
        match self.next(message)? {
            Answer::Number(n) => Ok(n),
            other => Err(unexpected("number", &other)),
        }
    }

    fn confirm(&mut self, message: &str, _default: Option<bool>) -> Result<bool, PromptError> {
        match self.next(message)? {
            Answer::Bool(b) => Ok(b),
            other => Err(unexpected("bool", &other)),
        }
    }

    /// Scripted selections are given as the option text.
    fn select(
        &mut self,
        message: &str,
        options: &[String],
        _default: Option<usize>,
    ) -> Result<usize, PromptError> {
        match self.next(message)? {
            Answer::Text(choice) => options
                .iter()
                .position(|option| *option == choice)
                .ok_or_else(|| PromptError::Io(format!("'{}' is not an option", choice))),
            other => Err(unexpected("text", &other)),
        }
    }
}
