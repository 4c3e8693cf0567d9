//! Interactive prompt pipeline
//!
//! A [`PromptPipeline`] is an ordered list of typed steps. Running it against a
//! [`Prompter`] asks each question in turn and collects the answers into a
//! [`ResultSet`]. Steps may be deferred: built from the answers collected so
//! far, or skipped entirely.

use crate::error::PromptError;
use std::borrow::Cow;
use tracing::debug;

mod result_set;
mod scripted;
mod step;
mod terminal;

pub use result_set::{Answer, ResultSet};
pub use scripted::{DefaultsPrompter, ScriptedPrompter};
pub use step::{PromptStep, StepKind};
pub use terminal::TerminalPrompter;

/// Interactive channel a pipeline asks its questions on.
pub trait Prompter {
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String, PromptError>;

    /// Text input that is not echoed. Channels without a hidden mode fall back to `text`.
    fn secret(&mut self, message: &str, default: Option<&str>) -> Result<String, PromptError> {
        self.text(message, default)
    }

    fn number(&mut self, message: &str, default: Option<i64>) -> Result<i64, PromptError>;

    fn confirm(&mut self, message: &str, default: Option<bool>) -> Result<bool, PromptError>;

    /// Returns the index of the chosen option.
    fn select(
        &mut self,
        message: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<usize, PromptError>;
}

type DeferredStep = Box<dyn Fn(&ResultSet) -> Option<PromptStep>>;

enum Stage {
    Fixed(PromptStep),
    Deferred(DeferredStep),
}

/// Ordered sequence of prompt steps.
#[derive(Default)]
pub struct PromptPipeline {
    stages: Vec<Stage>,
}

impl PromptPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: PromptStep) -> Self {
        self.stages.push(Stage::Fixed(step));
        self
    }

    /// Add a step built from the answers recorded so far; `None` skips it.
    pub fn step_with<F>(mut self, build: F) -> Self
    where
        F: Fn(&ResultSet) -> Option<PromptStep> + 'static,
    {
        self.stages.push(Stage::Deferred(Box::new(build)));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every step in order.
    ///
    /// The first failing step ends the run and its error is returned; answers
    /// collected before it are dropped.
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<ResultSet, PromptError> {
        let mut results = ResultSet::default();

        for stage in &self.stages {
            let step: Cow<'_, PromptStep> = match stage {
                Stage::Fixed(step) => Cow::Borrowed(step),
                Stage::Deferred(build) => match build(&results) {
                    Some(step) => Cow::Owned(step),
                    None => continue,
                },
            };

            debug!(step = step.name(), "Prompting");
            let answer = step.ask(prompter).map_err(|err| {
                debug!(step = step.name(), error = %err, "Prompt pipeline stopped");
                err
            })?;
            results.record(step.name(), answer);
        }

        Ok(results)
    }
}
