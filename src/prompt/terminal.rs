//! Terminal prompter backed by `dialoguer`.

use super::Prompter;
use crate::error::PromptError;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

/// Asks questions on the controlling terminal. Esc on a confirm or select aborts.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String, PromptError> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    /// An empty entry keeps the existing value without echoing it.
    fn secret(&mut self, message: &str, default: Option<&str>) -> Result<String, PromptError> {
        let prompt = match default {
            Some(_) => format!("{} (leave empty to keep current)", message),
            None => message.to_string(),
        };
        let entered = Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(default.is_some())
            .interact()?;

        match default {
            Some(current) if entered.is_empty() => Ok(current.to_string()),
            _ => Ok(entered),
        }
    }

    fn number(&mut self, message: &str, default: Option<i64>) -> Result<i64, PromptError> {
        let mut input = Input::<i64>::with_theme(&self.theme).with_prompt(message);
        if let Some(default) = default {
            input = input.default(default);
        }
        Ok(input.interact_text()?)
    }

    fn confirm(&mut self, message: &str, default: Option<bool>) -> Result<bool, PromptError> {
        let mut confirm = Confirm::with_theme(&self.theme).with_prompt(message);
        if let Some(default) = default {
            confirm = confirm.default(default);
        }
        confirm.interact_opt()?.ok_or(PromptError::Aborted)
    }

    fn select(
        &mut self,
        message: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<usize, PromptError> {
        let mut select = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options);
        if let Some(default) = default {
            select = select.default(default);
        }
        select.interact_opt()?.ok_or(PromptError::Aborted)
    }
}
