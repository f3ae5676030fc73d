// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive input.
//!
//! The orchestrator only talks to the [`Prompter`] trait, so tests can swap
//! the terminal for a scripted double.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::config::{CommitType, RulesConfig};
use crate::error::Result;

use super::details::CommitDetails;
use super::format::normalize_summary;

/// Source of interactive answers.
pub trait Prompter {
    /// Ask for commit details, pre-filled with `defaults`.
    fn prompt_for_details(&self, defaults: &CommitDetails) -> Result<CommitDetails>;

    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Prompter backed by dialoguer on the controlling terminal.
pub struct TerminalPrompter {
    allowed_types: Vec<String>,
    max_summary_length: usize,
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a prompter offering the configured types.
    pub fn new(rules: &RulesConfig) -> Self {
        Self {
            allowed_types: rules.allowed_types.clone(),
            max_summary_length: rules.max_summary_length,
            theme: ColorfulTheme::default(),
        }
    }

    fn prompt_type(&self, default: Option<&str>) -> Result<String> {
        let width = self
            .allowed_types
            .iter()
            .map(|t| t.chars().count())
            .max()
            .unwrap_or(0);

        let items: Vec<String> = self
            .allowed_types
            .iter()
            .map(|t| match t.parse::<CommitType>() {
                Ok(known) => format!(
                    "{:width$} → {}",
                    t,
                    style(known.description()).dim(),
                    width = width
                ),
                Err(()) => t.clone(),
            })
            .collect();

        let default_idx = default
            .map(|d| d.trim().to_lowercase())
            .and_then(|d| self.allowed_types.iter().position(|t| *t == d))
            .unwrap_or(0);

        let selection = Select::with_theme(&self.theme)
            .with_prompt("Select the type of change")
            .items(&items)
            .default(default_idx)
            .interact()?;

        Ok(self.allowed_types[selection].clone())
    }

    fn prompt_optional(&self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.with_initial_text(default);
        }

        let value = input.interact_text()?;
        let value = value.trim();
        Ok((!value.is_empty()).then(|| value.to_string()))
    }

    fn prompt_summary(&self, default: Option<&str>) -> Result<String> {
        let max_len = self.max_summary_length;

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("Enter a short summary (max {} chars)", max_len))
            .validate_with(move |input: &String| check_summary(input, max_len));
        if let Some(default) = default {
            input = input.with_initial_text(default);
        }

        Ok(input.interact_text()?.trim().to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn prompt_for_details(&self, defaults: &CommitDetails) -> Result<CommitDetails> {
        let commit_type = self.prompt_type(defaults.commit_type.as_deref())?;
        let scope = self.prompt_optional("Scope (optional)", defaults.scope.as_deref())?;
        let summary = self.prompt_summary(defaults.summary.as_deref())?;
        let body = self.prompt_optional(
            "Enter a longer description (optional)",
            defaults.body.as_deref(),
        )?;
        let ticket = self.prompt_optional(
            "Enter a ticket ID (optional, detected from the branch name when empty, e.g. ABC-123)",
            defaults.ticket.as_deref(),
        )?;

        Ok(CommitDetails {
            commit_type: Some(commit_type),
            scope,
            summary: Some(summary),
            body,
            ticket,
            footer_action: defaults.footer_action.clone(),
        })
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(true)
            .interact()?)
    }
}

/// Length check applied to the summary as it will appear in the header.
fn check_summary(input: &str, max_len: usize) -> std::result::Result<(), String> {
    let len = normalize_summary(input).chars().count();
    if len == 0 || len > max_len {
        Err(format!("Summary must be 1-{} characters.", max_len))
    } else {
        Ok(())
    }
}
