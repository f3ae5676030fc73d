// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from commit-beautifier.toml.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// The main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BeautifierConfig {
    /// Formatting and validation rules.
    pub rules: RulesConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl BeautifierConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Check values that serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        self.rules.validate()
    }
}

/// Rules injected into the formatter and orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Allowed commit types, lowercase.
    pub allowed_types: Vec<String>,

    /// Maximum length of the summary, in characters.
    pub max_summary_length: usize,

    /// Column at which the body is wrapped.
    pub wrap_width: usize,

    /// Label placed before the ticket in the footer.
    pub footer_action: String,

    /// Pattern used to find a ticket id in the branch name.
    pub ticket_pattern: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            allowed_types: CommitType::all()
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            max_summary_length: 72,
            wrap_width: 72,
            footer_action: "Refs".to_string(),
            ticket_pattern: r"[A-Z]{2,}-\d+".to_string(),
        }
    }
}

impl RulesConfig {
    /// Compile the ticket pattern.
    pub fn ticket_regex(&self) -> Result<Regex> {
        Regex::new(&self.ticket_pattern).map_err(|e| {
            ConfigError::InvalidValue {
                key: "rules.ticket_pattern".to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Trim and lowercase the allowed types so they compare equal to
    /// normalized input.
    pub fn normalize(&mut self) {
        for t in &mut self.allowed_types {
            *t = t.trim().to_lowercase();
        }
    }

    fn validate(&self) -> Result<()> {
        let invalid = |key: &str, message: &str| ConfigError::InvalidValue {
            key: format!("rules.{}", key),
            message: message.to_string(),
        };

        if self.allowed_types.is_empty() {
            return Err(invalid("allowed_types", "at least one type is required").into());
        }
        if self.allowed_types.iter().any(|t| t.trim().is_empty()) {
            return Err(invalid("allowed_types", "types must not be blank").into());
        }
        if self.max_summary_length < 2 {
            return Err(invalid("max_summary_length", "must be at least 2").into());
        }
        if self.wrap_width == 0 {
            return Err(invalid("wrap_width", "must be greater than zero").into());
        }
        if self.footer_action.trim().is_empty() {
            return Err(invalid("footer_action", "must not be blank").into());
        }
        self.ticket_regex()?;

        Ok(())
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to print the banner line on startup.
    pub banner: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            banner: true,
        }
    }
}

/// Built-in commit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Refactor,
    Chore,
    Docs,
    Test,
    Style,
    Perf,
    Build,
    Ci,
    Hotfix,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Refactor => "refactor",
            CommitType::Chore => "chore",
            CommitType::Docs => "docs",
            CommitType::Test => "test",
            CommitType::Style => "style",
            CommitType::Perf => "perf",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Hotfix => "hotfix",
        }
    }

    /// Get a description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Refactor => "Code refactor (no feature or fix)",
            CommitType::Chore => "Build process or tooling",
            CommitType::Docs => "Documentation changes",
            CommitType::Test => "Adding or updating tests",
            CommitType::Style => "Code style or formatting",
            CommitType::Perf => "Performance improvements",
            CommitType::Build => "Build system or dependency changes",
            CommitType::Ci => "CI configuration changes",
            CommitType::Hotfix => "Quick critical production fix",
        }
    }

    /// Get all commit types, in prompt order.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Refactor,
            CommitType::Chore,
            CommitType::Docs,
            CommitType::Test,
            CommitType::Style,
            CommitType::Perf,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Hotfix,
        ]
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        CommitType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == lowered)
            .ok_or(())
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
