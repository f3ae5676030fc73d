// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-beautifier.
//!
//! Validation and staged-change errors stop the run with a non-zero exit.
//! Expected git failures (not a repository, no branch) never reach this
//! layer; the adapter recovers them locally.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-beautifier operations.
#[derive(Error, Debug)]
pub enum BeautifierError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("{0}")]
    Git(#[from] GitError),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for BeautifierError {
    fn from(err: dialoguer::Error) -> Self {
        BeautifierError::Ui(err.to_string())
    }
}

impl BeautifierError {
    /// Whether this error came out of commit message validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, BeautifierError::Validation(_))
    }

    /// Follow-up line printed after the error message, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            BeautifierError::Validation(ValidationError::MissingRequiredField {
                allowed, ..
            }) if !allowed.is_empty() => Some(format!("Allowed types: {}", allowed.join(", "))),
            _ => None,
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("No staged changes found. Please `git add` changes before committing.")]
    NoStagedChanges,

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Failed to create commit: {message}")]
    CommitFailed { message: String },

    #[error("Failed to stage commit message file: {message}")]
    TempFile { message: String },
}

/// Commit message validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingRequiredField {
        fields: Vec<String>,
        allowed: Vec<String>,
    },

    #[error("Missing required fields for non-interactive --yes mode: {}", fields.join(", "))]
    NonInteractiveMissing { fields: Vec<String> },

    #[error("Invalid type '{commit_type}'. Allowed types: {}", allowed.join(", "))]
    InvalidType {
        commit_type: String,
        allowed: Vec<String>,
    },
}

/// Result type alias for commit-beautifier operations.
pub type Result<T> = std::result::Result<T, BeautifierError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| BeautifierError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
