// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message validation and formatting.
//!
//! [`format_commit`] turns a [`CommitDetails`] record into a canonical
//! conventional-commit message:
//!
//! ```text
//! type(scope): summary
//!
//! wrapped body
//!
//! Refs: TICKET-1
//! ```
//!
//! Lengths are counted in characters, not bytes.

use crate::config::RulesConfig;
use crate::error::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::details::{non_blank, CommitDetails};

lazy_static! {
    /// Characters that may not appear in a scope.
    static ref SCOPE_DISALLOWED: Regex = Regex::new(r"[^A-Za-z0-9\-_./]").unwrap();
}

/// Line separator used when assembling messages.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line separator used when assembling messages.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Marker appended to a truncated summary.
pub const ELLIPSIS: char = '…';

/// A validated, fully assembled commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMessage {
    header: String,
    body: Option<String>,
    footer: Option<String>,
    message: String,
    truncated: bool,
}

impl FormattedMessage {
    /// The `type(scope): summary` line.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The wrapped body, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The `Action: TICKET` line, if any.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// The complete message text.
    pub fn as_str(&self) -> &str {
        &self.message
    }

    /// Whether the summary had to be shortened.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }
}

impl std::fmt::Display for FormattedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validate and format commit details using the given rules.
pub fn format_commit(
    details: &CommitDetails,
    rules: &RulesConfig,
) -> Result<FormattedMessage, ValidationError> {
    let commit_type = non_blank(&details.commit_type).map(str::to_lowercase);
    let summary = non_blank(&details.summary)
        .map(normalize_summary)
        .filter(|s| !s.is_empty());
    let (commit_type, summary) = match (commit_type, summary) {
        (Some(t), Some(s)) => (t, s),
        (t, s) => {
            let fields = [("type", t.is_none()), ("summary", s.is_none())]
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| name.to_string())
                .collect();
            return Err(ValidationError::MissingRequiredField {
                fields,
                allowed: rules.allowed_types.clone(),
            });
        }
    };

    if !rules.allowed_types.iter().any(|t| *t == commit_type) {
        return Err(ValidationError::InvalidType {
            commit_type: details.commit_type.clone().unwrap_or_default(),
            allowed: rules.allowed_types.clone(),
        });
    }

    let (summary, truncated) = truncate_summary(summary, rules.max_summary_length);
    if truncated {
        tracing::warn!(
            "Summary longer than {} chars, truncating.",
            rules.max_summary_length
        );
    }

    let header = match details.scope.as_deref().map(sanitize_scope) {
        Some(scope) if !scope.is_empty() => format!("{}({}): {}", commit_type, scope, summary),
        _ => format!("{}: {}", commit_type, summary),
    };

    let body = non_blank(&details.body).map(|b| wrap_text(b, rules.wrap_width).join(LINE_ENDING));

    let footer = non_blank(&details.ticket).map(|ticket| {
        let action = non_blank(&details.footer_action).unwrap_or(rules.footer_action.as_str());
        format!("{}: {}", action, ticket)
    });

    let mut parts = vec![header.as_str()];
    for section in [&body, &footer].into_iter().flatten() {
        parts.push("");
        parts.push(section);
    }
    let message = parts.join(LINE_ENDING);

    Ok(FormattedMessage {
        header,
        body,
        footer,
        message,
        truncated,
    })
}

/// Trim the scope and drop every character outside `[A-Za-z0-9-_./]`.
pub fn sanitize_scope(scope: &str) -> String {
    SCOPE_DISALLOWED.replace_all(scope.trim(), "").into_owned()
}

/// Trim the summary and strip a single trailing period.
pub fn normalize_summary(summary: &str) -> String {
    let trimmed = summary.trim();
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

/// Shorten to `max` characters, the last one being an ellipsis.
fn truncate_summary(summary: String, max: usize) -> (String, bool) {
    if summary.chars().count() <= max {
        return (summary, false);
    }

    let mut short: String = summary.chars().take(max.saturating_sub(1)).collect();
    short.push(ELLIPSIS);
    (short, true)
}

/// Greedy word wrap.
///
/// Words are split on any whitespace. A word is appended to the current line
/// while the line stays within `width` characters including the separating
/// space; otherwise the line is flushed. A word wider than `width` gets a
/// line of its own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_len = word_len;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
