// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The loosely-structured commit record collected from flags or prompts.

/// Commit metadata as supplied by the user, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitDetails {
    /// Commit type (feat, fix, etc.).
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Summary line.
    pub summary: Option<String>,
    /// Optional body.
    pub body: Option<String>,
    /// Optional ticket reference.
    pub ticket: Option<String>,
    /// Footer label; the configured default is used when absent.
    pub footer_action: Option<String>,
}

impl CommitDetails {
    /// Create details with the two required fields.
    pub fn new(commit_type: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            commit_type: Some(commit_type.into()),
            summary: Some(summary.into()),
            ..Self::default()
        }
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the ticket.
    pub fn with_ticket(mut self, ticket: impl Into<String>) -> Self {
        self.ticket = Some(ticket.into());
        self
    }

    /// Set the footer action.
    pub fn with_footer_action(mut self, action: impl Into<String>) -> Self {
        self.footer_action = Some(action.into());
        self
    }

    /// Whether any commit field was supplied at all.
    ///
    /// `footer_action` is a presentation knob and does not count.
    pub fn has_any(&self) -> bool {
        [
            &self.commit_type,
            &self.scope,
            &self.summary,
            &self.body,
            &self.ticket,
        ]
        .iter()
        .any(|field| field.is_some())
    }

    /// Names of the required fields that are absent or blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.commit_type) {
            missing.push("type");
        }
        if is_blank(&self.summary) {
            missing.push("summary");
        }
        missing
    }

    /// Whether a ticket is still needed.
    pub fn needs_ticket(&self) -> bool {
        is_blank(&self.ticket)
    }
}

pub(crate) fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Return the trimmed value if it is non-empty.
pub(crate) fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
