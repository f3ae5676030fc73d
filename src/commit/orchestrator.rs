// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit flow: resolve details, detect the ticket, format, preview, apply.

use console::{style, Term};
use regex::Regex;

use crate::config::RulesConfig;
use crate::error::{GitError, Result, ValidationError};
use crate::git::VersionControl;

use super::details::CommitDetails;
use super::format::{format_commit, FormattedMessage};
use super::preview::{CommitPreview, OutputFormat};
use super::prompt::Prompter;
use super::ticket::{detect_ticket, DEFAULT_TICKET_PATTERN};

/// Control flags for a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Create the commit after the preview.
    pub apply: bool,
    /// Skip confirmation; never fall back to prompts.
    pub yes: bool,
    /// Stop after the preview, even with `apply`.
    pub dry_run: bool,
    /// Preview format.
    pub format: OutputFormat,
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Message shown, nothing else requested.
    Previewed(FormattedMessage),
    /// Message shown in dry-run mode.
    DryRun(FormattedMessage),
    /// The commit was created.
    Committed(FormattedMessage),
    /// The user declined the confirmation.
    Cancelled(FormattedMessage),
}

impl Outcome {
    /// The formatted message, whatever the outcome.
    pub fn message(&self) -> &FormattedMessage {
        match self {
            Outcome::Previewed(m)
            | Outcome::DryRun(m)
            | Outcome::Committed(m)
            | Outcome::Cancelled(m) => m,
        }
    }
}

/// Drives one commit from raw input to an optional `git commit`.
pub struct Orchestrator<'a> {
    rules: &'a RulesConfig,
    ticket_pattern: Regex,
    vcs: &'a dyn VersionControl,
    prompter: &'a dyn Prompter,
    term: Term,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator using the default ticket pattern.
    pub fn new(
        rules: &'a RulesConfig,
        vcs: &'a dyn VersionControl,
        prompter: &'a dyn Prompter,
    ) -> Self {
        Self {
            rules,
            ticket_pattern: DEFAULT_TICKET_PATTERN.clone(),
            vcs,
            prompter,
            term: Term::stderr(),
        }
    }

    /// Use a different ticket pattern.
    pub fn with_ticket_pattern(mut self, pattern: Regex) -> Self {
        self.ticket_pattern = pattern;
        self
    }

    /// Run all three phases.
    pub fn run(&self, flags: CommitDetails, options: RunOptions) -> Result<Outcome> {
        let mut details = self.resolve_details(flags, options)?;
        self.fill_ticket(&mut details)?;
        self.finish(&details, options)
    }

    /// Phase 1: merge flags and prompts into a complete record.
    pub fn resolve_details(
        &self,
        flags: CommitDetails,
        options: RunOptions,
    ) -> Result<CommitDetails> {
        if !flags.has_any() {
            tracing::debug!("No commit flags supplied, prompting");
            return self.prompter.prompt_for_details(&flags);
        }

        let missing = flags.missing_required();
        if missing.is_empty() {
            return Ok(flags);
        }

        if options.yes {
            return Err(ValidationError::NonInteractiveMissing {
                fields: missing.into_iter().map(String::from).collect(),
            }
            .into());
        }

        self.term.write_line(&format!(
            "{}",
            style("Some required fields are missing, falling back to interactive prompts.")
                .yellow()
        ))?;
        let mut details = self.prompter.prompt_for_details(&flags)?;
        if details.footer_action.is_none() {
            details.footer_action = flags.footer_action;
        }
        Ok(details)
    }

    /// Phase 2: take the ticket from the branch name when none was given.
    pub fn fill_ticket(&self, details: &mut CommitDetails) -> Result<()> {
        if !details.needs_ticket() {
            return Ok(());
        }

        let Some(branch) = self.vcs.current_branch() else {
            tracing::debug!("No current branch, skipping ticket detection");
            return Ok(());
        };

        if let Some(ticket) = detect_ticket(&branch, &self.ticket_pattern) {
            self.term.write_line(&format!(
                "{}",
                style(format!("Detected ticket from branch: {}", ticket)).dim()
            ))?;
            details.ticket = Some(ticket);
        }

        Ok(())
    }

    /// Phase 3: format, preview and optionally commit.
    pub fn finish(&self, details: &CommitDetails, options: RunOptions) -> Result<Outcome> {
        let message = format_commit(details, self.rules)?;

        if options.format == OutputFormat::Text {
            self.term.write_line(&format!(
                "\n{}\n",
                style("✓ Commit message (preview):").green()
            ))?;
        }
        CommitPreview::new(&message).print(options.format)?;

        if options.dry_run {
            tracing::debug!("Dry run, not committing");
            return Ok(Outcome::DryRun(message));
        }

        if !options.apply {
            self.term.write_line(&format!(
                "{}",
                style("Run with --apply to commit, or --dry-run to preview only.").dim()
            ))?;
            return Ok(Outcome::Previewed(message));
        }

        if !self.vcs.has_staged_changes() {
            return Err(GitError::NoStagedChanges.into());
        }

        if !options.yes && !self.prompter.confirm("Commit using above message?")? {
            self.term
                .write_line(&format!("{}", style("Commit cancelled.").red()))?;
            return Ok(Outcome::Cancelled(message));
        }

        self.vcs.create_commit(message.as_str())?;
        self.term.write_line(&format!(
            "\n{} {}\n",
            style("✓").green().bold(),
            style("Committed successfully.").green()
        ))?;

        Ok(Outcome::Committed(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BeautifierError;
    use crate::git::VersionControl;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeVcs {
        branch: Option<String>,
        staged: bool,
        commits: RefCell<Vec<String>>,
        fail_commit: bool,
    }

    impl VersionControl for FakeVcs {
        fn has_staged_changes(&self) -> bool {
            self.staged
        }

        fn current_branch(&self) -> Option<String> {
            self.branch.clone()
        }

        fn create_commit(&self, message: &str) -> Result<()> {
            if self.fail_commit {
                return Err(GitError::CommitFailed {
                    message: "hook rejected".to_string(),
                }
                .into());
            }
            self.commits.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    struct ScriptedPrompter {
        answers: CommitDetails,
        confirm: bool,
        seen_defaults: RefCell<Option<CommitDetails>>,
        confirm_calls: Cell<usize>,
    }

    impl ScriptedPrompter {
        fn new(answers: CommitDetails) -> Self {
            Self {
                answers,
                confirm: true,
                seen_defaults: RefCell::new(None),
                confirm_calls: Cell::new(0),
            }
        }

        fn declining(mut self) -> Self {
            self.confirm = false;
            self
        }

        fn prompted(&self) -> bool {
            self.seen_defaults.borrow().is_some()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn prompt_for_details(&self, defaults: &CommitDetails) -> Result<CommitDetails> {
            *self.seen_defaults.borrow_mut() = Some(defaults.clone());
            Ok(self.answers.clone())
        }

        fn confirm(&self, _message: &str) -> Result<bool> {
            self.confirm_calls.set(self.confirm_calls.get() + 1);
            Ok(self.confirm)
        }
    }

    fn unused_prompter() -> ScriptedPrompter {
        ScriptedPrompter::new(CommitDetails::default())
    }

    fn options(apply: bool, yes: bool) -> RunOptions {
        RunOptions {
            apply,
            yes,
            ..RunOptions::default()
        }
    }

    #[test]
    fn test_flags_only_preview() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs::default();
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let flags = CommitDetails::new("fix", "handle null token.")
            .with_scope("auth")
            .with_ticket("ABC-99");
        let outcome = orchestrator.run(flags, options(false, false)).unwrap();

        assert!(matches!(outcome, Outcome::Previewed(_)));
        assert_eq!(
            outcome.message().as_str(),
            ["fix(auth): handle null token", "", "Refs: ABC-99"].join(super::super::format::LINE_ENDING)
        );
        assert!(!prompter.prompted());
        assert!(vcs.commits.borrow().is_empty());
    }

    #[test]
    fn test_no_flags_prompts_without_defaults() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs::default();
        let prompter = ScriptedPrompter::new(CommitDetails::new("docs", "update readme"));
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let outcome = orchestrator
            .run(CommitDetails::default(), options(false, false))
            .unwrap();

        assert_eq!(outcome.message().header(), "docs: update readme");
        assert_eq!(
            prompter.seen_defaults.borrow().as_ref(),
            Some(&CommitDetails::default())
        );
    }

    #[test]
    fn test_partial_flags_seed_prompt() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs::default();
        let prompter = ScriptedPrompter::new(CommitDetails::new("feat", "add export"));
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let flags = CommitDetails {
            commit_type: Some("feat".to_string()),
            ..CommitDetails::default()
        }
        .with_footer_action("Closes");
        let details = orchestrator
            .resolve_details(flags.clone(), options(false, false))
            .unwrap();

        assert_eq!(prompter.seen_defaults.borrow().as_ref(), Some(&flags));
        assert_eq!(details.summary.as_deref(), Some("add export"));
        assert_eq!(details.footer_action.as_deref(), Some("Closes"));
    }

    #[test]
    fn test_missing_fields_with_yes_fails() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs::default();
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let flags = CommitDetails {
            summary: Some("orphan summary".to_string()),
            ..CommitDetails::default()
        };
        let err = orchestrator.run(flags, options(true, true)).unwrap_err();

        assert!(matches!(
            err,
            BeautifierError::Validation(ValidationError::NonInteractiveMissing { ref fields })
                if fields == &["type"]
        ));
        assert!(err.to_string().contains("--yes mode: type"));
        assert!(!prompter.prompted());
    }

    #[test]
    fn test_ticket_detected_from_branch() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs {
            branch: Some("feature/ABC-123-login".to_string()),
            ..FakeVcs::default()
        };
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let outcome = orchestrator
            .run(CommitDetails::new("feat", "login form"), options(false, false))
            .unwrap();
        assert_eq!(outcome.message().footer(), Some("Refs: ABC-123"));
    }

    #[test]
    fn test_explicit_ticket_skips_detection() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs {
            branch: Some("feature/ABC-123-login".to_string()),
            ..FakeVcs::default()
        };
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let mut details = CommitDetails::new("feat", "login").with_ticket("XYZ-9");
        orchestrator.fill_ticket(&mut details).unwrap();
        assert_eq!(details.ticket.as_deref(), Some("XYZ-9"));
    }

    #[test]
    fn test_no_match_leaves_ticket_empty() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs {
            branch: Some("main".to_string()),
            ..FakeVcs::default()
        };
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let mut details = CommitDetails::new("feat", "x");
        orchestrator.fill_ticket(&mut details).unwrap();
        assert!(details.ticket.is_none());
    }

    #[test]
    fn test_custom_ticket_pattern() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs {
            branch: Some("bug/gh-77".to_string()),
            ..FakeVcs::default()
        };
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter)
            .with_ticket_pattern(Regex::new(r"gh-\d+").unwrap());

        let mut details = CommitDetails::new("fix", "y");
        orchestrator.fill_ticket(&mut details).unwrap();
        assert_eq!(details.ticket.as_deref(), Some("gh-77"));
    }

    #[test]
    fn test_invalid_type_is_reported() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs::default();
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let err = orchestrator
            .run(CommitDetails::new("wip", "stuff"), options(true, true))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(vcs.commits.borrow().is_empty());
    }

    #[test]
    fn test_apply_without_staged_changes_fails() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs::default();
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let err = orchestrator
            .run(CommitDetails::new("fix", "z"), options(true, true))
            .unwrap_err();
        assert!(matches!(
            err,
            BeautifierError::Git(GitError::NoStagedChanges)
        ));
        assert!(vcs.commits.borrow().is_empty());
    }

    #[test]
    fn test_apply_with_yes_commits_without_confirm() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs {
            staged: true,
            ..FakeVcs::default()
        };
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let outcome = orchestrator
            .run(CommitDetails::new("perf", "cache lookups"), options(true, true))
            .unwrap();

        assert!(matches!(outcome, Outcome::Committed(_)));
        assert_eq!(vcs.commits.borrow().as_slice(), ["perf: cache lookups"]);
        assert_eq!(prompter.confirm_calls.get(), 0);
    }

    #[test]
    fn test_apply_confirmed() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs {
            staged: true,
            ..FakeVcs::default()
        };
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let outcome = orchestrator
            .run(CommitDetails::new("test", "cover parser"), options(true, false))
            .unwrap();

        assert!(matches!(outcome, Outcome::Committed(_)));
        assert_eq!(prompter.confirm_calls.get(), 1);
        assert_eq!(vcs.commits.borrow().len(), 1);
    }

    #[test]
    fn test_apply_cancelled() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs {
            staged: true,
            ..FakeVcs::default()
        };
        let prompter = unused_prompter().declining();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let outcome = orchestrator
            .run(CommitDetails::new("style", "fmt"), options(true, false))
            .unwrap();

        assert!(matches!(outcome, Outcome::Cancelled(_)));
        assert!(vcs.commits.borrow().is_empty());
    }

    #[test]
    fn test_dry_run_never_commits() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs {
            staged: true,
            ..FakeVcs::default()
        };
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let run = RunOptions {
            dry_run: true,
            ..options(true, true)
        };
        let outcome = orchestrator.run(CommitDetails::new("ci", "pin"), run).unwrap();

        assert!(matches!(outcome, Outcome::DryRun(_)));
        assert!(vcs.commits.borrow().is_empty());
    }

    #[test]
    fn test_commit_failure_propagates() {
        let rules = RulesConfig::default();
        let vcs = FakeVcs {
            staged: true,
            fail_commit: true,
            ..FakeVcs::default()
        };
        let prompter = unused_prompter();
        let orchestrator = Orchestrator::new(&rules, &vcs, &prompter);

        let err = orchestrator
            .run(CommitDetails::new("build", "bump"), options(true, true))
            .unwrap_err();
        assert!(err.to_string().contains("hook rejected"));
    }
}
