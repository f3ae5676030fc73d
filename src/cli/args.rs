// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::commit::CommitDetails;

pub use crate::commit::OutputFormat;

/// commit-beautifier - structured commit helper
///
/// Builds a conventional commit message from flags or prompts, previews it,
/// and optionally creates the commit.
#[derive(Parser, Debug)]
#[command(name = "commit-beautifier")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Interactive commit CLI with formatting and validation", long_about = None)]
pub struct Cli {
    /// Commit type (feat, fix, refactor, chore, docs, test, style, perf, build, ci, hotfix)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub commit_type: Option<String>,

    /// Short summary (1-72 chars)
    #[arg(short = 'm', long)]
    pub summary: Option<String>,

    /// Longer description
    #[arg(short, long)]
    pub body: Option<String>,

    /// Ticket id for the footer (e.g. ABC-123); skips branch detection
    #[arg(short = 'i', long)]
    pub ticket: Option<String>,

    /// Commit scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Footer label placed before the ticket
    #[arg(long, value_name = "LABEL")]
    pub footer_action: Option<String>,

    /// Create the commit after the preview (requires staged changes)
    #[arg(short, long)]
    pub apply: bool,

    /// Auto-confirm; fail instead of prompting when fields are missing
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Preview only, never commit
    #[arg(long)]
    pub dry_run: bool,

    /// Preview output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, env = "COMMIT_BEAUTIFIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print an example configuration file and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// The commit fields supplied as flags.
    pub fn commit_details(&self) -> CommitDetails {
        CommitDetails {
            commit_type: self.commit_type.clone(),
            scope: self.scope.clone(),
            summary: self.summary.clone(),
            body: self.body.clone(),
            ticket: self.ticket.clone(),
            footer_action: self.footer_action.clone(),
        }
    }
}
