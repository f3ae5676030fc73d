// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Wiring of configuration, git and the terminal into the commit flow.

use console::{style, Term};

use crate::commit::{Orchestrator, Outcome, RunOptions, TerminalPrompter};
use crate::config::{default::example_config, BeautifierConfig};
use crate::error::Result;
use crate::git::GitCli;

use super::args::{Cli, OutputFormat};

/// Run the CLI with the given arguments.
///
/// Errors are returned to `main`, which reports them and exits with status 1.
pub fn run(cli: Cli) -> Result<()> {
    if cli.print_config {
        print!("{}", example_config());
        return Ok(());
    }

    let config = match cli.config {
        Some(ref path) => BeautifierConfig::load_from(path)?,
        None => BeautifierConfig::load()?,
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let term = Term::stderr();
    if config.ui.banner && cli.format == OutputFormat::Text {
        term.write_line(&format!(
            "\n{}\n",
            style("commit-beautifier - structured commit helper").cyan()
        ))?;
    }

    let git = GitCli::new();
    let prompter = TerminalPrompter::new(&config.rules);
    let orchestrator = Orchestrator::new(&config.rules, &git, &prompter)
        .with_ticket_pattern(config.rules.ticket_regex()?);

    let options = RunOptions {
        apply: cli.apply,
        yes: cli.yes,
        dry_run: cli.dry_run,
        format: cli.format,
    };

    tracing::debug!("Running with options: {:?}", options);

    let outcome = orchestrator.run(cli.commit_details(), options)?;
    if let Outcome::Committed(ref message) = outcome {
        tracing::debug!("Committed: {}", message.header());
    }
    Ok(())
}
