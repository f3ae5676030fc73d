// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-beautifier - structured commit helper
//!
//! Collects commit details, formats a conventional commit message and
//! optionally creates the commit.

use clap::Parser;
use commit_beautifier::cli::{run, Cli};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    // Run the CLI
    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("{}", style(hint).dim());
        }
        std::process::exit(1);
    }
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commit_beautifier=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!(
            "Debug logging enabled, commit-beautifier {}",
            commit_beautifier::version::version_string()
        );
    }
}
