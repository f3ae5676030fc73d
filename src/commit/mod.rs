// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module: input record, formatting, prompting and the commit flow.

mod details;
pub mod format;
mod orchestrator;
mod preview;
mod prompt;
pub mod ticket;

pub use details::CommitDetails;
pub use format::{format_commit, FormattedMessage};
pub use orchestrator::{Orchestrator, Outcome, RunOptions};
pub use preview::{CommitPreview, OutputFormat};
pub use prompt::{Prompter, TerminalPrompter};
pub use ticket::detect_ticket;
