// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Everything goes through the `git` binary; only exit status and text output
//! are used.

mod adapter;
pub mod commands;

pub use adapter::VersionControl;
pub use commands::GitCli;
