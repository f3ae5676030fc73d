// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-beautifier - structured commit helper
//!
//! Turns loosely structured commit details into a conventional commit message
//! and optionally hands it to `git commit`.
//!
//! # Example
//!
//! ```
//! use commit_beautifier::commit::{format_commit, CommitDetails};
//! use commit_beautifier::config::RulesConfig;
//!
//! let details = CommitDetails::new("fix", "handle null token.")
//!     .with_scope("auth")
//!     .with_ticket("ABC-99");
//! let message = format_commit(&details, &RulesConfig::default()).unwrap();
//!
//! assert_eq!(message.header(), "fix(auth): handle null token");
//! assert_eq!(message.footer(), Some("Refs: ABC-99"));
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;

// Re-exports for convenience
pub use config::BeautifierConfig;
pub use error::{BeautifierError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let short = GIT_SHA.map(|sha| &sha[..7.min(sha.len())]);
        match (short, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => format!("{} ({} {})", VERSION, sha, date),
            (Some(sha), None) => format!("{} ({})", VERSION, sha),
            _ => VERSION.to_string(),
        }
    }

}
