// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The version-control seam used by the commit flow.

use crate::error::Result;

/// The three version-control operations the commit flow needs.
///
/// The query operations never fail: outside a repository they report
/// "nothing staged" and "no branch".
pub trait VersionControl {
    /// Whether the index holds changes for the next commit.
    fn has_staged_changes(&self) -> bool;

    /// Abbreviated name of the checked-out branch.
    fn current_branch(&self) -> Option<String>;

    /// Commit the staged changes with `message`.
    fn create_commit(&self, message: &str) -> Result<()>;
}
