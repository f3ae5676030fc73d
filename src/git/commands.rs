// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! `git` command wrappers.

use crate::error::{GitError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::adapter::VersionControl;

/// Prefix of the temporary commit message file.
const MESSAGE_FILE_PREFIX: &str = "commit-beautifier-msg-";

/// [`VersionControl`] backed by the `git` executable.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
    temp_dir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the process's current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in `dir` instead of the current directory.
    pub fn with_workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    /// Stage commit message files in `dir` instead of the system temp dir.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    fn git(&self) -> Command {
        let mut cmd = Command::new("git");
        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Run a read-only git command and return its trimmed stdout.
    ///
    /// Spawn failures and non-zero exits both yield `None`.
    fn capture(&self, args: &[&str]) -> Option<String> {
        tracing::debug!("Running git {}", args.join(" "));

        let output = match self.git().args(args).output() {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Failed to run git: {}", e);
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn message_file(&self, message: &str) -> Result<tempfile::NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(MESSAGE_FILE_PREFIX).suffix(".txt");

        let to_error = |e: std::io::Error| GitError::TempFile {
            message: e.to_string(),
        };

        let mut file = match self.temp_dir {
            Some(ref dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(to_error)?;

        file.write_all(message.as_bytes()).map_err(to_error)?;
        file.flush().map_err(to_error)?;

        Ok(file)
    }

    fn commit_from_file(&self, path: &Path) -> Result<()> {
        tracing::debug!("Running git commit -F {}", path.display());

        let status = self
            .git()
            .arg("commit")
            .arg("-F")
            .arg(path)
            .status()
            .map_err(|e| GitError::CommandFailed {
                command: "git commit".to_string(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(GitError::CommitFailed {
                message: format!("git commit exited with {}", status),
            }
            .into());
        }

        Ok(())
    }
}

impl VersionControl for GitCli {
    fn has_staged_changes(&self) -> bool {
        let inside = self.capture(&["rev-parse", "--is-inside-work-tree"]);
        if inside.as_deref() != Some("true") {
            return false;
        }

        self.capture(&["diff", "--cached", "--name-only"])
            .map_or(false, |names| !names.is_empty())
    }

    fn current_branch(&self) -> Option<String> {
        self.capture(&["rev-parse", "--abbrev-ref", "HEAD"])
            .filter(|branch| !branch.is_empty())
    }

    fn create_commit(&self, message: &str) -> Result<()> {
        let file = self.message_file(message)?;
        let result = self.commit_from_file(file.path());

        let path = file.path().to_path_buf();
        if let Err(e) = file.close() {
            tracing::debug!("Failed to remove {}: {}", path.display(), e);
        }

        result
    }
}
