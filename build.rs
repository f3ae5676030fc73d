// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds the short git SHA and commit date for `version::version_string`.
//! Outside a git checkout vergen falls back to placeholder values.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    Ok(())
}
