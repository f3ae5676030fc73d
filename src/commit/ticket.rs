// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ticket id detection from branch names.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Two or more uppercase letters, a hyphen, then digits (`ABC-123`).
    pub static ref DEFAULT_TICKET_PATTERN: Regex = Regex::new(r"[A-Z]{2,}-\d+").unwrap();
}

/// Return the first ticket id found in `branch`.
pub fn detect_ticket(branch: &str, pattern: &Regex) -> Option<String> {
    pattern.find(branch).map(|m| m.as_str().to_string())
}
