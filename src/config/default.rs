// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::BeautifierConfig;

/// Get the default configuration.
pub fn default_config() -> BeautifierConfig {
    BeautifierConfig::default()
}

/// Example configuration file, printed by `--print-config`.
pub fn example_config() -> &'static str {
    r#"# commit-beautifier configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

[rules]
allowed_types = ["feat", "fix", "refactor", "chore", "docs", "test", "style", "perf", "build", "ci", "hotfix"]
max_summary_length = 72
wrap_width = 72
footer_action = "Refs"
ticket_pattern = "[A-Z]{2,}-\\d+"

[ui]
color = true
banner = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.rules.max_summary_length, 72);
        assert!(config.ui.banner);
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let config = super::super::loader::parse_config(example_config())
            .expect("Example config should parse");
        let defaults = default_config();
        assert_eq!(config.rules.allowed_types, defaults.rules.allowed_types);
        assert_eq!(config.rules.ticket_pattern, defaults.rules.ticket_pattern);
    }
}
