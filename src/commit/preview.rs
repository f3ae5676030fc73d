// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message preview.

use console::{measure_text_width, pad_str, style, Alignment, Term};

use crate::error::{Result, ResultExt};

use super::format::FormattedMessage;

/// Output format for the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Boxed, colored text (default)
    #[default]
    Text,
    /// JSON for machine parsing
    Json,
}

/// Inner width of the preview box.
const MIN_BOX_WIDTH: usize = 72;

/// Commit preview renderer.
pub struct CommitPreview<'a> {
    message: &'a FormattedMessage,
}

impl<'a> CommitPreview<'a> {
    /// Create a new preview for a commit message.
    pub fn new(message: &'a FormattedMessage) -> Self {
        Self { message }
    }

    /// Print the preview to stdout in the requested format.
    pub fn print(&self, format: OutputFormat) -> Result<()> {
        let term = Term::stdout();
        match format {
            OutputFormat::Text => {
                for line in self.render_lines() {
                    term.write_line(&line)?;
                }
            }
            OutputFormat::Json => term.write_line(&self.to_json()?)?,
        }
        Ok(())
    }

    /// Render the message inside a box, header highlighted.
    fn render_lines(&self) -> Vec<String> {
        let lines: Vec<String> = std::iter::once(self.format_header())
            .chain(
                self.message
                    .as_str()
                    .lines()
                    .skip(1)
                    .map(|line| line.to_string()),
            )
            .collect();

        let width = lines
            .iter()
            .map(|line| measure_text_width(line))
            .max()
            .unwrap_or(0)
            .max(MIN_BOX_WIDTH);

        let title = " Commit Preview ";
        let top = format!(
            "┌─{}{}┐",
            title,
            "─".repeat(width + 1 - measure_text_width(title))
        );
        let bottom = format!("└{}┘", "─".repeat(width + 2));

        let mut out = Vec::with_capacity(lines.len() + 2);
        out.push(style(top).dim().to_string());
        for line in &lines {
            out.push(format!(
                "{} {} {}",
                style("│").dim(),
                pad_str(line, width, Alignment::Left, None),
                style("│").dim()
            ));
        }
        out.push(style(bottom).dim().to_string());
        out
    }

    /// Format the header with syntax highlighting.
    fn format_header(&self) -> String {
        let header = self.message.header();
        let Some((prefix, summary)) = header.split_once(": ") else {
            return header.to_string();
        };

        let (commit_type, scope) = match prefix.split_once('(') {
            Some((t, rest)) => (t, rest.strip_suffix(')')),
            None => (prefix, None),
        };

        let type_style = match commit_type {
            "feat" => style(commit_type).green().bold(),
            "fix" | "hotfix" => style(commit_type).red().bold(),
            "docs" => style(commit_type).blue().bold(),
            "style" => style(commit_type).magenta().bold(),
            "refactor" => style(commit_type).yellow().bold(),
            "perf" => style(commit_type).cyan().bold(),
            _ => style(commit_type).white().bold(),
        };

        let mut result = type_style.to_string();
        if let Some(scope) = scope {
            result.push_str(&format!("({})", style(scope).cyan()));
        }
        result.push_str(": ");
        result.push_str(summary);
        result
    }

    /// Machine-readable form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self.message).context("json preview")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::details::CommitDetails;
    use crate::commit::format::format_commit;
    use crate::config::RulesConfig;

    fn message(details: CommitDetails) -> FormattedMessage {
        format_commit(&details, &RulesConfig::default()).unwrap()
    }

    #[test]
    fn test_format_header() {
        console::set_colors_enabled(false);
        let msg = message(CommitDetails::new("feat", "add feature").with_scope("core"));
        let preview = CommitPreview::new(&msg);
        assert_eq!(preview.format_header(), "feat(core): add feature");
    }

    #[test]
    fn test_render_lines_boxes_every_line() {
        console::set_colors_enabled(false);
        let msg = message(
            CommitDetails::new("fix", "handle null token")
                .with_body("Guard the parser.")
                .with_ticket("ABC-99"),
        );
        let lines = CommitPreview::new(&msg).render_lines();

        assert_eq!(lines.len(), 5 + 2);
        assert!(lines[0].starts_with("┌─ Commit Preview "));
        assert!(lines[1].contains("fix: handle null token"));
        assert!(lines[3].contains("Guard the parser."));
        assert!(lines[5].contains("Refs: ABC-99"));

        let widths: Vec<usize> = lines.iter().map(|l| measure_text_width(l)).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_to_json() {
        let msg = message(CommitDetails::new("docs", "readme").with_ticket("DOC-1"));
        let json: serde_json::Value =
            serde_json::from_str(&CommitPreview::new(&msg).to_json().unwrap()).unwrap();
        assert_eq!(json["footer"], "Refs: DOC-1");
        assert_eq!(json["truncated"], false);
    }
}
