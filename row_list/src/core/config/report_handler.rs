// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! How `rowlist` prints a failed run: a [`RowListError`](crate::RowListError) (or a file
//! that couldn't be loaded) is drawn by miette's graphical handler, wrapped to the
//! terminal, w/ the diagnostic code, the help text and a link to file an issue.

use miette::{MietteHandler, MietteHandlerOpts};

/// Used when stdout isn't a terminal (eg: `rowlist ... | less`). Also the fallback line
/// width for rendered rows.
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

#[must_use]
pub fn get_terminal_width() -> u16 {
    crossterm::terminal::size()
        .map(|(columns, _rows)| columns)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Build the handler for one report. Source snippets are never shown (rows are loaded
/// from JSON, not spans), so only the cause chain and the footer matter.
#[must_use]
pub fn create_report_handler(width: usize, issues_url: &str) -> MietteHandler {
    MietteHandlerOpts::new()
        .width(width)
        .wrap_lines(true)
        .break_words(true)
        .unicode(true)
        .with_cause_chain()
        .footer(format!("Found a bug? Report it at {issues_url}"))
        .build()
}

/// Install [`create_report_handler`] as the process wide miette hook. The terminal is
/// measured when a report is printed, not here. Calling this twice keeps the first hook.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    let res = miette::set_hook(Box::new(move |_report| {
        let width = usize::from(get_terminal_width());
        tracing::debug!(message = "printing error report", width);
        Box::new(create_report_handler(width, issues_url))
    }));
    if res.is_err() {
        tracing::debug!(message = "miette hook already installed");
    }
}

#[cfg(test)]
mod tests {
    use miette::ReportHandler as _;

    use super::*;
    use crate::{RowListError, inline_string};

    struct Rendered<'a>(&'a MietteHandler, &'a RowListError);

    impl std::fmt::Display for Rendered<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            self.0.debug(self.1, f)
        }
    }

    #[test]
    fn test_report_has_tag_and_help() {
        let handler = create_report_handler(80, "https://example.com/issues");
        let error = RowListError::UnhandledVariant {
            tag: inline_string!("pinnedMessage"),
        };
        let report = Rendered(&handler, &error).to_string();
        assert!(report.contains("pinnedMessage"));
        assert!(report.contains("drifted"));
    }

    #[test]
    fn test_terminal_width_is_never_zero() {
        assert!(get_terminal_width() > 0);
    }
}
