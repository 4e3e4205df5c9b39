//! ReportFormat trait and the two fixed templates

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Template used to lay out report text
///
/// Implementations only decide how a piece of text looks; which template to
/// use is chosen by the caller from the console capability flag.
pub trait ReportFormat {
    /// Section header line, including the trailing newline
    fn header(&self, title: &str) -> String;

    /// One `label: value` line, including the trailing newline
    fn field(&self, label: &str, value: &dyn Display) -> String;

    /// Multi-line block printed as a unit (profile summary)
    fn block(&self, text: &str) -> String;
}

/// Plain text, no control sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl ReportFormat for PlainText {
    fn header(&self, title: &str) -> String {
        format!("{}\n", title)
    }

    fn field(&self, label: &str, value: &dyn Display) -> String {
        format!("{}: {}\n", label, value)
    }

    fn block(&self, text: &str) -> String {
        format!("{}\n", text)
    }
}

/// ANSI-styled text: bold cyan headers, yellow labels, blue blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct Styled;

impl ReportFormat for Styled {
    fn header(&self, title: &str) -> String {
        format!("{}\n", title.bold().cyan())
    }

    fn field(&self, label: &str, value: &dyn Display) -> String {
        let label = format!("{}: ", label);
        format!("{}{}\n", label.yellow(), value)
    }

    fn block(&self, text: &str) -> String {
        format!("{}\n", text.blue())
    }
}

/// Pick the template for the given capability flag
pub fn formatter(color_enabled: bool) -> &'static dyn ReportFormat {
    if color_enabled { &Styled } else { &PlainText }
}
