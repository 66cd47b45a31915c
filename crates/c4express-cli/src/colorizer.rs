//! Terminal colorization for run messages
//!
//! Applies ANSI escape codes to error and warning lines using crossterm.

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

use c4express::core::{Message, Messages, Severity};

/// When to colorize output
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if stderr is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolve the choice against the environment and stderr
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_tty()
            }
        }
    }
}

/// Format one message as a `severity: text` line
///
/// Errors are red, warnings yellow; only the severity label is colored.
pub fn format_message(severity: Severity, message: &Message, colorize: bool) -> String {
    let label = severity.to_string();
    if !colorize {
        return format!("{}: {}", label, message);
    }

    let color = match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    };
    format!("{}: {}", label.with(color).bold(), message)
}

/// Format every message, errors first, one per line
pub fn format_messages(messages: &Messages, colorize: bool) -> Vec<String> {
    messages
        .iter()
        .map(|(severity, message)| format_message(severity, message, colorize))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_format() {
        let line = format_message(Severity::Warning, &Message::new("odd"), false);
        assert_eq!(line, "warning: odd");
    }

    #[test]
    fn test_colored_format_keeps_text() {
        let line = format_message(Severity::Error, &Message::new("bad"), true);
        assert!(line.contains("\x1b["));
        assert!(line.contains("error"));
        assert!(line.ends_with(": bad"));
    }

    #[test]
    fn test_messages_are_ordered() {
        let mut messages = Messages::new();
        messages.warning("w");
        messages.error("e");
        let lines = format_messages(&messages, false);
        assert_eq!(lines, vec!["error: e", "warning: w"]);
    }

    #[test]
    fn test_explicit_choices() {
        assert!(ColorChoice::Always.enabled());
        assert!(!ColorChoice::Never.enabled());
    }
}
