//! Error and warning collection for a single run
//!
//! Errors mean the offending node or field was dropped; warnings mean it was
//! kept with a degraded value. Both are mirrored to `tracing`.

use serde::Serialize;
use std::fmt;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A recorded message
///
/// `line` and `line_number` locate the message in line-oriented sources; JSON
/// definitions never set them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            line_number: None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line_number {
            Some(line_number) => write!(f, "Line {}: {}", line_number, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Error and warning lists for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Messages {
    errors: Vec<Message>,
    warnings: Vec<Message>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn error(&mut self, message: impl fmt::Display) {
        let message = message.to_string();
        error!(message = %message, "Definition error");
        self.errors.push(Message::new(message));
    }

    /// Record a warning
    pub fn warning(&mut self, message: impl fmt::Display) {
        let message = message.to_string();
        warn!(message = %message, "Definition warning");
        self.warnings.push(Message::new(message));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Message] {
        &self.errors
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn warnings(&self) -> &[Message] {
        &self.warnings
    }

    /// True when neither errors nor warnings were recorded
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Every message tagged with its severity, errors first
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &Message)> {
        self.errors
            .iter()
            .map(|message| (Severity::Error, message))
            .chain(
                self.warnings
                    .iter()
                    .map(|message| (Severity::Warning, message)),
            )
    }

    pub fn clear(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_messages_are_empty() {
        let messages = Messages::new();
        assert!(messages.is_empty());
        assert!(!messages.has_errors());
        assert!(!messages.has_warnings());
    }

    #[test]
    fn test_error_and_warning_lists_are_separate() {
        let mut messages = Messages::new();
        messages.error("bad");
        messages.warning("odd");
        messages.warning("odder");
        assert_eq!(messages.errors().len(), 1);
        assert_eq!(messages.warnings().len(), 2);
        assert_eq!(messages.errors()[0].message, "bad");
        assert!(messages.errors()[0].line.is_none());
        assert!(messages.errors()[0].line_number.is_none());
    }

    #[test]
    fn test_iter_orders_errors_first() {
        let mut messages = Messages::new();
        messages.warning("w");
        messages.error("e");
        let severities: Vec<_> = messages.iter().map(|(severity, _)| severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Warning]);
    }

    #[test]
    fn test_clear() {
        let mut messages = Messages::new();
        messages.error("e");
        messages.clear();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_message_serialization_omits_location() {
        let value = serde_json::to_value(Message::new("oops")).unwrap();
        assert_eq!(value, serde_json::json!({ "message": "oops" }));
    }

    #[test]
    fn test_message_display_with_line_number() {
        let message = Message {
            message: "oops".to_string(),
            line: Some("A -> B".to_string()),
            line_number: Some(3),
        };
        assert_eq!(message.to_string(), "Line 3: oops");
    }
}
