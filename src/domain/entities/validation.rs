//! Validation messages and results ("traffic light" severities)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message severity, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Arithmetic or rules illegality; blocks publication (FAIL)
    Critical,
    /// Deviation from convention or benchmark, author discretion applies (WARN)
    Warning,
    /// Informational, no action implied
    Note,
    /// Neutral status report ("skipped", "on target")
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Pass,
    Warn,
    Fail,
}

impl ValidationStatus {
    /// FAIL on any critical, else WARN on any warning, else PASS
    pub fn from_messages(messages: &[ValidationMessage]) -> Self {
        if messages.iter().any(|m| m.severity == Severity::Critical) {
            Self::Fail
        } else if messages.iter().any(|m| m.severity == Severity::Warning) {
            Self::Warn
        } else {
            Self::Pass
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationMessage {
    pub severity: Severity,
    pub category: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
}

impl ValidationMessage {
    pub fn new(severity: Severity, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            category: category.into(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    pub fn critical(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, category, message)
    }

    pub fn warning(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, category, message)
    }

    pub fn note(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Note, category, message)
    }

    pub fn info(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, category, message)
    }

    pub fn with_expected(mut self, expected: impl Into<Value>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn with_actual(mut self, actual: impl Into<Value>) -> Self {
        self.actual = Some(actual.into());
        self
    }
}

/// Outcome of one validator (or of the whole suite)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no message is critical
    pub valid: bool,
    pub status: ValidationStatus,
    pub messages: Vec<ValidationMessage>,
}

impl ValidationResult {
    pub fn from_messages(messages: Vec<ValidationMessage>) -> Self {
        Self {
            valid: !messages.iter().any(|m| m.severity == Severity::Critical),
            status: ValidationStatus::from_messages(&messages),
            messages,
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.messages
            .iter()
            .filter(|m| m.severity == severity)
            .count()
    }

    /// Messages ordered critical-first, leaving `self` untouched
    pub fn sorted_messages(&self) -> Vec<ValidationMessage> {
        sorted_messages(&self.messages)
    }
}

/// Copy of `messages` ordered critical -> warning -> note -> info, stable within a severity
pub fn sorted_messages(messages: &[ValidationMessage]) -> Vec<ValidationMessage> {
    let mut sorted = messages.to_vec();
    sorted.sort_by_key(|m| m.severity);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_critical_first_and_copies() {
        let messages = vec![
            ValidationMessage::note("n", "note"),
            ValidationMessage::info("i", "info"),
            ValidationMessage::warning("w", "warn"),
            ValidationMessage::critical("c", "crit"),
        ];

        let sorted = sorted_messages(&messages);
        let order: Vec<_> = sorted.iter().map(|m| m.severity).collect();
        assert_eq!(
            order,
            [Severity::Critical, Severity::Warning, Severity::Note, Severity::Info]
        );
        assert_eq!(messages[0].severity, Severity::Note);
    }

    #[test]
    fn test_status_derivation() {
        let critical = ValidationMessage::critical("s", "x");
        let warning = ValidationMessage::warning("s", "y");
        let note = ValidationMessage::note("s", "z");

        assert_eq!(ValidationStatus::from_messages(&[critical.clone()]), ValidationStatus::Fail);
        assert_eq!(ValidationStatus::from_messages(&[warning.clone()]), ValidationStatus::Warn);
        assert_eq!(ValidationStatus::from_messages(&[note.clone()]), ValidationStatus::Pass);
        assert_eq!(
            ValidationStatus::from_messages(&[warning.clone(), note.clone()]),
            ValidationStatus::Warn
        );

        let result = ValidationResult::from_messages(vec![critical, warning, note]);
        assert!(!result.valid);
        assert_eq!(result.status, ValidationStatus::Fail);
    }

    #[test]
    fn test_payloads_serialize_only_when_present() {
        let bare = serde_json::to_value(ValidationMessage::info("economy", "skipped")).unwrap();
        assert!(bare.get("expected").is_none());

        let full = ValidationMessage::critical("basics", "bad").with_expected(200).with_actual(400);
        let json = serde_json::to_value(full).unwrap();
        assert_eq!(json["expected"], 200);
        assert_eq!(json["severity"], "critical");
    }
}
