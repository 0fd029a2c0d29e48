//! Change log produced by the scaler and the auto-fixer

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One altered field with its justification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    pub field: String,
    pub old_value: Value,
    pub new_value: Value,
    pub reason: String,
}

/// Ordered collection of changes. Recording a change whose old and new values
/// are loosely equal (e.g. `3` and `"3"`) is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeLog {
    entries: Vec<ChangeLogEntry>,
}

impl ChangeLog {
    pub fn record(
        &mut self,
        field: impl Into<String>,
        old_value: impl Into<Value>,
        new_value: impl Into<Value>,
        reason: impl Into<String>,
    ) {
        let old_value = old_value.into();
        let new_value = new_value.into();
        if loosely_equal(&old_value, &new_value) {
            return;
        }

        let entry = ChangeLogEntry {
            field: field.into(),
            old_value,
            new_value,
            reason: reason.into(),
        };
        tracing::debug!(
            field = %entry.field,
            old = %entry.old_value,
            new = %entry.new_value,
            "{}",
            entry.reason
        );
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<ChangeLogEntry> {
        self.entries
    }
}

/// Numeric comparison across number and string representations
fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            s.trim().parse::<f64>().ok() == n.as_f64()
        }
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loose_equality_suppresses_entries() {
        let mut log = ChangeLog::default();
        log.record("Base Attack Bonus", 3, "3", "same value, different type");
        log.record("Hit Points", 20.0, 20, "same number");
        log.record("Size", "Large", "Large", "unchanged");
        assert!(log.is_empty());

        log.record("Hit Points", 40, 13, "reduced");
        log.record("Armor Class", Value::Null, 12, "filled in");
        let entries = log.into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].old_value, json!(40));
        assert_eq!(entries[1].new_value, json!(12));
    }
}
