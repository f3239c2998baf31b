//! Per-field validation error map.

use std::collections::HashMap;

/// Current error message per field. Absent = valid.
///
/// Recomputed on blur and in bulk before step advancement and submission;
/// never persisted beyond the session.
#[derive(Debug, Default, Clone)]
pub struct FieldErrors {
    map: HashMap<&'static str, &'static str>,
}

impl FieldErrors {
    /// Record the result of validating one field, overwriting any prior entry.
    pub fn record(&mut self, name: &'static str, error: Option<&'static str>) {
        match error {
            Some(message) => {
                self.map.insert(name, message);
            }
            None => {
                self.map.remove(name);
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.map.get(name).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_clear() {
        let mut errors = FieldErrors::default();
        errors.record("mobile", Some("Enter a valid 10-digit Indian mobile."));
        assert_eq!(
            errors.get("mobile"),
            Some("Enter a valid 10-digit Indian mobile.")
        );
        errors.record("mobile", None);
        assert_eq!(errors.get("mobile"), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn recording_is_idempotent() {
        let mut errors = FieldErrors::default();
        errors.record("pincode", Some("PIN must be 6 digits."));
        errors.record("pincode", Some("PIN must be 6 digits."));
        assert_eq!(errors.get("pincode"), Some("PIN must be 6 digits."));
    }
}
