//! Form value storage with a single guarded mutation entry point.

use std::collections::HashMap;

use crate::schema::{field_spec, fields, steps};

/// A user-facing write was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetFieldError {
    #[error("unknown field '{0}'")]
    Unknown(String),
    #[error("field '{0}' is derived and cannot be edited")]
    ReadOnly(&'static str),
}

/// Current values for every schema field.
///
/// All known field names are present from construction (empty string =
/// unset). User input flows through [`FormValues::set`], which rejects
/// writes to derived fields; the lookup subsystem writes those through
/// [`FormValues::set_derived`].
#[derive(Debug, Clone)]
pub struct FormValues {
    map: HashMap<&'static str, String>,
}

impl Default for FormValues {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        let map = steps()
            .iter()
            .flat_map(|step| step.fields.iter())
            .map(|field| (field.name, String::new()))
            .collect();
        Self { map }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.map.get(name).map_or("", String::as_str)
    }

    /// Set a field from user input.
    ///
    /// `panNumber` is uppercased before storage so validation and the
    /// submission payload always see the canonical form.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), SetFieldError> {
        let spec =
            field_spec(name).ok_or_else(|| SetFieldError::Unknown(name.to_string()))?;
        if spec.read_only {
            return Err(SetFieldError::ReadOnly(spec.name));
        }
        let mut value = value.into();
        if spec.name == fields::PAN_NUMBER {
            value.make_ascii_uppercase();
        }
        self.map.insert(spec.name, value);
        Ok(())
    }

    /// Write the lookup-derived location fields. Not reachable from user input.
    pub fn set_derived(&mut self, state: impl Into<String>, city: impl Into<String>) {
        self.map.insert(fields::STATE, state.into());
        self.map.insert(fields::CITY, city.into());
    }

    pub fn clear_derived(&mut self) {
        self.set_derived("", "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_schema_fields_start_empty() {
        let values = FormValues::new();
        for step in steps() {
            for field in step.fields {
                assert_eq!(values.get(field.name), "");
            }
        }
    }

    #[test]
    fn set_stores_value() {
        let mut values = FormValues::new();
        values.set(fields::MOBILE, "9876543210").unwrap();
        assert_eq!(values.get(fields::MOBILE), "9876543210");
    }

    #[test]
    fn pan_is_uppercased_on_store() {
        let mut values = FormValues::new();
        values.set(fields::PAN_NUMBER, "abcde1234f").unwrap();
        assert_eq!(values.get(fields::PAN_NUMBER), "ABCDE1234F");
    }

    #[test]
    fn derived_fields_reject_user_writes() {
        let mut values = FormValues::new();
        assert_eq!(
            values.set(fields::STATE, "Karnataka"),
            Err(SetFieldError::ReadOnly(fields::STATE))
        );
        assert_eq!(values.get(fields::STATE), "");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut values = FormValues::new();
        assert!(matches!(
            values.set("gstin", "x"),
            Err(SetFieldError::Unknown(_))
        ));
    }

    #[test]
    fn derived_writes_and_clear() {
        let mut values = FormValues::new();
        values.set_derived("Karnataka", "Bengaluru");
        assert_eq!(values.get(fields::STATE), "Karnataka");
        assert_eq!(values.get(fields::CITY), "Bengaluru");
        values.clear_derived();
        assert_eq!(values.get(fields::STATE), "");
        assert_eq!(values.get(fields::CITY), "");
    }
}
