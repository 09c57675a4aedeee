//! Draft validation.
//!
//! Each form type carries a fixed set of required-field rules that run at
//! submit time. Validation is pure and synchronous: it inspects a draft and
//! produces a [`ValidationErrors`] mapping without mutating anything. An
//! empty mapping means the draft is submittable.

use std::collections::BTreeMap;

/// Message associated with every required-field rule.
pub const REQUIRED: &str = "Required";

/// Field-scoped validation failures, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValidationErrors(BTreeMap<&'static str, &'static str>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a `Required` violation for `field` unless `present` holds.
    pub fn require(&mut self, field: &'static str, present: bool) {
        if !present {
            self.0.insert(field, REQUIRED);
        }
    }

    /// Returns the message recorded for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    /// Returns whether the draft passed every rule.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Submit-time validation gate implemented by every draft type.
pub trait Validate {
    /// Runs the form's required-field rules against the current draft.
    fn validate(&self) -> ValidationErrors;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_records_violations_only_for_missing_fields() {
        let mut errors = ValidationErrors::new();
        errors.require("name", true);
        errors.require("goal", false);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for("goal"), Some(REQUIRED));
        assert_eq!(errors.message_for("name"), None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_empty_mapping_means_submittable() {
        let mut errors = ValidationErrors::new();
        errors.require("name", true);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_display_lists_field_and_message() {
        let mut errors = ValidationErrors::new();
        errors.require("goal", false);
        errors.require("name", false);
        assert_eq!(errors.to_string(), "goal: Required; name: Required");
    }

    #[test]
    fn test_serialises_as_field_to_message_map() {
        let mut errors = ValidationErrors::new();
        errors.require("goal", false);
        let json = serde_json::to_value(&errors).expect("errors should serialise");
        assert_eq!(json, serde_json::json!({ "goal": "Required" }));
    }
}
