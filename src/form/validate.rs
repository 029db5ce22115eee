//! Validation rules for the student form
//!
//! `validate` is a pure function of the draft: it never touches form state,
//! so the controller can call it on submit and tests can call it directly.

use crate::form::Draft;
use crate::types::FieldKey;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub const NAME_REQUIRED: &str = "Name is required";
pub const CLASS_REQUIRED: &str = "Class is required";
pub const PERCENTAGE_REQUIRED: &str = "Percentage is required";
pub const PERCENTAGE_NOT_A_NUMBER: &str = "Percentage must be a number";
pub const PERCENTAGE_OUT_OF_RANGE: &str = "Percentage must be between 0 and 100";
pub const SUBJECTS_REQUIRED: &str = "At least one subject must be selected";

/// Banner text shown next to the per-field messages when a submit fails
pub const AGGREGATE_ERROR: &str = "Please fill all required fields";

/// Per-field validation failures. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("Please fill all required fields")]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldKey, &'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, key: FieldKey) -> Option<&'static str> {
        self.errors.get(&key).copied()
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.errors.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &'static str)> + '_ {
        self.errors.iter().map(|(k, v)| (*k, *v))
    }

    fn insert(&mut self, key: FieldKey, message: &'static str) {
        self.errors.insert(key, message);
    }
}

/// Check every field of `draft` and collect the failures.
pub fn validate(draft: &Draft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(FieldKey::Name, NAME_REQUIRED);
    }
    if draft.class_name.trim().is_empty() {
        errors.insert(FieldKey::ClassName, CLASS_REQUIRED);
    }
    if let Some(message) = check_percentage(&draft.percentage) {
        errors.insert(FieldKey::Percentage, message);
    }
    if draft.subjects.is_empty() {
        errors.insert(FieldKey::Subjects, SUBJECTS_REQUIRED);
    }

    errors
}

/// Only the exact empty string counts as missing; anything else has to parse.
fn check_percentage(raw: &str) -> Option<&'static str> {
    if raw.is_empty() {
        return Some(PERCENTAGE_REQUIRED);
    }
    match raw.trim().parse::<f64>() {
        Ok(p) if p.is_nan() => Some(PERCENTAGE_NOT_A_NUMBER),
        Ok(p) if !(0.0..=100.0).contains(&p) => Some(PERCENTAGE_OUT_OF_RANGE),
        Ok(_) => None,
        Err(_) => Some(PERCENTAGE_NOT_A_NUMBER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Subject;
    use proptest::prelude::*;

    fn draft(name: &str, class_name: &str, percentage: &str, subjects: &[Subject]) -> Draft {
        Draft {
            name: name.into(),
            class_name: class_name.into(),
            percentage: percentage.into(),
            subjects: subjects.iter().copied().collect(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let d = draft("Ada", "10th", "95.5", &[Subject::Maths, Subject::Science]);
        assert!(validate(&d).is_empty());
    }

    #[test]
    fn test_mixed_failures() {
        let d = draft("", "10th", "-5", &[]);
        let errors = validate(&d);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(FieldKey::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(FieldKey::Percentage), Some(PERCENTAGE_OUT_OF_RANGE));
        assert_eq!(errors.get(FieldKey::Subjects), Some(SUBJECTS_REQUIRED));
        assert!(!errors.contains(FieldKey::ClassName));
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = validate(&Draft::default());
        assert_eq!(errors.get(FieldKey::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(FieldKey::ClassName), Some(CLASS_REQUIRED));
        assert_eq!(errors.get(FieldKey::Percentage), Some(PERCENTAGE_REQUIRED));
        assert_eq!(errors.get(FieldKey::Subjects), Some(SUBJECTS_REQUIRED));
    }

    #[test]
    fn test_percentage_boundaries() {
        assert_eq!(check_percentage("0"), None);
        assert_eq!(check_percentage("100"), None);
        assert_eq!(check_percentage("100.0"), None);
        assert_eq!(check_percentage("-0"), None);
        assert_eq!(check_percentage("100.01"), Some(PERCENTAGE_OUT_OF_RANGE));
        assert_eq!(check_percentage("-0.01"), Some(PERCENTAGE_OUT_OF_RANGE));
    }

    #[test]
    fn test_percentage_not_a_number() {
        assert_eq!(check_percentage("abc"), Some(PERCENTAGE_NOT_A_NUMBER));
        assert_eq!(check_percentage("1.2.3"), Some(PERCENTAGE_NOT_A_NUMBER));
        assert_eq!(check_percentage("NaN"), Some(PERCENTAGE_NOT_A_NUMBER));
        // Whitespace is present, so not "required", but it is not a number either
        assert_eq!(check_percentage("   "), Some(PERCENTAGE_NOT_A_NUMBER));
        assert_eq!(check_percentage(" 42 "), None);
        assert_eq!(check_percentage("inf"), Some(PERCENTAGE_OUT_OF_RANGE));
    }

    #[test]
    fn test_aggregate_message() {
        let errors = validate(&Draft::default());
        assert_eq!(errors.to_string(), AGGREGATE_ERROR);
    }

    #[test]
    fn test_errors_serialize_with_form_keys() {
        let d = draft("Ada", " ", "50", &[Subject::Hindi]);
        let json = serde_json::to_string(&validate(&d)).unwrap();
        assert_eq!(json, r#"{"className":"Class is required"}"#);
    }

    fn subjects_strategy() -> impl Strategy<Value = Vec<Subject>> {
        proptest::collection::btree_set(0usize..6, 1..4)
            .prop_map(|idx| idx.into_iter().map(|i| Subject::all()[i]).collect())
    }

    proptest! {
        #[test]
        fn prop_well_formed_drafts_pass(
            name in "[A-Za-z][A-Za-z ]{0,20}",
            class_name in "[0-9A-Za-z]{1,8}",
            p in 0.0f64..=100.0,
            subjects in subjects_strategy(),
        ) {
            let d = draft(&name, &class_name, &p.to_string(), &subjects);
            prop_assert!(validate(&d).is_empty());
        }

        #[test]
        fn prop_blank_name_is_required(ws in "[ \t]{0,5}") {
            let d = draft(&ws, "10th", "50", &[Subject::English]);
            prop_assert_eq!(validate(&d).get(FieldKey::Name), Some(NAME_REQUIRED));
        }

        #[test]
        fn prop_below_zero_out_of_range(p in -1.0e6f64..-1.0e-6) {
            prop_assert_eq!(check_percentage(&p.to_string()), Some(PERCENTAGE_OUT_OF_RANGE));
        }

        #[test]
        fn prop_above_hundred_out_of_range(p in 100.000001f64..1.0e6) {
            prop_assert_eq!(check_percentage(&p.to_string()), Some(PERCENTAGE_OUT_OF_RANGE));
        }

        #[test]
        fn prop_in_range_accepted(p in 0.0f64..=100.0) {
            prop_assert_eq!(check_percentage(&p.to_string()), None);
        }
    }
}
