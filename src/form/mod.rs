//! Form state controller
//!
//! Owns the editable draft, the errors from the last submit, the last
//! successful submission and the form status. All transitions are plain
//! synchronous methods; `reduce` wraps them as a state -> state function
//! for callers that prefer dispatching actions.

pub mod validate;

use crate::types::{Subject, TextField};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info};

pub use validate::{validate, ValidationErrors, AGGREGATE_ERROR};

/// Banner text shown after a valid submit
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// In-progress form values. The percentage stays raw text until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub name: String,
    pub class_name: String,
    pub percentage: String,
    pub subjects: BTreeSet<Subject>,
}

impl Draft {
    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::ClassName => &self.class_name,
            TextField::Percentage => &self.percentage,
        }
    }

    fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::ClassName => &mut self.class_name,
            TextField::Percentage => &mut self.percentage,
        }
    }
}

/// Frozen copy of a draft that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmittedRecord(Draft);

impl SubmittedRecord {
    pub fn draft(&self) -> &Draft {
        &self.0
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn class_name(&self) -> &str {
        &self.0.class_name
    }

    /// Raw percentage as typed, with a percent sign
    pub fn percentage_display(&self) -> String {
        format!("{}%", self.0.percentage)
    }

    /// Subjects joined in catalog order
    pub fn subjects_display(&self) -> String {
        self.0
            .subjects
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl PartialEq<Draft> for SubmittedRecord {
    fn eq(&self, other: &Draft) -> bool {
        &self.0 == other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    SubmittedSuccess,
    SubmittedError,
}

/// Which banner the UI should show, derived from the status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Success,
    Error,
}

impl Banner {
    pub fn message(&self) -> &'static str {
        match self {
            Banner::Success => SUCCESS_MESSAGE,
            Banner::Error => AGGREGATE_ERROR,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error)
    }
}

/// User actions the presentation layer forwards to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    UpdateField { field: TextField, value: String },
    ToggleSubject { label: String, included: bool },
    Submit,
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    draft: Draft,
    errors: ValidationErrors,
    status: FormStatus,
    submitted: Option<SubmittedRecord>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn submitted(&self) -> Option<&SubmittedRecord> {
        self.submitted.as_ref()
    }

    /// The submit action is disabled right after a successful submit,
    /// until the user edits something or resets.
    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::SubmittedSuccess
    }

    pub fn banner(&self) -> Option<Banner> {
        match self.status {
            FormStatus::Editing => None,
            FormStatus::SubmittedSuccess => Some(Banner::Success),
            FormStatus::SubmittedError => Some(Banner::Error),
        }
    }

    /// Set a text field. Validation waits for submit; only the banner clears.
    pub fn update_field(&mut self, field: TextField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
        self.status = FormStatus::Editing;
        debug!(?field, "field updated");
    }

    /// Include or exclude a subject by label. Labels outside the catalog
    /// are ignored entirely.
    pub fn toggle_subject(&mut self, label: &str, included: bool) {
        let Some(subject) = Subject::from_label(label) else {
            debug!(label, "ignoring unknown subject");
            return;
        };
        if included {
            self.draft.subjects.insert(subject);
        } else {
            self.draft.subjects.remove(&subject);
        }
        self.status = FormStatus::Editing;
        debug!(subject = subject.label(), included, "subject toggled");
    }

    /// Validate the draft. On success the draft moves into the submitted
    /// record and a fresh draft takes its place; on failure the draft stays
    /// and the errors are kept for display.
    pub fn submit(&mut self) -> Result<SubmittedRecord, ValidationErrors> {
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            info!(invalid_fields = errors.len(), "submit rejected");
            self.errors = errors.clone();
            self.status = FormStatus::SubmittedError;
            return Err(errors);
        }

        let record = SubmittedRecord(std::mem::take(&mut self.draft));
        self.submitted = Some(record.clone());
        self.errors = ValidationErrors::default();
        self.status = FormStatus::SubmittedSuccess;
        info!(subjects = record.draft().subjects.len(), "form submitted");
        Ok(record)
    }

    /// `submit`, unless the form is in its post-success disabled state,
    /// in which case nothing happens and `None` comes back.
    pub fn submit_if_enabled(&mut self) -> Option<Result<SubmittedRecord, ValidationErrors>> {
        if !self.can_submit() {
            debug!("submit ignored while disabled");
            return None;
        }
        Some(self.submit())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
        info!("form reset");
    }

    /// Apply one action and return the resulting state.
    pub fn reduce(mut self, action: FormAction) -> Self {
        self.dispatch(action);
        self
    }

    /// In-place form of `reduce`.
    pub fn dispatch(&mut self, action: FormAction) {
        match action {
            FormAction::UpdateField { field, value } => self.update_field(field, value),
            FormAction::ToggleSubject { label, included } => self.toggle_subject(&label, included),
            FormAction::Submit => {
                let _ = self.submit_if_enabled();
            }
            FormAction::Reset => self.reset(),
        }
    }
}
