//! Core data types shared by the form controller and the UI
//!
//! The subject catalog lives here and nowhere else: the controller uses it
//! to reject unknown subjects, the UI uses it to lay out the checkbox grid.

use serde::{Deserialize, Serialize};

/// One selectable subject. Declaration order is catalog order, so an
/// ordered set of subjects always iterates the way the form displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "Hindi")]
    Hindi,
    #[serde(rename = "Science")]
    Science,
    #[serde(rename = "Maths")]
    Maths,
    #[serde(rename = "English")]
    English,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Geography")]
    Geography,
}

impl Subject {
    pub fn all() -> &'static [Subject] {
        &[
            Subject::Hindi,
            Subject::Science,
            Subject::Maths,
            Subject::English,
            Subject::ComputerScience,
            Subject::Geography,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Hindi => "Hindi",
            Subject::Science => "Science",
            Subject::Maths => "Maths",
            Subject::English => "English",
            Subject::ComputerScience => "Computer Science",
            Subject::Geography => "Geography",
        }
    }

    /// Look up a catalog entry by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.label() == label)
    }
}

/// Free-text fields of the form (the ones `update_field` can set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    ClassName,
    Percentage,
}

impl TextField {
    pub fn all() -> &'static [TextField] {
        &[TextField::Name, TextField::ClassName, TextField::Percentage]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextField::Name => "Name",
            TextField::ClassName => "Class",
            TextField::Percentage => "Percentage",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            TextField::Name => "Enter your full name",
            TextField::ClassName => "e.g. 10th Grade",
            TextField::Percentage => "e.g. 95.5",
        }
    }

    /// Whether a typed character may enter this field. The percentage
    /// input behaves like a number input: digits, sign, dot and exponent.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            TextField::Percentage => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
            _ => !c.is_control(),
        }
    }

    pub fn key(&self) -> FieldKey {
        match self {
            TextField::Name => FieldKey::Name,
            TextField::ClassName => FieldKey::ClassName,
            TextField::Percentage => FieldKey::Percentage,
        }
    }
}

/// Keys of the validation error map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Name,
    ClassName,
    Percentage,
    Subjects,
}
