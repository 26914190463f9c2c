//! Draft records and the check that gates them into the store.

use crate::incident::Severity;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Draft {
    pub fn field_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::Title => Some(&mut self.title),
            DraftField::Description => Some(&mut self.description),
            DraftField::Severity => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DraftField {
    #[default]
    Title,
    Description,
    Severity,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Title, DraftField::Description, DraftField::Severity];

    pub fn next(self) -> Self {
        match self {
            DraftField::Title => DraftField::Description,
            DraftField::Description => DraftField::Severity,
            DraftField::Severity => DraftField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DraftField::Title => DraftField::Severity,
            DraftField::Description => DraftField::Title,
            DraftField::Severity => DraftField::Description,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Description => "Description",
            DraftField::Severity => "Severity",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(DraftField),
}

/// Rejects a draft whose title or description is blank after trimming.
///
/// Only the emptiness check looks at trimmed text; the draft itself is
/// committed as typed.
pub fn validate(draft: &Draft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::MissingField(DraftField::Title));
    }
    if draft.description.trim().is_empty() {
        return Err(ValidationError::MissingField(DraftField::Description));
    }
    Ok(())
}
