use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::FieldName;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(FieldName),
    #[error("Invalid {0}")]
    Format(FieldName),
    #[error("{} must be a whole number", .0.label())]
    NotWhole(FieldName),
    #[error("{} must be {bound} but you entered {entered}", .field.label())]
    Range {
        field: FieldName,
        entered: String,
        bound: RangeBound,
    },
}

/// The limit an out-of-range number crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    AtLeast(i64),
    AtMost(i64),
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::AtLeast(min) => write!(f, "at least {min}"),
            RangeBound::AtMost(max) => write!(f, "at most {max}"),
        }
    }
}

impl FieldError {
    pub fn field(&self) -> FieldName {
        match self {
            FieldError::Required(field)
            | FieldError::Format(field)
            | FieldError::NotWhole(field) => *field,
            FieldError::Range { field, .. } => *field,
        }
    }
}

/// Field-level errors keyed by field, iterated in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<FieldName, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `error` under its own field, replacing any previous entry.
    pub fn insert(&mut self, error: FieldError) {
        self.entries.insert(error.field(), error);
    }

    pub fn remove(&mut self, field: FieldName) -> Option<FieldError> {
        self.entries.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.entries.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn first_field(&self) -> Option<FieldName> {
        self.entries.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.values()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, error) in self.entries.values().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        let mut errors = FieldErrors::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}
