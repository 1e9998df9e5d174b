use crate::domain::{Draft, FieldErrors, Record};

/// Whether the form creates a new record or replaces an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    None,
    Editing(usize),
}

impl EditState {
    pub fn index(self) -> Option<usize> {
        match self {
            EditState::None => None,
            EditState::Editing(index) => Some(index),
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, EditState::Editing(_))
    }
}

/// An open delete confirmation for the record at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    pub index: usize,
}

/// Everything the form session knows: the store, the edit mode, the text
/// in the inputs and the outcome of the last submit.
///
/// Invariants held by [`reduce`](super::reduce):
/// - `Editing(i)` implies `i < records.len()`,
/// - a pending delete points at an existing record and blocks every other
///   action until it is confirmed or cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(super) records: Vec<Record>,
    pub(super) edit: EditState,
    pub(super) draft: Draft,
    pub(super) errors: FieldErrors,
    pub(super) pending: Option<PendingDelete>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn pending_delete(&self) -> Option<PendingDelete> {
        self.pending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.edit.is_editing() {
            "Update"
        } else {
            "Add"
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub(super) fn reset_form(&mut self) {
        self.draft = Draft::default();
        self.errors.clear();
        self.edit = EditState::None;
    }

    pub(super) fn check_index(&self, index: usize) -> Result<(), super::ActionError> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(super::ActionError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }
}
