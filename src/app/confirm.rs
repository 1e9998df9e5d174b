use crate::{domain::Record, presentation::ConfirmRender};

pub(crate) const CONFIRM_TITLE: &str = "Are you sure?";
pub(crate) const CONFIRM_TEXT: &str = "This action cannot be undone.";
pub(crate) const CONFIRM_LABEL: &str = "Yes, delete it!";
pub(crate) const CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmChoice {
    Confirm,
    Cancel,
}

/// Button focus of the delete prompt. The prompt itself is open while the
/// session has a pending delete; this only tracks which button Enter hits.
#[derive(Debug, Clone)]
pub(crate) struct ConfirmPrompt {
    choice: ConfirmChoice,
}

impl Default for ConfirmPrompt {
    fn default() -> Self {
        Self {
            choice: ConfirmChoice::Confirm,
        }
    }
}

impl ConfirmPrompt {
    pub(crate) fn reset(&mut self) {
        self.choice = ConfirmChoice::Confirm;
    }

    pub(crate) fn toggle(&mut self) {
        self.choice = match self.choice {
            ConfirmChoice::Confirm => ConfirmChoice::Cancel,
            ConfirmChoice::Cancel => ConfirmChoice::Confirm,
        };
    }

    pub(crate) fn choice(&self) -> ConfirmChoice {
        self.choice
    }

    pub(crate) fn as_render(&self, record: Option<&Record>) -> ConfirmRender {
        ConfirmRender {
            title: CONFIRM_TITLE,
            text: CONFIRM_TEXT,
            subject: record.map(Record::to_string),
            confirm_label: CONFIRM_LABEL,
            cancel_label: CANCEL_LABEL,
            confirm_selected: self.choice == ConfirmChoice::Confirm,
        }
    }
}
