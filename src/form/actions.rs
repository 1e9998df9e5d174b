use crate::domain::{FieldErrors, FieldName, Record};

/// Discrete UI events the session reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    EditField { field: FieldName, value: String },
    Submit,
    BeginEdit(usize),
    CancelEdit,
    RequestDelete(usize),
    ConfirmDelete,
    CancelDelete,
}

impl SessionAction {
    /// Short name for logs; never carries field contents.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionAction::EditField { .. } => "edit_field",
            SessionAction::Submit => "submit",
            SessionAction::BeginEdit(_) => "begin_edit",
            SessionAction::CancelEdit => "cancel_edit",
            SessionAction::RequestDelete(_) => "request_delete",
            SessionAction::ConfirmDelete => "confirm_delete",
            SessionAction::CancelDelete => "cancel_delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
}

/// Fire-and-forget message for the notification surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// Side effects a transition asks the surrounding surfaces to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notification),
    Rejected(FieldErrors),
    ConfirmDelete { index: usize, record: Record },
}

pub const ADDED_MESSAGE: &str = "New record added!";
pub const UPDATED_MESSAGE: &str = "Record updated successfully!";
pub const DELETED_MESSAGE: &str = "Record deleted successfully!";
pub const EDITING_MESSAGE: &str = "You can now edit the selected record.";
pub const EDIT_CANCELLED_MESSAGE: &str = "Edit cancelled.";
