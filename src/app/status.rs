use crate::{
    domain::{FieldErrors, Record},
    form::{Notification, NotificationLevel, SessionObserver, SessionState},
};

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
    level: StatusLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Neutral,
    Success,
    Warning,
}

pub const READY_STATUS: &str = "Ready. Fill in the form and press Enter to add a record.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
            level: StatusLevel::Neutral,
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
        self.level = StatusLevel::Neutral;
    }

    pub fn warn(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
        self.level = StatusLevel::Warning;
    }

    pub fn ready(&mut self) {
        self.set_raw(READY_STATUS);
    }

    pub fn editing(&mut self, label: &str) {
        self.set_raw(format!("Editing {label}"));
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.warn(format!("{count} issue(s) remaining"));
    }

    pub fn pending_exit(&mut self) {
        self.warn("Unsubmitted input. Press Ctrl+Q again to quit anyway.");
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn level(&self) -> StatusLevel {
        self.level
    }
}

impl SessionObserver for StatusLine {
    fn on_state_changed(&mut self, _state: &SessionState) {}

    fn on_notification(&mut self, notification: &Notification) {
        self.message = notification.message.clone();
        self.level = match notification.level {
            NotificationLevel::Success => StatusLevel::Success,
            NotificationLevel::Info => StatusLevel::Neutral,
        };
    }

    fn on_rejected(&mut self, errors: &FieldErrors) {
        self.issues_remaining(errors.len());
    }

    fn on_confirmation_requested(&mut self, _index: usize, record: &Record) {
        self.warn(format!("Delete {}?", record.name()));
    }
}
