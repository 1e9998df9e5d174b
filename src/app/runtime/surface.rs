use crate::{
    domain::{FieldErrors, Record},
    form::{Notification, SessionObserver, SessionState},
};

use super::super::status::StatusLine;

/// The terminal UI seen as a session observer: notifications land in the
/// status line, state changes schedule a redraw and keep the table
/// selection on an existing row.
pub(super) struct Surface<'a> {
    pub(super) status: &'a mut StatusLine,
    pub(super) selected_row: &'a mut usize,
    pub(super) needs_redraw: &'a mut bool,
}

impl SessionObserver for Surface<'_> {
    fn on_state_changed(&mut self, state: &SessionState) {
        *self.needs_redraw = true;
        *self.selected_row = (*self.selected_row).min(state.len().saturating_sub(1));
    }

    fn on_notification(&mut self, notification: &Notification) {
        self.status.on_notification(notification);
    }

    fn on_rejected(&mut self, errors: &FieldErrors) {
        self.status.on_rejected(errors);
    }

    fn on_confirmation_requested(&mut self, index: usize, record: &Record) {
        self.status.on_confirmation_requested(index, record);
    }
}
