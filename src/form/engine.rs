use tracing::{debug, info, warn};

use crate::domain::{FieldErrors, Record};

use super::{
    actions::{Effect, Notification, SessionAction},
    reducers::{ActionError, Reduction, reduce},
    state::SessionState,
};

/// Receives the outcome of every dispatched action.
///
/// Rendering surfaces implement this instead of polling the state; every
/// method except [`on_state_changed`](Self::on_state_changed) is optional.
pub trait SessionObserver {
    fn on_state_changed(&mut self, state: &SessionState);

    fn on_notification(&mut self, _notification: &Notification) {}

    fn on_rejected(&mut self, _errors: &FieldErrors) {}

    fn on_confirmation_requested(&mut self, _index: usize, _record: &Record) {}
}

/// Holds the current [`SessionState`] and feeds actions through [`reduce`].
#[derive(Debug, Default)]
pub struct SessionEngine {
    state: SessionState,
}

impl SessionEngine {
    pub fn new(state: SessionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Applies `action`, then tells `observer` about each effect and, if
    /// anything moved, about the new state. A rejected action leaves the
    /// state alone and notifies nobody.
    pub fn dispatch<O>(&mut self, action: SessionAction, observer: &mut O) -> Result<(), ActionError>
    where
        O: SessionObserver + ?Sized,
    {
        let kind = action.kind();
        debug!(action = kind, "dispatching session action");
        let Reduction { state, effects } = reduce(&self.state, action).inspect_err(|err| {
            warn!(action = kind, error = %err, "session action rejected");
        })?;

        let changed = state != self.state;
        if state.len() != self.state.len() {
            info!(
                action = kind,
                before = self.state.len(),
                after = state.len(),
                "record store resized"
            );
        }
        self.state = state;

        for effect in &effects {
            match effect {
                Effect::Notify(notification) => observer.on_notification(notification),
                Effect::Rejected(errors) => {
                    debug!(issues = errors.len(), "submit rejected by validation");
                    observer.on_rejected(errors);
                }
                Effect::ConfirmDelete { index, record } => {
                    observer.on_confirmation_requested(*index, record)
                }
            }
        }
        if changed {
            observer.on_state_changed(&self.state);
        }
        Ok(())
    }
}
