mod actions;
mod engine;
mod reducers;
mod state;

pub use actions::{Effect, Notification, NotificationLevel, SessionAction};
pub use engine::{SessionEngine, SessionObserver};
pub use reducers::{ActionError, Reduction, reduce};
pub use state::{EditState, PendingDelete, SessionState};
