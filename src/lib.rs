#![deny(rust_2018_idioms)]
//! A terminal form that keeps an in-memory list of validated
//! name/email/age records.
//!
//! The session logic lives in [`reduce`]: an explicit [`SessionState`] goes
//! in, the next state and its [`Effect`]s come out. [`SessionEngine`] wraps
//! it for event-driven use and reports to a [`SessionObserver`].
//! [`RecordForm`] puts a ratatui front end on top.

mod app;
mod domain;
mod form;
mod io;
pub mod logging;
mod presentation;

pub use app::{DEFAULT_TITLE, RecordForm, StatusLevel, UiOptions};
pub use domain::{
    AGE_MAX, AGE_MIN, Draft, FieldError, FieldErrors, FieldName, RangeBound, Record, validate,
};
pub use form::{
    ActionError, EditState, Effect, Notification, NotificationLevel, PendingDelete, Reduction,
    SessionAction, SessionEngine, SessionObserver, SessionState, reduce,
};
pub use io::{DocumentFormat, OutputDestination, OutputOptions, RecordExport, UnknownFormat, emit};

pub mod prelude {
    pub use super::{RecordForm, UiOptions};
}
