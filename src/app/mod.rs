mod confirm;
mod focus;
mod input;
mod keymap;
mod options;
mod record_form;
mod runtime;
mod status;
mod terminal;

pub use options::UiOptions;
pub use record_form::{DEFAULT_TITLE, RecordForm};
pub use status::StatusLevel;
