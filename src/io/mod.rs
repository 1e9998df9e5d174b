mod format;
mod output;

pub use format::{DocumentFormat, UnknownFormat};
pub use output::{OutputDestination, OutputOptions, RecordExport, emit};
