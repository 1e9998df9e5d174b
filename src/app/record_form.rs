use anyhow::Result;

use crate::{
    domain::Record,
    form::{SessionEngine, SessionState},
    io::{self, OutputOptions},
};

use super::{options::UiOptions, runtime::App};

pub const DEFAULT_TITLE: &str = "Record Form";

/// Entry point: configure, then [`run`](Self::run) the form in the terminal.
#[derive(Debug)]
pub struct RecordForm {
    title: Option<String>,
    options: UiOptions,
    records: Vec<Record>,
    output: Option<OutputOptions>,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordForm {
    pub fn new() -> Self {
        Self {
            title: None,
            options: UiOptions::default(),
            records: Vec::new(),
            output: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Rows shown when the form opens.
    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    /// Serialize the store with `output` after the form closes.
    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    /// Runs the form until the user quits and returns the final store.
    pub fn run(self) -> Result<Vec<Record>> {
        let RecordForm {
            title,
            options,
            records,
            output,
        } = self;

        let engine = SessionEngine::new(SessionState::with_records(records));
        let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let mut app = App::new(engine, title, options);
        let records = app.run()?;

        if let Some(output) = output.as_ref() {
            io::emit(&records, output)?;
        }
        Ok(records)
    }
}
