use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Report, Result, WrapErr};
use tracing::level_filters::LevelFilter;

use recordform::{
    DocumentFormat, OutputDestination, OutputOptions, RecordForm, UiOptions, UnknownFormat,
    logging::{LogConfig, init_logging},
};

#[derive(Debug, Parser)]
#[command(
    name = "recordform",
    version,
    about = "Add, edit and delete validated name/email/age records in the terminal"
)]
struct Cli {
    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Export format for the records when the form closes
    #[arg(long = "format", value_name = "FORMAT", default_value = "json", value_parser = parse_format)]
    format: DocumentFormat,

    /// Export destinations ("-" writes to stdout). Defaults to stdout.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Do not export the records at all
    #[arg(long = "no-output", conflicts_with = "outputs")]
    no_output: bool,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Hide the key binding line in the footer
    #[arg(long = "no-help")]
    no_help: bool,

    /// Quit on the first Ctrl+Q even with unsubmitted input
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// Key bindings in the JSON layout of keymap/default.keymap.json
    #[arg(long = "keymap", value_name = "PATH")]
    keymap: Option<PathBuf>,

    /// Write logs to this file (the terminal is reserved for the form)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level; RUST_LOG is used when omitted
    #[arg(long = "log-level", value_enum, value_name = "LEVEL")]
    log_level: Option<LogLevelArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    init_logging(&log_config_from_cli(&cli)).map_err(Report::msg)?;

    let mut options = UiOptions::default()
        .with_help(!cli.no_help)
        .with_confirm_exit(!cli.no_confirm_exit);
    if let Some(path) = cli.keymap.as_ref() {
        let source = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read keymap {}", path.display()))?;
        options = options.with_keymap_json(&source).map_err(Report::msg)?;
    }

    let mut form = RecordForm::new().with_options(options);
    if let Some(title) = cli.title.as_ref() {
        form = form.with_title(title.clone());
    }
    if let Some(output) = output_options_from_cli(&cli) {
        form = form.with_output(output);
    }

    let records = form.run().map_err(Report::msg)?;
    tracing::info!(records = records.len(), "session finished");
    Ok(())
}

fn parse_format(raw: &str) -> Result<DocumentFormat, UnknownFormat> {
    raw.parse()
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default();
    if let Some(path) = cli.log_file.as_ref() {
        config = config.with_log_file(path);
    }
    if let Some(level) = cli.log_level {
        config = config.with_level(level.into());
    }
    config
}

fn output_options_from_cli(cli: &Cli) -> Option<OutputOptions> {
    if cli.no_output {
        return None;
    }
    let destinations = if cli.outputs.is_empty() {
        vec![OutputDestination::Stdout]
    } else {
        cli.outputs
            .iter()
            .map(|spec| OutputDestination::parse(spec))
            .collect()
    };
    Some(
        OutputOptions::new(cli.format)
            .with_pretty(!cli.no_pretty)
            .with_destinations(destinations),
    )
}
