//! Argument parsing, error mapping and command dispatch.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use vitrine_carousel::{CarouselConfig, DEFAULT_MIN_THUMB_PERCENT, thumb_geometry};
use vitrine_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};

use crate::output::{render_frames, render_thumb};
use crate::script::{Script, replay};

/// Run the CLI against process stdout and return the exit code.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(args, &mut out)
}

/// Run the CLI writing command output to `out`, returning the exit code.
pub fn run_with_writer<I, T>(args: I, out: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { 2 } else { 0 };
        }
    };

    match execute(cli, out) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn execute(cli: Cli, out: &mut dyn Write) -> CliResult<()> {
    let format = cli
        .log_format
        .parse::<LogFormat>()
        .map_err(|err| CliError::validation(err.to_string()))?;
    let logging = LoggingConfig {
        level: &cli.log_level,
        format,
        build_id: env!("CARGO_PKG_VERSION"),
    };
    if let Err(err) = init_logging(&logging) {
        debug!(error = %err, "logging already initialised");
    }

    match cli.command {
        Command::Replay(args) => handle_replay(&args, out),
        Command::Geometry(args) => handle_geometry(&args, out),
    }
}

fn handle_replay(args: &ReplayArgs, out: &mut dyn Write) -> CliResult<()> {
    let raw = read_script(&args.script)?;
    let script = Script::parse(&raw).map_err(|err| CliError::validation(format!("{err:#}")))?;
    let frames = replay(&script);
    debug!(frames = frames.len(), "replay finished");
    render_frames(out, &frames, args.format)
}

fn handle_geometry(args: &GeometryArgs, out: &mut dyn Write) -> CliResult<()> {
    if args.count == 0 {
        return Err(CliError::validation("--count must be at least 1"));
    }
    if args.index >= args.count {
        return Err(CliError::validation(format!(
            "--index must be below --count ({})",
            args.count
        )));
    }
    let config = CarouselConfig {
        min_thumb_percent: args.min_thumb,
        ..CarouselConfig::default()
    };
    config
        .validate()
        .map_err(|err| CliError::validation(err.to_string()))?;
    let thumb = thumb_geometry(args.count, args.index, config.min_thumb_percent)
        .ok_or_else(|| CliError::failure(anyhow!("no geometry for an empty carousel")))?;
    render_thumb(out, &thumb, args.format)
}

fn read_script(path: &Path) -> CliResult<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read script from stdin")
            .map_err(CliError::failure)?;
        return Ok(raw);
    }
    fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))
        .map_err(CliError::failure)
}

#[derive(Parser)]
#[command(
    name = "vitrine",
    about = "Replay carousel interactions outside the browser"
)]
struct Cli {
    #[arg(long, global = true, env = "VITRINE_LOG", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    #[arg(long, global = true, env = "VITRINE_LOG_FORMAT", default_value = "auto")]
    log_format: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a JSON interaction script and print every frame.
    Replay(ReplayArgs),
    /// Print scrollbar thumb geometry for a carousel size and index.
    Geometry(GeometryArgs),
}

#[derive(Args)]
struct ReplayArgs {
    /// Script path, or `-` for stdin.
    script: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Args)]
struct GeometryArgs {
    #[arg(long)]
    count: usize,
    #[arg(long, default_value_t = 0)]
    index: usize,
    #[arg(long, default_value_t = DEFAULT_MIN_THUMB_PERCENT)]
    min_thumb: f64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}
