#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use timesrt::app_config::{Config, LogLevel};
use timesrt::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for timesrt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug)]
struct ConvertArgs {
    /// Path to the input text file
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,

    /// Path for the output .srt file
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: Option<PathBuf>,

    /// Hour offset for the output SRT, e.g. 1 to start timestamps at 01:xx:xx
    #[arg(long = "hour_offset", visible_alias = "hour-offset", allow_negative_numbers = true)]
    hour_offset: Option<i64>,

    /// Use this if the input file's timeline starts at 01:00:00 instead of 00:00:00
    #[arg(long = "subtract_one_hour", visible_alias = "subtract-one-hour")]
    subtract_one_hour: bool,

    /// Frame rate of the source video for frame timestamps (e.g. 24, 29.97, 30) [default: 24]
    #[arg(long)]
    fps: Option<f64>,

    /// Configuration file path (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// timesrt - generate SRT subtitle files from a timestamped text file
#[derive(Parser, Debug)]
#[command(name = "timesrt")]
#[command(version)]
#[command(about = "Generate SRT subtitle files from a timestamped text file")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "timesrt reads a transcript where timestamp lines (mm:ss, hh:mm:ss or hh:mm:ss:ff)
are followed by text paragraphs, and writes one SRT cue per paragraph. A cue lasts until the
next timestamp, capped at 3 seconds. The text after the last timestamp is not emitted.

EXAMPLES:
    timesrt transcript.txt out.srt                      # Default settings (24 fps)
    timesrt transcript.txt out.srt --fps 29.97          # Frame timestamps at 29.97 fps
    timesrt transcript.txt out.srt --subtract_one_hour  # Source clock starts at 01:00:00
    timesrt transcript.txt out.srt --hour_offset 1      # Shift output hours by one
    timesrt completions bash > timesrt.bash             # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and label for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, label) = Self::style_for_level(record.level());

            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, label, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Info by default, adjusted once the configuration is known
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "timesrt", &mut std::io::stdout());
            Ok(())
        }
        None => run_convert(cli.convert),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

// @builds: Effective configuration, file values overridden by CLI flags
fn resolve_config(options: &ConvertArgs) -> Result<Config> {
    let mut config = match &options.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(hour_offset) = options.hour_offset {
        config.hour_offset = hour_offset;
    }
    if options.subtract_one_hour {
        config.subtract_one_hour = true;
    }
    if let Some(fps) = options.fps {
        config.fps = fps;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    Ok(config)
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    let (input_file, output_file) = match (&options.input_file, &options.output_file) {
        (Some(input), Some(output)) => (input.clone(), output.clone()),
        _ => return Err(anyhow!("INPUT_FILE and OUTPUT_FILE are required when no subcommand is specified")),
    };

    let config = resolve_config(&options)?;
    log::set_max_level(config.log_level.to_level_filter());
    debug!("Effective configuration: {:?}", config);

    let controller = Controller::with_config(config)?;
    controller.run(&input_file, &output_file)?;

    println!("Successfully generated SRT file: {}", output_file.display());
    Ok(())
}
