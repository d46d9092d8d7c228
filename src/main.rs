// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use linkedvtt::app_config::{self, Config, OutputFormat};
use linkedvtt::file_utils::FileManager;
use linkedvtt::{assemble, parse};

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    JsonLd,
    Document,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::JsonLd => OutputFormat::JsonLd,
            CliOutputFormat::Document => OutputFormat::Document,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for linkedvtt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// linkedvtt - WebVTT to JSON-LD converter
///
/// Parses a WebVTT file and links every cue to a media fragment of a video.
#[derive(Parser, Debug)]
#[command(name = "linkedvtt")]
#[command(version)]
#[command(about = "WebVTT to JSON-LD converter")]
#[command(long_about = "linkedvtt parses WebVTT captions and produces a JSON-LD document
anchoring each cue to a time-range fragment of the video.

EXAMPLES:
    linkedvtt subs.vtt                          # Convert using default config
    linkedvtt -v movie.mp4 subs.vtt             # Video IRI relative to the input file
    linkedvtt -f -s subs.vtt                    # Flatten graphs, strict parsing
    linkedvtt -F document subs.vtt              # Print the parsed WebVTT structure
    cat subs.vtt | linkedvtt -b http://x/       # Read stdin with an explicit base
    linkedvtt completions bash > linkedvtt.bash # Generate bash completions

CONFIGURATION:
    Defaults are read from linkedvtt.json when it exists. You can specify a
    different file with --config-path. Command-line flags take precedence.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input WebVTT file, stdin when absent or '-'
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file, stdout when absent
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Embed fragment nodes inline instead of as nested graphs
    #[arg(short, long)]
    flatten: bool,

    /// Video IRI, used when the input declares no @video
    #[arg(short, long)]
    video: Option<String>,

    /// Base IRI, used when the input declares no @base
    #[arg(short, long)]
    base: Option<String>,

    /// Extra JSON-LD context IRI (repeatable)
    #[arg(short = 'x', long = "context")]
    contexts: Vec<String>,

    /// Abort on the first parse issue
    #[arg(short, long)]
    strict: bool,

    /// Output format
    #[arg(short = 'F', long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Configuration file path
    #[arg(short, long, default_value = "linkedvtt.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
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
        metadata.level() <= self.level
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

fn main() -> Result<()> {
    // Info by default, adjusted once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "linkedvtt", &mut std::io::stdout());
            Ok(())
        }
        None => run_convert(cli),
    }
}

fn run_convert(options: CommandLineOptions) -> Result<()> {
    // A command-line log level applies before the config is read
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(LevelFilter::from(&level));
    }

    let mut config = Config::load(&options.config_path)?;

    // Override config with CLI options if provided
    if options.flatten {
        config.flatten = true;
    }
    if options.strict {
        config.strict = true;
    }
    if let Some(video) = &options.video {
        config.default_video = video.clone();
    }
    config.contexts.extend(options.contexts.iter().cloned());
    if let Some(format) = &options.format {
        config.output_format = format.clone().into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(LevelFilter::from(&config.log_level));

    let input = options.input.as_deref();
    let text = FileManager::read_input(input)?;
    let document = parse(&text, config.parse_mode()).context("Failed to parse WebVTT input")?;

    let json = match config.output_format {
        OutputFormat::Document => serde_json::to_value(&document)?,
        OutputFormat::JsonLd => {
            let base = match &options.base {
                Some(base) => base.clone(),
                None => FileManager::base_iri_for(input)?,
            };
            debug!("Default base IRI: {}", base);
            let linked = assemble(&document, &config.link_options(Some(base)))
                .context("Failed to build linked document")?;
            serde_json::to_value(&linked)?
        }
    };

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    FileManager::write_output(options.output.as_deref(), &rendered)?;

    info!("Converted {} cues to {}", document.cues.len(), config.output_format);
    Ok(())
}
