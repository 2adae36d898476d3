//! Command-line front end: routes one message through a config-driven logger.
//!
//! Flags override the matching config values, so a script can rely on the
//! user's config and still force, say, `--quiet` for one call.

use crate::config::{Backend, Config};
use crate::internal;
use crate::level::{LogLevel, Verbosity};
use crate::logger::Logger;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Level argument for the CLI.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliLevel {
    Screen,
    Progress,
    Debug,
    Info,
    Warning,
    Error,
}

impl From<CliLevel> for LogLevel {
    fn from(level: CliLevel) -> Self {
        match level {
            CliLevel::Screen => Self::Screen,
            CliLevel::Progress => Self::Progress,
            CliLevel::Debug => Self::Debug,
            CliLevel::Info => Self::Info,
            CliLevel::Warning => Self::Warning,
            CliLevel::Error => Self::Error,
        }
    }
}

/// routelog - Route a message through a leveled logger.
#[derive(Debug, Parser)]
#[command(name = "routelog", version, about = "Route a message through a leveled logger")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Show debug output and traces on errors
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
    /// Suppress info output
    #[arg(short, long)]
    pub quiet: bool,
    /// Drop warnings
    #[arg(long)]
    pub no_warnings: bool,
    /// Never emit styled output
    #[arg(long)]
    pub no_color: bool,
    /// Route through the system log instead of stdout/stderr
    #[arg(long)]
    pub system_log: bool,
    /// Reshape bidirectional text with bidiv or fribidi
    #[arg(long)]
    pub bidi: bool,
    /// Trace text appended to errors in verbose mode
    #[arg(long)]
    pub trace: Option<String>,
    /// Level to log at
    #[arg(value_enum)]
    pub level: CliLevel,
    /// Message words, joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Folds the flags into the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if self.verbose {
            config.general.verbosity = Verbosity::Verbose.to_string();
        } else if self.quiet {
            config.general.verbosity = Verbosity::Quiet.to_string();
        }
        if self.no_warnings {
            config.general.no_warnings = true;
        }
        if self.no_color {
            config.general.color = false;
        }
        if self.system_log {
            config.general.backend = "system".to_string();
        }
        if self.bidi {
            config.bidi.enabled = true;
        }
    }
}

/// Emits `message` at `level` with the method a caller would use for it.
pub fn emit(logger: &Logger, level: LogLevel, message: &str, trace: Option<&str>) {
    match level {
        LogLevel::Screen => logger.screen(message, true),
        LogLevel::Progress => logger.progress(message),
        LogLevel::Debug => logger.debug(message, false),
        LogLevel::Info => logger.info(message, true, None, false),
        LogLevel::Warning => logger.warning(message, false),
        LogLevel::Error => logger.handle_error(message, trace, true, true),
    }
}

#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    // before config loading, which already emits internal diagnostics
    internal::init(if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Quiet
    });

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(c) => c,
        Err(e) => {
            internal::error(&format!("Error loading config: {e}"));
            return ExitCode::FAILURE;
        }
    };
    cli.apply(&mut config);

    // the backend may come from the config file as well as from --system-log
    if config.parse_backend() == Backend::System {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    }

    let logger = Logger::from_config(&config);
    emit(
        &logger,
        cli.level.into(),
        &cli.message.join(" "),
        cli.trace.as_deref(),
    );
    ExitCode::SUCCESS
}
