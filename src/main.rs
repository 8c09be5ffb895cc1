mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
mod view;
use crate::app::App;
use crate::config::{Config, LogConfig};
use crate::game::controller::LoopController;
use crate::game::GameSession;
use anyhow::Context;
use lexopt::{Arg, Parser};
use log::{info, LevelFilter};
use simplelog::WriteLogger;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "Usage: gridsnake [-c|--config FILE] [--log-file FILE]";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = match Invocation::from_parser(Parser::from_env())? {
        Invocation::Run(args) => args,
        Invocation::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Invocation::Version => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };
    let (source, allow_missing) = match args.config {
        Some(path) => (Some(path), false),
        None => (Config::default_path().ok(), true),
    };
    let config = match source {
        Some(ref path) => Config::load(path, allow_missing)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::default(),
    };
    init_logging(&config.log, args.log_file)?;
    info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    match source {
        Some(path) => info!("Configuration file: {}", path.display()),
        None => info!("No configuration directory; using defaults"),
    }
    let session = GameSession::new(&config).context("invalid game configuration")?;
    let timing = config
        .game
        .timing()
        .context("invalid game configuration")?;
    let terminal = ratatui::init();
    let r = App::new(LoopController::new(session, timing)).run(terminal);
    ratatui::restore();
    r.context("terminal I/O failed")
}

/// Send log messages to a file, since the terminal belongs to the game.
/// `override_path` takes precedence over the configured file.
fn init_logging(config: &LogConfig, override_path: Option<PathBuf>) -> anyhow::Result<()> {
    if config.level == LevelFilter::Off {
        return Ok(());
    }
    let Some(path) = override_path.or_else(|| config.path()) else {
        return Ok(());
    };
    WriteLogger::init(config.level, simplelog::Config::default(), open_log(&path)?)
        .context("failed to initialize logger")
}

/// Open the log file for appending, creating it and its parent directories
/// as needed
fn open_log(path: &Path) -> anyhow::Result<fs_err::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log directory")?;
    }
    fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

impl Invocation {
    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}
