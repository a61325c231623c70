//! RinPy CLI - Command line interface
//!
//! 高亮 RinPy 源文件，查看和修改保存的编辑器布局。

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};

mod config;
mod error;
mod logging;
mod platform;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::logging::LogFormat;
use crate::platform::{print_error, render, render_listing, OutputFormat};
use rinpy_config::{Direction, LayoutConfig, LogLevel};
use rinpy_core::grammar::rinpy;
use rinpy_core::{GrammarDefinition, RuleEngine, Token};
use rinpy_store::{load_layout, on_drag_end, reset_layout, FileStore};

const TARGET: &str = "rinpy::cli";

#[derive(Parser)]
#[command(
    name = "rinpy",
    about = "RinPy editor support - syntax highlighting and layout persistence",
    version
)]
struct Cli {
    /// Configuration file (default: ./rinpy.json if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, global = true, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Highlight a source file
    Highlight {
        file: PathBuf,
        /// Output format
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// List tokens one per line
    Tokens {
        file: PathBuf,
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Show or change the saved panel layout
    Layout {
        #[command(subcommand)]
        action: LayoutAction,
        /// Layout store file
        #[arg(long, global = true, value_name = "PATH")]
        store: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct ScanArgs {
    /// JSON grammar definition (default: built-in RinPy grammar)
    #[arg(long, value_name = "JSON")]
    grammar: Option<PathBuf>,
    /// State to start scanning in
    #[arg(long, value_name = "NAME")]
    state: Option<String>,
}

#[derive(Subcommand)]
enum LayoutAction {
    /// Print the effective sizes of both splits
    Show,
    /// Print the split options (gutter, snap offset, min sizes) as JSON
    Options,
    /// Save sizes for one split
    Set {
        #[arg(value_enum)]
        direction: DirectionArg,
        first: f64,
        second: f64,
    },
    /// Forget saved sizes (both splits unless one is named)
    Reset {
        #[arg(value_enum)]
        direction: Option<DirectionArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Vertical,
    Horizontal,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Vertical => Direction::Vertical,
            DirectionArg::Horizontal => Direction::Horizontal,
        }
    }
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

fn main() {
    let cli = Cli::parse();

    let mut config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e);
            process::exit(1);
        }
    };

    if let Some(level) = cli.log_level {
        config.log.global = level;
    }
    let format = cli.log_format.or(config.log_format).unwrap_or(LogFormat::Compact);
    logging::init(&config.log, format);

    if let Err(e) = run(cli.command, &config) {
        print_error(&e);
        process::exit(1);
    }
}

fn run(command: Command, config: &CliConfig) -> Result<(), CliError> {
    match command {
        Command::Highlight { file, format, scan } => {
            let format = format.or(config.format).unwrap_or_default();
            let color = std::io::stdout().is_terminal();
            with_tokens(&file, &scan, config, |tokens| {
                let out = render(tokens, format, color)?;
                print!("{out}");
                Ok(())
            })
        }
        Command::Tokens { file, scan } => with_tokens(&file, &scan, config, |tokens| {
            print!("{}", render_listing(tokens));
            Ok(())
        }),
        Command::Layout { action, store } => {
            let path = store.unwrap_or_else(|| config.layout_store_path());
            handle_layout(action, &FileStore::new(path), &config.layout)
        }
    }
}

/// 读文件、选引擎、扫描，再把 token 交给 `f`
fn with_tokens<F>(file: &Path, scan: &ScanArgs, config: &CliConfig, f: F) -> Result<(), CliError>
where
    F: FnOnce(&[Token<'_>]) -> Result<(), CliError>,
{
    let source = read(file)?;

    let custom;
    let engine: &RuleEngine = match scan.grammar.as_ref().or(config.grammar.as_ref()) {
        Some(path) => {
            custom = load_grammar(path, config)?;
            &custom
        }
        None => rinpy::engine()?,
    };

    let tokens: Vec<Token<'_>> = match &scan.state {
        Some(state) => engine.tokenize_from(&source, state)?.collect(),
        None => engine.tokenize(&source).collect(),
    };
    info!(target: TARGET, file = %file.display(), tokens = tokens.len(), "Scanned file");

    f(&tokens)
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_grammar(path: &Path, config: &CliConfig) -> Result<RuleEngine, CliError> {
    debug!(target: TARGET, path = %path.display(), "Loading grammar");
    let source_text = read(path)?;
    GrammarDefinition::from_json(&source_text)
        .and_then(|grammar| grammar.build(&config.engine))
        .map_err(|error| CliError::Grammar {
            path: path.to_path_buf(),
            source_text,
            error,
        })
}

fn handle_layout(
    action: LayoutAction,
    store: &FileStore,
    options: &LayoutConfig,
) -> Result<(), CliError> {
    debug!(target: TARGET, store = %store.path().display(), "Using layout store");
    match action {
        LayoutAction::Show => {
            let layout = load_layout(store);
            println!("vertical   {}", layout.vertical);
            println!("horizontal {}", layout.horizontal);
        }
        LayoutAction::Options => {
            println!("{}", serde_json::to_string_pretty(options)?);
        }
        LayoutAction::Set {
            direction,
            first,
            second,
        } => {
            let direction = Direction::from(direction);
            let sizes = on_drag_end(store, direction, &[first, second])?;
            println!("{} {}", direction.as_str(), sizes);
        }
        LayoutAction::Reset { direction } => {
            reset_layout(store, direction.map(Direction::from))?;
            let layout = load_layout(store);
            println!("vertical   {}", layout.vertical);
            println!("horizontal {}", layout.horizontal);
        }
    }
    Ok(())
}
