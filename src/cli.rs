//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::logging::{init_logging, LoggingConfig};
use crate::domain::error::EtherealTradesError;
use crate::domain::ethereal_trades::EtherealTrades;

#[derive(Parser, Debug)]
#[command(name = "etherealtrades", about = "Run the EtherealTrades component")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Construct an instance and run it
    Run {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Run { config } => run_component(config.as_deref()),
        Command::Validate { config } => run_validate(&config),
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Load the config at `path`, or an empty one when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<FileConfigAdapter, EtherealTradesError> {
    match path {
        Some(p) => FileConfigAdapter::load(p),
        None => Ok(FileConfigAdapter::empty()),
    }
}

/// Load config and set up logging, then run a fresh instance. Returns `run`'s result.
pub fn execute(config_path: Option<&Path>) -> Result<bool, EtherealTradesError> {
    let adapter = load_config(config_path)?;
    let logging = LoggingConfig::from_config(&adapter)?;
    init_logging(&logging);

    if let Some(path) = config_path {
        tracing::info!(config = %path.display(), "loaded config");
    }

    let instance = EtherealTrades::new();
    let ok = instance.run();
    tracing::info!(ok, "run finished");
    Ok(ok)
}

/// Status line and exit code for a `run` result.
pub fn run_outcome(ok: bool) -> (&'static str, ExitCode) {
    if ok {
        ("ok", ExitCode::SUCCESS)
    } else {
        ("failed", ExitCode::FAILURE)
    }
}

fn run_component(config_path: Option<&Path>) -> Result<ExitCode, EtherealTradesError> {
    let (status, code) = run_outcome(execute(config_path)?);
    println!("{status}");
    Ok(code)
}

fn run_validate(config_path: &Path) -> Result<ExitCode, EtherealTradesError> {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = FileConfigAdapter::load(config_path)?;
    LoggingConfig::from_config(&adapter)?;
    eprintln!("Config validated successfully");
    Ok(ExitCode::SUCCESS)
}
