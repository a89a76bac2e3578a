//! Taskdesk CLI - command-line client for the Taskdesk task manager

mod commands;
mod config;
mod logging;
mod terminal;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Commands;
use std::path::PathBuf;
use taskdesk_core::Settings;
use taskdesk_core::config::default_state_dir;
use tracing::{Level, debug, error};

#[derive(Parser)]
#[command(name = "taskdesk")]
#[command(about = "Command-line client for the Taskdesk task manager")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Configuration file (JSON, TOML or YAML)
    #[arg(short = 'c', long, global = true, env = "TASKDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for the token file and logs
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Disable file logging (only log to stderr)
    #[arg(long, global = true)]
    no_file_log: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let state_dir = cli.data_dir.clone().unwrap_or_else(default_state_dir);
    logging::init_logging(cli.log_level.into(), &state_dir, cli.no_file_log)?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        settings = settings.with_state_dir(dir);
    }
    debug!(base_url = %settings.api.base_url, "loaded settings");

    if let Err(e) = cli.command.execute(settings, cli.yes).await {
        error!("Command failed: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
