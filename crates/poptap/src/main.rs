//! Poptap - tap-counter statistics service
//!
//! # Usage
//!
//! ```bash
//! # Run the server (default)
//! poptap
//! poptap --config configs/poptap.toml
//!
//! # Check a running server
//! poptap status
//! poptap status --json
//!
//! # Send test taps through the guarded client
//! poptap tap --count 10
//! ```

mod cmd;

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use poptap_config::{Config, LogFormat};

/// Poptap - tap-counter statistics service
#[derive(Parser, Debug)]
#[command(name = "poptap")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the server
    Serve(cmd::serve::ServeArgs),

    /// Check server health and stats
    Status(cmd::status::StatusArgs),

    /// Send test taps to a running server
    Tap(cmd::tap::TapArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Serve(mut args)) => {
            if args.config.is_none() && cli.config.is_some() {
                args.config = cli.config;
            }
            init_logging(cli.log_level.as_deref(), args.config.as_deref())?;
            cmd::serve::run(args).await
        }
        Some(Command::Status(args)) => {
            init_logging(cli.log_level.as_deref(), None)?;
            cmd::status::run(args).await
        }
        Some(Command::Tap(args)) => {
            init_logging(cli.log_level.as_deref(), None)?;
            cmd::tap::run(args).await
        }
        // No subcommand: serve
        None => {
            let args = cmd::serve::ServeArgs {
                config: cli.config.clone(),
            };
            init_logging(cli.log_level.as_deref(), args.config.as_deref())?;
            cmd::serve::run(args).await
        }
    }
}

/// Initialize tracing with the CLI override, the config file's [log]
/// section, or the defaults, in that order
fn init_logging(cli_level: Option<&str>, config_path: Option<&Path>) -> Result<()> {
    let config = config_path
        .and_then(|path| Config::from_file(path).ok())
        .unwrap_or_default();

    let level = cli_level.unwrap_or_else(|| config.log.level.as_str());
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("static filter is valid");

    match config.log.format {
        LogFormat::Console => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .init();
        }
    }

    Ok(())
}
