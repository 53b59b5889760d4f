//! Pause Click CLI - pclick command

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cmd;
mod host;
mod script;
mod system_config;

/// Pause Click - pause/play playback on a mouse click
#[derive(Parser)]
#[command(name = "pclick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (default: <config dir>/pause-click/config.toml)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a mouse input script through the filter
    Run {
        /// Script file (default: stdin)
        #[arg(long)]
        script: Option<PathBuf>,
    },
    /// View and edit the persisted settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// List all settings
    List,

    /// Print a single setting
    Get {
        /// Setting key (e.g. double-click-delay)
        key: String,
    },

    /// Change a setting
    Set {
        /// Setting key (e.g. mouse-button)
        key: String,
        /// New value
        value: String,
    },

    /// Show the settings file path
    Path {
        /// Create the file with defaults if missing
        #[arg(long)]
        create: bool,
    },

    /// Print an example settings file
    Example,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (stderr, so stdout stays parseable)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings.as_deref();

    match cli.command {
        Commands::Run { script } => cmd::run::run(script, settings).await,
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::List => cmd::config::run_list(settings).await,
            ConfigCommands::Get { key } => cmd::config::run_get(settings, &key).await,
            ConfigCommands::Set { key, value } => {
                cmd::config::run_set(settings, &key, &value).await
            }
            ConfigCommands::Path { create } => cmd::config::run_path(settings, create).await,
            ConfigCommands::Example => cmd::config::run_example().await,
        },
    }
}
