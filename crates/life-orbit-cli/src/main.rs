//! Life Orbit CLI - run the orbital layout engine without a window.
//!
//! Streams live frames, replays pointer scripts deterministically and
//! manages catalogs and configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;
mod ticker;

use commands::{catalog as catalog_cmd, config as config_cmd};
use config::Config;

/// Life Orbit CLI - headless runner for the life areas layout.
///
/// Run `lifeorbit` to stream frames of the built-in sample catalog.
#[derive(Parser, Debug)]
#[command(
    name = "lifeorbit",
    author,
    version,
    about = "Life Orbit: orbital layout engine for life areas",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run in real time and print frames as JSON lines (default command).
    ///
    /// Runs until the tick limit is reached or Ctrl-C is pressed.
    Run {
        /// Catalog file (defaults to the configured catalog, then the sample).
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Stop after at least this many ticks.
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Emit a frame every N ticks.
        #[arg(short, long, default_value_t = 1)]
        every: u64,
    },

    /// Run a fixed number of ticks as fast as possible and print the final
    /// frame.
    Simulate {
        /// Catalog file (defaults to the configured catalog, then the sample).
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Number of orbit ticks to run.
        #[arg(short, long)]
        ticks: u64,

        /// JSON-lines pointer script to replay.
        #[arg(short, long)]
        events: Option<PathBuf>,

        /// Write the final frame here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect and validate catalogs.
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Catalog subcommands.
#[derive(Subcommand, Debug)]
enum CatalogCommands {
    /// Print the built-in sample catalog as JSON.
    Sample {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a catalog file loads.
    Validate {
        /// Catalog file.
        path: PathBuf,
    },

    /// Show a summary table of a catalog.
    Show {
        /// Catalog file (defaults to the configured catalog, then the sample).
        path: Option<PathBuf>,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };

    // stdout carries frames, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::load()?;

    // Default to an unbounded run if no command given
    let command = cli.command.unwrap_or(Commands::Run {
        catalog: None,
        ticks: None,
        every: 1,
    });

    match command {
        Commands::Run {
            catalog,
            ticks,
            every,
        } => {
            commands::run::execute(&config, catalog.as_deref(), ticks, every).await?;
        }

        Commands::Simulate {
            catalog,
            ticks,
            events,
            output,
        } => {
            commands::simulate::execute(
                &config,
                catalog.as_deref(),
                ticks,
                events.as_deref(),
                output.as_deref(),
            )?;
        }

        Commands::Catalog(catalog_cmd_inner) => match catalog_cmd_inner {
            CatalogCommands::Sample { output } => {
                catalog_cmd::sample(output)?;
            }
            CatalogCommands::Validate { path } => {
                catalog_cmd::validate(&path)?;
            }
            CatalogCommands::Show { path } => {
                catalog_cmd::show(path.as_deref(), &config)?;
            }
        },

        Commands::Config(config_cmd_inner) => match config_cmd_inner {
            ConfigCommands::Show => {
                config_cmd::show(&config)?;
            }
            ConfigCommands::Set { key, value } => {
                // Only persist what the file holds, not environment overrides.
                let mut stored = Config::load_file()?;
                config_cmd::set(&mut stored, &key, &value)?;
            }
            ConfigCommands::Get { key } => {
                config_cmd::get(&config, &key)?;
            }
            ConfigCommands::Reset => {
                config_cmd::reset()?;
            }
            ConfigCommands::Path => {
                if let Some(path) = Config::config_file_path() {
                    println!("{}", path.display());
                } else {
                    println!("(no config file path available)");
                }
            }
        },
    }

    Ok(())
}
