//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod render;
mod search;
mod show;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, ConfigError, TeamspriteConfig};
use crate::repository::{PokeApiClient, RepositoryError};

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Teamsprite - Build a Pokémon team and render it to a PNG card
#[derive(Parser)]
#[command(name = "teamsprite")]
#[command(about = "Teamsprite - Build a Pokémon team and render it to a PNG card")]
#[command(version)]
pub struct Cli {
    /// Log loads and renders (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a team card to PNG
    Render {
        /// Team members by name or National Dex number, in order (at most 6)
        #[arg(required = true)]
        names: Vec<String>,

        /// Output directory (default: export.out_dir from teamsprite.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Layout: line, grid-2x3 or grid-3x2
        #[arg(long)]
        layout: Option<String>,

        /// Sprite variant: default, shiny or artwork
        #[arg(long)]
        variant: Option<String>,

        /// Sprite scale in percent (50-200)
        #[arg(long)]
        scale: Option<u32>,

        /// Team label drawn at the bottom of the card; also names the file
        #[arg(long)]
        label: Option<String>,

        /// Label color (any CSS color)
        #[arg(long)]
        label_color: Option<String>,

        /// Background color (any CSS color)
        #[arg(long)]
        background: Option<String>,

        /// Leave the background transparent
        #[arg(long)]
        transparent: bool,

        /// Canvas width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Path to teamsprite.toml (default: discovered from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Search Pokémon names
    Search {
        /// At least two characters of a name; unmatched queries fall back to a direct lookup
        query: String,

        /// Path to teamsprite.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print one Pokémon record as JSON
    Show {
        /// Name or National Dex number
        key: String,

        /// Path to teamsprite.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            names,
            output,
            layout,
            variant,
            scale,
            label,
            label_color,
            background,
            transparent,
            width,
            height,
            config,
        } => {
            let overrides = crate::config::CliOverrides {
                out_dir: output,
                layout,
                variant,
                scale,
                label,
                label_color,
                background,
                transparent: transparent.then_some(true),
                width,
                height,
            };
            render::run_render(&names, config.as_deref(), &overrides)
        }
        Commands::Search { query, config } => search::run_search(&query, config.as_deref()),
        Commands::Show { key, config } => show::run_show(&key, config.as_deref()),
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "teamsprite=debug" } else { "warn" }));
    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Single-threaded runtime driving all network work for one command.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, ExitCode> {
    tokio::runtime::Builder::new_current_thread().enable_all().build().map_err(|e| {
        eprintln!("Error: Cannot start async runtime: {}", e);
        ExitCode::from(EXIT_ERROR)
    })
}

/// Load the config file, reporting failures the way every command does.
pub(crate) fn load_or_report(path: Option<&Path>) -> Result<TeamspriteConfig, ExitCode> {
    load_config(path).map_err(|e| report_config_error(&e))
}

pub(crate) fn report_config_error(error: &ConfigError) -> ExitCode {
    eprintln!("Error: {}", error);
    ExitCode::from(config_exit_code(error))
}

/// Validation problems count as invalid arguments.
fn config_exit_code(error: &ConfigError) -> u8 {
    match error {
        ConfigError::Validation(_) => EXIT_INVALID_ARGS,
        _ => EXIT_ERROR,
    }
}

/// HTTP repository configured from `[api]`.
pub(crate) fn repository(config: &TeamspriteConfig) -> Result<Arc<PokeApiClient>, ExitCode> {
    PokeApiClient::new(&config.api.base_url, &config.api.artwork_url_template, config.api.timeout_ms)
        .map(Arc::new)
        .map_err(|e| {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        })
}

/// Exit code for a failed repository call.
pub(crate) fn report_repository_error(error: &RepositoryError) -> ExitCode {
    eprintln!("Error: {}", error);
    ExitCode::from(EXIT_ERROR)
}
