//! Command-line tool for order notifications
//!
//! Loads an ordain configuration, builds the configured sink and registry,
//! and emits order lifecycle announcements by hand. Useful for checking a
//! webhook before wiring it into the delegation service.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ordain_core::{OrdainConfig, OrderRegistry};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

mod commands;

use commands::{
    delegation::{self, DelegationArgs},
    fulfilled::{self, FulfilledArgs},
    new_order::{self, NewOrderArgs},
};

#[derive(Parser)]
#[command(name = "ordain", version, about = "Delegation order notifications")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store an order and announce it to its owners
    NewOrder(NewOrderArgs),
    /// Announce a delegation toward an order
    Delegation(DelegationArgs),
    /// Announce that an order was fulfilled
    Fulfilled(FulfilledArgs),
    /// Validate the configuration and print it
    CheckConfig,
}

fn load_config(path: Option<&PathBuf>) -> Result<OrdainConfig> {
    match path {
        Some(path) => OrdainConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(OrdainConfig::default()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let config = load_config(cli.config.as_ref())?;
    debug!(?config, "Loaded configuration");

    let sink = ordain_notify::build_sink(&config.notifier).context("building notifier")?;
    let registry = Arc::new(OrderRegistry::new(config.registry.clone(), sink));

    match cli.command {
        Commands::NewOrder(args) => new_order::run(&registry, args).await?,
        Commands::Delegation(args) => delegation::run(&registry, args).await?,
        Commands::Fulfilled(args) => fulfilled::run(&registry, args).await?,
        Commands::CheckConfig => {
            println!("{config:#?}");
        }
    }

    Ok(())
}
