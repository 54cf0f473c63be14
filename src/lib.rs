//! hotellog library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind it: credential check, entry builder, log store and notifier.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod notify;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use logging::{Verbosity, init_logging};

/// Central command dispatcher.
///
/// `init` and `config` need no login; every other command first goes
/// through the role gate and gets the resulting session.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Submit { .. } => {
            let session = commands::login(cli, cfg)?;
            commands::submit::handle(&cli.command, cfg, &session)
        }
        Commands::List { .. } => {
            let session = commands::login(cli, cfg)?;
            commands::list::handle(&cli.command, cfg, &session)
        }
        Commands::Edit { .. } => {
            let session = commands::login(cli, cfg)?;
            commands::edit::handle(&cli.command, cfg, &session)
        }
        Commands::Export { .. } => {
            let session = commands::login(cli, cfg)?;
            commands::export::handle(&cli.command, cfg, &session)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    // config is loaded once and passed down
    let mut cfg = Config::load()?;

    if let Some(custom_log) = &cli.log {
        cfg.log_file = custom_log.clone();
    }

    tracing::debug!(log = %cfg.log_path().display(), "configuration loaded");

    dispatch(&cli, &cfg)
}
