//! ExprimeTonCampus library root.
//! Exposes the feedback store, the aggregation/filter operations, the page
//! renderers, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod pages;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::FeedbackStore;
use crate::errors::AppResult;
use crate::ui::messages::note;
use crate::utils::path::expand_tilde;
use std::path::{Path, PathBuf};

/// Build the session store: sample set (unless `--no-seed`), then every
/// `--import` file in command-line order, each prepended.
pub fn build_store(cli: &Cli, cfg: &Config) -> AppResult<FeedbackStore> {
    let mut store = if cli.no_seed {
        FeedbackStore::default()
    } else {
        FeedbackStore::seeded()
    };

    for file in &cli.import {
        let path = expand_tilde(file);
        let batch = import::read_records(&path, cli.import_format)?;
        let n = if cfg.enforce_unique_ids {
            store.import_checked(batch)?
        } else {
            store.import(batch)
        };
        note(format!("Imported {n} record(s) from {}", path.display()));
    }

    Ok(store)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Guide | Commands::About => cli::commands::about::handle(&cli.command),
        cmd => {
            let store = build_store(cli, cfg)?;
            match cmd {
                Commands::Home { .. } => cli::commands::home::handle(cmd, cfg, &store),
                Commands::Stats { .. } => cli::commands::stats::handle(cmd, cfg, &store),
                Commands::Messages { .. } => cli::commands::messages::handle(cmd, cfg, &store),
                Commands::Show { .. } => cli::commands::show::handle(cmd, cfg, &store),
                Commands::Export { .. } => cli::commands::export::handle(cmd, &store),
                _ => Ok(()),
            }
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path: PathBuf = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load(Some(config_path.as_path()))?;

    dispatch(&cli, &cfg, &config_path)
}
