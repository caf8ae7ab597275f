//! sqlref CLI - searchable SQL syntax cheat sheet
//!
//! The binary in `main.rs` calls [`run`]; everything else lives in modules
//! so integration tests and the formatter can be exercised directly.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sqlref_core::{Catalog, Config};
use tracing::debug;

mod cli;
mod commands;
pub mod error;
pub mod output;
mod utils;

use crate::error::{ErrorCategory, IntoCliError};
use crate::utils::logging::initialize_logging;
use cli::{Cli, Commands};

/// Execute the sqlref CLI with the current process arguments.
///
/// # Errors
///
/// Returns an error if configuration loading or command execution fails.
pub async fn run() -> Result<()> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            // Exit silently for pipeline truncation
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = Config::load(cli.config.as_deref())
        .map_err(|err| err.with_category(ErrorCategory::Usage))?;
    let catalog = Arc::new(Catalog::builtin().context("Failed to load built-in catalog")?);
    debug!(summary = %catalog.summary(), "catalog loaded");

    execute_command(cli, catalog, &config).await
}

async fn execute_command(cli: Cli, catalog: Arc<Catalog>, config: &Config) -> Result<()> {
    match cli.command {
        Some(Commands::Search(args)) => {
            commands::search(
                catalog,
                config,
                &args.query.join(" "),
                args.format.resolve(),
                args.collapsed,
            )?;
        },
        Some(Commands::List { format }) => {
            commands::list_sections(catalog, config, format.resolve())?;
        },
        Some(Commands::Show { section, format }) => {
            commands::show_section(&catalog, config, &section, format.resolve())?;
        },
        Some(Commands::Copy {
            section,
            example,
            print,
        }) => {
            commands::copy_example(&catalog, &section, example, print, cli.quiet)?;
        },
        Some(Commands::Stats { format }) => {
            commands::show_stats(&catalog, format.resolve())?;
        },
        Some(Commands::Browse) => {
            commands::browse(catalog, config, cli.quiet).await?;
        },
        Some(Commands::Completions { shell }) => {
            commands::generate(shell);
        },
        None => {
            commands::handle_default_search(catalog, config, &cli.query, cli.format.resolve())?;
        },
    }

    Ok(())
}
