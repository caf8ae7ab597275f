//! Tracing subscriber and terminal color setup.
//!
//! Logs always go to stderr so stdout carries only rendered results.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, Commands};

/// Install the global subscriber and color override for this run.
///
/// WARN by default, DEBUG with `--verbose`/`--debug`, ERROR with `--quiet`
/// or when the command prints JSON.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let mut level = if cli.verbose || cli.debug {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let machine_output = command_format(cli).is_some_and(|format| format.is_machine());
    if machine_output && !(cli.verbose || cli.debug) {
        level = Level::ERROR;
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() || machine_output {
        color_control::set_override(false);
    }
    Ok(())
}

/// Output format of the command about to run, if it renders one.
fn command_format(cli: &Cli) -> Option<crate::output::OutputFormat> {
    match &cli.command {
        Some(
            Commands::List { format }
            | Commands::Show { format, .. }
            | Commands::Stats { format },
        ) => Some(format.resolve()),
        Some(Commands::Search(args)) => Some(args.format.resolve()),
        None if !cli.query.is_empty() => Some(cli.format.resolve()),
        _ => None,
    }
}
