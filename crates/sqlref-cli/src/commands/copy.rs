//! Copy command implementation

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use sqlref_core::{Catalog, Example};

use crate::error::CliError;
use crate::utils::clipboard::copy_to_clipboard;

/// Copy one example's code to the clipboard, or print it with `print`.
pub fn execute(
    catalog: &Catalog,
    selector: &str,
    example: usize,
    print: bool,
    quiet: bool,
) -> Result<()> {
    let found = find_example(catalog, selector, example)?;

    if print {
        println!("{}", found.code);
        return Ok(());
    }

    copy_to_clipboard(&found.code).context("Failed to write clipboard sequence")?;
    if !quiet {
        eprintln!("{}", "Copied!".green());
    }
    Ok(())
}

/// Look up example `number` (1-based) of the section matching `selector`.
pub fn find_example<'c>(catalog: &'c Catalog, selector: &str, number: usize) -> Result<&'c Example> {
    let section = catalog.resolve(selector)?;
    section.example(number).ok_or_else(|| {
        CliError::not_found(anyhow!(
            "Example {number} not found in section {} '{}' ({} examples)",
            section.id.number(),
            section.title,
            section.examples.len()
        ))
        .into()
    })
}
