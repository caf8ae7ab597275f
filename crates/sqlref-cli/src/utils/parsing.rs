//! # Input Parsing Utilities
//!
//! Parsers for the line-oriented input read by `sqlref browse` and for
//! example references such as `12.2`.
//!
//! Every stdin line is either a replacement query or, when it starts with
//! `:`, a command:
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `window` | replace the query with `window` |
//! | `:toggle 4` / `:t 4` | expand or collapse section 4 |
//! | `:clear` / `:c` | clear the query |
//! | `:copy 12.2` / `:y 12.2` | copy example 2 of section 12 |
//! | `:help` / `:h` / `:?` | print the command summary |
//! | `:quit` / `:q` | exit |
//!
//! Section and example numbers are 1-based, matching `sqlref list`.

use anyhow::{Result, anyhow};

/// One parsed line of browse input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    /// Replace the query text. May be blank.
    Query(String),
    /// Toggle a section by its 1-based number.
    Toggle(usize),
    Clear,
    /// Copy an example: 1-based section number, then 1-based example number.
    Copy(usize, usize),
    Help,
    Quit,
    /// A `:` command that could not be understood, with the reason.
    Invalid(String),
}

/// Command summary printed by `:help`.
pub const BROWSE_HELP: &str = "\
Type to search. Commands:
  :toggle N   expand or collapse section N
  :clear      clear the search
  :copy N.M   copy example M of section N
  :help       show this help
  :quit       exit";

/// Parse one line of browse input.
///
/// Only the trailing newline is removed from query lines; any other
/// whitespace is part of the query.
pub fn parse_browse_line(line: &str) -> BrowseInput {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.strip_prefix(':') else {
        return BrowseInput::Query(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let argument = parts.next();
    if parts.next().is_some() {
        return BrowseInput::Invalid(format!("Too many arguments for ':{name}'"));
    }

    match (name, argument) {
        ("toggle" | "t", Some(arg)) => match parse_number(arg) {
            Ok(number) => BrowseInput::Toggle(number),
            Err(err) => BrowseInput::Invalid(err.to_string()),
        },
        ("copy" | "y", Some(arg)) => match parse_example_ref(arg) {
            Ok((section, example)) => BrowseInput::Copy(section, example),
            Err(err) => BrowseInput::Invalid(err.to_string()),
        },
        ("toggle" | "t", None) => BrowseInput::Invalid("Usage: :toggle N".to_string()),
        ("copy" | "y", None) => BrowseInput::Invalid("Usage: :copy N.M".to_string()),
        ("clear" | "c", None) => BrowseInput::Clear,
        ("help" | "h" | "?", None) => BrowseInput::Help,
        ("quit" | "q" | "exit", None) => BrowseInput::Quit,
        ("", _) => BrowseInput::Invalid("Empty command; try :help".to_string()),
        (other, _) => BrowseInput::Invalid(format!("Unknown command ':{other}'; try :help")),
    }
}

/// Parse an example reference `SECTION.EXAMPLE`, both 1-based.
///
/// # Errors
///
/// Returns an error when either part is missing, not a number, or zero.
pub fn parse_example_ref(input: &str) -> Result<(usize, usize)> {
    let trimmed = input.trim();
    let (section, example) = trimmed
        .split_once('.')
        .ok_or_else(|| anyhow!("Invalid example reference '{trimmed}': expected N.M"))?;
    Ok((parse_number(section)?, parse_number(example)?))
}

fn parse_number(input: &str) -> Result<usize> {
    let number: usize = input
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid number: '{input}'"))?;
    if number == 0 {
        return Err(anyhow!("Numbers start at 1"));
    }
    Ok(number)
}
