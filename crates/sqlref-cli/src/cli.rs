//! # CLI Structure and Argument Parsing
//!
//! This module defines the command-line interface for `sqlref`, a searchable
//! SQL syntax cheat sheet. The CLI is built using `clap` with derive macros.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Default search (no subcommand)
//! sqlref window functions
//!
//! # Explicit search command
//! sqlref search "left join" --format json
//!
//! # Browsing
//! sqlref list
//! sqlref show 12
//! sqlref show ctes
//!
//! # Copy the second example of section 4 to the clipboard
//! sqlref copy 4 2
//!
//! # Interactive search over stdin
//! sqlref browse
//! ```
//!
//! Sections are addressed by their number in `sqlref list` or by any
//! case-insensitive fragment of their title.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::utils::cli_args::FormatArg;

/// Main CLI structure for the `sqlref` command
///
/// When invoked without a subcommand, the positional arguments are joined
/// into a search query:
///
/// ```bash
/// sqlref row_number  # Equivalent to: sqlref search row_number
/// ```
#[derive(Parser, Clone, Debug)]
#[command(name = "sqlref")]
#[command(version)]
#[command(about = "sqlref - searchable SQL syntax cheat sheet", long_about = None)]
#[command(
    override_usage = "sqlref [COMMAND] [COMMAND_ARGS]... [OPTIONS]\n       sqlref [QUERY]... [OPTIONS]"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Positional query arguments used when no explicit command is provided
    #[arg(value_name = "QUERY", trailing_var_arg = true)]
    pub query: Vec<String>,

    /// Output format for the default search
    #[command(flatten)]
    pub format: FormatArg,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Log session transitions and timing
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to configuration file (overrides the platform default). Also via `SQLREF_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "SQLREF_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands for the `sqlref` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Search sections by title, description, keywords, code, and explanations
    Search(SearchArgs),

    /// List every section, collapsed
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        format: FormatArg,
    },

    /// Show one section with all of its examples
    Show {
        /// Section number or title fragment
        section: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Copy an example's code to the clipboard (OSC 52)
    #[command(alias = "cp")]
    Copy {
        /// Section number or title fragment
        section: String,

        /// Example number within the section (1-based)
        example: usize,

        /// Print the code to stdout instead of copying it
        #[arg(long)]
        print: bool,
    },

    /// Show section and example counts
    Stats {
        #[command(flatten)]
        format: FormatArg,
    },

    /// Interactive search reading query edits and commands from stdin
    ///
    /// Plain lines replace the query. Lines starting with `:` are commands:
    /// `:toggle N`, `:clear`, `:copy N.M`, `:help`, `:quit`.
    Browse,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `sqlref search`
#[derive(Args, Clone, Debug)]
pub struct SearchArgs {
    /// Search query (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    #[command(flatten)]
    pub format: FormatArg,

    /// Show matching section titles only
    #[arg(long)]
    pub collapsed: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_query_words() {
        let cli = Cli::try_parse_from(["sqlref", "left", "join"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.query, vec!["left", "join"]);
    }

    #[test]
    fn test_search_subcommand() {
        let cli = Cli::try_parse_from(["sqlref", "search", "cte", "--collapsed"]).unwrap();
        let Some(Commands::Search(args)) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.query, vec!["cte"]);
        assert!(args.collapsed);
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["sqlref", "search"]).is_err());
    }

    #[test]
    fn test_copy_arguments() {
        let cli = Cli::try_parse_from(["sqlref", "cp", "joins", "2", "--print"]).unwrap();
        let Some(Commands::Copy {
            section,
            example,
            print,
        }) = cli.command
        else {
            panic!("expected copy command");
        };
        assert_eq!(section, "joins");
        assert_eq!(example, 2);
        assert!(print);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sqlref", "list", "--no-color", "-q"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.quiet);
    }
}
