//! # Utility Functions and Helpers
//!
//! Shared utilities used across the CLI commands.
//!
//! - [`cli_args`]: the shared `--format` argument and its TTY-aware default
//! - [`clipboard`]: OSC 52 clipboard writes
//! - [`logging`]: tracing subscriber and color setup
//! - [`parsing`]: browse input and example reference parsers

pub mod cli_args;
pub mod clipboard;
pub mod logging;
pub mod parsing;
