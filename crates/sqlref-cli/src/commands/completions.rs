//! Shell completion scripts

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

/// Print the completion script for `shell` to stdout.
pub fn generate(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "sqlref", out);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("sqlref"));
        assert!(script.contains("browse"));
    }
}
