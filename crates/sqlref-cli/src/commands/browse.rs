//! Interactive browse command
//!
//! Reads stdin line by line and drives a [`SearchSession`]. Query lines go
//! through the session's debouncer; the view is redrawn once an edit settles,
//! after every command, and once more if input ends with an edit pending.

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use is_terminal::IsTerminal;
use sqlref_core::{Catalog, Config, SearchSession, SectionId};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::output::{CatalogView, OutputFormat, RenderOptions, ViewFormatter};
use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::parsing::{BROWSE_HELP, BrowseInput, parse_browse_line};

enum Flow {
    Continue,
    Quit,
}

struct Browser {
    session: SearchSession,
    formatter: ViewFormatter,
    clear_screen: bool,
    quiet: bool,
}

/// Run the browse loop until `:quit` or end of input.
pub async fn execute(catalog: Arc<Catalog>, config: &Config, quiet: bool) -> Result<()> {
    let mut browser = Browser {
        session: SearchSession::with_debounce(catalog, config.search.debounce()),
        formatter: ViewFormatter::new(
            OutputFormat::Text,
            RenderOptions::from_config(&config.display),
        ),
        clear_screen: std::io::stdout().is_terminal(),
        quiet,
    };
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    browser.render()?;
    if !quiet {
        eprintln!("{}", "Type to search, :help for commands".bright_black());
    }

    loop {
        let deadline = browser.session.next_deadline();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    if browser.session.flush() {
                        browser.render()?;
                    }
                    break;
                };
                if let Flow::Quit = browser.handle_line(&line)? {
                    break;
                }
            }
            () = wait_until(deadline) => {
                if browser.session.poll(Instant::now()) {
                    browser.render()?;
                }
            }
        }
    }

    debug!("browse finished");
    Ok(())
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}

impl Browser {
    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match parse_browse_line(line) {
            BrowseInput::Query(text) => {
                self.session.query_changed(text, Instant::now());
                Ok(Flow::Continue)
            },
            command => {
                // Commands act on the settled state.
                if self.session.flush() {
                    self.render()?;
                }
                self.run_command(command)
            },
        }
    }

    fn run_command(&mut self, command: BrowseInput) -> Result<Flow> {
        match command {
            BrowseInput::Query(_) => {},
            BrowseInput::Toggle(number) => self.toggle(number)?,
            BrowseInput::Clear => {
                self.session.search_cleared();
                self.render()?;
            },
            BrowseInput::Copy(section, example) => self.copy(section, example),
            BrowseInput::Help => println!("{BROWSE_HELP}"),
            BrowseInput::Quit => return Ok(Flow::Quit),
            BrowseInput::Invalid(message) => report(&message),
        }
        Ok(Flow::Continue)
    }

    fn toggle(&mut self, number: usize) -> Result<()> {
        let id = SectionId(number - 1);
        if self.session.catalog().section(id).is_none() {
            report(&format!(
                "No section {number} (catalog has {} sections)",
                self.session.catalog().len()
            ));
            return Ok(());
        }
        let expanded = self.session.section_toggled(id);
        debug!(section = number, expanded, "section toggled");
        self.render()
    }

    fn copy(&self, section: usize, example: usize) {
        let catalog = self.session.catalog();
        let result = super::copy::find_example(catalog, &section.to_string(), example)
            .and_then(|found| {
                copy_to_clipboard(&found.code).context("Failed to write clipboard sequence")
            });
        match result {
            Ok(()) if !self.quiet => eprintln!("{}", "Copied!".green()),
            Ok(()) => {},
            Err(err) => report(&format!("{err:#}")),
        }
    }

    fn render(&self) -> Result<()> {
        if self.clear_screen {
            let mut stdout = std::io::stdout();
            write!(stdout, "\x1b[2J\x1b[H")?;
            stdout.flush()?;
        }
        self.formatter
            .print(&CatalogView::from_session(&self.session))
    }
}

fn report(message: &str) {
    warn!("{message}");
}
