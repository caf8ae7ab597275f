//! # Output Formatting Abstractions
//!
//! Commands describe what to show as a [`CatalogView`] (which sections, which
//! of them are expanded, the query to highlight) and hand it to a
//! [`ViewFormatter`], which dispatches on [`OutputFormat`] to the text or JSON
//! renderer. Renderers write to any `io::Write` so they can be exercised
//! without a terminal.

use std::io::Write;

use anyhow::Result;
use sqlref_core::{Catalog, DisplayConfig, SearchSession, Section};

use super::{json::JsonFormatter, text::TextFormatter};

/// Output format options supported by the CLI
///
/// - **Text**: colored, human-readable layout for terminals
/// - **Json**: a single pretty-printed JSON document
/// - **Jsonl**: one compact JSON object per line (alias `ndjson`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty text output (default on a terminal)
    Text,
    /// Single JSON document (default when piped)
    Json,
    /// Newline-delimited JSON
    #[value(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    pub const fn is_machine(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}

/// One section as it should be displayed.
#[derive(Debug, Clone, Copy)]
pub struct SectionView<'a> {
    pub section: &'a Section,
    pub expanded: bool,
}

/// Everything a renderer needs to draw the cheat sheet.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    /// Raw query; blank when not searching.
    pub query: &'a str,
    pub sections: Vec<SectionView<'a>>,
    pub total_sections: usize,
    pub total_examples: usize,
    pub summary: String,
}

impl<'a> CatalogView<'a> {
    /// Snapshot the derived state of a session.
    pub fn from_session(session: &'a SearchSession) -> Self {
        let sections = session
            .filtered_sections()
            .into_iter()
            .map(|section| SectionView {
                section,
                expanded: session.is_expanded(section.id),
            })
            .collect();
        Self::new(session.catalog(), session.query(), sections)
    }

    /// A single, expanded section with nothing highlighted.
    pub fn single(catalog: &'a Catalog, section: &'a Section) -> Self {
        Self::new(
            catalog,
            "",
            vec![SectionView {
                section,
                expanded: true,
            }],
        )
    }

    fn new(catalog: &Catalog, query: &'a str, sections: Vec<SectionView<'a>>) -> Self {
        Self {
            query,
            sections,
            total_sections: catalog.len(),
            total_examples: catalog.example_count(),
            summary: catalog.summary(),
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn result_count(&self) -> usize {
        self.sections.len()
    }

    /// Render every section collapsed, regardless of session state.
    #[must_use]
    pub fn collapsed(mut self) -> Self {
        for view in &mut self.sections {
            view.expanded = false;
        }
        self
    }
}

/// Rendering switches that are not part of the view itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub highlight_code: bool,
    pub show_explanations: bool,
    pub show_descriptions: bool,
    /// Print the header and the catalog summary footer.
    pub chrome: bool,
}

impl RenderOptions {
    pub const fn from_config(display: &DisplayConfig) -> Self {
        Self {
            highlight_code: display.highlight_code,
            show_explanations: display.show_explanations,
            show_descriptions: display.show_descriptions,
            chrome: true,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

/// Renders a [`CatalogView`] in the selected format.
pub struct ViewFormatter {
    format: OutputFormat,
    options: RenderOptions,
}

impl ViewFormatter {
    pub const fn new(format: OutputFormat, options: RenderOptions) -> Self {
        Self { format, options }
    }

    pub fn render<W: Write>(&self, view: &CatalogView<'_>, out: &mut W) -> Result<()> {
        match self.format {
            OutputFormat::Text => TextFormatter::new(self.options).write_view(view, out)?,
            OutputFormat::Json => JsonFormatter::write_view(view, self.options, out)?,
            OutputFormat::Jsonl => JsonFormatter::write_view_lines(view, self.options, out)?,
        }
        Ok(())
    }

    /// Render to stdout.
    pub fn print(&self, view: &CatalogView<'_>) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.render(view, &mut lock)?;
        lock.flush()?;
        Ok(())
    }
}
