//! Text output formatting

use std::io::{self, Write};

use colored::Colorize;
use sqlref_core::{Example, Section, Span, highlight_spans};
use unicode_width::UnicodeWidthStr;

use super::formatter::{CatalogView, RenderOptions, SectionView};

const TITLE_COLUMN_WIDTH: usize = 52;
const BODY_INDENT: &str = "      ";

pub struct TextFormatter {
    options: RenderOptions,
}

impl TextFormatter {
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn write_view<W: Write>(&self, view: &CatalogView<'_>, out: &mut W) -> io::Result<()> {
        if self.options.chrome {
            writeln!(out, "{}", header_line(view))?;
            writeln!(out)?;
        }

        if view.sections.is_empty() {
            writeln!(out, "  {}", "No results found".bold())?;
            writeln!(out, "  {}", "Try a different search term".bright_black())?;
        } else {
            for section_view in &view.sections {
                self.write_section(view.query, section_view, out)?;
            }
        }

        if self.options.chrome {
            writeln!(out)?;
            writeln!(out, "{}", view.summary.bright_black())?;
        }
        Ok(())
    }

    fn write_section<W: Write>(
        &self,
        query: &str,
        view: &SectionView<'_>,
        out: &mut W,
    ) -> io::Result<()> {
        let section = view.section;
        let marker = if view.expanded { "▾" } else { "▸" };
        let padding = TITLE_COLUMN_WIDTH.saturating_sub(section.title.width()).max(1);
        let badge = format!("[{}]", section.examples.len());

        writeln!(
            out,
            "{} {:>2}. {}{}{}",
            marker.bright_black(),
            section.id.number(),
            paint(&highlight_spans(&section.title, query)).bold(),
            " ".repeat(padding),
            badge.bright_black(),
        )?;

        if !view.expanded {
            return Ok(());
        }

        if self.options.show_descriptions {
            if let Some(description) = section.description.as_deref() {
                writeln!(out, "{BODY_INDENT}{}", description.italic())?;
            }
        }

        for (idx, example) in section.examples.iter().enumerate() {
            self.write_example(query, section, idx + 1, example, out)?;
        }
        writeln!(out)
    }

    fn write_example<W: Write>(
        &self,
        query: &str,
        section: &Section,
        number: usize,
        example: &Example,
        out: &mut W,
    ) -> io::Result<()> {
        let label = format!("#{}.{number}", section.id.number());
        writeln!(out)?;
        writeln!(out, "{BODY_INDENT}{}", label.bright_black())?;

        for line in example.code.lines() {
            let rendered = if self.options.highlight_code {
                paint(&highlight_spans(line, query))
            } else {
                line.to_string()
            };
            writeln!(out, "{BODY_INDENT}{} {rendered}", "│".bright_black())?;
        }

        if self.options.show_explanations {
            if let Some(explanation) = example.explanation.as_deref() {
                writeln!(
                    out,
                    "{BODY_INDENT}{} {}",
                    "ℹ".blue(),
                    paint(&highlight_spans(explanation, query))
                )?;
            }
        }
        Ok(())
    }
}

fn header_line(view: &CatalogView<'_>) -> String {
    let title = "SQL Cheat Sheet".bold().to_string();
    if !view.is_searching() {
        return title;
    }
    let count = view.result_count();
    let noun = if count == 1 { "result" } else { "results" };
    format!(
        "{title}  {}",
        format!("{count} {noun} for \"{}\"", view.query.trim()).bright_black()
    )
}

/// Join spans, marking the matching ones.
pub fn paint(spans: &[Span<'_>]) -> String {
    spans
        .iter()
        .map(|span| {
            if span.is_match {
                span.text.black().on_yellow().to_string()
            } else {
                span.text.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use sqlref_core::{Catalog, SearchSession};
    use std::sync::Arc;

    fn render(session: &SearchSession, options: RenderOptions) -> String {
        colored::control::set_override(false);
        let view = CatalogView::from_session(session);
        let mut buf = Vec::new();
        TextFormatter::new(options)
            .write_view(&view, &mut buf)
            .expect("render");
        String::from_utf8(buf).expect("utf8")
    }

    fn session() -> SearchSession {
        SearchSession::new(Arc::new(Catalog::builtin().expect("catalog")))
    }

    #[test]
    fn test_initial_view_lists_collapsed_sections() {
        let output = render(&session(), RenderOptions::default());
        assert!(output.starts_with("SQL Cheat Sheet\n"));
        assert!(output.contains("▸  1. Query Execution Order"));
        assert!(output.contains("▸ 18. Pro Tips"));
        assert!(!output.contains('▾'));
        assert!(output.trim_end().ends_with("18 sections • 84 examples"));
    }

    #[test]
    fn test_search_view_expands_matches() {
        let mut session = session();
        session.apply_query("recursive");
        let output = render(&session, RenderOptions::default());

        assert!(output.contains("1 result for \"recursive\""));
        assert!(output.contains("▾ 12. Common Table Expressions (CTEs)"));
        assert!(output.contains("[3]"));
        assert!(output.contains("Named temporary result sets"));
        assert!(output.contains("#12.1"));
        assert!(output.contains("│ WITH RECURSIVE"));
    }

    #[test]
    fn test_empty_results_message() {
        let mut session = session();
        session.apply_query("zzzznotfound");
        let output = render(&session, RenderOptions::default());
        assert!(output.contains("0 results"));
        assert!(output.contains("No results found"));
        assert!(output.contains("Try a different search term"));
    }

    #[test]
    fn test_display_switches() {
        let mut session = session();
        session.apply_query("recursive");
        let options = RenderOptions {
            show_descriptions: false,
            show_explanations: false,
            chrome: false,
            ..RenderOptions::default()
        };
        let output = render(&session, options);
        assert!(!output.contains("SQL Cheat Sheet"));
        assert!(!output.contains("Named temporary result sets"));
        assert!(!output.contains('ℹ'));
        assert!(!output.contains("84 examples"));
    }

    #[test]
    fn test_paint_keeps_text_when_uncolored() {
        colored::control::set_override(false);
        let spans = highlight_spans("Left JOIN right", "join");
        assert_eq!(paint(&spans), "Left JOIN right");
    }
}
