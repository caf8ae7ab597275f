//! JSON output formatting

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use sqlref_core::{Example, ExampleId, Section, SectionId, Span, highlight_spans};

use super::formatter::{CatalogView, RenderOptions, SectionView};

pub struct JsonFormatter;

impl JsonFormatter {
    /// Write the whole view as one pretty-printed document.
    pub fn write_view<W: Write>(
        view: &CatalogView<'_>,
        options: RenderOptions,
        out: &mut W,
    ) -> Result<()> {
        let payload = ViewPayload::new(view, options);
        serde_json::to_writer_pretty(&mut *out, &payload)?;
        writeln!(out)?;
        Ok(())
    }

    /// Write one compact section object per line.
    pub fn write_view_lines<W: Write>(
        view: &CatalogView<'_>,
        options: RenderOptions,
        out: &mut W,
    ) -> Result<()> {
        for section_view in &view.sections {
            let payload = SectionPayload::new(section_view, view.query, options);
            serde_json::to_writer(&mut *out, &payload)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewPayload<'a> {
    query: &'a str,
    searching: bool,
    result_count: usize,
    total_sections: usize,
    total_examples: usize,
    sections: Vec<SectionPayload<'a>>,
}

impl<'a> ViewPayload<'a> {
    fn new(view: &CatalogView<'a>, options: RenderOptions) -> Self {
        Self {
            query: view.query,
            searching: view.is_searching(),
            result_count: view.result_count(),
            total_sections: view.total_sections,
            total_examples: view.total_examples,
            sections: view
                .sections
                .iter()
                .map(|section_view| SectionPayload::new(section_view, view.query, options))
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SectionPayload<'a> {
    id: SectionId,
    number: usize,
    title: &'a str,
    description: Option<&'a str>,
    keywords: &'a [String],
    expanded: bool,
    example_count: usize,
    title_spans: Vec<Span<'a>>,
    examples: Vec<ExamplePayload<'a>>,
}

impl<'a> SectionPayload<'a> {
    fn new(view: &SectionView<'a>, query: &str, options: RenderOptions) -> Self {
        let section: &'a Section = view.section;
        Self {
            id: section.id,
            number: section.id.number(),
            title: &section.title,
            description: section.description.as_deref(),
            keywords: &section.keywords,
            expanded: view.expanded,
            example_count: section.examples.len(),
            title_spans: highlight_spans(&section.title, query),
            examples: section
                .examples
                .iter()
                .enumerate()
                .map(|(idx, example)| ExamplePayload::new(idx + 1, example, query, options))
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExamplePayload<'a> {
    id: ExampleId,
    number: usize,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code_spans: Option<Vec<Span<'a>>>,
    explanation: Option<&'a str>,
    explanation_spans: Option<Vec<Span<'a>>>,
}

impl<'a> ExamplePayload<'a> {
    fn new(number: usize, example: &'a Example, query: &str, options: RenderOptions) -> Self {
        Self {
            id: example.id,
            number,
            code: &example.code,
            code_spans: options
                .highlight_code
                .then(|| highlight_spans(&example.code, query)),
            explanation: example.explanation.as_deref(),
            explanation_spans: example
                .explanation
                .as_deref()
                .map(|text| highlight_spans(text, query)),
        }
    }
}

/// Catalog statistics for `sqlref stats`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload<'a> {
    pub sections: usize,
    pub examples: usize,
    pub per_section: Vec<SectionCount<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCount<'a> {
    pub number: usize,
    pub title: &'a str,
    pub examples: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::Value;
    use sqlref_core::{Catalog, SearchSession};
    use std::sync::Arc;

    fn render_json(query: &str, options: RenderOptions) -> Value {
        let mut session = SearchSession::new(Arc::new(Catalog::builtin().expect("catalog")));
        session.apply_query(query);
        let view = CatalogView::from_session(&session);
        let mut buf = Vec::new();
        JsonFormatter::write_view(&view, options, &mut buf).expect("render");
        serde_json::from_slice(&buf).expect("valid json")
    }

    #[test]
    fn test_payload_shape() {
        let payload = render_json("recursive", RenderOptions::default());
        assert_eq!(payload["query"], "recursive");
        assert_eq!(payload["searching"], true);
        assert_eq!(payload["resultCount"], 1);
        assert_eq!(payload["totalSections"], 18);
        assert_eq!(payload["totalExamples"], 84);

        let section = &payload["sections"][0];
        assert_eq!(section["id"], 11);
        assert_eq!(section["number"], 12);
        assert_eq!(section["expanded"], true);
        assert_eq!(section["exampleCount"], 3);
        assert_eq!(section["examples"][0]["number"], 1);
        assert!(section["examples"][0].get("codeSpans").is_none());
    }

    #[test]
    fn test_title_spans_mark_matches() {
        let payload = render_json("cte", RenderOptions::default());
        let spans = payload["sections"][0]["titleSpans"]
            .as_array()
            .expect("spans array");
        let hits: Vec<&str> = spans
            .iter()
            .filter(|s| s["match"] == true)
            .map(|s| s["text"].as_str().unwrap())
            .collect();
        assert_eq!(hits, vec!["CTE"]);
    }

    #[test]
    fn test_code_spans_follow_option() {
        let options = RenderOptions {
            highlight_code: true,
            ..RenderOptions::default()
        };
        let payload = render_json("recursive", options);
        assert!(payload["sections"][0]["examples"][0]["codeSpans"].is_array());
    }

    #[test]
    fn test_jsonl_one_line_per_section() {
        let mut session = SearchSession::new(Arc::new(Catalog::builtin().unwrap()));
        session.apply_query("window");
        let view = CatalogView::from_session(&session);
        let mut buf = Vec::new();
        JsonFormatter::write_view_lines(&view, RenderOptions::default(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        let section: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(section["title"], "Window Functions");
    }
}
