//! The read-only content catalog.
//!
//! A [`Catalog`] is an ordered list of [`Section`]s built once and then only
//! read. Identifiers are assigned while building: a section's id is its
//! position, and example ids count up across the whole catalog in display
//! order, so both stay stable for the lifetime of the value.
//!
//! Catalogs come from two places:
//!
//! - [`Catalog::builtin`], the SQL reference compiled into the binary
//! - [`Catalog::builder`], for alternate or test catalogs
//!
//! ```rust
//! use sqlref_core::{Catalog, SectionDraft};
//!
//! let catalog = Catalog::builder()
//!     .section(
//!         SectionDraft::new("Joins")
//!             .keyword("inner join")
//!             .example_with("SELECT * FROM a JOIN b ON a.id = b.a_id;", "Matching rows only"),
//!     )
//!     .build()?;
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.example_count(), 1);
//! # Ok::<(), sqlref_core::Error>(())
//! ```

use crate::search::fold_case;
use crate::types::{Example, ExampleId, Section, SectionId};
use crate::{Error, Result};
use serde::Deserialize;

/// TOML source of the built-in SQL reference.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Immutable, ordered collection of reference sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    sections: Vec<Section>,
    example_count: usize,
}

impl Catalog {
    /// Parse the compiled-in SQL reference.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Start building a catalog by hand.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Parse a catalog from its TOML representation.
    ///
    /// The document holds a `[[sections]]` array; each section has a `title`,
    /// optional `description`, `keywords`, and one or more
    /// `[[sections.examples]]` with `code` and optional `explanation`.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let document: CatalogDocument = toml::from_str(source)
            .map_err(|e| Error::Catalog(format!("Failed to parse catalog: {e}")))?;
        CatalogBuilder {
            sections: document.sections,
        }
        .build()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of examples across all sections.
    pub const fn example_count(&self) -> usize {
        self.example_count
    }

    /// Footer-style summary, e.g. `18 sections • 84 examples`.
    pub fn summary(&self) -> String {
        format!(
            "{} {} • {} {}",
            self.len(),
            plural(self.len(), "section"),
            self.example_count,
            plural(self.example_count, "example"),
        )
    }

    /// Find a section from user input.
    ///
    /// Accepts a 1-based section number or a case-insensitive fragment of the
    /// title; the first section in catalog order whose title contains the
    /// fragment wins.
    pub fn resolve(&self, selector: &str) -> Result<&Section> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Err(Error::NotFound("empty section selector".to_string()));
        }

        if let Ok(number) = selector.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|idx| self.sections.get(idx))
                .ok_or_else(|| {
                    Error::NotFound(format!(
                        "section {number} (catalog has {} sections)",
                        self.len()
                    ))
                });
        }

        let needle = fold_case(selector);
        self.sections
            .iter()
            .find(|section| fold_case(&section.title).contains(&needle))
            .ok_or_else(|| Error::NotFound(format!("no section title matches '{selector}'")))
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    sections: Vec<SectionDraft>,
}

/// A section before identifiers have been assigned.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionDraft {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    examples: Vec<ExampleDraft>,
}

#[derive(Debug, Clone, Deserialize)]
struct ExampleDraft {
    code: String,
    #[serde(default)]
    explanation: Option<String>,
}

impl SectionDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Add an example without explanatory text.
    #[must_use]
    pub fn example(mut self, code: impl Into<String>) -> Self {
        self.examples.push(ExampleDraft {
            code: code.into(),
            explanation: None,
        });
        self
    }

    /// Add an example with explanatory text.
    #[must_use]
    pub fn example_with(mut self, code: impl Into<String>, explanation: impl Into<String>) -> Self {
        self.examples.push(ExampleDraft {
            code: code.into(),
            explanation: Some(explanation.into()),
        });
        self
    }
}

/// Accumulates [`SectionDraft`]s and assigns identifiers on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    sections: Vec<SectionDraft>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn section(mut self, draft: SectionDraft) -> Self {
        self.sections.push(draft);
        self
    }

    /// Validate the drafts and freeze them into a [`Catalog`].
    pub fn build(self) -> Result<Catalog> {
        let mut next_example = 0usize;
        let mut sections = Vec::with_capacity(self.sections.len());

        for (idx, draft) in self.sections.into_iter().enumerate() {
            if draft.title.trim().is_empty() {
                return Err(Error::Catalog(format!("section {} has an empty title", idx + 1)));
            }
            if draft.examples.is_empty() {
                return Err(Error::Catalog(format!(
                    "section '{}' has no examples",
                    draft.title
                )));
            }

            let mut examples = Vec::with_capacity(draft.examples.len());
            for (example_idx, example) in draft.examples.into_iter().enumerate() {
                if example.code.trim().is_empty() {
                    return Err(Error::Catalog(format!(
                        "example {} of section '{}' has no code",
                        example_idx + 1,
                        draft.title
                    )));
                }
                examples.push(Example {
                    id: ExampleId(next_example),
                    code: example.code,
                    explanation: example.explanation,
                });
                next_example += 1;
            }

            sections.push(Section {
                id: SectionId(idx),
                title: draft.title,
                description: draft.description,
                examples,
                keywords: draft.keywords,
            });
        }

        tracing::debug!(
            sections = sections.len(),
            examples = next_example,
            "catalog built"
        );

        Ok(Catalog {
            sections,
            example_count: next_example,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn small_catalog() -> Catalog {
        Catalog::builder()
            .section(
                SectionDraft::new("Basic Queries")
                    .description("Fundamental SELECT statements")
                    .keywords(["select", "alias"])
                    .example_with("SELECT a FROM t;", "Basic column selection")
                    .example("SELECT DISTINCT a FROM t;"),
            )
            .section(
                SectionDraft::new("Joining Tables")
                    .keyword("join")
                    .example("SELECT * FROM a JOIN b ON a.id = b.id;"),
            )
            .build()
            .expect("valid catalog")
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().expect("built-in catalog should parse");
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.example_count(), 84);
        assert_eq!(catalog.summary(), "18 sections • 84 examples");

        let first = &catalog.sections()[0];
        assert_eq!(first.title, "Query Execution Order");
        assert!(first.description.is_some());

        let last = catalog.sections().last().expect("non-empty");
        assert_eq!(last.title, "Pro Tips");
    }

    #[test]
    fn test_builtin_examples_keep_multiline_code() {
        let catalog = Catalog::builtin().unwrap();
        let code = &catalog.sections()[0].examples[0].code;
        assert!(code.starts_with("-- Writing Order:\nSELECT column1, column2"));
        assert!(!code.starts_with('\n'));
    }

    #[test]
    fn test_ids_are_positional_and_unique() {
        let catalog = Catalog::builtin().unwrap();
        let mut example_ids = HashSet::new();
        for (idx, section) in catalog.sections().iter().enumerate() {
            assert_eq!(section.id, SectionId(idx));
            for example in &section.examples {
                assert!(example_ids.insert(example.id), "duplicate {:?}", example.id);
            }
        }
        assert_eq!(example_ids.len(), catalog.example_count());
    }

    #[test]
    fn test_example_ids_continue_across_sections() {
        let catalog = small_catalog();
        let ids: Vec<_> = catalog
            .sections()
            .iter()
            .flat_map(|s| s.examples.iter().map(|e| e.id.0))
            .collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let err = Catalog::builder()
            .section(SectionDraft::new("   ").example("SELECT 1;"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
        assert!(err.to_string().contains("empty title"));
    }

    #[test]
    fn test_section_without_examples_is_rejected() {
        let err = Catalog::builder()
            .section(SectionDraft::new("Lonely"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("'Lonely' has no examples"));
    }

    #[test]
    fn test_blank_code_is_rejected() {
        let err = Catalog::builder()
            .section(SectionDraft::new("Blank").example("  \n"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn test_malformed_toml_is_a_catalog_error() {
        let err = Catalog::from_toml_str("[[sections]]\ntitle = 3").unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn test_empty_document_builds_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.summary(), "0 sections • 0 examples");
    }

    #[test]
    fn test_resolve_by_number() {
        let catalog = small_catalog();
        assert_eq!(catalog.resolve("2").unwrap().title, "Joining Tables");
        assert_eq!(catalog.resolve(" 1 ").unwrap().title, "Basic Queries");
        assert!(matches!(catalog.resolve("0"), Err(Error::NotFound(_))));
        assert!(matches!(catalog.resolve("3"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_resolve_by_title_fragment() {
        let catalog = small_catalog();
        assert_eq!(catalog.resolve("JOIN").unwrap().id, SectionId(1));
        assert_eq!(catalog.resolve("queries").unwrap().id, SectionId(0));
        assert!(matches!(catalog.resolve("window"), Err(Error::NotFound(_))));
        assert!(matches!(catalog.resolve("  "), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_summary_singular() {
        let catalog = Catalog::builder()
            .section(SectionDraft::new("Only").example("SELECT 1;"))
            .build()
            .unwrap();
        assert_eq!(catalog.summary(), "1 section • 1 example");
    }
}
