use serde::Serialize;
use std::fmt;

/// Identifier of a [`Section`]: its position in the owning catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionId(pub usize);

impl SectionId {
    /// 1-based number shown to users.
    pub const fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Catalog-wide sequence number of an [`Example`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ExampleId(pub usize);

/// One illustrative SQL snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub id: ExampleId,
    pub code: String,
    pub explanation: Option<String>,
}

/// A named topic grouping one or more examples (e.g. "Joining Tables").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub description: Option<String>,
    pub examples: Vec<Example>,
    pub keywords: Vec<String>,
}

impl Section {
    /// Look up an example by its 1-based position within this section.
    pub fn example(&self, number: usize) -> Option<&Example> {
        number
            .checked_sub(1)
            .and_then(|idx| self.examples.get(idx))
    }
}

/// The field that satisfied a match, in short-circuit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Title,
    Description,
    Keyword,
    Code,
    Explanation,
}

/// A piece of text tagged with whether it matched the query.
///
/// Spans borrow from the highlighted text, so concatenating them in order
/// reproduces it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub text: &'a str,
    #[serde(rename = "match")]
    pub is_match: bool,
}

impl<'a> Span<'a> {
    pub const fn plain(text: &'a str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    pub const fn hit(text: &'a str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}
