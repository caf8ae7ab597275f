//! Query filtering and match highlighting.
//!
//! Both operations are pure functions of their inputs. Filtering is a plain
//! membership test over the catalog: sections keep their catalog order and are
//! never ranked. A section matches when the lower-cased, trimmed query is a
//! substring of one of its fields, checked in this order (first hit wins):
//!
//! 1. title
//! 2. description
//! 3. any keyword
//! 4. any example's code
//! 5. any example's explanation
//!
//! ```rust
//! use sqlref_core::{Catalog, filter, highlight_spans};
//!
//! let catalog = Catalog::builtin()?;
//! let hits = filter(&catalog, "recursive");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Common Table Expressions (CTEs)");
//!
//! let spans = highlight_spans("SELECT * FROM t", "select");
//! assert!(spans[0].is_match);
//! assert_eq!(spans[0].text, "SELECT");
//! # Ok::<(), sqlref_core::Error>(())
//! ```

use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::types::{MatchField, Section, Span};

/// Lower-case every character of `text`.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Trim and lower-case a raw query. `None` means "show everything".
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(fold_case(trimmed))
    }
}

/// Sections of `catalog` matching `query`, in catalog order.
///
/// A blank query (empty or whitespace only) returns every section.
pub fn filter<'c>(catalog: &'c Catalog, query: &str) -> Vec<&'c Section> {
    let Some(needle) = normalize_query(query) else {
        return catalog.sections().iter().collect();
    };

    let hits: Vec<&Section> = catalog
        .sections()
        .iter()
        .filter(|section| matches(section, &needle))
        .collect();

    debug!(query = %needle, hits = hits.len(), "filtered catalog");
    hits
}

/// Whether `section` contains the already lower-cased `lower_query`.
pub fn matches(section: &Section, lower_query: &str) -> bool {
    matched_field(section, lower_query).is_some()
}

/// The first field of `section` containing `lower_query`, if any.
pub fn matched_field(section: &Section, lower_query: &str) -> Option<MatchField> {
    let contains = |haystack: &str| fold_case(haystack).contains(lower_query);

    let field = if contains(&section.title) {
        Some(MatchField::Title)
    } else if section.description.as_deref().is_some_and(contains) {
        Some(MatchField::Description)
    } else if section.keywords.iter().any(|k| contains(k)) {
        Some(MatchField::Keyword)
    } else if section.examples.iter().any(|e| contains(&e.code)) {
        Some(MatchField::Code)
    } else if section
        .examples
        .iter()
        .any(|e| e.explanation.as_deref().is_some_and(contains))
    {
        Some(MatchField::Explanation)
    } else {
        None
    };

    if let Some(field) = field {
        trace!(section = %section.title, ?field, "section matched");
    }
    field
}

/// Split `text` into matching and non-matching spans for `query`.
///
/// Matching is case-insensitive on the trimmed query, left to right and
/// non-overlapping; the original casing of `text` is kept. Comparison uses
/// the same folding as [`filter`], so a character whose lowercase form is
/// several characters long (`İ` folds to `i̇`) is highlighted whole when the
/// query ends inside it. The result is never empty and its spans concatenate
/// back to `text`.
pub fn highlight_spans<'t>(text: &'t str, query: &str) -> Vec<Span<'t>> {
    let needle: Vec<char> = fold_case(query.trim()).chars().collect();
    if needle.is_empty() {
        return vec![Span::plain(text)];
    }

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(end) = match_at(text, pos, &needle) {
            if plain_start < pos {
                spans.push(Span::plain(&text[plain_start..pos]));
            }
            spans.push(Span::hit(&text[pos..end]));
            pos = end;
            plain_start = end;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        spans.push(Span::plain(&text[plain_start..]));
    }

    if spans.is_empty() {
        spans.push(Span::plain(text));
    }
    spans
}

/// Byte offset just past the text characters whose folded form starts with
/// the already folded `needle`, reading from `start`.
fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut needle = needle.iter().peekable();
    let mut end = start;
    for actual in text[start..].chars() {
        for folded in actual.to_lowercase() {
            match needle.peek() {
                None => break,
                Some(&&expected) if expected == folded => {
                    needle.next();
                },
                Some(_) => return None,
            }
        }
        end += actual.len_utf8();
        if needle.peek().is_none() {
            return Some(end);
        }
    }
    None
}
