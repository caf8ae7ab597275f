//! # Output Formatting
//!
//! Renders cheat-sheet views for humans and for scripts.
//!
//! ## Supported Formats
//!
//! - **Text**: colored layout with highlighted matches, expand markers, and
//!   example-count badges
//! - **JSON**: a single document with the query, counts, and every section
//! - **JSONL**: one section object per line
//!
//! ```bash
//! # Human-readable output (default on a terminal)
//! sqlref search join
//!
//! # JSON for scripts (default when piped)
//! sqlref search join --format json | jq '.sections[].title'
//! ```
//!
//! Text format:
//! ```text
//! SQL Cheat Sheet  1 result for "recursive"
//!
//! ▾ 12. Common Table Expressions (CTEs)                    [3]
//!       Named temporary result sets
//!
//!       #12.1
//!       │ -- Single CTE
//!       │ WITH high_value_customers AS (
//! ```

mod formatter;
mod json;
mod text;

pub use formatter::{CatalogView, OutputFormat, RenderOptions, SectionView, ViewFormatter};
pub use json::{SectionCount, StatsPayload};
