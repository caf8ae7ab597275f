//! # sqlref-core
//!
//! Core functionality for sqlref, a searchable SQL syntax cheat sheet.
//!
//! The crate holds a read-only catalog of reference sections and the small
//! amount of logic around it: filtering sections by a query, splitting text
//! into highlighted spans, and tracking which sections are expanded. A
//! presentation layer (the `sqlref` CLI) drives a [`SearchSession`] with user
//! events and renders whatever state it reads back.
//!
//! ## Architecture
//!
//! - **Catalog**: immutable sections and examples, compiled in or built by hand
//! - **Search**: pure `filter` and `highlight_spans` functions
//! - **Expansion**: the set of expanded section ids
//! - **Session**: query, results, and expansion wired together with debouncing
//! - **Configuration**: optional TOML settings
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlref_core::{Catalog, filter, highlight_spans};
//!
//! let catalog = Catalog::builtin()?;
//! for section in filter(&catalog, "window") {
//!     let title: String = highlight_spans(&section.title, "window")
//!         .iter()
//!         .map(|span| if span.is_match { format!("[{}]", span.text) } else { span.text.to_string() })
//!         .collect();
//!     println!("{title}");
//! }
//! # Ok::<(), sqlref_core::Error>(())
//! ```

/// Read-only catalog of sections and examples
pub mod catalog;
/// Configuration loading
pub mod config;
/// Last-edit-wins debouncing
pub mod debounce;
/// Error types and result aliases
pub mod error;
/// Expand/collapse state
pub mod expansion;
/// Filtering and highlighting
pub mod search;
/// Event-driven search state
pub mod session;
/// Core data types
pub mod types;

pub use catalog::{Catalog, CatalogBuilder, SectionDraft};
pub use config::{Config, DisplayConfig, SearchConfig};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use error::{Error, Result};
pub use expansion::ExpansionState;
pub use search::{filter, highlight_spans, matched_field, matches, normalize_query};
pub use session::SearchSession;
pub use types::*;
