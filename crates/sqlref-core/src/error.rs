//! Error types for sqlref-core.
//!
//! Searching, highlighting, and expand/collapse bookkeeping are total
//! operations and never fail. Errors only arise at the edges: building a
//! catalog from data, and reading the optional configuration file.
//!
//! ```rust
//! use sqlref_core::{Catalog, Error};
//!
//! let err = Catalog::from_toml_str("sections = 3").unwrap_err();
//! assert!(matches!(err, Error::Catalog(_)));
//! ```

use thiserror::Error;

/// The main error type for sqlref-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog data is malformed.
    ///
    /// ## Common Causes
    ///
    /// - A section with an empty title
    /// - A section without any examples
    /// - An example whose code is empty
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - Invalid TOML syntax in the config file
    /// - Values of the wrong type (e.g. a string for `debounce_ms`)
    /// - Config directory cannot be determined on this platform
    #[error("Configuration error: {0}")]
    Config(String),

    /// A section or example selector did not match anything.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for sqlref-core results.
pub type Result<T> = std::result::Result<T, Error>;
