//! CLI error handling with semantic exit codes.
//!
//! Errors are categorized so shell scripts can tell a typo in a section name
//! apart from a broken configuration file.
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments or configuration |
//! | 3 | `NotFound` | Section or example not found |
//!
//! ```bash
//! sqlref show "no such section"
//! case $? in
//!     0) echo "Success" ;;
//!     3) echo "Section not found" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;

/// Exit-code bucket for a failed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Anything unexpected: I/O failures, a broken built-in catalog.
    Internal = 1,
    /// Bad flags or an unreadable config file.
    Usage = 2,
    /// The section or example asked for does not exist.
    NotFound = 3,
}

impl ErrorCategory {
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
        }
    }

    /// Category for an error raised by `sqlref-core`.
    #[must_use]
    pub const fn from_core(err: &sqlref_core::Error) -> Self {
        match err {
            sqlref_core::Error::NotFound(_) => Self::NotFound,
            sqlref_core::Error::Config(_) => Self::Usage,
            sqlref_core::Error::Catalog(_) => Self::Internal,
        }
    }

    /// Best guess from the message text, for errors nobody categorized.
    #[must_use]
    pub fn infer_from_message(msg: &str) -> Self {
        let lower = msg.to_lowercase();
        let mentions = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));

        if mentions(&["not found", "no such", "does not exist"]) {
            Self::NotFound
        } else if mentions(&["invalid argument", "invalid value"]) {
            Self::Usage
        } else {
            Self::Internal
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// An `anyhow::Error` tagged with the category that decides the exit code.
#[derive(Debug)]
pub struct CliError {
    pub category: ErrorCategory,
    pub source: anyhow::Error,
}

impl CliError {
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }

    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl std::error::Error for CliError {
    // Display already shows the wrapped error, so skip straight to its cause.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.source()
    }
}

impl From<sqlref_core::Error> for CliError {
    fn from(err: sqlref_core::Error) -> Self {
        Self::new(ErrorCategory::from_core(&err), err)
    }
}

/// Attach an explicit category to any error.
pub trait IntoCliError {
    fn with_category(self, category: ErrorCategory) -> CliError;
}

impl<E: Into<anyhow::Error>> IntoCliError for E {
    fn with_category(self, category: ErrorCategory) -> CliError {
        CliError::new(category, self)
    }
}

/// Exit code for a failed run.
///
/// The first `CliError` or core error in the chain decides; otherwise the
/// message is inspected.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| {
            cause
                .downcast_ref::<CliError>()
                .map(CliError::exit_code)
                .or_else(|| {
                    cause
                        .downcast_ref::<sqlref_core::Error>()
                        .map(|core| ErrorCategory::from_core(core).exit_code())
                })
        })
        .unwrap_or_else(|| ErrorCategory::infer_from_message(&err.to_string()).exit_code())
}
