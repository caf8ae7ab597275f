//! Command implementations for the sqlref CLI
//!
//! Each command lives in its own submodule. Commands read the shared
//! [`Catalog`](sqlref_core::Catalog) and [`Config`](sqlref_core::Config)
//! loaded once in [`crate::run`].

mod browse;
mod completions;
mod copy;
mod list;
mod search;
mod show;
mod stats;

pub use browse::execute as browse;
pub use completions::generate;
pub use copy::execute as copy_example;
pub use list::execute as list_sections;
pub use search::{execute as search, handle_default as handle_default_search};
pub use show::execute as show_section;
pub use stats::execute as show_stats;
