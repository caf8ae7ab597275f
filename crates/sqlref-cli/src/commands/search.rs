//! Search command implementation

use std::sync::Arc;

use anyhow::Result;
use sqlref_core::{Catalog, Config, SearchSession, normalize_query};
use tracing::debug;

use crate::output::{CatalogView, OutputFormat, RenderOptions, ViewFormatter};

/// Run one search and print the settled results.
///
/// Matching sections come back expanded unless `collapsed` is set.
pub fn execute(
    catalog: Arc<Catalog>,
    config: &Config,
    query: &str,
    format: OutputFormat,
    collapsed: bool,
) -> Result<()> {
    let mut session = SearchSession::with_debounce(catalog, config.search.debounce());
    session.apply_query(query);
    debug!(
        query,
        results = session.result_count(),
        "search finished"
    );

    let mut view = CatalogView::from_session(&session);
    if collapsed {
        view = view.collapsed();
    }
    ViewFormatter::new(format, RenderOptions::from_config(&config.display)).print(&view)
}

/// Handle `sqlref QUERY...` without a subcommand.
///
/// Words are joined with single spaces. With no query at all the full
/// collapsed section list is shown instead.
pub fn handle_default(
    catalog: Arc<Catalog>,
    config: &Config,
    args: &[String],
    format: OutputFormat,
) -> Result<()> {
    let query = args.join(" ");
    if normalize_query(&query).is_none() {
        return super::list_sections(catalog, config, format);
    }
    execute(catalog, config, &query, format, false)
}
