//! List command implementation

use std::sync::Arc;

use anyhow::Result;
use sqlref_core::{Catalog, Config, SearchSession};

use crate::output::{CatalogView, OutputFormat, RenderOptions, ViewFormatter};

/// Print every section in catalog order, collapsed.
pub fn execute(catalog: Arc<Catalog>, config: &Config, format: OutputFormat) -> Result<()> {
    let session = SearchSession::new(catalog);
    let view = CatalogView::from_session(&session);
    ViewFormatter::new(format, RenderOptions::from_config(&config.display)).print(&view)
}
