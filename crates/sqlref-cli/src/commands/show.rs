//! Show command implementation

use anyhow::Result;
use sqlref_core::{Catalog, Config};

use crate::output::{CatalogView, OutputFormat, RenderOptions, ViewFormatter};

/// Print one section, expanded, selected by number or title fragment.
pub fn execute(catalog: &Catalog, config: &Config, selector: &str, format: OutputFormat) -> Result<()> {
    let section = catalog.resolve(selector)?;
    let view = CatalogView::single(catalog, section);
    ViewFormatter::new(format, RenderOptions::from_config(&config.display)).print(&view)
}
