//! Stats command implementation

use anyhow::Result;
use colored::Colorize;
use sqlref_core::Catalog;

use crate::output::{OutputFormat, SectionCount, StatsPayload};

/// Print section and example counts.
pub fn execute(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let payload = StatsPayload {
        sections: catalog.len(),
        examples: catalog.example_count(),
        per_section: catalog
            .sections()
            .iter()
            .map(|section| SectionCount {
                number: section.id.number(),
                title: &section.title,
                examples: section.examples.len(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Text => {
            println!("{}", catalog.summary().bold());
            println!();
            for entry in &payload.per_section {
                println!(
                    "  {:>2}. {} {}",
                    entry.number,
                    entry.title,
                    format!("({})", entry.examples).bright_black()
                );
            }
        },
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&payload)?),
        OutputFormat::Jsonl => {
            for entry in &payload.per_section {
                println!("{}", serde_json::to_string(entry)?);
            }
        },
    }
    Ok(())
}
