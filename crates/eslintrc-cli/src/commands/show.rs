//! Show command implementation.

use anyhow::{Context, Result};
use eslintrc_core::ConfigDocument;
use eslintrc_presets::Preset;

use crate::OutputFormat;

/// Runs the show command.
pub fn run(preset: Preset, format: OutputFormat) -> Result<()> {
    let doc = preset.document();
    match format {
        OutputFormat::Json => {
            let json = doc.to_json_pretty().context("Failed to render document")?;
            println!("{json}");
        }
        OutputFormat::Compact => print_compact(preset, &doc),
    }
    Ok(())
}

fn print_compact(preset: Preset, doc: &ConfigDocument) {
    println!("preset: {} ({})", preset.name(), preset.description());
    if let Some(parser) = doc.parser() {
        println!("parser: {parser}");
    }
    println!("plugins: {}", doc.plugins().join(", "));
    println!("extends: {}", doc.extends().join(", "));
    println!("rules ({}):", doc.rules().len());
    for (name, entry) in doc.rules().iter() {
        println!("  {name} = {entry}");
    }
}
