//! Export/import of the stored collection as a JSON array

use super::Service;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub fn export(service: &Service<'_>, output: Option<&Path>) -> Result<()> {
    let payload = service.export_json()?;
    match output {
        Some(path) => {
            std::fs::write(path, payload)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Exported to {}", "✓".green(), path.display());
        }
        None => println!("{payload}"),
    }
    Ok(())
}

pub fn import(service: &Service<'_>, input: &Path) -> Result<()> {
    let payload = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let count = service
        .import_json(&payload)
        .with_context(|| format!("Failed to import {}", input.display()))?;
    println!(
        "{} Imported {count} application(s); previous collection replaced",
        "✓".green()
    );
    Ok(())
}
