//! Delete command

use super::{resolve_id, Service};
use anyhow::{Context, Result};
use colored::Colorize;

pub fn execute(service: &Service<'_>, id: &str) -> Result<()> {
    let id = resolve_id(service, id)?;
    service
        .delete_application(&id)
        .with_context(|| format!("Failed to delete application {id}"))?;
    println!("{} Deleted application {}", "✓".green(), id);
    Ok(())
}
