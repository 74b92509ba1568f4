//! Summary command - status and monthly breakdowns

use super::Service;
use crate::render;
use anyhow::Result;
use colored::Colorize;

pub fn execute(service: &Service<'_>) -> Result<()> {
    let summary = service.summary()?;

    println!("{}", "Application Summary".blue().bold());
    println!();
    println!("{}", "Applications by status".cyan());
    print!("{}", render::bars(&summary.by_status));
    println!();
    println!("{}", "Applications by month".cyan());
    print!("{}", render::bars(&summary.by_month));
    Ok(())
}
