//! Dashboard command - headline counters and recent applications

use super::Service;
use crate::render;
use anyhow::Result;
use colored::Colorize;

pub fn execute(service: &Service<'_>) -> Result<()> {
    let dashboard = service.dashboard()?;
    let stats = &dashboard.stats;

    println!("{}", "Dashboard".blue().bold());
    println!();
    println!("   Total applications   {}", stats.total.to_string().bold());
    println!("   Active applications  {}", stats.active.to_string().bold());
    println!("   Interviews           {}", stats.interviews.to_string().bold());
    println!("   Offers               {}", stats.offers.to_string().bold());
    println!("   Response rate        {:.1}%", stats.response_rate);
    println!();

    println!("{}", "Recent applications".cyan());
    if dashboard.recent.is_empty() {
        println!("   {}", "Nothing tracked yet. Run: jobnest add".dimmed());
    }
    for item in &dashboard.recent {
        println!(
            "   {}  {} {} {}  [{}]",
            render::short_id(item).dimmed(),
            item.position.bold(),
            "•".dimmed(),
            item.company,
            render::status_label(item.status)
        );
        println!("      Applied {}", item.applied_date.format("%b %-d, %Y"));
    }
    Ok(())
}
