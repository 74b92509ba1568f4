//! Stats command - conversion rates and daily trend

use super::Service;
use anyhow::Result;
use colored::Colorize;

pub fn execute(service: &Service<'_>) -> Result<()> {
    let stats = service.application_stats()?;

    println!("{}", "Application Statistics".blue().bold());
    println!();
    println!("{}", "Counts:".cyan());
    println!("   Total      {}", stats.total);
    println!("   Active     {}", stats.active);
    println!("   Interviews {}", stats.interviews);
    println!("   Offers     {}", stats.offers);
    println!("   Accepted   {}", stats.accepted);
    println!("   Rejected   {}", stats.rejected);
    println!();

    println!("{}", "Rates:".cyan());
    println!("   Response   {}%  (interviews / total)", stats.response_rate);
    println!("   Success    {}%  (offers / interviews)", stats.success_rate);
    println!("   Acceptance {}%  (accepted / offers)", stats.acceptance_rate);
    println!();

    println!("{}", "Daily trend:".cyan());
    if stats.daily_trend.is_empty() {
        println!("   {}", "(no data)".dimmed());
    }
    for (date, count) in &stats.daily_trend {
        println!("   {date}  {count}");
    }
    Ok(())
}
