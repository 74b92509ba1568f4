//! Add command - the new-application form

use super::Service;
use crate::render;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use jobnest_core::{ApplicationDraft, ApplicationStatus};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Company name
    #[arg(short, long)]
    pub company: String,

    /// Position title
    #[arg(short, long)]
    pub position: String,

    /// Initial status (Applied, Interview, Offer, Rejected, Accepted)
    #[arg(short, long, default_value = "Applied")]
    pub status: ApplicationStatus,

    /// Date applied, YYYY-MM-DD (defaults to today)
    #[arg(short = 'd', long)]
    pub applied_date: Option<NaiveDate>,

    /// Link to the job posting
    #[arg(long)]
    pub job_link: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub salary: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddArgs> for ApplicationDraft {
    fn from(args: AddArgs) -> Self {
        Self {
            company: args.company,
            position: args.position,
            status: Some(args.status),
            applied_date: args.applied_date,
            job_link: args.job_link,
            location: args.location,
            salary: args.salary,
            description: args.description,
            notes: args.notes,
        }
    }
}

pub fn execute(service: &Service<'_>, args: AddArgs) -> Result<()> {
    let created = service
        .add_application(args.into())
        .context("Failed to add application")?;

    println!("{} Added application {}", "✓".green(), created.id);
    println!();
    print!("{}", render::card(&created));
    Ok(())
}
