//! Edit command - overwrite selected fields of one application

use super::{resolve_id, Service};
use crate::render;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use colored::Colorize;
use jobnest_core::{ApplicationPatch, ApplicationStatus};

/// Optional fields that can be cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClearableField {
    JobLink,
    Location,
    Salary,
    Description,
    Notes,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Application id or unique id prefix
    pub id: String,

    #[arg(short, long)]
    pub company: Option<String>,

    #[arg(short, long)]
    pub position: Option<String>,

    #[arg(short, long)]
    pub status: Option<ApplicationStatus>,

    /// Date applied, YYYY-MM-DD
    #[arg(short = 'd', long)]
    pub applied_date: Option<NaiveDate>,

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

    /// Clear an optional field (repeatable)
    #[arg(long, value_enum)]
    pub clear: Vec<ClearableField>,
}

impl EditArgs {
    fn to_patch(&self) -> ApplicationPatch {
        let field = |value: &Option<String>, which: ClearableField| {
            if self.clear.contains(&which) {
                Some(None)
            } else {
                value.clone().map(Some)
            }
        };

        ApplicationPatch {
            company: self.company.clone(),
            position: self.position.clone(),
            status: self.status,
            applied_date: self.applied_date,
            job_link: field(&self.job_link, ClearableField::JobLink),
            location: field(&self.location, ClearableField::Location),
            salary: field(&self.salary, ClearableField::Salary),
            description: field(&self.description, ClearableField::Description),
            notes: field(&self.notes, ClearableField::Notes),
        }
    }
}

pub fn execute(service: &Service<'_>, args: EditArgs) -> Result<()> {
    let patch = args.to_patch();
    if patch.is_empty() {
        bail!("Nothing to change; pass at least one field flag or --clear");
    }

    let id = resolve_id(service, &args.id)?;
    let updated = service
        .edit_application(&id, &patch)
        .with_context(|| format!("Failed to edit application {id}"))?;

    println!("{} Updated application {}", "✓".green(), updated.id);
    println!();
    print!("{}", render::card(&updated));
    Ok(())
}
