//! List command - filtered, paginated table or card view

use super::Service;
use crate::render;
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use colored::Colorize;
use jobnest_core::{ApplicationFilter, ApplicationStatus, ListQuery, SortOrder};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Order of entry
    #[default]
    Stored,
    /// Most recently applied first
    Newest,
    /// Oldest application first
    Oldest,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Stored => SortOrder::Stored,
            SortArg::Newest => SortOrder::AppliedDateDesc,
            SortArg::Oldest => SortOrder::AppliedDateAsc,
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only this status
    #[arg(short, long)]
    pub status: Option<ApplicationStatus>,

    /// Company contains (case-insensitive)
    #[arg(short, long)]
    pub company: Option<String>,

    /// Position contains (case-insensitive)
    #[arg(short, long)]
    pub position: Option<String>,

    /// Applied on or after, YYYY-MM-DD
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Applied on or before, YYYY-MM-DD
    #[arg(long)]
    pub to: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t)]
    pub sort: SortArg,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page (1-100)
    #[arg(long, default_value_t = 10)]
    pub per_page: u32,

    #[arg(long, value_enum, default_value_t)]
    pub view: ViewMode,
}

impl ListArgs {
    pub fn to_query(&self) -> Result<ListQuery> {
        if self.page == 0 {
            bail!("--page starts at 1");
        }
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                bail!("--from {from} is after --to {to}");
            }
        }

        Ok(ListQuery {
            filter: ApplicationFilter {
                status: self.status,
                company: self.company.clone(),
                position: self.position.clone(),
                date_from: self.from,
                date_to: self.to,
            },
            sort: self.sort.into(),
            page: self.page - 1,
            rows_per_page: Some(self.per_page),
        })
    }
}

pub fn execute(service: &Service<'_>, args: ListArgs) -> Result<()> {
    let query = args.to_query()?;
    let page = service.list_applications(&query)?;

    let criteria = query.filter.active_criteria();
    if criteria > 0 {
        println!(
            "{}",
            format!("{criteria} filter(s) active").dimmed()
        );
    }

    match args.view {
        ViewMode::Table => println!("{}", render::table(&page)),
        ViewMode::Cards => println!("{}", render::cards(&page)),
    }

    if page.total == 0 && criteria > 0 {
        println!("{}", "Try adjusting your filters.".dimmed());
        if query.filter.status.is_some() {
            let options = service.status_options()?;
            println!("{}", status_hint(&options).dimmed());
        }
    }
    Ok(())
}

fn status_hint(options: &[ApplicationStatus]) -> String {
    if options.is_empty() {
        return "No applications tracked yet.".to_string();
    }
    let names: Vec<&str> = options.iter().map(|status| status.as_str()).collect();
    format!("Statuses in use: {}", names.join(", "))
}
