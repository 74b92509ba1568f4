//! Plain-text rendering of lists, cards and breakdown bars.

use colored::{ColoredString, Colorize};
use jobnest_core::stats::BreakdownEntry;
use jobnest_core::{ApplicationStatus, JobApplication, Page};
use std::fmt::Display;

const SHORT_ID_CHARS: usize = 8;
const MAX_CELL_CHARS: usize = 28;
const BAR_WIDTH: usize = 30;
const STATUS_COLUMN: usize = 3;

pub fn status_label(status: ApplicationStatus) -> ColoredString {
    colorize_status(status.as_str(), status)
}

fn colorize_status(text: &str, status: ApplicationStatus) -> ColoredString {
    match status {
        ApplicationStatus::Applied => text.blue(),
        ApplicationStatus::Interview => text.yellow(),
        ApplicationStatus::Offer => text.green(),
        ApplicationStatus::Rejected => text.red(),
        ApplicationStatus::Accepted => text.green().bold(),
    }
}

pub fn short_id(application: &JobApplication) -> String {
    application.id.as_str().chars().take(SHORT_ID_CHARS).collect()
}

/// Renders a page as an aligned table with a footer line.
pub fn table(page: &Page<JobApplication>) -> String {
    if page.items.is_empty() {
        return empty_page(page);
    }

    let header = ["ID", "COMPANY", "POSITION", "STATUS", "APPLIED", "LOCATION"];
    let rows: Vec<[String; 6]> = page
        .items
        .iter()
        .map(|item| {
            [
                short_id(item),
                truncate(&item.company),
                truncate(&item.position),
                item.status.to_string(),
                item.applied_date.to_string(),
                truncate(item.location.as_deref().unwrap_or("-")),
            ]
        })
        .collect();

    let mut widths = header.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_line = header
        .iter()
        .zip(widths)
        .map(|(title, width)| format!("{title:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&header_line.bold().to_string());
    out.push('\n');

    for (row, item) in rows.iter().zip(&page.items) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(column, (cell, width))| {
                let padded = format!("{cell:<width$}");
                if column == STATUS_COLUMN {
                    // Pad before colouring so escape codes do not skew widths.
                    colorize_status(&padded, item.status).to_string()
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out.push_str(&footer(page));
    out
}

/// Renders a page as one detail card per application.
pub fn cards(page: &Page<JobApplication>) -> String {
    if page.items.is_empty() {
        return empty_page(page);
    }

    let mut out = String::new();
    for item in &page.items {
        out.push_str(&card(item));
        out.push('\n');
    }
    out.push_str(&footer(page));
    out
}

/// Full detail view of one application.
pub fn card(item: &JobApplication) -> String {
    let mut out = format!(
        "{} at {}  [{}]\n",
        item.position.bold(),
        item.company,
        status_label(item.status)
    );
    push_field(&mut out, "ID", &item.id);
    push_field(&mut out, "Applied", &item.applied_date);
    for (label, value) in [
        ("Location", &item.location),
        ("Salary", &item.salary),
        ("Job link", &item.job_link),
        ("Description", &item.description),
        ("Notes", &item.notes),
    ] {
        if let Some(value) = value {
            push_field(&mut out, label, value);
        }
    }
    out
}

/// One horizontal bar per breakdown entry, scaled to the largest count.
pub fn bars<L: Display>(entries: &[BreakdownEntry<L>]) -> String {
    if entries.is_empty() {
        return "  (no data)\n".to_string();
    }

    let labels: Vec<String> = entries.iter().map(|entry| entry.label.to_string()).collect();
    let label_width = labels.iter().map(|label| label.chars().count()).max().unwrap_or(0);
    let max_count = entries.iter().map(|entry| entry.count).max().unwrap_or(0).max(1);

    let mut out = String::new();
    for (entry, label) in entries.iter().zip(&labels) {
        let filled = (entry.count * BAR_WIDTH).div_ceil(max_count);
        out.push_str(&format!(
            "  {label:<label_width$}  {} {} ({}%)\n",
            "█".repeat(filled).cyan(),
            entry.count,
            entry.percent
        ));
    }
    out
}

fn empty_page(page: &Page<JobApplication>) -> String {
    if page.total == 0 {
        "No applications found.".to_string()
    } else {
        footer(page)
    }
}

fn footer(page: &Page<JobApplication>) -> String {
    match page.row_range() {
        Some((first, last)) => format!(
            "{first}-{last} of {} (page {}/{})",
            page.total,
            page.page + 1,
            page.page_count().max(1)
        ),
        None => format!(
            "No rows on page {}; {} matching in total",
            page.page + 1,
            page.total
        ),
    }
}

fn push_field(out: &mut String, label: &str, value: &dyn Display) {
    let label = format!("{label}:");
    out.push_str(&format!("  {} {value}\n", format!("{label:<12}").dimmed()));
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_CELL_CHARS {
        return value.to_string();
    }
    let mut out: String = value.chars().take(MAX_CELL_CHARS - 3).collect();
    out.push_str("...");
    out
}
