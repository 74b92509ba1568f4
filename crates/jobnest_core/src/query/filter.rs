//! Filtering, sorting and pagination for application lists.
//!
//! # Responsibility
//! - Derive the visible subset of a collection for list/card views.
//! - Provide page envelopes with stable, deterministic ordering.
//!
//! # Invariants
//! - Status filter is an exact match.
//! - Company/position filters are case-insensitive substring matches.
//! - Date bounds are inclusive.
//! - Sorting is stable; ties keep stored order.

use crate::model::application::{ApplicationStatus, JobApplication};
use chrono::NaiveDate;

pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;
pub const MAX_ROWS_PER_PAGE: u32 = 100;

/// Optional criteria narrowing an application list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    pub status: Option<ApplicationStatus>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl ApplicationFilter {
    /// Filter matching only `status`.
    pub fn by_status(status: ApplicationStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Number of criteria currently set.
    pub fn active_criteria(&self) -> usize {
        [
            self.status.is_some(),
            non_blank(self.company.as_deref()).is_some(),
            non_blank(self.position.as_deref()).is_some(),
            self.date_from.is_some(),
            self.date_to.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_criteria() == 0
    }

    pub fn matches(&self, application: &JobApplication) -> bool {
        if self
            .status
            .is_some_and(|status| application.status != status)
        {
            return false;
        }
        if let Some(needle) = non_blank(self.company.as_deref()) {
            if !contains_ignore_case(&application.company, needle) {
                return false;
            }
        }
        if let Some(needle) = non_blank(self.position.as_deref()) {
            if !contains_ignore_case(&application.position, needle) {
                return false;
            }
        }
        if self
            .date_from
            .is_some_and(|from| application.applied_date < from)
        {
            return false;
        }
        if self.date_to.is_some_and(|to| application.applied_date > to) {
            return false;
        }
        true
    }

    /// Returns matching records in input order.
    pub fn apply<'a>(&self, items: &'a [JobApplication]) -> Vec<&'a JobApplication> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Insertion order of the stored collection.
    #[default]
    Stored,
    AppliedDateDesc,
    AppliedDateAsc,
}

/// Filter + sort + pagination request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: ApplicationFilter,
    pub sort: SortOrder,
    /// Zero-based page index.
    pub page: u32,
    /// Rows per page. Defaults to 10 and clamps to 1..=100.
    pub rows_per_page: Option<u32>,
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matching records across all pages.
    pub total: usize,
    pub page: u32,
    pub rows_per_page: u32,
}

impl<T> Page<T> {
    pub fn page_count(&self) -> u32 {
        let rows = self.rows_per_page.max(1) as usize;
        self.total.div_ceil(rows) as u32
    }

    /// 1-based index range of the rows on this page, `None` when empty.
    pub fn row_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = self.page as usize * self.rows_per_page as usize;
        Some((start + 1, start + self.items.len()))
    }
}

pub fn normalize_rows_per_page(rows_per_page: Option<u32>) -> u32 {
    rows_per_page
        .unwrap_or(DEFAULT_ROWS_PER_PAGE)
        .clamp(1, MAX_ROWS_PER_PAGE)
}

/// Sorts references in place using a stable sort.
pub fn sort_applications(items: &mut [&JobApplication], order: SortOrder) {
    match order {
        SortOrder::Stored => {}
        SortOrder::AppliedDateDesc => {
            items.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
        }
        SortOrder::AppliedDateAsc => {
            items.sort_by(|a, b| a.applied_date.cmp(&b.applied_date));
        }
    }
}

/// Runs filter, sort and pagination over `items`.
pub fn run_query(items: &[JobApplication], query: &ListQuery) -> Page<JobApplication> {
    let rows_per_page = normalize_rows_per_page(query.rows_per_page);
    let mut matched = query.filter.apply(items);
    sort_applications(&mut matched, query.sort);

    let total = matched.len();
    let start = (query.page as usize).saturating_mul(rows_per_page as usize);
    let page_items = matched
        .into_iter()
        .skip(start)
        .take(rows_per_page as usize)
        .cloned()
        .collect();

    Page {
        items: page_items,
        total,
        page: query.page,
        rows_per_page,
    }
}

/// Distinct statuses present in `items`, in first-seen order.
pub fn status_options(items: &[JobApplication]) -> Vec<ApplicationStatus> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item.status) {
            seen.push(item.status);
        }
    }
    seen
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
