//! Aggregates derived from an application collection.
//!
//! # Responsibility
//! - Compute dashboard counters, detailed rates and chart breakdowns.
//!
//! # Invariants
//! - Every aggregate is one linear pass over the input.
//! - `StatusCounts::total()` always equals the number of input records.
//! - Rates are `0` when their denominator is zero.

use crate::model::application::{ApplicationStatus, JobApplication};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Number of entries shown in the dashboard's recent list.
pub const RECENT_APPLICATIONS_LIMIT: usize = 5;

const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One counter per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
    pub accepted: usize,
}

impl StatusCounts {
    pub fn from_applications(items: &[JobApplication]) -> Self {
        items.iter().fold(Self::default(), |mut counts, item| {
            *counts.slot_mut(item.status) += 1;
            counts
        })
    }

    pub fn get(&self, status: ApplicationStatus) -> usize {
        match status {
            ApplicationStatus::Applied => self.applied,
            ApplicationStatus::Interview => self.interview,
            ApplicationStatus::Offer => self.offer,
            ApplicationStatus::Rejected => self.rejected,
            ApplicationStatus::Accepted => self.accepted,
        }
    }

    fn slot_mut(&mut self, status: ApplicationStatus) -> &mut usize {
        match status {
            ApplicationStatus::Applied => &mut self.applied,
            ApplicationStatus::Interview => &mut self.interview,
            ApplicationStatus::Offer => &mut self.offer,
            ApplicationStatus::Rejected => &mut self.rejected,
            ApplicationStatus::Accepted => &mut self.accepted,
        }
    }

    pub fn total(&self) -> usize {
        self.applied + self.interview + self.offer + self.rejected + self.accepted
    }

    /// `Applied` + `Interview`.
    pub fn active(&self) -> usize {
        self.applied + self.interview
    }

    /// `Interview` + `Offer` + `Rejected`.
    pub fn responses(&self) -> usize {
        self.interview + self.offer + self.rejected
    }
}

/// Headline counters for the dashboard cards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    pub interviews: usize,
    pub offers: usize,
    /// Share of records with an employer response, in percent.
    pub response_rate: f64,
}

impl DashboardStats {
    pub fn from_applications(items: &[JobApplication]) -> Self {
        let counts = StatusCounts::from_applications(items);
        let total = items.len();
        let response_rate = if total > 0 {
            counts.responses() as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total,
            active: counts.active(),
            interviews: counts.interview,
            offers: counts.offer,
            response_rate,
        }
    }
}

/// Detailed counters and conversion rates for the list view header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationStats {
    pub total: usize,
    pub active: usize,
    pub interviews: usize,
    pub offers: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// round(interviews / total * 100).
    pub response_rate: u32,
    /// round(offers / interviews * 100).
    pub success_rate: u32,
    /// round(accepted / offers * 100).
    pub acceptance_rate: u32,
    /// Applications per applied date, chronological.
    pub daily_trend: BTreeMap<NaiveDate, usize>,
}

impl ApplicationStats {
    pub fn from_applications(items: &[JobApplication]) -> Self {
        let counts = StatusCounts::from_applications(items);
        let mut daily_trend = BTreeMap::new();
        for item in items {
            *daily_trend.entry(item.applied_date).or_insert(0) += 1;
        }

        Self {
            total: items.len(),
            active: counts.active(),
            interviews: counts.interview,
            offers: counts.offer,
            accepted: counts.accepted,
            rejected: counts.rejected,
            response_rate: rounded_percent(counts.interview, items.len()),
            success_rate: rounded_percent(counts.offer, counts.interview),
            acceptance_rate: rounded_percent(counts.accepted, counts.offer),
            daily_trend,
        }
    }
}

/// One labelled bar/slice of a breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownEntry<L> {
    pub label: L,
    pub count: usize,
    /// round(count / total * 100).
    pub percent: u32,
}

/// Breakdowns rendered as the status pie and monthly bar charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Status slices in first-seen order.
    pub by_status: Vec<BreakdownEntry<ApplicationStatus>>,
    /// Month short names (`Jan`..`Dec`) in first-seen order. Years are merged.
    pub by_month: Vec<BreakdownEntry<&'static str>>,
}

impl Summary {
    pub fn from_applications(items: &[JobApplication]) -> Self {
        let total = items.len();
        let by_status = group_first_seen(items.iter().map(|item| item.status), total);
        let by_month = group_first_seen(
            items.iter().map(|item| month_short_name(item.applied_date)),
            total,
        );
        Self {
            by_status,
            by_month,
        }
    }
}

/// Most recent applications by applied date, newest first.
pub fn recent_applications(items: &[JobApplication], limit: usize) -> Vec<JobApplication> {
    let mut sorted: Vec<&JobApplication> = items.iter().collect();
    sorted.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
    sorted.into_iter().take(limit).cloned().collect()
}

pub fn month_short_name(date: NaiveDate) -> &'static str {
    MONTH_SHORT_NAMES[date.month0() as usize]
}

fn group_first_seen<L: PartialEq>(
    labels: impl Iterator<Item = L>,
    total: usize,
) -> Vec<BreakdownEntry<L>> {
    let mut groups: Vec<BreakdownEntry<L>> = Vec::new();
    for label in labels {
        match groups.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.count += 1,
            None => groups.push(BreakdownEntry {
                label,
                count: 1,
                percent: 0,
            }),
        }
    }
    for entry in &mut groups {
        entry.percent = rounded_percent(entry.count, total);
    }
    groups
}

fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::{month_short_name, rounded_percent};
    use chrono::NaiveDate;

    #[test]
    fn rounded_percent_handles_zero_denominator() {
        assert_eq!(rounded_percent(3, 0), 0);
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(2, 3), 67);
    }

    #[test]
    fn month_names_are_short_english() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
        assert_eq!(month_short_name(date), "Sep");
    }
}
