//! Filter and sort selections, and the projection they drive.

use crate::incident::{Incident, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SeverityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl SeverityFilter {
    pub fn matches(self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Low => severity == Severity::Low,
            SeverityFilter::Medium => severity == Severity::Medium,
            SeverityFilter::High => severity == Severity::High,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            SeverityFilter::All => SeverityFilter::Low,
            SeverityFilter::Low => SeverityFilter::Medium,
            SeverityFilter::Medium => SeverityFilter::High,
            SeverityFilter::High => SeverityFilter::All,
        }
    }

    pub fn cycle_back(self) -> Self {
        match self {
            SeverityFilter::All => SeverityFilter::High,
            SeverityFilter::Low => SeverityFilter::All,
            SeverityFilter::Medium => SeverityFilter::Low,
            SeverityFilter::High => SeverityFilter::Medium,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityFilter::All => "All Severities",
            SeverityFilter::Low => "Low",
            SeverityFilter::Medium => "Medium",
            SeverityFilter::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
        }
    }
}

/// Records to display, in display order.
///
/// Unparseable `reported_at` values sort as the earliest instant. The sort is
/// stable, so equal timestamps keep their collection order.
pub fn project(records: &[Incident], filter: SeverityFilter, sort: SortOrder) -> Vec<&Incident> {
    let mut view: Vec<(Option<chrono::DateTime<chrono::Utc>>, &Incident)> = records
        .iter()
        .filter(|r| filter.matches(r.severity))
        .map(|r| (r.reported_instant(), r))
        .collect();
    match sort {
        SortOrder::Newest => view.sort_by(|(a, _), (b, _)| b.cmp(a)),
        SortOrder::Oldest => view.sort_by(|(a, _), (b, _)| a.cmp(b)),
    }
    view.into_iter().map(|(_, r)| r).collect()
}
