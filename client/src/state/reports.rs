//! Report entity, display classification, and the read-only report feed.
//!
//! DESIGN
//! ======
//! `status` and `priority` stay free-form strings on the wire. Styling code
//! never matches on the raw label; it goes through [`StatusKind::classify`]
//! and [`PriorityKind::classify`]. Those classifiers, the filter, and the
//! filter option lists all compare labels through [`fold_label`], so every
//! consumer (badge, border, status dot, filter) agrees on one
//! case-insensitive policy.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single reported neighborhood issue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub category: String,
    pub status: String,
    pub location: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub priority: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Report {
    #[must_use]
    pub fn status_kind(&self) -> StatusKind {
        StatusKind::classify(&self.status)
    }

    #[must_use]
    pub fn priority_kind(&self) -> PriorityKind {
        PriorityKind::classify(&self.priority)
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|s| !s.is_empty())
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Known report lifecycle labels. `Other` covers anything unrecognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Resolved,
    InProgress,
    Pending,
    Other,
}

impl StatusKind {
    /// Case-insensitive label match; surrounding whitespace is ignored.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        match fold_label(raw).as_str() {
            "resolved" => Self::Resolved,
            "in progress" => Self::InProgress,
            "pending" => Self::Pending,
            _ => Self::Other,
        }
    }

    /// Badge class for the status pill.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Resolved => "badge badge--success",
            Self::InProgress => "badge badge--primary",
            Self::Pending => "badge badge--warning",
            Self::Other => "badge badge--neutral",
        }
    }

    /// Class for the small status dot, or `None` when no dot is drawn.
    #[must_use]
    pub fn dot_class(self) -> Option<&'static str> {
        match self {
            Self::Resolved => Some("status-dot status-dot--success"),
            Self::InProgress => Some("status-dot status-dot--primary status-dot--pulse"),
            Self::Pending => Some("status-dot status-dot--warning"),
            Self::Other => None,
        }
    }
}

/// Known severity labels. `Other` covers anything unrecognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriorityKind {
    High,
    Medium,
    Low,
    Other,
}

impl PriorityKind {
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        match fold_label(raw).as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Other,
        }
    }

    /// Left-border accent class for the report card.
    #[must_use]
    pub fn border_class(self) -> &'static str {
        match self {
            Self::High => "report-card--border-danger",
            Self::Medium => "report-card--border-warning",
            Self::Low => "report-card--border-success",
            Self::Other => "report-card--border-neutral",
        }
    }
}

// =============================================================================
// FEED
// =============================================================================

/// Read-only source of reports shared by the home list and the map view.
///
/// Cloning is cheap; every clone points at the same immutable slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportFeed {
    reports: Arc<[Report]>,
}

impl ReportFeed {
    #[must_use]
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports: reports.into() }
    }

    /// Parse a feed from a JSON array of reports.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the payload is not an array of
    /// well-formed reports.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let reports: Vec<Report> = serde_json::from_str(raw)?;
        Ok(Self::new(reports))
    }

    /// The built-in demonstration dataset.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            sample_report("1", "Pothole on Main St.", "Road", "Pending", "Main Street & Oak Ave", "2025-09-20", "High"),
            sample_report("2", "Streetlight Outage", "Electrical", "Resolved", "Park Avenue", "2025-09-18", "Medium"),
            sample_report("3", "Overflowing Trash Bin", "Sanitation", "In Progress", "City Park", "2025-09-22", "Low"),
        ])
    }

    #[must_use]
    pub fn reports(&self) -> Arc<[Report]> {
        Arc::clone(&self.reports)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl Default for ReportFeed {
    fn default() -> Self {
        Self::sample()
    }
}

fn sample_report(
    id: &str,
    title: &str,
    category: &str,
    status: &str,
    location: &str,
    date: &str,
    priority: &str,
) -> Report {
    Report {
        id: id.to_owned(),
        title: title.to_owned(),
        category: category.to_owned(),
        status: status.to_owned(),
        location: location.to_owned(),
        date: date.to_owned(),
        priority: priority.to_owned(),
        image: None,
    }
}

// =============================================================================
// FILTER
// =============================================================================

/// Map view filter. `None` on a field means "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl ReportFilter {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category.is_some() || self.status.is_some() || self.priority.is_some()
    }

    #[must_use]
    pub fn matches(&self, report: &Report) -> bool {
        field_matches(self.category.as_deref(), &report.category)
            && field_matches(self.status.as_deref(), &report.status)
            && field_matches(self.priority.as_deref(), &report.priority)
    }

    /// Reports passing the filter, in input order.
    #[must_use]
    pub fn apply(&self, reports: &[Report]) -> Vec<Report> {
        reports.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Comparison key for a free-form label: trimmed and Unicode-lowercased.
#[must_use]
pub fn fold_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|w| fold_label(w) == fold_label(actual))
}

/// Distinct values of one report field in first-seen order, de-duplicated
/// case-insensitively. Blank values are skipped.
pub fn distinct_values<'a>(reports: &'a [Report], field: impl Fn(&'a Report) -> &'a str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for report in reports {
        let value = field(report).trim();
        if value.is_empty() {
            continue;
        }
        let key = fold_label(value);
        if !seen.contains(&key) {
            seen.push(key);
            out.push(value.to_owned());
        }
    }
    out
}
