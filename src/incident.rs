//! Incident records and their severity levels.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of the calendar day when `reported_at` does not parse.
pub const UNKNOWN_DATE: &str = "unknown date";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(pub u64);

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// Next level, wrapping High back to Low.
    pub fn next(self) -> Self {
        match self {
            Severity::Low => Severity::Medium,
            Severity::Medium => Severity::High,
            Severity::High => Severity::Low,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Severity::Low => Severity::High,
            Severity::Medium => Severity::Low,
            Severity::High => Severity::Medium,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// ISO-8601 instant. Kept as text so corrupt seed data survives loading.
    pub reported_at: String,
}

impl Incident {
    /// Parsed `reported_at`, or `None` when the stored text is not RFC 3339.
    pub fn reported_instant(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.reported_at)
    }

    /// Calendar day (`YYYY-MM-DD`, UTC) the incident was reported on.
    pub fn reported_day(&self) -> String {
        self.reported_instant().map_or_else(
            || UNKNOWN_DATE.to_string(),
            |t| t.format("%Y-%m-%d").to_string(),
        )
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Formats an instant the way records store it: UTC, millisecond precision, `Z` suffix.
pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn incident(reported_at: &str) -> Incident {
        Incident {
            id: IncidentId(1),
            title: "t".to_string(),
            description: "d".to_string(),
            severity: Severity::Low,
            reported_at: reported_at.to_string(),
        }
    }

    #[test]
    fn severity_default_is_low() {
        assert_eq!(Severity::default(), Severity::Low);
    }

    #[test]
    fn severity_next_prev_are_inverse() {
        for s in Severity::ALL {
            assert_eq!(s.next().prev(), s);
        }
    }

    #[test]
    fn severity_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"Medium\"");
        let s: Severity = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(s, Severity::High);
    }

    #[test]
    fn severity_rejects_free_text() {
        assert!(serde_json::from_str::<Severity>("\"Critical\"").is_err());
    }

    #[test]
    fn reported_day_truncates_to_date() {
        assert_eq!(incident("2025-04-01T14:30:00Z").reported_day(), "2025-04-01");
    }

    #[test]
    fn reported_day_normalizes_offset_to_utc() {
        assert_eq!(incident("2025-04-01T23:30:00-02:00").reported_day(), "2025-04-02");
    }

    #[test]
    fn reported_day_unparseable() {
        assert_eq!(incident("yesterday").reported_day(), UNKNOWN_DATE);
        assert!(incident("").reported_instant().is_none());
    }

    #[test]
    fn format_timestamp_whole_seconds() {
        let t = Utc.with_ymd_and_hms(2025, 4, 1, 14, 30, 0).unwrap();
        assert_eq!(format_timestamp(t), "2025-04-01T14:30:00Z");
        assert_eq!(parse_timestamp(&format_timestamp(t)), Some(t));
    }

    #[test]
    fn format_timestamp_keeps_sub_millisecond_digits() {
        let t = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        assert_eq!(format_timestamp(t), "2026-10-16T12:00:00.123456789Z");
        assert_eq!(parse_timestamp(&format_timestamp(t)), Some(t));
    }

    #[test]
    fn id_display() {
        assert_eq!(IncidentId(7).to_string(), "#7");
    }
}
