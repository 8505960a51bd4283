//! Module model - a single trackable unit of coursework.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;
use crate::id::ModuleId;

/// A unit of coursework with completion state, optional score and due date.
///
/// `completed` and `status` are independent fields. Aggregation reads
/// `completed`; status filtering and sorting read `status`. Nothing here keeps
/// them in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Unique identifier within the owning collection
    pub id: ModuleId,

    /// Display title
    pub title: String,

    /// Display description
    pub description: String,

    /// Authoritative completion flag for aggregation
    pub completed: bool,

    /// Score, nominally in [0, 100] but not clamped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Authoritative display label for filtering and sorting
    pub status: ModuleStatus,

    /// Due date as supplied; see [`parse_due_date`] for the accepted forms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Free-form learner notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Module {
    /// Create a not-started module with no score, due date or notes.
    pub fn new(id: impl Into<ModuleId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            completed: false,
            score: None,
            status: ModuleStatus::NotStarted,
            due_date: None,
            notes: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the status label. Does not touch `completed`.
    pub fn with_status(mut self, status: ModuleStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the completion flag. Does not touch `status`.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Set the score.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Set the raw due date text.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Set the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The due date at day granularity, if present and parseable.
    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(parse_due_date)
    }
}

/// Display status of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleStatus {
    /// Not yet begun
    NotStarted,
    /// Work underway
    InProgress,
    /// Finished
    Completed,
    /// Attempted and failed
    Failed,
}

impl ModuleStatus {
    /// All statuses, in breakdown display order.
    pub const ALL: [ModuleStatus; 4] = [
        ModuleStatus::Completed,
        ModuleStatus::InProgress,
        ModuleStatus::NotStarted,
        ModuleStatus::Failed,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleStatus::NotStarted => "not-started",
            ModuleStatus::InProgress => "in-progress",
            ModuleStatus::Completed => "completed",
            ModuleStatus::Failed => "failed",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ModuleStatus::NotStarted => "Not Started",
            ModuleStatus::InProgress => "In Progress",
            ModuleStatus::Completed => "Completed",
            ModuleStatus::Failed => "Failed",
        }
    }

    /// Sort priority: completed 3, in-progress 2, failed 1, not-started 0.
    pub fn priority(&self) -> u8 {
        match self {
            ModuleStatus::Completed => 3,
            ModuleStatus::InProgress => 2,
            ModuleStatus::Failed => 1,
            ModuleStatus::NotStarted => 0,
        }
    }
}

impl std::fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(ModuleStatus::NotStarted),
            "in-progress" => Ok(ModuleStatus::InProgress),
            "completed" => Ok(ModuleStatus::Completed),
            "failed" => Ok(ModuleStatus::Failed),
            other => Err(ParseError::UnknownStatus(other.to_string())),
        }
    }
}

/// Calendar-date layouts accepted besides RFC 3339.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%b %d, %Y", "%B %d, %Y"];

/// Parse a due date at day granularity.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, `Nov 5, 2023` (short or
/// long month name), or an RFC 3339 timestamp (its own date part is used).
/// Anything else yields `None`.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Format a due date for display, e.g. `Nov 1, 2023`.
pub fn format_due_date(raw: Option<&str>) -> String {
    match raw {
        None => "No due date".to_string(),
        Some(text) => match parse_due_date(text) {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => text.to_string(),
        },
    }
}
