//! Export snapshot of a learner's progress in a course.

use modtrack_core::{Course, CourseId, Module, ModuleId, ModuleStatus, Time};
use serde::{Deserialize, Serialize};

use crate::aggregate::{average_score, completion_percentage};

/// Serialized progress report for one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    /// Course identifier
    pub course_id: CourseId,

    /// Course title
    pub course_title: String,

    /// When the report was produced
    pub export_date: Time,

    /// Completion percentage
    pub progress: u8,

    /// Average score of completed, scored modules
    pub average_score: i64,

    /// Per-module rows, in collection order
    pub modules: Vec<ModuleReport>,
}

/// One module row of a [`ProgressReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReport {
    /// Module identifier
    pub id: ModuleId,

    /// Module title
    pub title: String,

    /// Display status
    pub status: ModuleStatus,

    /// Completion flag
    pub completed: bool,

    /// Score, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Notes, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&Module> for ModuleReport {
    fn from(module: &Module) -> Self {
        Self {
            id: module.id.clone(),
            title: module.title.clone(),
            status: module.status,
            completed: module.completed,
            score: module.score,
            notes: module.notes.clone(),
        }
    }
}

impl ProgressReport {
    /// Build a report for `course` from the host's current `modules`.
    ///
    /// `modules` is passed separately because the host's working copy may
    /// have diverged from the catalog's course record.
    pub fn build(course: &Course, modules: &[Module], exported_at: Time) -> Self {
        Self {
            course_id: course.id.clone(),
            course_title: course.title.clone(),
            export_date: exported_at,
            progress: completion_percentage(modules),
            average_score: average_score(modules),
            modules: modules.iter().map(ModuleReport::from).collect(),
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Suggested download name, e.g. `web-development-fundamentals-progress.json`.
    ///
    /// Inner whitespace runs become one `-`; leading and trailing whitespace is
    /// dropped rather than turned into a dangling `-`.
    pub fn file_name(&self) -> String {
        let slug = self
            .course_title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        format!("{}-progress.json", slug)
    }
}
