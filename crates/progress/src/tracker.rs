//! Host-side progress tracking for one course.
//!
//! [`CourseTracker`] owns the authoritative module collection for a course
//! and recomputes every derived value from it on demand.

use chrono::NaiveDate;
use modtrack_core::{Course, Module, ModuleId, ModuleQuery, ModuleStatus, Time};
use serde::Serialize;
use tracing::debug;

use crate::aggregate::{
    average_score, completed_count, completion_percentage, status_counts, StatusCounts,
};
use crate::config::TrackerConfig;
use crate::deadline::upcoming;
use crate::narrator::Assessment;
use crate::query::view;
use crate::report::ProgressReport;

/// Errors raised by tracker mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    /// No module with this id in the tracked course
    #[error("module not found: {0}")]
    UnknownModule(String),
}

/// Every derived value for the current module collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// Completion percentage
    pub progress: u8,

    /// Average score of completed, scored modules
    pub average_score: i64,

    /// Modules flagged completed
    pub completed: usize,

    /// Modules in the collection
    pub total: usize,

    /// Counts per status label
    pub status_counts: StatusCounts,

    /// Upcoming module ids; empty while reminders are disabled
    pub upcoming: Vec<ModuleId>,

    /// Qualitative assessment
    pub assessment: Assessment,

    /// Module ids of the current view, in display order
    pub view: Vec<ModuleId>,
}

/// Tracks one course's modules on behalf of a host.
#[derive(Debug, Clone)]
pub struct CourseTracker {
    course: Course,
    config: TrackerConfig,
}

impl CourseTracker {
    /// Start tracking `course` with default configuration.
    pub fn new(course: Course) -> Self {
        Self {
            course,
            config: TrackerConfig::default(),
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// The tracked course.
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Current module collection.
    pub fn modules(&self) -> &[Module] {
        &self.course.modules
    }

    /// Current configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Mutable configuration.
    pub fn config_mut(&mut self) -> &mut TrackerConfig {
        &mut self.config
    }

    /// Mark a module complete or incomplete.
    ///
    /// The status label follows: `completed` when marked complete,
    /// `in-progress` otherwise.
    pub fn toggle_complete(&mut self, id: &str, completed: bool) -> Result<(), TrackerError> {
        let module = self.module_mut(id)?;
        module.completed = completed;
        module.status = if completed {
            ModuleStatus::Completed
        } else {
            ModuleStatus::InProgress
        };
        debug!("Module {} completed={}", id, completed);
        Ok(())
    }

    /// Replace a module's notes. Status and completion are untouched.
    pub fn update_notes(&mut self, id: &str, notes: impl Into<String>) -> Result<(), TrackerError> {
        self.module_mut(id)?.notes = Some(notes.into());
        Ok(())
    }

    /// Recompute every derived value as of `today`, with the view built
    /// from `query`.
    pub fn snapshot(&self, today: NaiveDate, query: &ModuleQuery) -> ProgressSnapshot {
        let modules = self.modules();
        let progress = completion_percentage(modules);
        let average = average_score(modules);

        let reminders = &self.config.reminders;
        let upcoming_ids = if reminders.enabled {
            upcoming(modules, reminders.days_before_due, today)
                .into_iter()
                .map(|m| m.id.clone())
                .collect()
        } else {
            Vec::new()
        };

        ProgressSnapshot {
            progress,
            average_score: average,
            completed: completed_count(modules),
            total: modules.len(),
            status_counts: status_counts(modules),
            upcoming: upcoming_ids,
            assessment: Assessment::from_metrics(progress, average),
            view: view(modules, query).into_iter().map(|m| m.id.clone()).collect(),
        }
    }

    /// Export report of the current collection.
    pub fn report(&self, exported_at: Time) -> ProgressReport {
        ProgressReport::build(&self.course, self.modules(), exported_at)
    }

    fn module_mut(&mut self, id: &str) -> Result<&mut Module, TrackerError> {
        self.course
            .modules
            .iter_mut()
            .find(|m| m.id.as_str() == id)
            .ok_or_else(|| TrackerError::UnknownModule(id.to_string()))
    }
}
