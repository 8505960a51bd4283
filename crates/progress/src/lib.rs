//! Progress engine.
//!
//! Pure functions that turn a module collection into completion and score
//! aggregates, an upcoming-deadline window, filtered and sorted views, and a
//! qualitative assessment, plus the host-side tracker, roster and export
//! report built on top of them.

#![warn(missing_docs)]

pub mod aggregate;
pub mod config;
pub mod deadline;
pub mod grade;
pub mod narrator;
pub mod query;
pub mod report;
pub mod roster;
pub mod tracker;

pub use aggregate::{
    average_score, completed_count, completion_percentage, scored_modules, status_counts,
    StatusCounts,
};
pub use config::TrackerConfig;
pub use deadline::{upcoming, DeadlineWindow};
pub use grade::{Grade, ScoreBand};
pub use narrator::{assess, Assessment};
pub use query::{compare, view};
pub use report::{ModuleReport, ProgressReport};
pub use roster::{roster, RosterEntry, RosterQuery, RosterSortKey};
pub use tracker::{CourseTracker, ProgressSnapshot, TrackerError};
