//! modtrack core data models.
//!
//! This crate defines the records the progress engine reads: modules,
//! courses, users, reminder settings and the typed query parameters used to
//! build module views.

#![warn(missing_docs)]

// Identities and errors
mod id;
mod error;

// Coursework
mod module;
mod course;
mod user;

// Host-owned parameters
mod filter;
mod reminder;

// Re-exports
pub use id::{CourseId, ModuleId, UserId};
pub use error::ParseError;

pub use module::{format_due_date, parse_due_date, Module, ModuleStatus};
pub use course::{Catalog, Course};
pub use user::{Role, User};

pub use filter::{ModuleQuery, SortDirection, SortKey, StatusFilter};
pub use reminder::{ReminderSettings, DEFAULT_REMINDER_DAYS};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
