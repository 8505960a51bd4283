//! Tracker configuration.

use modtrack_core::{CourseId, ModuleQuery, ReminderSettings, SortDirection, SortKey};
use serde::{Deserialize, Serialize};

/// Host configuration for a [`crate::CourseTracker`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    /// Reminder window settings
    pub reminders: ReminderSettings,

    /// Initial sort key of module views
    pub default_sort: SortKey,

    /// Initial sort direction of module views
    pub default_direction: SortDirection,

    /// Course to open when none is selected explicitly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<CourseId>,
}

impl TrackerConfig {
    /// Parse from JSON; absent fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The module query a fresh view starts from.
    pub fn default_query(&self) -> ModuleQuery {
        ModuleQuery::default().sorted_by(self.default_sort, self.default_direction)
    }
}
