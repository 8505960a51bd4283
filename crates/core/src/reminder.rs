//! Reminder settings for the upcoming-deadline window.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Default reminder horizon in days.
pub const DEFAULT_REMINDER_DAYS: u32 = 7;

/// Reminder preferences owned by the host.
///
/// Only `enabled` and `days_before_due` influence derived values; the
/// notification channel flags are carried for the host's delivery layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReminderSettings {
    /// Whether upcoming deadlines are surfaced at all
    pub enabled: bool,

    /// Horizon of the upcoming window, in days
    pub days_before_due: u32,

    /// Deliver reminders by email
    pub email_notifications: bool,

    /// Deliver reminders as browser notifications
    pub browser_notifications: bool,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            days_before_due: DEFAULT_REMINDER_DAYS,
            email_notifications: true,
            browser_notifications: false,
        }
    }
}

impl ReminderSettings {
    /// Change the horizon. Zero is rejected and leaves the settings unchanged.
    pub fn set_days_before_due(&mut self, days: u32) -> Result<(), ParseError> {
        if days == 0 {
            return Err(ParseError::InvalidHorizon(days));
        }
        self.days_before_due = days;
        Ok(())
    }
}
