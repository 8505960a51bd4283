//! Upcoming-deadline window.

use chrono::{Days, NaiveDate};
use modtrack_core::Module;
use tracing::debug;

/// Inclusive day window `[start, start + horizon]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineWindow {
    /// First day of the window
    pub start: NaiveDate,
    /// Last day of the window
    pub end: NaiveDate,
}

impl DeadlineWindow {
    /// Window of `horizon_days` days starting at `reference`.
    ///
    /// A horizon past the end of the calendar saturates at the latest date.
    pub fn new(reference: NaiveDate, horizon_days: u32) -> Self {
        let end = reference
            .checked_add_days(Days::new(u64::from(horizon_days)))
            .unwrap_or(NaiveDate::MAX);
        Self { start: reference, end }
    }

    /// Whether `date` falls inside the window, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether a module is upcoming in this window: not completed and due
    /// within it. Missing or unparseable due dates never match.
    pub fn admits(&self, module: &Module) -> bool {
        !module.completed && module.due().is_some_and(|due| self.contains(due))
    }
}

/// Incomplete modules due within `horizon_days` of `reference`, in input order.
///
/// The horizon is not validated here; hosts enforce a positive value at the
/// boundary.
pub fn upcoming(modules: &[Module], horizon_days: u32, reference: NaiveDate) -> Vec<&Module> {
    let window = DeadlineWindow::new(reference, horizon_days);
    let selected: Vec<&Module> = modules.iter().filter(|m| window.admits(m)).collect();
    debug!(
        "Upcoming window {}..={}: {} of {} modules",
        window.start,
        window.end,
        selected.len(),
        modules.len()
    );
    selected
}
