//! Aggregation over a module collection.
//!
//! Aggregates read `completed`, never `status`. A module flagged completed
//! whose status label says otherwise still counts as completed here.

use modtrack_core::{Module, ModuleStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of modules with `completed == true`.
pub fn completed_count(modules: &[Module]) -> usize {
    modules.iter().filter(|m| m.completed).count()
}

/// Share of completed modules as a rounded percentage.
///
/// An empty collection yields 0.
pub fn completion_percentage(modules: &[Module]) -> u8 {
    if modules.is_empty() {
        return 0;
    }

    let completed = completed_count(modules);
    let percentage = (completed as f64 * 100.0 / modules.len() as f64).round() as u8;
    debug!(
        "Completion: {}/{} modules -> {}%",
        completed,
        modules.len(),
        percentage
    );
    percentage
}

/// Modules that feed the average score: completed and carrying a score.
pub fn scored_modules(modules: &[Module]) -> Vec<&Module> {
    modules
        .iter()
        .filter(|m| m.completed && m.score.is_some())
        .collect()
}

/// Rounded mean score over completed, scored modules.
///
/// Unscored completed modules are left out of both sum and count rather than
/// counted as zero. Scores are not clamped, so out-of-range input can produce
/// an out-of-range average. Yields 0 when no module qualifies.
pub fn average_score(modules: &[Module]) -> i64 {
    let (sum, count) = modules
        .iter()
        .filter(|m| m.completed)
        .filter_map(|m| m.score)
        .fold((0.0_f64, 0_usize), |(sum, count), score| (sum + score, count + 1));

    if count == 0 {
        return 0;
    }

    let average = (sum / count as f64).round() as i64;
    debug!("Average score over {} scored modules -> {}", count, average);
    average
}

/// Module counts per status label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// `completed`
    pub completed: usize,
    /// `in-progress`
    pub in_progress: usize,
    /// `not-started`
    pub not_started: usize,
    /// `failed`
    pub failed: usize,
}

impl StatusCounts {
    /// Count for one status.
    pub fn get(&self, status: ModuleStatus) -> usize {
        match status {
            ModuleStatus::Completed => self.completed,
            ModuleStatus::InProgress => self.in_progress,
            ModuleStatus::NotStarted => self.not_started,
            ModuleStatus::Failed => self.failed,
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.completed + self.in_progress + self.not_started + self.failed
    }
}

/// Count modules by their `status` label.
pub fn status_counts(modules: &[Module]) -> StatusCounts {
    modules.iter().fold(StatusCounts::default(), |mut counts, m| {
        match m.status {
            ModuleStatus::Completed => counts.completed += 1,
            ModuleStatus::InProgress => counts.in_progress += 1,
            ModuleStatus::NotStarted => counts.not_started += 1,
            ModuleStatus::Failed => counts.failed += 1,
        }
        counts
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done(id: &str, score: Option<f64>) -> Module {
        let module = Module::new(id, id)
            .with_completed(true)
            .with_status(ModuleStatus::Completed);
        match score {
            Some(s) => module.with_score(s),
            None => module,
        }
    }

    fn open(id: &str) -> Module {
        Module::new(id, id).with_status(ModuleStatus::InProgress)
    }

    #[test]
    fn test_completion_empty_is_zero() {
        assert_eq!(completion_percentage(&[]), 0);
    }

    #[test]
    fn test_completion_all_done_is_hundred() {
        let modules = vec![done("a", None), done("b", Some(50.0))];
        assert_eq!(completion_percentage(&modules), 100);
    }

    #[test]
    fn test_completion_rounds_half_up() {
        // 1/8 = 12.5%
        let mut modules = vec![done("a", None)];
        modules.extend((0..7).map(|i| open(&format!("o{}", i))));
        assert_eq!(completion_percentage(&modules), 13);

        // 1/3 = 33.33%, 2/3 = 66.67%
        assert_eq!(completion_percentage(&[done("a", None), open("b"), open("c")]), 33);
        assert_eq!(completion_percentage(&[done("a", None), done("b", None), open("c")]), 67);
    }

    #[test]
    fn test_completion_stays_in_range() {
        for total in 1..=12 {
            for completed in 0..=total {
                let modules: Vec<_> = (0..total)
                    .map(|i| {
                        if i < completed {
                            done(&i.to_string(), None)
                        } else {
                            open(&i.to_string())
                        }
                    })
                    .collect();
                let pct = completion_percentage(&modules);
                assert!(pct <= 100);
                assert_eq!(pct == 100, completed == total);
            }
        }
    }

    #[test]
    fn test_completion_reads_completed_flag_not_status() {
        let modules = vec![
            Module::new("a", "a").with_completed(true).with_status(ModuleStatus::InProgress),
            Module::new("b", "b").with_status(ModuleStatus::Completed),
        ];
        assert_eq!(completion_percentage(&modules), 50);
    }

    #[test]
    fn test_average_ignores_incomplete_scores() {
        let modules = vec![Module::new("a", "a").with_score(100.0)];
        assert_eq!(average_score(&modules), 0);
    }

    #[test]
    fn test_average_skips_unscored_completed() {
        let modules = vec![done("a", Some(80.0)), done("b", None)];
        assert_eq!(average_score(&modules), 80);
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average_score(&[]), 0);
    }

    #[test]
    fn test_average_rounds() {
        let modules = vec![done("a", Some(92.0)), done("b", Some(88.0)), done("c", Some(91.0))];
        // 271 / 3 = 90.33
        assert_eq!(average_score(&modules), 90);

        let modules = vec![done("a", Some(90.0)), done("b", Some(91.0))];
        assert_eq!(average_score(&modules), 91);
    }

    #[test]
    fn test_average_does_not_clamp() {
        let modules = vec![done("a", Some(150.0)), done("b", Some(130.0))];
        assert_eq!(average_score(&modules), 140);
    }

    #[test]
    fn test_average_counts_completed_flag_even_when_status_disagrees() {
        // Pinned: the completed flag alone decides membership in the average.
        let modules = vec![
            done("a", Some(90.0)),
            Module::new("b", "b")
                .with_completed(true)
                .with_status(ModuleStatus::Failed)
                .with_score(50.0),
        ];
        assert_eq!(average_score(&modules), 70);
    }

    #[test]
    fn test_scored_modules_keeps_input_order() {
        let modules = vec![done("a", Some(70.0)), done("b", None), open("c"), done("d", Some(10.0))];
        let ids: Vec<_> = scored_modules(&modules).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn test_status_counts_use_status_label() {
        let modules = vec![
            done("a", None),
            open("b"),
            Module::new("c", "c"),
            Module::new("d", "d").with_status(ModuleStatus::Failed).with_completed(true),
        ];
        let counts = status_counts(&modules);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.not_started, 1);
        assert_eq!(counts.failed, 1);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get(ModuleStatus::Failed), 1);
    }
}
