//! Qualitative assessment of a learner's standing.

use serde::{Deserialize, Serialize};

/// One band of the assessment table, evaluated top-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Assessment {
    /// Complete, score >= 90
    Mastery,
    /// Complete, score >= 80
    StrongCompletion,
    /// Complete, score >= 70
    SatisfactoryCompletion,
    /// Complete, score below 70
    CompletionReviewSuggested,
    /// Progress >= 75
    NearCompletion,
    /// Progress >= 50
    Halfway,
    /// Progress >= 25
    EarlyProgress,
    /// Anything else
    JustStarted,
}

impl Assessment {
    /// Pick the first band matching `progress` and `average_score`.
    pub fn from_metrics(progress: u8, average_score: i64) -> Self {
        match (progress, average_score) {
            (100, s) if s >= 90 => Assessment::Mastery,
            (100, s) if s >= 80 => Assessment::StrongCompletion,
            (100, s) if s >= 70 => Assessment::SatisfactoryCompletion,
            (100, _) => Assessment::CompletionReviewSuggested,
            (p, _) if p >= 75 => Assessment::NearCompletion,
            (p, _) if p >= 50 => Assessment::Halfway,
            (p, _) if p >= 25 => Assessment::EarlyProgress,
            _ => Assessment::JustStarted,
        }
    }

    /// The sentence shown to the learner.
    pub fn message(&self) -> &'static str {
        match self {
            Assessment::Mastery => "Excellent work! You've mastered this course.",
            Assessment::StrongCompletion => "Great job completing the course with good scores!",
            Assessment::SatisfactoryCompletion => {
                "You've completed the course with satisfactory results."
            }
            Assessment::CompletionReviewSuggested => {
                "Course completed. Consider reviewing some modules to improve your scores."
            }
            Assessment::NearCompletion => "You're making great progress! Keep going.",
            Assessment::Halfway => "You're halfway there. Keep up the good work!",
            Assessment::EarlyProgress => "You've started your journey. Stay consistent!",
            Assessment::JustStarted => "Just getting started. Take it one module at a time!",
        }
    }
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Assessment message for the given metrics.
pub fn assess(progress: u8, average_score: i64) -> &'static str {
    Assessment::from_metrics(progress, average_score).message()
}
