//! Letter grades and score bands for an average score.

use serde::{Deserialize, Serialize};

/// Letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 90 and above
    A,
    /// 80 to 89
    B,
    /// 70 to 79
    C,
    /// 60 to 69
    D,
    /// Below 60
    F,
}

impl Grade {
    /// Grade for a score.
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 90 => Grade::A,
            s if s >= 80 => Grade::B,
            s if s >= 70 => Grade::C,
            s if s >= 60 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Qualitative band used to style a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 90 and above
    Excellent,
    /// 80 to 89
    Good,
    /// 70 to 79
    Fair,
    /// 60 to 69
    Marginal,
    /// Below 60
    Poor,
}

impl ScoreBand {
    /// Band for a score. Thresholds match [`Grade::from_score`].
    pub fn from_score(score: i64) -> Self {
        match Grade::from_score(score) {
            Grade::A => ScoreBand::Excellent,
            Grade::B => ScoreBand::Good,
            Grade::C => ScoreBand::Fair,
            Grade::D => ScoreBand::Marginal,
            Grade::F => ScoreBand::Poor,
        }
    }
}
