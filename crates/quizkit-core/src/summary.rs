//! Final results of a completed quiz session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::session::AnsweredRecord;

/// Score and answer review for one completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    /// Identifier of the session this summary was taken from.
    pub session_id: Uuid,
    /// Number of correct answers.
    pub score: usize,
    /// Number of questions asked.
    pub requested_count: usize,
    /// `100 * score / requested_count`.
    pub percentage: f64,
    /// Performance band for `percentage`.
    pub band: PerformanceBand,
    /// Every submitted answer in order.
    pub answered_log: Vec<AnsweredRecord>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl QuizSummary {
    pub fn new(
        session_id: Uuid,
        score: usize,
        requested_count: usize,
        answered_log: Vec<AnsweredRecord>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let percentage = percentage(score, requested_count);
        Self {
            session_id,
            score,
            requested_count,
            percentage,
            band: PerformanceBand::from_percentage(percentage),
            answered_log,
            started_at,
            completed_at,
        }
    }

    /// Records the user got wrong.
    pub fn missed(&self) -> impl Iterator<Item = &AnsweredRecord> {
        self.answered_log.iter().filter(|r| !r.is_correct)
    }

    /// Wall-clock time between start and completion, in seconds.
    pub fn elapsed_secs(&self) -> i64 {
        (self.completed_at - self.started_at).num_seconds()
    }
}

/// Percentage of correct answers; zero when nothing was asked.
pub fn percentage(score: usize, requested_count: usize) -> f64 {
    if requested_count == 0 {
        return 0.0;
    }
    100.0 * score as f64 / requested_count as f64
}

/// Coarse performance band shown alongside the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    /// 80% and above.
    Excellent,
    /// 60% up to 80%.
    Good,
    /// Below 60%.
    KeepLearning,
}

impl PerformanceBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            PerformanceBand::Excellent
        } else if percentage >= 60.0 {
            PerformanceBand::Good
        } else {
            PerformanceBand::KeepLearning
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PerformanceBand::Excellent => {
                "Excellent! You have a strong understanding of child maltreatment issues."
            }
            PerformanceBand::Good => {
                "Good job! You have a solid foundation of knowledge about child maltreatment."
            }
            PerformanceBand::KeepLearning => {
                "Thank you for taking the quiz. There's more to learn about child maltreatment."
            }
        }
    }

    /// Hex colour used for the score card.
    pub fn color(self) -> &'static str {
        match self {
            PerformanceBand::Excellent => "#2ecc71",
            PerformanceBand::Good => "#f39c12",
            PerformanceBand::KeepLearning => "#3498db",
        }
    }
}

impl fmt::Display for PerformanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceBand::Excellent => write!(f, "excellent"),
            PerformanceBand::Good => write!(f, "good"),
            PerformanceBand::KeepLearning => write!(f, "keep learning"),
        }
    }
}
