use serde::{Deserialize, Serialize};

use crate::model::session::SessionResult;

/// Persisted aggregate of all past sessions for the user.
///
/// A plain value: callers load it, append results through [`Progress::record`],
/// and hand the updated value back to storage. The average is recomputed from
/// the full history on every append so it always equals the rounded mean of
/// the recorded scores; an empty history means zero average and zero counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    tests_taken: u32,
    average_score: u32,
    history: Vec<SessionResult>,
}

/// Statistics derived from the history on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStats {
    /// Percentage of recorded sessions that passed, 0 when empty.
    pub pass_rate: u32,
    /// Consecutive passes counted backward from the most recent session.
    pub current_streak: u32,
    /// The stored running average score.
    pub average_score: u32,
}

impl Progress {
    #[must_use]
    pub fn tests_taken(&self) -> u32 {
        self.tests_taken
    }

    #[must_use]
    pub fn average_score(&self) -> u32 {
        self.average_score
    }

    /// Chronological history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[SessionResult] {
        &self.history
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    #[must_use]
    pub fn passes(&self) -> u32 {
        let passes = self.history.iter().filter(|r| r.passed()).count();
        u32::try_from(passes).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn failures(&self) -> u32 {
        self.tests_taken.saturating_sub(self.passes())
    }

    /// Append one finished session and recompute the stored aggregates over
    /// the entire history.
    pub fn record(&mut self, result: SessionResult) {
        self.history.push(result);
        self.tests_taken = u32::try_from(self.history.len()).unwrap_or(u32::MAX);

        let sum: u64 = self.history.iter().map(|r| u64::from(r.score())).sum();
        self.average_score = (sum as f64 / self.history.len() as f64).round() as u32;
    }

    /// Derive pass rate, current streak, and average for the stats screen.
    #[must_use]
    pub fn stats(&self) -> ProgressStats {
        let pass_rate = if self.history.is_empty() {
            0
        } else {
            (f64::from(self.passes()) * 100.0 / self.history.len() as f64).round() as u32
        };

        let streak = self
            .history
            .iter()
            .rev()
            .take_while(|result| result.passed())
            .count();

        ProgressStats {
            pass_rate,
            current_streak: u32::try_from(streak).unwrap_or(u32::MAX),
            average_score: self.average_score,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
