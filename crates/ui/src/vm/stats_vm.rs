use britpass_core::model::Progress;

use crate::vm::time_fmt::format_date;

/// One row of the recent test log, newest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRowVm {
    pub date: String,
    pub mode_label: &'static str,
    pub score_label: String,
    pub outcome_label: &'static str,
    pub passed: bool,
}

#[must_use]
pub fn map_history_rows(progress: &Progress) -> Vec<HistoryRowVm> {
    progress
        .history()
        .iter()
        .rev()
        .map(|result| HistoryRowVm {
            date: format_date(result.completed_at()),
            mode_label: result.mode().label(),
            score_label: format!("{}%", result.score()),
            outcome_label: if result.passed() { "Pass" } else { "Fail" },
            passed: result.passed(),
        })
        .collect()
}

/// One bar of the performance trend strip, oldest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendBarVm {
    pub score: u32,
    pub passed: bool,
    pub title: String,
}

#[must_use]
pub fn map_trend_bars(progress: &Progress) -> Vec<TrendBarVm> {
    progress
        .history()
        .iter()
        .enumerate()
        .map(|(index, result)| TrendBarVm {
            score: result.score(),
            passed: result.passed(),
            title: format!("Test {}: {}%", index + 1, result.score()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use britpass_core::model::{SessionResult, TestMode};
    use britpass_core::time::fixed_now;

    fn build_progress() -> Progress {
        let mut progress = Progress::default();
        progress.record(SessionResult::from_counts(TestMode::Mock, 20, 24, fixed_now()));
        progress.record(SessionResult::from_counts(
            TestMode::HighFrequency,
            10,
            40,
            fixed_now(),
        ));
        progress
    }

    #[test]
    fn history_rows_are_newest_first() {
        let rows = map_history_rows(&build_progress());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].score_label, "25%");
        assert_eq!(rows[0].mode_label, "High Impact 40");
        assert_eq!(rows[0].outcome_label, "Fail");
        assert_eq!(rows[1].score_label, "83%");
        assert_eq!(rows[1].mode_label, "Full Mock Exam");
        assert!(rows[1].passed);
        assert_eq!(rows[1].date, "14 Nov 2023");
    }

    #[test]
    fn trend_bars_stay_chronological() {
        let bars = map_trend_bars(&build_progress());
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].score, 83);
        assert_eq!(bars[0].title, "Test 1: 83%");
        assert_eq!(bars[1].score, 25);
        assert!(!bars[1].passed);
    }
}
