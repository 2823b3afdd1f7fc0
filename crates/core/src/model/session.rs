use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::question::Question;

/// Number of questions drawn for a high-frequency run, pool permitting.
pub const COMMON_DRAW_SIZE: usize = 40;

/// Number of questions in a full mock test.
pub const MOCK_TEST_SIZE: usize = 24;

/// Correct answers required to pass. One absolute count for both modes,
/// matching the real exam's 18-of-24 mark.
pub const PASS_THRESHOLD: u32 = 18;

//
// ─── TEST MODE ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestMode {
    HighFrequency,
    Mock,
}

impl TestMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TestMode::HighFrequency => "high-frequency",
            TestMode::Mock => "mock",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TestMode::HighFrequency => "High Impact 40",
            TestMode::Mock => "Full Mock Exam",
        }
    }
}

impl fmt::Display for TestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTestModeError {
    raw: String,
}

impl fmt::Display for ParseTestModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown test mode: {}", self.raw)
    }
}

impl std::error::Error for ParseTestModeError {}

impl FromStr for TestMode {
    type Err = ParseTestModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high-frequency" | "common" => Ok(TestMode::HighFrequency),
            "mock" | "full" => Ok(TestMode::Mock),
            _ => Err(ParseTestModeError { raw: s.to_string() }),
        }
    }
}

//
// ─── SESSION RESULT ────────────────────────────────────────────────────────────
//

/// Immutable outcome snapshot produced when a session is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    mode: TestMode,
    correct: u32,
    total: u32,
    score: u32,
    passed: bool,
    completed_at: DateTime<Utc>,
}

impl SessionResult {
    /// Build a result from raw counts, deriving score and pass/fail.
    #[must_use]
    pub fn from_counts(
        mode: TestMode,
        correct: u32,
        total: u32,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let score = if total == 0 {
            0
        } else {
            (f64::from(correct) * 100.0 / f64::from(total)).round() as u32
        };
        Self {
            mode,
            correct,
            total,
            score,
            passed: correct >= PASS_THRESHOLD,
            completed_at,
        }
    }

    #[must_use]
    pub fn mode(&self) -> TestMode {
        self.mode
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Percentage score in `[0, 100]`, rounded to the nearest integer.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for this session")]
    Empty,

    #[error("session already completed")]
    Completed,

    #[error("option {index} is out of range for a question with {len} options")]
    OptionOutOfRange { index: usize, len: usize },
}

/// What happened when the session was asked to move forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The cursor moved to the next question.
    Continue,
    /// The cursor was on the last question; the session finalized.
    Completed(SessionResult),
}

/// One in-progress or completed test attempt.
///
/// Holds the question sequence drawn at start, the cursor, and a sparse
/// position → option-index answer map, so "unanswered" stays distinguishable
/// from "answered option 0". Once `completed_at` is set the session rejects
/// further mutation but remains readable for the review screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    mode: TestMode,
    questions: Vec<Question>,
    current: usize,
    answers: BTreeMap<usize, usize>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a session over an already-drawn question sequence.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(
        mode: TestMode,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            mode,
            questions,
            current: 0,
            answers: BTreeMap::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn mode(&self) -> TestMode {
        self.mode
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based cursor position, always within `[0, total)`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question under the cursor. The cursor invariant keeps this total.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// The recorded answer for `position`, if any.
    #[must_use]
    pub fn answer_at(&self, position: usize) -> Option<usize> {
        self.answers.get(&position).copied()
    }

    /// The recorded answer for the question under the cursor, if any.
    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.answer_at(self.current)
    }

    /// Number of positions with a recorded answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Whether the recorded answer at `position` matches the correct option.
    /// Unanswered positions are never correct.
    #[must_use]
    pub fn answer_is_correct(&self, position: usize) -> bool {
        match (self.questions.get(position), self.answers.get(&position)) {
            (Some(question), Some(answer)) => *answer == question.correct_option(),
            _ => false,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Record `option_index` as the answer for the current question,
    /// overwriting any earlier choice. The cursor does not move.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after finalization and
    /// `SessionError::OptionOutOfRange` for an index with no matching option.
    pub fn select_option(&mut self, option_index: usize) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        let len = self.current_question().options().len();
        if option_index >= len {
            return Err(SessionError::OptionOutOfRange {
                index: option_index,
                len,
            });
        }

        self.answers.insert(self.current, option_index);
        Ok(())
    }

    /// Move the cursor forward, or finalize when it sits on the last question.
    ///
    /// `now` should come from the services layer clock; it only matters when
    /// the call finalizes.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<AdvanceOutcome, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Ok(AdvanceOutcome::Continue)
        } else {
            let result = self.finalize(now)?;
            Ok(AdvanceOutcome::Completed(result))
        }
    }

    /// Move the cursor back one question; a no-op at position 0.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn retreat(&mut self) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        self.current = self.current.saturating_sub(1);
        Ok(())
    }

    /// Score the session and mark it complete. Unanswered positions count as
    /// incorrect; the answer map stays readable for review.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if called twice.
    pub fn finalize(&mut self, now: DateTime<Utc>) -> Result<SessionResult, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        let correct = (0..self.questions.len())
            .filter(|position| self.answer_is_correct(*position))
            .count();
        let correct = u32::try_from(correct).unwrap_or(u32::MAX);
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);

        self.completed_at = Some(now);
        Ok(SessionResult::from_counts(self.mode, correct, total, now))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::{Category, QuestionRecord};
    use crate::time::fixed_now;

    fn build_question(id: u64, correct_option: usize) -> Question {
        Question::from_record(QuestionRecord {
            id,
            category: Category::Government,
            prompt: format!("Question {id}?"),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_option,
            explanation: format!("Answer {id}."),
            common: true,
        })
        .unwrap()
    }

    fn build_session(len: usize) -> Session {
        let questions = (1..=len as u64).map(|id| build_question(id, 0)).collect();
        Session::new(TestMode::Mock, questions, fixed_now()).unwrap()
    }

    #[test]
    fn empty_session_returns_error() {
        let err = Session::new(TestMode::Mock, Vec::new(), fixed_now()).unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[test]
    fn select_option_overwrites_previous_choice() {
        let mut session = build_session(3);
        session.select_option(1).unwrap();
        session.select_option(2).unwrap();
        assert_eq!(session.current_answer(), Some(2));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn select_option_rejects_out_of_range_index() {
        let mut session = build_session(3);
        let err = session.select_option(4).unwrap_err();
        assert!(matches!(
            err,
            SessionError::OptionOutOfRange { index: 4, len: 4 }
        ));
        assert_eq!(session.current_answer(), None);
    }

    #[test]
    fn advance_moves_cursor_without_completing() {
        let mut session = build_session(3);
        assert_eq!(session.started_at(), fixed_now());
        let outcome = session.advance(fixed_now()).unwrap();
        assert_eq!(outcome, AdvanceOutcome::Continue);
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_complete());
        assert_eq!(session.completed_at(), None);
    }

    #[test]
    fn advance_on_last_question_finalizes() {
        let mut session = build_session(2);
        session.select_option(0).unwrap();
        session.advance(fixed_now()).unwrap();
        session.select_option(1).unwrap();

        let outcome = session.advance(fixed_now()).unwrap();
        let AdvanceOutcome::Completed(result) = outcome else {
            panic!("expected completion");
        };
        assert!(session.is_complete());
        assert_eq!(session.completed_at(), Some(fixed_now()));
        assert_eq!(result.correct(), 1);
        assert_eq!(result.total(), 2);
        assert_eq!(result.score(), 50);
    }

    #[test]
    fn retreat_is_a_noop_at_the_first_question() {
        let mut session = build_session(3);
        session.retreat().unwrap();
        assert_eq!(session.current_index(), 0);

        session.advance(fixed_now()).unwrap();
        session.retreat().unwrap();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn answers_survive_navigation() {
        let mut session = build_session(3);
        session.select_option(2).unwrap();
        session.advance(fixed_now()).unwrap();
        session.retreat().unwrap();
        assert_eq!(session.current_answer(), Some(2));
    }

    #[test]
    fn completed_session_rejects_mutation() {
        let mut session = build_session(1);
        session.advance(fixed_now()).unwrap();

        assert!(matches!(
            session.select_option(0),
            Err(SessionError::Completed)
        ));
        assert!(matches!(
            session.advance(fixed_now()),
            Err(SessionError::Completed)
        ));
        assert!(matches!(session.retreat(), Err(SessionError::Completed)));
        assert!(matches!(
            session.finalize(fixed_now()),
            Err(SessionError::Completed)
        ));
    }

    #[test]
    fn unanswered_positions_never_count_as_correct() {
        let mut session = build_session(4);
        // Answer only the first question, correctly.
        session.select_option(0).unwrap();
        let result = session.finalize(fixed_now()).unwrap();
        assert_eq!(result.correct(), 1);
        assert_eq!(result.score(), 25);
        assert!(!result.passed());
    }

    #[test]
    fn perfect_session_scores_100() {
        let questions: Vec<Question> = (1..=24).map(|id| build_question(id, 3)).collect();
        let mut session = Session::new(TestMode::Mock, questions, fixed_now()).unwrap();
        loop {
            session.select_option(3).unwrap();
            if let AdvanceOutcome::Completed(result) = session.advance(fixed_now()).unwrap() {
                assert_eq!(result.score(), 100);
                assert!(result.passed());
                break;
            }
        }
    }

    #[test]
    fn pass_threshold_is_independent_of_session_length() {
        let at = fixed_now();
        let long = SessionResult::from_counts(TestMode::HighFrequency, 18, 40, at);
        assert!(long.passed());
        assert_eq!(long.score(), 45);

        let short = SessionResult::from_counts(TestMode::Mock, 17, 24, at);
        assert!(!short.passed());
        assert_eq!(short.score(), 71);
    }

    #[test]
    fn score_stays_within_bounds() {
        let at = fixed_now();
        for correct in 0..=24 {
            let result = SessionResult::from_counts(TestMode::Mock, correct, 24, at);
            assert!(result.score() <= 100);
            assert_eq!(result.passed(), correct >= PASS_THRESHOLD);
        }
    }

    #[test]
    fn mode_parses_from_route_segment() {
        assert_eq!(
            "high-frequency".parse::<TestMode>().unwrap(),
            TestMode::HighFrequency
        );
        assert_eq!("mock".parse::<TestMode>().unwrap(), TestMode::Mock);
        assert!("practice".parse::<TestMode>().is_err());
        assert_eq!(TestMode::HighFrequency.to_string(), "high-frequency");
    }
}
