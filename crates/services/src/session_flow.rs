use std::sync::Arc;

use britpass_core::model::{AdvanceOutcome, Session, SessionResult, TestMode};
use britpass_core::{Bank, Clock};

use crate::draw::draw_questions;
use crate::error::SessionFlowError;
use crate::progress_service::ProgressService;

/// Result of asking the session to move forward.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvanceResult {
    pub is_complete: bool,
    pub result: Option<SessionResult>,
}

/// Orchestrates session start, answering, navigation, and the single
/// persistence side effect when a session completes.
#[derive(Clone)]
pub struct SessionFlowService {
    clock: Clock,
    bank: Arc<Bank>,
    progress: Arc<ProgressService>,
}

impl SessionFlowService {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<Bank>, progress: Arc<ProgressService>) -> Self {
        Self {
            clock,
            bank,
            progress,
        }
    }

    /// Start a new session for the given mode.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError` if the draw comes up empty.
    pub fn start(&self, mode: TestMode) -> Result<Session, SessionFlowError> {
        let questions = draw_questions(&self.bank, mode, &mut rand::rng());
        Ok(Session::new(mode, questions, self.clock.now())?)
    }

    /// Record an answer for the question under the cursor.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError` for completed sessions or out-of-range
    /// option indices.
    pub fn select_option(
        &self,
        session: &mut Session,
        option_index: usize,
    ) -> Result<(), SessionFlowError> {
        Ok(session.select_option(option_index)?)
    }

    /// Move back one question.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError` for completed sessions.
    pub fn retreat(&self, session: &mut Session) -> Result<(), SessionFlowError> {
        Ok(session.retreat()?)
    }

    /// Move forward one question; on the last question this finalizes the
    /// session and appends the result to persisted progress exactly once.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError` for completed sessions or persistence
    /// failures.
    pub async fn advance(&self, session: &mut Session) -> Result<AdvanceResult, SessionFlowError> {
        match session.advance(self.clock.now())? {
            AdvanceOutcome::Continue => Ok(AdvanceResult {
                is_complete: false,
                result: None,
            }),
            AdvanceOutcome::Completed(result) => {
                self.progress.record(result.clone()).await?;
                Ok(AdvanceResult {
                    is_complete: true,
                    result: Some(result),
                })
            }
        }
    }
}
