use thiserror::Error;

use crate::model::{Question, QuestionError, QuestionRecord};

/// The shipped Life in the UK question data.
const LIFE_IN_UK_DATA: &str = include_str!("../data/life_in_uk.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("malformed question data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// The fixed, immutable collection of questions a session draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    questions: Vec<Question>,
}

impl Bank {
    /// Parse and validate a JSON array of question records.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if the payload is not valid JSON or any record
    /// fails domain validation.
    pub fn from_json(data: &str) -> Result<Self, BankError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(data)?;
        let questions = records
            .into_iter()
            .map(Question::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { questions })
    }

    /// Load the embedded Life in the UK bank.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if the embedded data fails validation; with the
    /// shipped data this only happens when the data file itself is broken.
    pub fn life_in_uk() -> Result<Self, BankError> {
        Self::from_json(LIFE_IN_UK_DATA)
    }

    /// Build a bank directly from validated questions.
    #[must_use]
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions flagged as high-frequency.
    pub fn common(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.is_common())
    }
}
