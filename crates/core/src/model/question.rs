use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Handbook chapter a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    History,
    Government,
    Customs,
    Values,
    Society,
}

impl Category {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::History => "history",
            Category::Government => "government",
            Category::Customs => "customs",
            Category::Values => "values",
            Category::Society => "society",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::History => "History",
            Category::Government => "Government",
            Category::Customs => "Customs",
            Category::Values => "Values",
            Category::Society => "Society",
        }
    }
}

/// Persisted/embedded shape for a question.
///
/// This mirrors the domain `Question` so the bank loader can deserialize the
/// raw data without leaking serialization concerns into the domain type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u64,
    pub category: Category,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub explanation: String,
    #[serde(default)]
    pub common: bool,
}

/// A single multiple-choice question. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    category: Category,
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
    common: bool,
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question {id} has an empty prompt")]
    EmptyPrompt { id: u64 },

    #[error("question {id} has an empty option text")]
    EmptyOption { id: u64 },

    #[error("question {id} needs at least two options, got {len}")]
    TooFewOptions { id: u64, len: usize },

    #[error("question {id} marks option {index} correct but only has {len} options")]
    CorrectOptionOutOfRange { id: u64, index: usize, len: usize },
}

impl Question {
    /// Validate a record into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or an option is blank, fewer than
    /// two options are given, or the correct index does not address an option.
    pub fn from_record(record: QuestionRecord) -> Result<Self, QuestionError> {
        let id = record.id;
        if record.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { id });
        }
        let len = record.options.len();
        if len < 2 {
            return Err(QuestionError::TooFewOptions { id, len });
        }
        if record.options.iter().any(|option| option.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { id });
        }
        if record.correct_option >= len {
            return Err(QuestionError::CorrectOptionOutOfRange {
                id,
                index: record.correct_option,
                len,
            });
        }

        Ok(Self {
            id: QuestionId::new(record.id),
            category: record.category,
            prompt: record.prompt,
            options: record.options,
            correct_option: record.correct_option,
            explanation: record.explanation,
            common: record.common,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The text of the option at `index`, if it exists.
    #[must_use]
    pub fn option_text(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// The text of the correct option. Always present per the type invariant.
    #[must_use]
    pub fn correct_option_text(&self) -> &str {
        &self.options[self.correct_option]
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Whether this question is in the high-frequency pool.
    #[must_use]
    pub fn is_common(&self) -> bool {
        self.common
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
