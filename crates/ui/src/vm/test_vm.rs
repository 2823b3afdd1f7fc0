use britpass_core::model::Session;

/// Everything the test screen needs to render the question under the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub position: usize,
    pub total: usize,
    pub category: &'static str,
    pub common: bool,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub is_first: bool,
    pub is_last: bool,
}

impl QuestionVm {
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Question {} of {}", self.position + 1, self.total)
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.selected.is_some() {
            "Answered"
        } else {
            "Pending"
        }
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.is_last {
            "Finish Test"
        } else {
            "Next Question"
        }
    }

    /// How far through the session the cursor is, as a whole percentage.
    #[must_use]
    pub fn percent_complete(&self) -> usize {
        ((self.position + 1) * 100) / self.total
    }
}

#[must_use]
pub fn map_question(session: &Session) -> QuestionVm {
    let question = session.current_question();
    QuestionVm {
        position: session.current_index(),
        total: session.total_questions(),
        category: question.category().label(),
        common: question.is_common(),
        prompt: question.prompt().to_string(),
        options: question.options().to_vec(),
        selected: session.current_answer(),
        is_first: session.current_index() == 0,
        is_last: session.is_last_question(),
    }
}

/// One row of the per-question review on the result screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub number: usize,
    pub prompt: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

#[must_use]
pub fn map_review_rows(session: &Session) -> Vec<ReviewRowVm> {
    session
        .questions()
        .iter()
        .enumerate()
        .map(|(position, question)| {
            let your_answer = session
                .answer_at(position)
                .and_then(|index| question.option_text(index))
                .map(str::to_string);
            ReviewRowVm {
                number: position + 1,
                prompt: question.prompt().to_string(),
                your_answer,
                correct_answer: question.correct_option_text().to_string(),
                is_correct: session.answer_is_correct(position),
                explanation: question.explanation().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use britpass_core::model::{Category, Question, QuestionRecord, TestMode};
    use britpass_core::time::fixed_now;

    fn build_question(id: u64) -> Question {
        Question::from_record(QuestionRecord {
            id,
            category: Category::Customs,
            prompt: format!("Question {id}?"),
            options: vec!["A".into(), "B".into(), "C".into()],
            correct_option: 1,
            explanation: format!("Answer {id}."),
            common: false,
        })
        .unwrap()
    }

    fn build_session(len: u64) -> Session {
        let questions = (1..=len).map(build_question).collect();
        Session::new(TestMode::Mock, questions, fixed_now()).unwrap()
    }

    #[test]
    fn question_vm_tracks_cursor_and_labels() {
        let mut session = build_session(2);
        let vm = map_question(&session);
        assert_eq!(vm.progress_label(), "Question 1 of 2");
        assert_eq!(vm.status_label(), "Pending");
        assert_eq!(vm.next_label(), "Next Question");
        assert_eq!(vm.percent_complete(), 50);
        assert!(vm.is_first);
        assert!(!vm.is_last);
        assert!(!vm.common);

        session.select_option(1).unwrap();
        session.advance(fixed_now()).unwrap();
        let vm = map_question(&session);
        assert_eq!(vm.progress_label(), "Question 2 of 2");
        assert_eq!(vm.next_label(), "Finish Test");
        assert_eq!(vm.percent_complete(), 100);
        assert_eq!(vm.selected, None);
        assert!(vm.is_last);
    }

    #[test]
    fn review_rows_mark_correct_wrong_and_unanswered() {
        let mut session = build_session(3);
        session.select_option(1).unwrap(); // correct
        session.advance(fixed_now()).unwrap();
        session.select_option(0).unwrap(); // wrong
        session.advance(fixed_now()).unwrap();
        // third left unanswered
        session.finalize(fixed_now()).unwrap();

        let rows = map_review_rows(&session);
        assert_eq!(rows.len(), 3);

        assert!(rows[0].is_correct);
        assert_eq!(rows[0].your_answer.as_deref(), Some("B"));

        assert!(!rows[1].is_correct);
        assert_eq!(rows[1].your_answer.as_deref(), Some("A"));
        assert_eq!(rows[1].correct_answer, "B");

        assert!(!rows[2].is_correct);
        assert_eq!(rows[2].your_answer, None);
        assert_eq!(rows[2].number, 3);
    }
}
