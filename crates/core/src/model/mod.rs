mod ids;
mod progress;
mod question;
mod session;

pub use ids::QuestionId;
pub use progress::{Progress, ProgressStats};
pub use question::{Category, Question, QuestionError, QuestionRecord};
pub use session::{
    AdvanceOutcome, COMMON_DRAW_SIZE, MOCK_TEST_SIZE, PASS_THRESHOLD, ParseTestModeError, Session,
    SessionError, SessionResult, TestMode,
};
