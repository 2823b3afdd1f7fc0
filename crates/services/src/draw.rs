use rand::Rng;
use rand::seq::SliceRandom;

use britpass_core::Bank;
use britpass_core::model::{COMMON_DRAW_SIZE, MOCK_TEST_SIZE, Question, TestMode};

/// Draw the question sequence for a new session.
///
/// High-frequency mode shuffles the common-flagged pool and takes up to
/// [`COMMON_DRAW_SIZE`]; a pool smaller than the target yields fewer questions
/// without error. Mock mode shuffles the entire bank and takes up to
/// [`MOCK_TEST_SIZE`]. The shuffle is uniform; pass a seeded generator for
/// deterministic selection in tests.
#[must_use]
pub fn draw_questions<R: Rng + ?Sized>(bank: &Bank, mode: TestMode, rng: &mut R) -> Vec<Question> {
    let (mut pool, target) = match mode {
        TestMode::HighFrequency => (bank.common().cloned().collect::<Vec<_>>(), COMMON_DRAW_SIZE),
        TestMode::Mock => (bank.questions().to_vec(), MOCK_TEST_SIZE),
    };

    pool.shuffle(rng);
    pool.truncate(target);
    pool
}
