//! Quiz value types and join-code helpers.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Minimum length of a test join code.
pub const CODE_MIN_LEN: usize = 4;
/// Maximum length of a test join code.
pub const CODE_MAX_LEN: usize = 8;

/// One selectable answer inside a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Option identifier referenced by the answer key (1-based by convention).
    pub id: i32,
    pub text: String,
}

/// Generate a random numeric join code of 4 to 8 digits.
///
/// Codes are short enough to read out to a room of test takers;
/// uniqueness is enforced by the database, not here.
pub fn generate_test_code() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(CODE_MIN_LEN..=CODE_MAX_LEN);
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0u8..10)))
        .collect()
}

/// Whether `code` is an acceptable join code (4-8 ASCII digits).
pub fn is_valid_test_code(code: &str) -> bool {
    (CODE_MIN_LEN..=CODE_MAX_LEN).contains(&code.len())
        && code.bytes().all(|b| b.is_ascii_digit())
}

/// Check a question's options and answer key for internal consistency.
///
/// Requires at least two options, unique option ids, a non-empty answer
/// key, and every answer id to reference an existing option.
pub fn validate_question(
    options: &[QuestionOption],
    correct_answers: &[i32],
) -> Result<(), String> {
    if options.len() < 2 {
        return Err("A question needs at least two options".to_string());
    }

    let mut ids: Vec<i32> = options.iter().map(|o| o.id).collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != options.len() {
        return Err("Option ids must be unique".to_string());
    }

    if correct_answers.is_empty() {
        return Err("At least one correct answer is required".to_string());
    }
    for answer in correct_answers {
        if !ids.contains(answer) {
            return Err(format!(
                "Correct answer {answer} does not match any option id"
            ));
        }
    }

    Ok(())
}
