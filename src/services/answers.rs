use rand::seq::SliceRandom;

use crate::models::domain::AnswerOption;

/// Tag the correct and wrong answer and return them in uniformly random
/// order, so the correct answer's position carries no signal.
pub fn shuffle_answers(correct: &str, wrong: &str) -> Vec<AnswerOption> {
    let mut answers = vec![
        AnswerOption {
            text: correct.to_string(),
            is_correct: true,
        },
        AnswerOption {
            text: wrong.to_string(),
            is_correct: false,
        },
    ];
    answers.shuffle(&mut rand::thread_rng());
    answers
}
