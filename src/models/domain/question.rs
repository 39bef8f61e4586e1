use serde::{Deserialize, Serialize};

/// A generated question as held by a session while it awaits an answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub question_text: String,
    pub correct_answer: String,
    pub wrong_answer: String,
}

/// One of the two answer choices presented to the client.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}
