use serde::Serialize;

use crate::models::domain::AnswerOption;

/// The view returned while the quiz is in progress: the current question
/// with its shuffled answers and the running counters. `result` carries the
/// feedback for the previously answered question ("Yes!" / "No :(") and is
/// absent on the first question of a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub question_text: String,
    pub answers: Vec<AnswerOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub questions_asked: u32,
    pub correct_count: u32,
    pub questions_amount: u32,
}

/// The terminal view returned once the question quota is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreView {
    pub questions_asked: u32,
    pub correct_count: u32,
    pub questions_amount: u32,
    pub feedback_text: String,
}

/// Outcome of an answer submission: either the next question or, once the
/// quota is reached, the final score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuizProgress {
    Question(QuestionView),
    Score(ScoreView),
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
}
