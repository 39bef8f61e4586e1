use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{DocumentFormat, SessionStatus},
        dto::response::{QuestionView, QuizProgress, ScoreView},
    },
    services::{
        extraction_service::TextExtractor,
        generation_service::QuestionGenerator,
        scoring::{self, ANSWER_CORRECT, ANSWER_WRONG},
        segmenter,
        session_store::SessionStore,
    },
};

/// The per-session quiz state machine: ingests a document, issues one
/// question at a time, grades answers, and closes the quiz once the
/// question quota is reached.
///
/// Every transition runs under the session's own lock, so requests for one
/// session apply in arrival order while independent sessions proceed in
/// parallel. A transition either fully applies or, on a precondition or
/// generation failure, leaves the session exactly as it was.
pub struct QuizService {
    store: Arc<SessionStore>,
    extractor: Arc<dyn TextExtractor>,
    generator: Arc<QuestionGenerator>,
    questions_amount: u32,
    segment_max_chars: usize,
}

impl QuizService {
    pub fn new(
        store: Arc<SessionStore>,
        extractor: Arc<dyn TextExtractor>,
        generator: Arc<QuestionGenerator>,
        questions_amount: u32,
        segment_max_chars: usize,
    ) -> Self {
        Self {
            store,
            extractor,
            generator,
            questions_amount,
            segment_max_chars,
        }
    }

    /// Ingest a document and issue the first question. Replaces whatever
    /// quiz the session was running; counters and cursor start fresh.
    pub async fn start_quiz(
        &self,
        session_id: &str,
        document_bytes: &[u8],
        filename: &str,
    ) -> AppResult<QuestionView> {
        let format = DocumentFormat::from_filename(filename)?;
        let raw_text = self.extractor.extract(document_bytes, format).await?;

        let segments = segmenter::segment(&raw_text, self.segment_max_chars);
        if segments.is_empty() {
            return Err(AppError::EmptyDocument);
        }

        let handle = self.store.get_or_create(session_id).await;
        let mut session = handle.lock().await;

        // Generate before touching the session, so a generation failure
        // leaves any quiz already in progress intact.
        let card = self.generator.generate_question(&segments[0]).await?;

        log::info!(
            "Session {} starts a quiz over {} segments",
            session_id,
            segments.len()
        );

        session.reset_with_document(raw_text, segments);
        session.advance_cursor();
        session.outstanding_question = Some(card.record.clone());

        Ok(QuestionView {
            question_text: card.record.question_text,
            answers: card.answers,
            result: None,
            questions_asked: session.questions_asked,
            correct_count: session.correct_count,
            questions_amount: self.questions_amount,
        })
    }

    /// Grade the outstanding question and either issue the next one or,
    /// once the quota is reached, close the quiz with the final score.
    pub async fn submit_answer(
        &self,
        session_id: &str,
        submitted_answer: &str,
    ) -> AppResult<QuizProgress> {
        let handle = self.store.get_or_create(session_id).await;
        let mut session = handle.lock().await;

        if session.status != SessionStatus::InProgress {
            return Err(AppError::NoActiveQuestion);
        }
        let was_correct = match &session.outstanding_question {
            Some(question) => submitted_answer == question.correct_answer,
            None => return Err(AppError::NoActiveQuestion),
        };

        if session.questions_asked + 1 >= self.questions_amount {
            session.questions_asked += 1;
            if was_correct {
                session.correct_count += 1;
            }
            session.outstanding_question = None;
            session.status = SessionStatus::Completed;

            log::info!(
                "Session {} completed the quiz with {}/{} correct",
                session_id,
                session.correct_count,
                session.questions_asked
            );

            return Ok(QuizProgress::Score(ScoreView {
                questions_asked: session.questions_asked,
                correct_count: session.correct_count,
                questions_amount: self.questions_amount,
                feedback_text: scoring::feedback(session.correct_count, session.questions_asked)
                    .to_string(),
            }));
        }

        let segment = session
            .current_segment()
            .ok_or_else(|| {
                AppError::InternalError("session in progress without segments".to_string())
            })?
            .to_string();

        // Generate the follow-up question before mutating anything: a
        // GenerationError must leave the session unchanged so the client
        // can simply retry the submission.
        let card = self.generator.generate_question(&segment).await?;

        session.questions_asked += 1;
        if was_correct {
            session.correct_count += 1;
        }
        session.advance_cursor();
        session.outstanding_question = Some(card.record.clone());

        let result = if was_correct {
            ANSWER_CORRECT
        } else {
            ANSWER_WRONG
        };

        Ok(QuizProgress::Question(QuestionView {
            question_text: card.record.question_text,
            answers: card.answers,
            result: Some(result.to_string()),
            questions_asked: session.questions_asked,
            correct_count: session.correct_count,
            questions_amount: self.questions_amount,
        }))
    }
}
