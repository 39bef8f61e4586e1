use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use studyquiz_server::errors::{AppError, AppResult};
use studyquiz_server::models::domain::{DocumentFormat, SessionStatus};
use studyquiz_server::models::dto::response::QuizProgress;
use studyquiz_server::services::extraction_service::TextExtractor;
use studyquiz_server::services::generation_service::{QuestionGenerator, QuestionModel};
use studyquiz_server::services::quiz_service::QuizService;
use studyquiz_server::services::session_store::SessionStore;

/// Extractor that hands back fixed text regardless of the uploaded bytes.
struct StaticExtractor(String);

#[async_trait]
impl TextExtractor for StaticExtractor {
    async fn extract(&self, _bytes: &[u8], _format: DocumentFormat) -> AppResult<String> {
        Ok(self.0.clone())
    }
}

/// Model that replays a scripted sequence of outputs, then keeps returning
/// a default well-formed question once the script is exhausted.
struct ScriptedModel {
    script: Mutex<VecDeque<AppResult<String>>>,
}

impl ScriptedModel {
    fn new(script: Vec<AppResult<String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

#[async_trait]
impl QuestionModel for ScriptedModel {
    async fn complete(&self, _prompt: &str) -> AppResult<String> {
        let mut script = self.script.lock().await;
        script
            .pop_front()
            .unwrap_or_else(|| Ok(question_json("Q?", "right", "wrong")))
    }
}

fn question_json(question: &str, correct: &str, wrong: &str) -> String {
    serde_json::json!({
        "question": question,
        "correct_answer": correct,
        "wrong_answer": wrong,
    })
    .to_string()
}

fn quiz_service(
    document_text: &str,
    script: Vec<AppResult<String>>,
    questions_amount: u32,
    segment_max_chars: usize,
) -> (QuizService, Arc<SessionStore>) {
    let store = Arc::new(SessionStore::new());
    let service = QuizService::new(
        store.clone(),
        Arc::new(StaticExtractor(document_text.to_string())),
        Arc::new(QuestionGenerator::new(Arc::new(ScriptedModel::new(
            script,
        )))),
        questions_amount,
        segment_max_chars,
    );
    (service, store)
}

// Two lines of ~18 chars each split into two segments under a 20-char bound.
const TWO_SEGMENT_TEXT: &str = "alpha segment line\nbeta segment line";
const THREE_SEGMENT_TEXT: &str = "alpha segment line\nbeta segment line\ngamma segment line";

#[tokio::test]
async fn quiz_completes_after_question_quota() {
    let (service, store) = quiz_service(TWO_SEGMENT_TEXT, Vec::new(), 2, 20);

    let view = service
        .start_quiz("client", b"upload", "notes.txt")
        .await
        .unwrap();
    assert_eq!(view.questions_asked, 0);
    assert_eq!(view.correct_count, 0);
    assert!(view.result.is_none());

    let progress = service.submit_answer("client", "right").await.unwrap();
    let QuizProgress::Question(view) = progress else {
        panic!("expected a second question before the quota");
    };
    assert_eq!(view.result.as_deref(), Some("Yes!"));
    assert_eq!(view.questions_asked, 1);
    assert_eq!(view.correct_count, 1);

    let progress = service.submit_answer("client", "not it").await.unwrap();
    let QuizProgress::Score(score) = progress else {
        panic!("expected the final score at the quota");
    };
    assert_eq!(score.questions_asked, 2);
    assert_eq!(score.correct_count, 1);
    assert_eq!(score.questions_amount, 2);
    // 1/2 falls below the 0.55 boundary.
    assert_eq!(
        score.feedback_text,
        "I would recommend you to spend more time for this topic and try again."
    );

    let handle = store.get_or_create("client").await;
    let session = handle.lock().await;
    assert_eq!(session.status, SessionStatus::Completed);
    assert!(session.outstanding_question.is_none());
}

#[tokio::test]
async fn perfect_run_reports_excellent() {
    let (service, _) = quiz_service(TWO_SEGMENT_TEXT, Vec::new(), 2, 20);

    service
        .start_quiz("client", b"upload", "notes.txt")
        .await
        .unwrap();
    service.submit_answer("client", "right").await.unwrap();
    let progress = service.submit_answer("client", "right").await.unwrap();

    let QuizProgress::Score(score) = progress else {
        panic!("expected the final score");
    };
    assert_eq!(score.correct_count, 2);
    assert_eq!(
        score.feedback_text,
        "Excellent! You are fully prepared with this topic."
    );
}

#[tokio::test]
async fn answer_without_a_quiz_is_rejected() {
    let (service, _) = quiz_service(TWO_SEGMENT_TEXT, Vec::new(), 2, 20);

    let err = service.submit_answer("client", "right").await.unwrap_err();

    assert!(matches!(err, AppError::NoActiveQuestion));
}

#[tokio::test]
async fn sessions_progress_independently() {
    let (service, store) = quiz_service(TWO_SEGMENT_TEXT, Vec::new(), 10, 20);

    service
        .start_quiz("client-a", b"upload", "notes.txt")
        .await
        .unwrap();
    service
        .start_quiz("client-b", b"upload", "notes.txt")
        .await
        .unwrap();

    service.submit_answer("client-a", "right").await.unwrap();
    service.submit_answer("client-a", "right").await.unwrap();

    let a = store.get_or_create("client-a").await;
    let b = store.get_or_create("client-b").await;
    assert_eq!(a.lock().await.questions_asked, 2);
    assert_eq!(b.lock().await.questions_asked, 0);
    assert_eq!(b.lock().await.correct_count, 0);
}

#[tokio::test]
async fn segments_cycle_once_material_is_exhausted() {
    let (service, store) = quiz_service(THREE_SEGMENT_TEXT, Vec::new(), 10, 20);

    service
        .start_quiz("client", b"upload", "notes.txt")
        .await
        .unwrap();
    for _ in 0..3 {
        service.submit_answer("client", "right").await.unwrap();
    }

    // Four questions issued over three segments: the cursor is back past
    // the start, at 4 mod 3.
    let handle = store.get_or_create("client").await;
    let session = handle.lock().await;
    assert_eq!(session.segments.len(), 3);
    assert_eq!(session.segment_cursor, 1);
}

#[tokio::test]
async fn failed_generation_leaves_the_session_retryable() {
    let script = vec![
        Ok(question_json("Q1?", "right", "wrong")),
        Err(AppError::GenerationError("provider unavailable".to_string())),
        Ok(question_json("Q2?", "right", "wrong")),
    ];
    let (service, store) = quiz_service(TWO_SEGMENT_TEXT, script, 10, 20);

    service
        .start_quiz("client", b"upload", "notes.txt")
        .await
        .unwrap();

    let err = service.submit_answer("client", "right").await.unwrap_err();
    assert!(matches!(err, AppError::GenerationError(_)));

    // The failed transition must not have consumed the answer.
    {
        let handle = store.get_or_create("client").await;
        let session = handle.lock().await;
        assert_eq!(session.questions_asked, 0);
        assert_eq!(session.correct_count, 0);
        assert_eq!(
            session.outstanding_question.as_ref().unwrap().question_text,
            "Q1?"
        );
    }

    let progress = service.submit_answer("client", "right").await.unwrap();
    let QuizProgress::Question(view) = progress else {
        panic!("retry should issue the next question");
    };
    assert_eq!(view.question_text, "Q2?");
    assert_eq!(view.questions_asked, 1);
    assert_eq!(view.correct_count, 1);
}

#[tokio::test]
async fn new_document_resets_a_quiz_in_progress() {
    let (service, store) = quiz_service(TWO_SEGMENT_TEXT, Vec::new(), 10, 20);

    service
        .start_quiz("client", b"upload", "notes.txt")
        .await
        .unwrap();
    service.submit_answer("client", "right").await.unwrap();

    let view = service
        .start_quiz("client", b"second upload", "notes.txt")
        .await
        .unwrap();
    assert_eq!(view.questions_asked, 0);
    assert_eq!(view.correct_count, 0);

    let handle = store.get_or_create("client").await;
    let session = handle.lock().await;
    assert_eq!(session.status, SessionStatus::InProgress);
    assert_eq!(session.questions_asked, 0);
    assert_eq!(session.segment_cursor, 1 % session.segments.len());
}
