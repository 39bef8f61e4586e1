use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::question::QuestionRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum SessionStatus {
    NoDocument,
    InProgress,
    Completed,
}

/// Per-client quiz state, owned by the session store and mutated only
/// through the orchestrator's transitions.
#[derive(Clone, Debug)]
pub struct QuizSession {
    pub session_id: String,
    pub raw_text: String,
    pub segments: Vec<String>,
    /// Stored reduced modulo `segments.len()`; after `k` question
    /// issuances the cursor equals `k mod segments.len()`.
    pub segment_cursor: usize,
    pub questions_asked: u32,
    pub correct_count: u32,
    pub outstanding_question: Option<QuestionRecord>,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(session_id: &str) -> Self {
        QuizSession {
            session_id: session_id.to_string(),
            raw_text: String::new(),
            segments: Vec::new(),
            segment_cursor: 0,
            questions_asked: 0,
            correct_count: 0,
            outstanding_question: None,
            status: SessionStatus::NoDocument,
            created_at: Utc::now(),
        }
    }

    /// Replace the session's material with a freshly ingested document.
    /// Resets the cursor, both counters, and any outstanding question.
    pub fn reset_with_document(&mut self, raw_text: String, segments: Vec<String>) {
        self.raw_text = raw_text;
        self.segments = segments;
        self.segment_cursor = 0;
        self.questions_asked = 0;
        self.correct_count = 0;
        self.outstanding_question = None;
        self.status = SessionStatus::InProgress;
    }

    /// The segment the next question should be grounded on, without
    /// advancing the cursor. `None` while no document is ingested.
    pub fn current_segment(&self) -> Option<&str> {
        self.segments.get(self.segment_cursor).map(String::as_str)
    }

    /// Advance the cursor by one issuance, wrapping once the material is
    /// exhausted. The document is intentionally reused cyclically.
    pub fn advance_cursor(&mut self) {
        if !self.segments.is_empty() {
            self.segment_cursor = (self.segment_cursor + 1) % self.segments.len();
        }
    }

    pub fn has_outstanding_question(&self) -> bool {
        self.outstanding_question.is_some()
    }
}
