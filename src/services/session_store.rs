use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::models::domain::QuizSession;

/// In-memory map of session identifier to quiz session, created once at
/// process start and shared across workers.
///
/// Each session sits behind its own `Mutex`, so transitions on one session
/// are serialized while independent sessions never contend beyond the map
/// insertion path. Sessions are never evicted; the map grows with the
/// number of distinct clients for the process lifetime.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<QuizSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the session for `session_id`, lazily creating a fresh one on
    /// first access. Creation is race-safe: concurrent first requests for
    /// the same identifier resolve to the same session.
    pub async fn get_or_create(&self, session_id: &str) -> Arc<Mutex<QuizSession>> {
        if let Some(session) = self.sessions.read().await.get(session_id) {
            return session.clone();
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                log::info!("Creating quiz session for client {}", session_id);
                Arc::new(Mutex::new(QuizSession::new(session_id)))
            })
            .clone()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
