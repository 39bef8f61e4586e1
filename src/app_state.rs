use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        extraction_service::TikaTextExtractor,
        generation_service::{OpenAiQuestionModel, QuestionGenerator},
        quiz_service::QuizService,
        session_store::SessionStore,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub session_store: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session_store = Arc::new(SessionStore::new());
        let extractor = Arc::new(TikaTextExtractor::new(&config));
        let model = Arc::new(OpenAiQuestionModel::new(&config));
        let generator = Arc::new(QuestionGenerator::new(model));

        let quiz_service = Arc::new(QuizService::new(
            session_store.clone(),
            extractor,
            generator,
            config.questions_amount,
            config.segment_max_chars,
        ));

        Self {
            quiz_service,
            session_store,
            config: Arc::new(config),
        }
    }
}
