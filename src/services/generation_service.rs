use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::{
    config::Config,
    constants::prompts::{build_question_prompt, QUESTION_SYSTEM_PROMPT},
    errors::{AppError, AppResult},
    models::domain::{AnswerOption, QuestionRecord},
    services::answers::shuffle_answers,
};

/// Served when the model delivered output that could not be parsed into a
/// question. The card is fully formed so the quiz keeps moving; the
/// submitted answer is graded against it like any other question.
pub const FALLBACK_QUESTION: &str =
    "The study material could not be turned into a question this time. How do you want to proceed?";
pub const FALLBACK_CORRECT_ANSWER: &str = "Continue with the next question";
pub const FALLBACK_WRONG_ANSWER: &str = "Give up on the quiz";

/// The external question-generation capability: one best-effort completion
/// per call, no retries. Transport or provider failures surface as
/// `GenerationError`; what the model actually said is returned verbatim.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

pub struct OpenAiQuestionModel {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiQuestionModel {
    pub fn new(config: &Config) -> Self {
        let openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
        }
    }
}

#[async_trait]
impl QuestionModel for OpenAiQuestionModel {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(QUESTION_SYSTEM_PROMPT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::GenerationError("model returned no content".to_string()))
    }
}

/// Structured response expected from the model.
#[derive(Debug, Deserialize)]
struct RawGeneration {
    question: String,
    correct_answer: String,
    wrong_answer: String,
}

/// A generated question ready for presentation: the record kept on the
/// session plus the shuffled answer pair shown to the client.
#[derive(Debug, Clone)]
pub struct QuestionCard {
    pub record: QuestionRecord,
    pub answers: Vec<AnswerOption>,
}

/// Adapter over the generation capability. Malformed-but-delivered output
/// is never fatal: callers always get a complete card with a valid answer
/// pair, degraded to the fixed fallback when parsing fails.
pub struct QuestionGenerator {
    model: Arc<dyn QuestionModel>,
}

impl QuestionGenerator {
    pub fn new(model: Arc<dyn QuestionModel>) -> Self {
        Self { model }
    }

    pub async fn generate_question(&self, segment: &str) -> AppResult<QuestionCard> {
        let prompt = build_question_prompt(segment);
        let raw = self.model.complete(&prompt).await?;

        let record = match parse_generation(&raw) {
            Some(record) => record,
            None => {
                log::warn!("Model output was not a valid question, serving fallback");
                QuestionRecord {
                    question_text: FALLBACK_QUESTION.to_string(),
                    correct_answer: FALLBACK_CORRECT_ANSWER.to_string(),
                    wrong_answer: FALLBACK_WRONG_ANSWER.to_string(),
                }
            }
        };

        let answers = shuffle_answers(&record.correct_answer, &record.wrong_answer);
        Ok(QuestionCard { record, answers })
    }
}

static JSON_OBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON object pattern is valid"));

/// Parse the model output, tolerating surrounding prose or code fences the
/// prompt forbids but models still occasionally produce.
fn parse_generation(raw: &str) -> Option<QuestionRecord> {
    let parsed: Option<RawGeneration> = serde_json::from_str(raw.trim()).ok().or_else(|| {
        JSON_OBJECT_RE
            .find(raw)
            .and_then(|m| serde_json::from_str(m.as_str()).ok())
    });

    parsed.map(|raw| QuestionRecord {
        question_text: raw.question,
        correct_answer: raw.correct_answer,
        wrong_answer: raw.wrong_answer,
    })
}
