use actix_web::{post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{SubmitAnswerRequest, UploadParams},
        response::SessionCreatedResponse,
    },
};

/// Mints an opaque session identifier for a new client. The session itself
/// is created lazily on first use.
#[post("/api/sessions")]
async fn create_session() -> HttpResponse {
    HttpResponse::Created().json(SessionCreatedResponse {
        session_id: Uuid::new_v4().to_string(),
    })
}

/// Uploads a study document and starts (or restarts) the session's quiz.
/// The body carries the raw document bytes; the declared format comes from
/// the `filename` query parameter.
#[post("/api/sessions/{session_id}/documents")]
async fn upload_document(
    state: web::Data<AppState>,
    session_id: web::Path<String>,
    params: web::Query<UploadParams>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let view = state
        .quiz_service
        .start_quiz(&session_id, &body, &params.filename)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Submits an answer to the session's outstanding question.
#[post("/api/sessions/{session_id}/answers")]
async fn submit_answer(
    state: web::Data<AppState>,
    session_id: web::Path<String>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let progress = state
        .quiz_service
        .submit_answer(&session_id, &request.answer)
        .await?;
    Ok(HttpResponse::Ok().json(progress))
}
