use actix_web::{web, HttpResponse, Responder};
use log::{debug, error, info, warn};
use serde_json::json;
use tera::Context;
use tokio::task::JoinError;
use uuid::Uuid;

use crate::model::AssistantError;
use crate::web::models::{
    AssistantResponse, BibleStudyRequest, BookRequest, QuestionRequest, QuietTimeRequest,
};
use crate::web::AppState;

pub const QUESTION_GUIDANCE: &str = "Please provide a specific question about Christianity.";
pub const QUESTION_APOLOGY: &str =
    "I apologize, but there was an issue processing your question. Please try again later.";

// Index page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let mut context = Context::new();
    context.insert("title", "Church AI Assistant");
    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub async fn quiet_time(
    data: web::Data<AppState>,
    req: web::Json<QuietTimeRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    let duration = req.duration_minutes();
    info!(
        "Quiet time request {}: {} minutes, focus {:?}",
        request_id, duration, req.focus_area
    );

    let outcome = data
        .assistant
        .quiet_time_plan(duration, req.focus_area.as_deref())
        .await;
    envelope(request_id, outcome)
}

pub async fn recommend_books(
    data: web::Data<AppState>,
    req: web::Json<BookRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    let level = req.level();
    let count = req.book_count();
    info!(
        "Book request {}: {} books, level {:?}, topic {:?}",
        request_id, count, level, req.topic
    );

    let outcome = data
        .assistant
        .recommend_books(req.topic.as_deref(), level, count)
        .await;
    envelope(request_id, outcome)
}

pub async fn bible_study(
    data: web::Data<AppState>,
    req: web::Json<BibleStudyRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    info!("Bible study request {}: {} characters", request_id, req.passage.len());
    debug!("Passage for {}: {}", request_id, req.passage);

    let outcome = data.assistant.bible_study_guide(&req.passage).await;
    envelope(request_id, outcome)
}

pub async fn answer_question(
    data: web::Data<AppState>,
    req: web::Json<QuestionRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    let question = match req.question() {
        Some(q) => q.to_string(),
        None => {
            info!("Question request {} had no question", request_id);
            return HttpResponse::Ok().json(AssistantResponse::result(QUESTION_GUIDANCE));
        }
    };
    info!("Question request {}: {} characters", request_id, question.len());
    debug!("Question for {}: {}", request_id, question);

    // A panic inside the call surfaces here as a JoinError.
    let assistant = data.assistant.clone();
    let joined = tokio::spawn(async move { assistant.answer_question(&question).await }).await;
    answer_envelope(request_id, joined)
}

fn envelope(request_id: Uuid, outcome: Result<String, AssistantError>) -> HttpResponse {
    let result = match outcome {
        Ok(text) => text,
        Err(e) => {
            warn!("Request {} failed: {}", request_id, e);
            e.to_string()
        }
    };
    HttpResponse::Ok().json(AssistantResponse::result(result))
}

fn answer_envelope(
    request_id: Uuid,
    joined: Result<Result<String, AssistantError>, JoinError>,
) -> HttpResponse {
    match joined {
        Ok(outcome) => envelope(request_id, outcome),
        Err(e) => {
            error!("Error processing question {}: {}", request_id, e);
            HttpResponse::Ok().json(AssistantResponse {
                result: QUESTION_APOLOGY.to_string(),
                error: Some(e.to_string()),
            })
        }
    }
}
