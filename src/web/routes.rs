use actix_web::{error, web, HttpResponse};
use log::warn;
use serde_json::json;

use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        warn!("Rejected request body: {}", detail);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": detail })),
        )
        .into()
    });

    cfg.app_data(json_config)
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check))
        .route("/quiet-time", web::post().to(handlers::quiet_time))
        .route("/recommend-books", web::post().to(handlers::recommend_books))
        .route("/bible-study", web::post().to(handlers::bible_study))
        .route("/answer-question", web::post().to(handlers::answer_question));
}
