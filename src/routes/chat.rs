use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{ChatRequest, ChatResponse};
use crate::routes::{bad_request, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/chat", web::post().to(send_message))
        .route("/chat/greeting", web::get().to(greeting));
}

/// POST /api/v1/chat
async fn send_message(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return bad_request("validation_failed", errors.to_string());
    }

    let reply = state.responder.respond(&req.message);
    tracing::debug!("Chat message of {} chars answered", req.message.len());

    HttpResponse::Ok().json(ChatResponse {
        id: uuid::Uuid::new_v4(),
        reply: reply.to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/chat/greeting
async fn greeting(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ChatResponse {
        id: uuid::Uuid::new_v4(),
        reply: state.responder.greeting().to_string(),
        timestamp: chrono::Utc::now(),
    })
}
