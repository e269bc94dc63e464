// Route exports
pub mod chat;
pub mod favorites;
pub mod restrooms;

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::{Coordinate, RankError, Ranker, Responder};
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::{Catalog, FavoritesStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ranker: Ranker,
    pub responder: Arc<Responder>,
    pub favorites: Arc<FavoritesStore>,
    pub default_location: Coordinate,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(restrooms::configure)
            .configure(chat::configure)
            .configure(favorites::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        restrooms: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

pub(crate) fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

pub(crate) fn not_found(error: &str, message: String) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 404,
    })
}

pub(crate) fn rank_error(err: RankError) -> HttpResponse {
    let error = match err {
        RankError::InvalidCoordinate { .. } => "invalid_coordinate",
        RankError::InvalidThreshold(_) => "invalid_threshold",
    };
    bad_request(error, err.to_string())
}
