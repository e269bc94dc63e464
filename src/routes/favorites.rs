use actix_web::{web, HttpResponse};

use crate::models::FavoritesResponse;
use crate::routes::{not_found, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/favorites/{session}", web::get().to(list_favorites))
        .route("/favorites/{session}", web::delete().to(clear_favorites))
        .route("/favorites/{session}/{restroom}", web::put().to(add_favorite))
        .route("/favorites/{session}/{restroom}", web::delete().to(remove_favorite));
}

async fn favorites_response(state: &AppState, session_id: String) -> HttpResponse {
    let ids = state.favorites.list(&session_id).await;
    let restrooms: Vec<_> = ids.iter().filter_map(|id| state.catalog.get(id)).collect();

    HttpResponse::Ok().json(FavoritesResponse {
        session_id,
        count: restrooms.len(),
        restrooms,
    })
}

/// GET /api/v1/favorites/{session}
async fn list_favorites(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    favorites_response(&state, path.into_inner()).await
}

/// PUT /api/v1/favorites/{session}/{restroom}
async fn add_favorite(state: web::Data<AppState>, path: web::Path<(String, String)>) -> HttpResponse {
    let (session_id, restroom_id) = path.into_inner();

    if state.catalog.get(&restroom_id).is_none() {
        return not_found("restroom_not_found", format!("No restroom with id {}", restroom_id));
    }

    state.favorites.add(&session_id, &restroom_id).await;
    favorites_response(&state, session_id).await
}

/// DELETE /api/v1/favorites/{session}/{restroom}
async fn remove_favorite(state: web::Data<AppState>, path: web::Path<(String, String)>) -> HttpResponse {
    let (session_id, restroom_id) = path.into_inner();

    if !state.favorites.remove(&session_id, &restroom_id).await {
        return not_found(
            "favorite_not_found",
            format!("Restroom {} is not a favorite", restroom_id),
        );
    }

    favorites_response(&state, session_id).await
}

/// DELETE /api/v1/favorites/{session}
async fn clear_favorites(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let session_id = path.into_inner();
    state.favorites.clear(&session_id).await;
    favorites_response(&state, session_id).await
}
