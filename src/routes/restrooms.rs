use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::Coordinate;
use crate::models::{NearbyRequest, RankQuery, RankedRestroomsResponse, SearchRequest};
use crate::routes::{bad_request, not_found, rank_error, AppState};

/// Configure all restroom routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/restrooms/search", web::post().to(search))
        .route("/restrooms/nearby", web::get().to(nearby))
        .route("/restrooms/{id}", web::get().to(get_restroom));
}

/// Fill in the configured default location for any missing component
fn resolve_origin(state: &AppState, latitude: Option<f64>, longitude: Option<f64>) -> Coordinate {
    Coordinate {
        latitude: latitude.unwrap_or(state.default_location.latitude),
        longitude: longitude.unwrap_or(state.default_location.longitude),
    }
}

/// Map view search
///
/// POST /api/v1/restrooms/search
///
/// Request body:
/// ```json
/// {
///   "query": "peelamedu",
///   "freeOnly": false,
///   "accessibleOnly": true,
///   "changingTableOnly": false,
///   "openNowOnly": true,
///   "minCleanliness": 3.5,
///   "latitude": 11.0168,
///   "longitude": 76.9558,
///   "sort": "distance"
/// }
/// ```
async fn search(state: web::Data<AppState>, req: web::Json<SearchRequest>) -> HttpResponse {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return bad_request("validation_failed", errors.to_string());
    }

    let origin = resolve_origin(&state, req.latitude, req.longitude);
    let query = RankQuery::new(origin)
        .with_criteria(req.filters)
        .with_text(req.query.as_str())
        .sorted_by(req.sort.unwrap_or_default());

    let result = match state.ranker.rank(state.catalog.records(), &query) {
        Ok(result) => result,
        Err(e) => {
            tracing::info!("Rejected search request: {}", e);
            return rank_error(e);
        }
    };

    tracing::debug!(
        "Search {:?} matched {} of {} restrooms",
        req.query,
        result.count,
        result.total_records
    );

    HttpResponse::Ok().json(RankedRestroomsResponse {
        count: result.count,
        restrooms: result.restrooms,
        origin,
    })
}

/// Nearby list
///
/// GET /api/v1/restrooms/nearby?latitude=11.0168&longitude=76.9558&sort=cleanliness&limit=10
async fn nearby(state: web::Data<AppState>, req: web::Query<NearbyRequest>) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return bad_request("validation_failed", errors.to_string());
    }

    let origin = resolve_origin(&state, req.latitude, req.longitude);
    let sort = req.sort.unwrap_or_default();

    match state.ranker.nearby(state.catalog.records(), origin, sort, req.limit) {
        Ok(result) => {
            tracing::debug!("Returning {} nearby restrooms sorted by {:?}", result.count, sort);
            HttpResponse::Ok().json(RankedRestroomsResponse {
                count: result.count,
                restrooms: result.restrooms,
                origin,
            })
        }
        Err(e) => rank_error(e),
    }
}

/// Restroom detail
///
/// GET /api/v1/restrooms/{id}
async fn get_restroom(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();

    match state.catalog.get(&id) {
        Some(restroom) => HttpResponse::Ok().json(restroom),
        None => not_found("restroom_not_found", format!("No restroom with id {}", id)),
    }
}
