use serde::{Deserialize, Serialize};

use crate::core::distance::Coordinate;
use crate::models::domain::{RankedRestroom, Restroom};

/// Response for the search and nearby endpoints
#[derive(Debug, Clone, Serialize)]
pub struct RankedRestroomsResponse<'a> {
    pub restrooms: Vec<RankedRestroom<'a>>,
    pub count: usize,
    pub origin: Coordinate,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub restrooms: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Assistant reply to a chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub id: uuid::Uuid,
    pub reply: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Favorites held for one session, in the order they were added
#[derive(Debug, Clone, Serialize)]
pub struct FavoritesResponse<'a> {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub restrooms: Vec<&'a Restroom>,
    pub count: usize,
}
