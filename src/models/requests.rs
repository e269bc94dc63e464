use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{FilterCriteria, SortKey};

/// Request body for the map view search
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub query: String,
    #[serde(flatten)]
    pub filters: FilterCriteria,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub sort: Option<SortKey>,
}

/// Query string for the nearby list
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NearbyRequest {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub sort: Option<SortKey>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// A message typed into the chat assistant
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 500))]
    pub message: String,
}
