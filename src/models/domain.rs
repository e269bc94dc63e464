use serde::{Deserialize, Serialize};

use crate::core::distance::Coordinate;

/// Kind of venue a restroom belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestroomType {
    Public,
    Hotel,
    #[serde(rename = "Petrol Bunk")]
    PetrolBunk,
}

/// A user review attached to a restroom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    /// 1 to 5
    pub rating: u8,
    pub comment: String,
    pub date: chrono::NaiveDate,
}

/// Canonical restroom record, immutable once loaded into the catalog
///
/// Distance is observer-dependent and lives on [`RankedRestroom`] only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restroom {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: RestroomType,
    pub latitude: f64,
    pub longitude: f64,
    /// 0.0 to 5.0
    pub cleanliness: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(rename = "isOpen")]
    pub is_open: bool,
    pub hours: String,
    #[serde(rename = "isFree")]
    pub is_free: bool,
    #[serde(rename = "isAccessible")]
    pub is_accessible: bool,
    #[serde(rename = "hasChangingTable")]
    pub has_changing_table: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "lastReported")]
    pub last_reported: String,
}

impl Restroom {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Boolean and threshold filters for a single ranking call
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "freeOnly", default)]
    pub free_only: bool,
    #[serde(rename = "accessibleOnly", default)]
    pub accessible_only: bool,
    #[serde(rename = "changingTableOnly", default)]
    pub changing_table_only: bool,
    #[serde(rename = "openNowOnly", default)]
    pub open_now_only: bool,
    /// 0 means no constraint
    #[serde(rename = "minCleanliness", default)]
    pub min_cleanliness: f64,
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending distance from the reference coordinate
    #[default]
    Distance,
    /// Descending cleanliness score
    Cleanliness,
}

/// Everything one call to the ranker needs besides the records
#[derive(Debug, Clone, PartialEq)]
pub struct RankQuery {
    pub criteria: FilterCriteria,
    pub text: String,
    pub origin: Coordinate,
    pub sort: SortKey,
    pub limit: Option<usize>,
}

impl RankQuery {
    pub fn new(origin: Coordinate) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            text: String::new(),
            origin,
            sort: SortKey::default(),
            limit: None,
        }
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn limited_to(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Per-query projection of a restroom: the canonical record plus its distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRestroom<'a> {
    #[serde(flatten)]
    pub restroom: &'a Restroom,
    /// Kilometres from the query origin, one decimal place
    #[serde(rename = "distance")]
    pub distance_km: f64,
}

/// An ordered entry in the chat assistant's reply table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedReply {
    pub trigger: String,
    pub reply: String,
}

impl ScriptedReply {
    pub fn new(trigger: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            reply: reply.into(),
        }
    }
}
