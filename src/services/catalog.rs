use crate::core::filters::MAX_CLEANLINESS;
use crate::models::Restroom;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Restroom fixture compiled into the binary
const EMBEDDED_RESTROOMS: &str = include_str!("../../data/restrooms.json");

/// Errors that can occur while loading the restroom catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Duplicate restroom id: {0}")]
    DuplicateId(String),

    #[error("Restroom {id} has cleanliness {value} outside 0 to 5")]
    CleanlinessOutOfRange { id: String, value: f64 },

    #[error("Review {review_id} on restroom {id} has rating {rating} outside 1 to 5")]
    RatingOutOfRange { id: String, review_id: String, rating: u8 },

    #[error("Restroom {0} has an invalid coordinate")]
    InvalidCoordinate(String),
}

/// TOML catalogs wrap the records in a top-level `restrooms` array
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    restrooms: Vec<Restroom>,
}

/// Read-only restroom record set, loaded once at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    restrooms: Vec<Restroom>,
}

impl Catalog {
    /// Validate and wrap a set of records
    pub fn new(restrooms: Vec<Restroom>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(restrooms.len());

        for restroom in &restrooms {
            if !seen.insert(restroom.id.as_str()) {
                return Err(CatalogError::DuplicateId(restroom.id.clone()));
            }

            if !(0.0..=MAX_CLEANLINESS).contains(&restroom.cleanliness) {
                return Err(CatalogError::CleanlinessOutOfRange {
                    id: restroom.id.clone(),
                    value: restroom.cleanliness,
                });
            }

            if restroom.coordinate().validate().is_err() {
                return Err(CatalogError::InvalidCoordinate(restroom.id.clone()));
            }

            if let Some(review) = restroom.reviews.iter().find(|r| !(1..=5).contains(&r.rating)) {
                return Err(CatalogError::RatingOutOfRange {
                    id: restroom.id.clone(),
                    review_id: review.id.clone(),
                    rating: review.rating,
                });
            }
        }

        Ok(Self { restrooms })
    }

    /// Load the bundled Coimbatore fixture
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_RESTROOMS)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let catalog: TomlCatalog = toml::from_str(text)?;
        Self::new(catalog.restrooms)
    }

    /// Load a catalog file, picking the format from its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&text)?,
            _ => Self::from_json(&text)?,
        };

        tracing::debug!("Loaded {} restrooms from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn records(&self) -> &[Restroom] {
        &self.restrooms
    }

    pub fn get(&self, id: &str) -> Option<&Restroom> {
        self.restrooms.iter().find(|restroom| restroom.id == id)
    }

    pub fn len(&self) -> usize {
        self.restrooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restrooms.is_empty()
    }
}
