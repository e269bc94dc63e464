use thiserror::Error;

/// Caller-input errors surfaced by the ranking pipeline
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RankError {
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Invalid cleanliness threshold: {0} (expected 0 to 5)")]
    InvalidThreshold(f64),
}
