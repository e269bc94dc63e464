use serde::{Deserialize, Serialize};

use crate::core::error::RankError;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside the valid degree ranges
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, RankError> {
        let coordinate = Self { latitude, longitude };
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub fn validate(&self) -> Result<(), RankError> {
        // NaN fails both range checks
        if (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude) {
            Ok(())
        } else {
            Err(RankError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Distance to `other` in kilometers, rounded to one decimal place
    #[inline]
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        round_to_tenth(haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        ))
    }
}

/// Calculate the Haversine distance between two points in kilometers
///
/// Spherical-Earth approximation; distances shown to users must match this
/// exact formula and radius.
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to one decimal place
///
/// Rounds the exact binary value, so 1.45 (stored as 1.4499...) becomes 1.4.
#[inline]
pub fn round_to_tenth(km: f64) -> f64 {
    format!("{:.1}", km).parse().unwrap_or(km)
}
