//! RestStop - restroom search, ranking and chat assistant service
//!
//! This library provides the restroom ranking pipeline (filter, annotate with
//! distance, sort, truncate) and the scripted chat responder, plus the HTTP
//! surface that serves them over a read-only restroom catalog.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_distance, respond, Coordinate, RankError, RankResult, Ranker, Responder};
pub use crate::models::{FilterCriteria, RankQuery, RankedRestroom, Restroom, ScriptedReply, SortKey};
pub use crate::services::{Catalog, CatalogError, FavoritesStore};
