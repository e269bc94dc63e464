// Core algorithm exports
pub mod distance;
pub mod error;
pub mod filters;
pub mod ranker;
pub mod responder;

pub use distance::{haversine_distance, round_to_tenth, Coordinate};
pub use error::RankError;
pub use filters::{matches_criteria, matches_text, normalize_query};
pub use ranker::{RankResult, Ranker};
pub use responder::{respond, Responder};
