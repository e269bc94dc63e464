// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FilterCriteria, RankQuery, RankedRestroom, Restroom, RestroomType, Review, ScriptedReply, SortKey};
pub use requests::{ChatRequest, NearbyRequest, SearchRequest};
pub use responses::{ChatResponse, ErrorResponse, FavoritesResponse, HealthResponse, RankedRestroomsResponse};
