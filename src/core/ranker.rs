use crate::core::{
    distance::Coordinate,
    error::RankError,
    filters::{matches_criteria, matches_text, normalize_query},
};
use crate::models::{FilterCriteria, RankQuery, RankedRestroom, Restroom, SortKey};

/// Default number of records returned by the nearby list
pub const DEFAULT_NEARBY_LIMIT: usize = 10;

/// Upper bound on the nearby list cap
pub const MAX_NEARBY_LIMIT: usize = 50;

/// Result of one ranking call
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult<'a> {
    pub restrooms: Vec<RankedRestroom<'a>>,
    pub count: usize,
    pub total_records: usize,
}

/// Ranking orchestrator - filters, annotates, sorts and truncates a record set
///
/// # Pipeline Stages
/// 1. Criteria and free-text filtering
/// 2. Distance annotation from the query origin
/// 3. Stable sort by the requested key
/// 4. Optional truncation
///
/// The ranker never mutates the records it is given; every call builds a fresh
/// projection.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    default_limit: usize,
    max_limit: usize,
}

impl Ranker {
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        let max_limit = max_limit.max(1);
        Self {
            default_limit: default_limit.clamp(1, max_limit),
            max_limit,
        }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn max_limit(&self) -> usize {
        self.max_limit
    }

    /// Rank `records` for a single query
    ///
    /// # Errors
    /// `InvalidCoordinate` when the origin is out of range and
    /// `InvalidThreshold` when the cleanliness bound is outside [0, 5].
    /// An empty result is not an error.
    pub fn rank<'a>(
        &self,
        records: &'a [Restroom],
        query: &RankQuery,
    ) -> Result<RankResult<'a>, RankError> {
        query.origin.validate()?;
        query.criteria.validate()?;

        let needle = normalize_query(&query.text);
        let origin = query.origin;
        let unconstrained = query.criteria.is_unconstrained();

        // Stages 1 & 2: filter, then attach the observer-relative distance
        let mut ranked: Vec<RankedRestroom<'a>> = records
            .iter()
            .filter(|restroom| unconstrained || matches_criteria(restroom, &query.criteria))
            .filter(|restroom| matches_text(restroom, &needle))
            .map(|restroom| RankedRestroom {
                restroom,
                distance_km: origin.distance_km(&restroom.coordinate()),
            })
            .collect();

        // Stage 3: sort_by is stable, so equal keys keep their filtered order
        match query.sort {
            SortKey::Distance => ranked.sort_by(|a, b| {
                a.distance_km
                    .partial_cmp(&b.distance_km)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortKey::Cleanliness => ranked.sort_by(|a, b| {
                b.restroom
                    .cleanliness
                    .partial_cmp(&a.restroom.cleanliness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }

        // Stage 4
        if let Some(limit) = query.limit {
            ranked.truncate(limit);
        }

        tracing::trace!(
            "Ranked {} of {} restrooms by {:?}",
            ranked.len(),
            records.len(),
            query.sort
        );

        Ok(RankResult {
            count: ranked.len(),
            total_records: records.len(),
            restrooms: ranked,
        })
    }

    /// Map view: filtered search sorted by distance, uncapped
    pub fn search<'a>(
        &self,
        records: &'a [Restroom],
        criteria: FilterCriteria,
        text: &str,
        origin: Coordinate,
    ) -> Result<RankResult<'a>, RankError> {
        let query = RankQuery::new(origin)
            .with_criteria(criteria)
            .with_text(text);
        self.rank(records, &query)
    }

    /// Nearby list: unfiltered, capped, sorted by the selected tab
    pub fn nearby<'a>(
        &self,
        records: &'a [Restroom],
        origin: Coordinate,
        sort: SortKey,
        limit: Option<usize>,
    ) -> Result<RankResult<'a>, RankError> {
        let limit = limit.unwrap_or(self.default_limit).min(self.max_limit);
        let query = RankQuery::new(origin).sorted_by(sort).limited_to(limit);
        self.rank(records, &query)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_NEARBY_LIMIT, MAX_NEARBY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RestroomType;

    fn create_restroom(id: &str, lat: f64, lon: f64, cleanliness: f64, is_free: bool) -> Restroom {
        Restroom {
            id: id.to_string(),
            name: format!("Restroom {}", id),
            address: "Gandhipuram, Coimbatore".to_string(),
            kind: RestroomType::Public,
            latitude: lat,
            longitude: lon,
            cleanliness,
            amenities: vec![],
            reviews: vec![],
            is_open: true,
            hours: "24 hours".to_string(),
            is_free,
            is_accessible: true,
            has_changing_table: false,
            images: vec![],
            last_reported: "Today".to_string(),
        }
    }

    fn origin() -> Coordinate {
        Coordinate::new(11.0168, 76.9558).unwrap()
    }

    #[test]
    fn test_rank_sorted_by_distance() {
        let ranker = Ranker::default();
        let records = vec![
            create_restroom("far", 11.0407, 76.9568, 3.0, true),
            create_restroom("near", 11.0134, 76.9581, 2.0, true),
            create_restroom("mid", 11.0077, 76.9708, 4.0, true),
        ];

        let result = ranker.search(&records, FilterCriteria::default(), "", origin()).unwrap();

        let ids: Vec<&str> = result.restrooms.iter().map(|r| r.restroom.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid", "far"]);
        assert_eq!(result.count, 3);
        assert_eq!(result.total_records, 3);
    }

    #[test]
    fn test_rank_sorted_by_cleanliness_is_stable() {
        let ranker = Ranker::default();
        let records = vec![
            create_restroom("a", 11.0407, 76.9568, 4.0, true),
            create_restroom("b", 11.0134, 76.9581, 5.0, true),
            create_restroom("c", 11.0077, 76.9708, 4.0, true),
        ];

        let query = RankQuery::new(origin()).sorted_by(SortKey::Cleanliness);
        let result = ranker.rank(&records, &query).unwrap();

        let ids: Vec<&str> = result.restrooms.iter().map(|r| r.restroom.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rank_applies_filters() {
        let ranker = Ranker::default();
        let records = vec![
            create_restroom("paid", 11.0134, 76.9581, 4.5, false),
            create_restroom("dirty", 11.0134, 76.9581, 1.0, true),
            create_restroom("ok", 11.0134, 76.9581, 4.5, true),
        ];

        let criteria = FilterCriteria {
            free_only: true,
            min_cleanliness: 3.0,
            ..Default::default()
        };
        let result = ranker.search(&records, criteria, "", origin()).unwrap();

        assert_eq!(result.count, 1);
        assert_eq!(result.restrooms[0].restroom.id, "ok");
    }

    #[test]
    fn test_nearby_respects_limit() {
        let ranker = Ranker::new(2, 5);
        let records: Vec<Restroom> = (0..8)
            .map(|i| create_restroom(&i.to_string(), 11.0168 + i as f64 * 0.01, 76.9558, 3.0, true))
            .collect();

        let default_cap = ranker.nearby(&records, origin(), SortKey::Distance, None).unwrap();
        assert_eq!(default_cap.count, 2);

        let clamped = ranker.nearby(&records, origin(), SortKey::Distance, Some(100)).unwrap();
        assert_eq!(clamped.count, 5);
        assert_eq!(clamped.restrooms[0].restroom.id, "0");
    }

    #[test]
    fn test_rank_rejects_bad_origin() {
        let ranker = Ranker::default();
        let query = RankQuery::new(Coordinate { latitude: 91.0, longitude: 0.0 });

        assert!(matches!(
            ranker.rank(&[], &query),
            Err(RankError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_empty_records_is_not_an_error() {
        let ranker = Ranker::default();
        let result = ranker.search(&[], FilterCriteria::default(), "anything", origin()).unwrap();

        assert!(result.restrooms.is_empty());
        assert_eq!(result.count, 0);
    }
}
