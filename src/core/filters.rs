use crate::core::error::RankError;
use crate::models::{FilterCriteria, Restroom};

/// Highest cleanliness score a record can carry
pub const MAX_CLEANLINESS: f64 = 5.0;

impl FilterCriteria {
    /// Reject thresholds outside [0, 5]
    pub fn validate(&self) -> Result<(), RankError> {
        if (0.0..=MAX_CLEANLINESS).contains(&self.min_cleanliness) {
            Ok(())
        } else {
            Err(RankError::InvalidThreshold(self.min_cleanliness))
        }
    }

    /// True when no filter would remove anything
    pub fn is_unconstrained(&self) -> bool {
        !self.free_only
            && !self.accessible_only
            && !self.changing_table_only
            && !self.open_now_only
            && self.min_cleanliness <= 0.0
    }
}

/// Check a record against every active boolean and threshold filter
#[inline]
pub fn matches_criteria(restroom: &Restroom, criteria: &FilterCriteria) -> bool {
    // A zero threshold is treated as unset
    if criteria.min_cleanliness > 0.0 && restroom.cleanliness < criteria.min_cleanliness {
        return false;
    }

    if criteria.open_now_only && !restroom.is_open {
        return false;
    }

    if criteria.free_only && !restroom.is_free {
        return false;
    }

    if criteria.accessible_only && !restroom.is_accessible {
        return false;
    }

    if criteria.changing_table_only && !restroom.has_changing_table {
        return false;
    }

    true
}

/// Case-insensitive substring match on name or address
///
/// `needle` must already be lower-cased; an empty needle matches everything.
#[inline]
pub fn matches_text(restroom: &Restroom, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    restroom.name.to_lowercase().contains(needle) || restroom.address.to_lowercase().contains(needle)
}

/// Normalize a free-text query into the form `matches_text` expects
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RestroomType;

    fn create_test_restroom(cleanliness: f64) -> Restroom {
        Restroom {
            id: "1".to_string(),
            name: "Public Toilet Race Course #1".to_string(),
            address: "Race Course, Coimbatore".to_string(),
            kind: RestroomType::Public,
            latitude: 11.0168,
            longitude: 76.9558,
            cleanliness,
            amenities: vec!["Soap".to_string()],
            reviews: vec![],
            is_open: true,
            hours: "6:00 AM - 9:00 PM".to_string(),
            is_free: true,
            is_accessible: false,
            has_changing_table: false,
            images: vec![],
            last_reported: "Today".to_string(),
        }
    }

    #[test]
    fn test_unconstrained_criteria_match() {
        let restroom = create_test_restroom(1.1);
        let criteria = FilterCriteria::default();

        assert!(criteria.is_unconstrained());
        assert!(matches_criteria(&restroom, &criteria));
    }

    #[test]
    fn test_cleanliness_threshold_is_inclusive() {
        let restroom = create_test_restroom(3.5);

        let at = FilterCriteria { min_cleanliness: 3.5, ..Default::default() };
        let above = FilterCriteria { min_cleanliness: 3.6, ..Default::default() };

        assert!(matches_criteria(&restroom, &at));
        assert!(!matches_criteria(&restroom, &above));
    }

    #[test]
    fn test_flag_filters() {
        let restroom = create_test_restroom(4.0);

        let free = FilterCriteria { free_only: true, ..Default::default() };
        let accessible = FilterCriteria { accessible_only: true, ..Default::default() };
        let changing = FilterCriteria { changing_table_only: true, ..Default::default() };
        let open = FilterCriteria { open_now_only: true, ..Default::default() };

        assert!(matches_criteria(&restroom, &free));
        assert!(!matches_criteria(&restroom, &accessible));
        assert!(!matches_criteria(&restroom, &changing));
        assert!(matches_criteria(&restroom, &open));
    }

    #[test]
    fn test_text_matches_name_or_address() {
        let restroom = create_test_restroom(2.0);

        assert!(matches_text(&restroom, &normalize_query("RACE course")));
        assert!(matches_text(&restroom, &normalize_query("coimbatore")));
        assert!(matches_text(&restroom, &normalize_query("")));
        assert!(!matches_text(&restroom, &normalize_query("peelamedu")));
    }

    #[test]
    fn test_threshold_validation() {
        assert!(FilterCriteria { min_cleanliness: 5.0, ..Default::default() }.validate().is_ok());
        assert_eq!(
            FilterCriteria { min_cleanliness: 5.5, ..Default::default() }.validate(),
            Err(RankError::InvalidThreshold(5.5))
        );
        assert!(FilterCriteria { min_cleanliness: -1.0, ..Default::default() }.validate().is_err());
        assert!(FilterCriteria { min_cleanliness: f64::NAN, ..Default::default() }.validate().is_err());
    }
}
