//! Filter for release-year constraints.

use crate::candidate::Candidate;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Catalog;
use query::CanonicalFeatures;
use std::sync::Arc;

/// Keeps candidates released inside any of the requested year ranges.
///
/// ## Algorithm
/// 1. No-op when the request carries no year ranges
/// 2. Otherwise keep a candidate iff its release year falls inside at least
///    one inclusive range (ranges are OR-combined)
/// 3. A missing release date fails every year constraint
pub struct YearRangeFilter {
    catalog: Arc<Catalog>,
}

impl YearRangeFilter {
    /// Create a new YearRangeFilter.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        features: &CanonicalFeatures,
    ) -> Result<Vec<Candidate>> {
        if features.year_ranges.is_empty() {
            return Ok(candidates);
        }

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                let Some(movie) = self.catalog.get_movie(candidate.movie_id) else {
                    return false;
                };
                let Some(year) = movie.release_year() else {
                    return false;
                };
                features
                    .year_ranges
                    .iter()
                    .any(|&(min, max)| year >= min as i32 && year <= max as i32)
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{catalog_of, movie};

    #[test]
    fn test_year_range_filter() {
        let catalog = catalog_of(vec![
            movie(1, &[], Some((1994, 6, 1)), 7.0),
            movie(2, &[], Some((2005, 6, 1)), 7.0),
            movie(3, &[], None, 7.0), // missing release date
        ]);

        let features = CanonicalFeatures {
            year_ranges: vec![(1990, 1999)],
            ..Default::default()
        };

        let filter = YearRangeFilter::new(catalog);
        let filtered = filter
            .apply(
                vec![
                    Candidate::new(1, 0.9),
                    Candidate::new(2, 0.8),
                    Candidate::new(3, 0.7),
                ],
                &features,
            )
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].movie_id, 1);
    }

    #[test]
    fn test_ranges_are_or_combined() {
        let catalog = catalog_of(vec![
            movie(1, &[], Some((1965, 1, 1)), 7.0),
            movie(2, &[], Some((1995, 1, 1)), 7.0),
            movie(3, &[], Some((2015, 1, 1)), 7.0),
        ]);

        let features = CanonicalFeatures {
            year_ranges: vec![(1960, 1969), (1990, 1999)],
            ..Default::default()
        };

        let filter = YearRangeFilter::new(catalog);
        let filtered = filter
            .apply(
                vec![
                    Candidate::new(1, 0.9),
                    Candidate::new(2, 0.8),
                    Candidate::new(3, 0.7),
                ],
                &features,
            )
            .unwrap();

        let ids: Vec<u32> = filtered.iter().map(|c| c.movie_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let catalog = catalog_of(vec![
            movie(1, &[], Some((1990, 1, 1)), 7.0),
            movie(2, &[], Some((1999, 12, 31)), 7.0),
        ]);

        let features = CanonicalFeatures {
            year_ranges: vec![(1990, 1999)],
            ..Default::default()
        };

        let filter = YearRangeFilter::new(catalog);
        let filtered = filter
            .apply(vec![Candidate::new(1, 0.9), Candidate::new(2, 0.8)], &features)
            .unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_no_ranges_keeps_all() {
        let catalog = catalog_of(vec![movie(1, &[], None, 7.0)]);
        let filter = YearRangeFilter::new(catalog);

        let filtered = filter
            .apply(vec![Candidate::new(1, 0.9)], &CanonicalFeatures::default())
            .unwrap();
        assert_eq!(filtered.len(), 1);
    }
}
