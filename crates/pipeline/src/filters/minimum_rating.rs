//! Filter to enforce the request's minimum rating.
//!
//! The floor is the combination of the request's own `min_rating` and any
//! floor imposed by a selected mood label; the extractor already took the
//! maximum of the two.

use crate::candidate::Candidate;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Catalog;
use query::CanonicalFeatures;
use std::sync::Arc;

/// Removes candidates below the requested vote-average floor.
pub struct MinimumRatingFilter {
    catalog: Arc<Catalog>,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `catalog` - Shared reference to the catalog for rating lookups
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        features: &CanonicalFeatures,
    ) -> Result<Vec<Candidate>> {
        let Some(min_rating) = features.min_rating else {
            return Ok(candidates);
        };

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                if let Some(movie) = self.catalog.get_movie(candidate.movie_id) {
                    movie.vote_average >= min_rating
                } else {
                    false
                }
            })
            .collect();

        Ok(filtered)
    }
}
