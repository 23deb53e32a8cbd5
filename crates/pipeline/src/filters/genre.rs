//! Filter to keep only movies in the requested genres.

use crate::candidate::Candidate;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Catalog;
use query::CanonicalFeatures;
use std::sync::Arc;

/// Keeps candidates whose genre list intersects the requested genres.
///
/// ## Algorithm
/// 1. No-op when the request carries no genres
/// 2. Otherwise keep a candidate iff at least one of its (simplified)
///    genre labels matches a requested genre exactly
pub struct GenreFilter {
    catalog: Arc<Catalog>,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `catalog` - Shared reference to the catalog for genre lookups
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        features: &CanonicalFeatures,
    ) -> Result<Vec<Candidate>> {
        if features.genres.is_empty() {
            return Ok(candidates);
        }

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                if let Some(movie) = self.catalog.get_movie(candidate.movie_id) {
                    movie
                        .genres
                        .iter()
                        .any(|genre| features.genres.contains(genre))
                } else {
                    false // Exclude if movie not found
                }
            })
            .collect();
        Ok(filtered)
    }
}
