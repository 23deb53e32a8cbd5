//! Filter to drop movies in explicitly excluded genres.

use crate::candidate::Candidate;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Catalog;
use query::CanonicalFeatures;
use std::sync::Arc;

/// Drops candidates whose genres intersect the excluded genres.
pub struct ExcludeGenreFilter {
    catalog: Arc<Catalog>,
}

impl ExcludeGenreFilter {
    /// Create a new ExcludeGenreFilter.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for ExcludeGenreFilter {
    fn name(&self) -> &str {
        "ExcludeGenreFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        features: &CanonicalFeatures,
    ) -> Result<Vec<Candidate>> {
        if features.exclude_genres.is_empty() {
            return Ok(candidates);
        }

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                if let Some(movie) = self.catalog.get_movie(candidate.movie_id) {
                    !movie
                        .genres
                        .iter()
                        .any(|genre| features.exclude_genres.contains(genre))
                } else {
                    false
                }
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
    fn test_excluded_genre_is_dropped() {
        let catalog = catalog_of(vec![
            movie(1, &["动作", "恐怖"], None, 7.0),
            movie(2, &["动作"], None, 7.0),
        ]);

        let features = CanonicalFeatures {
            exclude_genres: vec!["恐怖".to_string()],
            ..Default::default()
        };

        let filter = ExcludeGenreFilter::new(catalog);
        let filtered = filter
            .apply(vec![Candidate::new(1, 0.9), Candidate::new(2, 0.8)], &features)
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].movie_id, 2);
    }

    #[test]
    fn test_no_exclusions_keeps_all() {
        let catalog = catalog_of(vec![movie(1, &["恐怖"], None, 7.0)]);
        let filter = ExcludeGenreFilter::new(catalog);

        let filtered = filter
            .apply(vec![Candidate::new(1, 0.9)], &CanonicalFeatures::default())
            .unwrap();
        assert_eq!(filtered.len(), 1);
    }
}
