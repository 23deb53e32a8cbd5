//! Per-candidate feature match computation.
//!
//! Soft features never eliminate a candidate; they only decide how much of
//! the request each movie covers. The ratio later drives both the tiered
//! selection and the quadrant classification.

use crate::candidate::Candidate;
use catalog::Catalog;
use query::CanonicalFeatures;
use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

/// Computes match counts and ratios for candidates in parallel.
///
/// ## Performance Note
/// Uses Rayon for the per-candidate membership tests. For 300 candidates
/// and a handful of features this is well under a millisecond.
#[derive(Clone)]
pub struct MatchRatioEngine {
    catalog: Arc<Catalog>,
}

impl MatchRatioEngine {
    /// Create a new MatchRatioEngine.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Compute match fields for all candidates, preserving input order.
    ///
    /// The denominator is `|keywords| + |mood_tags| + |genres|` as requested
    /// by the user; with nothing requested every ratio is 1.0 by convention.
    pub fn compute(
        &self,
        candidates: Vec<Candidate>,
        features: &CanonicalFeatures,
    ) -> Vec<Candidate> {
        let total = features.total_features() as u32;

        candidates
            .into_par_iter()
            .map(|candidate| self.compute_single(candidate, features, total))
            .collect()
    }

    fn compute_single(
        &self,
        mut candidate: Candidate,
        features: &CanonicalFeatures,
        total: u32,
    ) -> Candidate {
        candidate.total_features = total;
        if total == 0 {
            candidate.match_count = 0;
            candidate.match_ratio = 1.0;
            return candidate;
        }

        let Some(movie) = self.catalog.get_movie(candidate.movie_id) else {
            candidate.match_count = 0;
            candidate.match_ratio = 0.0;
            return candidate;
        };

        let movie_keywords: HashSet<String> =
            movie.keywords.iter().map(|k| k.to_lowercase()).collect();
        let movie_moods: HashSet<String> =
            movie.mood_tags.iter().map(|m| m.to_lowercase()).collect();

        let mut matched = 0u32;
        for keyword in &features.keywords {
            if movie_keywords.contains(&keyword.to_lowercase()) {
                matched += 1;
            }
        }
        for mood in &features.mood_tags {
            if movie_moods.contains(&mood.to_lowercase()) {
                matched += 1;
            }
        }
        for genre in &features.genres {
            // Genres are already simplified canonical forms on both sides
            if movie.genres.contains(genre) {
                matched += 1;
            }
        }

        candidate.match_count = matched;
        candidate.match_ratio = matched as f32 / total as f32;
        candidate
    }
}
