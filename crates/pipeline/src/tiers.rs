//! Three-tier progressive candidate selection.
//!
//! Candidates are bucketed by match ratio and drained tier by tier until the
//! target count is reached:
//!
//! - Tier 1: `match_ratio >= tier1_threshold` (default 0.80)
//! - Tier 2: `tier2_threshold <= match_ratio < tier1_threshold` (default 0.50)
//! - Tier 3: everything below, ranked by embedding score alone — a match
//!   ratio that low carries no useful ordering signal

use crate::candidate::Candidate;
use std::cmp::Ordering;
use tracing::debug;

/// Selects up to `target_count` candidates through the tier cascade.
#[derive(Debug, Clone, Copy)]
pub struct TieredSelector {
    tier1_threshold: f32,
    tier2_threshold: f32,
    target_count: usize,
}

impl TieredSelector {
    /// Create a new selector.
    ///
    /// # Arguments
    /// * `tier1_threshold` - Lower bound of tier 1 (inclusive)
    /// * `tier2_threshold` - Lower bound of tier 2 (inclusive)
    /// * `target_count` - Maximum number of candidates to keep
    pub fn new(tier1_threshold: f32, tier2_threshold: f32, target_count: usize) -> Self {
        Self {
            tier1_threshold,
            tier2_threshold,
            target_count,
        }
    }

    /// Run the three-tier selection.
    ///
    /// Output size is `min(input, target_count)`; embedding scores pass
    /// through untouched.
    pub fn select(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let mut tier1 = Vec::new();
        let mut tier2 = Vec::new();
        let mut tier3 = Vec::new();
        for candidate in candidates {
            if candidate.match_ratio >= self.tier1_threshold {
                tier1.push(candidate);
            } else if candidate.match_ratio >= self.tier2_threshold {
                tier2.push(candidate);
            } else {
                tier3.push(candidate);
            }
        }
        debug!(
            tier1 = tier1.len(),
            tier2 = tier2.len(),
            tier3 = tier3.len(),
            "tiered selection buckets"
        );

        tier1.sort_by(compare_by_match_then_embedding);
        if tier1.len() >= self.target_count {
            tier1.truncate(self.target_count);
            return tier1;
        }

        // Tier 1 alone is not enough; merge tier 2 in and re-rank.
        let mut combined = tier1;
        combined.append(&mut tier2);
        combined.sort_by(compare_by_match_then_embedding);
        if combined.len() >= self.target_count {
            combined.truncate(self.target_count);
            return combined;
        }

        tier3.sort_by(compare_by_embedding);
        combined.append(&mut tier3);
        combined.truncate(self.target_count);
        combined
    }
}

/// Tier 1/2 ordering: match ratio desc, embedding desc, id asc.
fn compare_by_match_then_embedding(a: &Candidate, b: &Candidate) -> Ordering {
    b.match_ratio
        .partial_cmp(&a.match_ratio)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.embedding_score
                .partial_cmp(&a.embedding_score)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.movie_id.cmp(&b.movie_id))
}

/// Tier 3 ordering: embedding desc, id asc.
fn compare_by_embedding(a: &Candidate, b: &Candidate) -> Ordering {
    b.embedding_score
        .partial_cmp(&a.embedding_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.movie_id.cmp(&b.movie_id))
}
