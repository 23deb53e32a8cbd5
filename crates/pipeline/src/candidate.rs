//! The candidate record flowing through the pipeline.

use catalog::MovieId;

/// A movie candidate as it moves through filtering.
///
/// Starts with the embedding score from the semantic scan; the match fields
/// are filled in by `MatchRatioEngine` after the hard filters ran.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub movie_id: MovieId,
    /// Cosine similarity from the semantic scan.
    pub embedding_score: f32,
    /// Number of requested features present on this movie.
    pub match_count: u32,
    /// Number of features the user requested.
    pub total_features: u32,
    /// `match_count / total_features`, or 1.0 when nothing was requested.
    pub match_ratio: f32,
}

impl Candidate {
    /// Create a new candidate from a semantic-search hit.
    pub fn new(movie_id: MovieId, embedding_score: f32) -> Self {
        Self {
            movie_id,
            embedding_score,
            match_count: 0,
            total_features: 0,
            match_ratio: 1.0,
        }
    }
}
