//! Projection to the external result shape.

use crate::scoring::RankedCandidate;
use catalog::Movie;
use serde::Serialize;

/// Base URL poster paths are resolved against.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// One recommendation as returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub id: u32,
    pub title: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub vote_average: f32,
    pub release_year: Option<i32>,
    /// ISO-8601 date string.
    pub release_date: Option<String>,
    pub embedding_score: f32,
    pub match_ratio: f32,
    pub final_score: f32,
    pub quadrant: &'static str,
    /// Simplified-Chinese canonical genre labels.
    pub genres: Vec<String>,
}

/// Project one ranked candidate onto the external shape.
pub fn project(movie: &Movie, ranked: &RankedCandidate) -> Recommendation {
    Recommendation {
        id: movie.id,
        title: movie.title.clone(),
        overview: movie.overview.clone(),
        poster_url: movie
            .poster_path
            .as_ref()
            .map(|path| format!("{POSTER_BASE_URL}{path}")),
        vote_average: movie.vote_average,
        release_year: movie.release_year(),
        release_date: movie.release_date.map(|date| date.to_string()),
        embedding_score: ranked.candidate.embedding_score,
        match_ratio: ranked.candidate.match_ratio,
        final_score: ranked.final_score,
        quadrant: ranked.quadrant.as_str(),
        genres: movie.genres.clone(),
    }
}
