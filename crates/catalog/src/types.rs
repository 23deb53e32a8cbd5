//! Core domain types for the movie catalog.
//!
//! The catalog is a read-only, in-memory view of a few hundred titles plus
//! their precomputed embedding vectors. It is loaded once at startup, wrapped
//! in an `Arc`, and shared across all recommendation requests; nothing
//! mutates it afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a movie (externally assigned).
pub type MovieId = u32;

/// A single catalog entry.
///
/// Genres are simplified-Chinese canonical labels (e.g. "剧情", "动作");
/// keywords and mood tags are lowercase English tokens. Mood tags come from
/// the closed vocabulary in the `mappings` crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub mood_tags: Vec<String>,
}

impl Movie {
    /// Release year, if the release date is known.
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|d| d.year())
    }
}

/// Precomputed embedding for one movie.
///
/// Vectors are produced offline from the enhanced-text concatenation
/// (title | genres | mood | keywords | overview); the catalog treats them
/// as opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieEmbedding {
    pub id: MovieId,
    pub vector: Vec<f32>,
}

/// The in-memory catalog: movie metadata plus embedding vectors.
///
/// Lookups are O(1) through HashMap indices. `embedded_ids` keeps the ids of
/// all indexed movies sorted ascending so that full scans iterate in a
/// deterministic order.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) movies: HashMap<MovieId, Movie>,
    pub(crate) embeddings: HashMap<MovieId, Vec<f32>>,
    pub(crate) embedded_ids: Vec<MovieId>,
    pub(crate) dimension: Option<usize>,
}

impl Catalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by ID.
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Get the stored embedding vector for a movie, if it was indexed.
    pub fn embedding(&self, id: MovieId) -> Option<&[f32]> {
        self.embeddings.get(&id).map(|v| v.as_slice())
    }

    /// IDs of all indexed movies, ascending.
    pub fn embedded_ids(&self) -> &[MovieId] {
        &self.embedded_ids
    }

    /// Dimension shared by all stored vectors. `None` while no embedding has
    /// been inserted.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Iterate over all movies in unspecified order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    /// Insert a movie into the catalog.
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    /// Insert an embedding and keep the scan order sorted.
    ///
    /// The first inserted vector fixes the catalog dimension; later vectors
    /// are checked against it by `validate`.
    pub fn insert_embedding(&mut self, embedding: MovieEmbedding) {
        if self.dimension.is_none() {
            self.dimension = Some(embedding.vector.len());
        }
        if self.embeddings.insert(embedding.id, embedding.vector).is_none() {
            let pos = self.embedded_ids.partition_point(|&id| id < embedding.id);
            self.embedded_ids.insert(pos, embedding.id);
        }
    }

    /// Get counts for logging/validation: (movies, indexed movies).
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.embeddings.len())
    }

    /// Case-insensitive substring search over titles, ascending id order.
    pub fn search_titles(&self, needle: &str) -> Vec<&Movie> {
        let needle = needle.to_lowercase();
        let mut matches: Vec<&Movie> = self
            .movies
            .values()
            .filter(|movie| {
                movie.title.to_lowercase().contains(&needle)
                    || movie.original_title.to_lowercase().contains(&needle)
            })
            .collect();
        matches.sort_by_key(|movie| movie.id);
        matches
    }
}
