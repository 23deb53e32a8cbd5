//! Error types for the catalog crate.

use crate::types::MovieId;
use thiserror::Error;

/// Errors that can occur while loading or validating the catalog.
///
/// Everything except `Io`/`Json` indicates a corrupt catalog export: the
/// offline pipeline that produced the files broke its contract, which is a
/// programmer error rather than a runtime user error.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog file could not be parsed
    #[error("Failed to parse {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// An embedding references a movie that is not in the catalog
    #[error("Embedding references unknown movie {movie_id}")]
    UnknownMovie { movie_id: MovieId },

    /// An embedding vector has the wrong dimension
    #[error("Embedding for movie {movie_id} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        movie_id: MovieId,
        expected: usize,
        found: usize,
    },

    /// A movie is missing its embedding where one is required
    #[error("Movie {movie_id} has no stored embedding")]
    MissingEmbedding { movie_id: MovieId },

    /// A movie field holds an out-of-range or nonsensical value
    #[error("Invalid value for {field} on movie {movie_id}: {value}")]
    InvalidValue {
        movie_id: MovieId,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
