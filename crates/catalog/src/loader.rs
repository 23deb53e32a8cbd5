//! Catalog loading and validation.
//!
//! The offline export produces two JSON files:
//! - `movies.json`: array of movie metadata records
//! - `vectors.json`: array of `{id, vector}` embedding records
//!
//! Both are parsed in parallel, joined into a `Catalog`, and validated before
//! anything else sees them. Validation failures mean the export pipeline is
//! broken, so loading aborts rather than serving a corrupt catalog.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Movie, MovieEmbedding};
use std::fs;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load the catalog from a directory containing `movies.json` and
    /// `vectors.json`.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        let movies_path = data_dir.join("movies.json");
        let vectors_path = data_dir.join("vectors.json");

        // Parse both files in parallel
        let (movies, vectors) = rayon::join(
            || parse_movies(&movies_path),
            || parse_vectors(&vectors_path),
        );
        let movies = movies?;
        let vectors = vectors?;

        info!(
            movies = movies.len(),
            vectors = vectors.len(),
            "loaded catalog files from {}",
            data_dir.display()
        );

        let mut catalog = Catalog::new();
        for movie in movies {
            catalog.insert_movie(movie);
        }
        for vector in vectors {
            catalog.insert_embedding(vector);
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate catalog integrity.
    ///
    /// Checks that:
    /// - every embedding references a known movie
    /// - all vectors share one dimension
    /// - vote averages are within [0, 10]
    pub fn validate(&self) -> Result<()> {
        let expected = self.dimension.unwrap_or(0);
        for &movie_id in &self.embedded_ids {
            if !self.movies.contains_key(&movie_id) {
                return Err(CatalogError::UnknownMovie { movie_id });
            }
            let found = self.embeddings[&movie_id].len();
            if found != expected {
                return Err(CatalogError::DimensionMismatch {
                    movie_id,
                    expected,
                    found,
                });
            }
        }
        for movie in self.movies.values() {
            if !(0.0..=10.0).contains(&movie.vote_average) {
                return Err(CatalogError::InvalidValue {
                    movie_id: movie.id,
                    field: "vote_average".to_string(),
                    value: movie.vote_average.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
        file: path.display().to_string(),
        source,
    })
}

fn parse_vectors(path: &Path) -> Result<Vec<MovieEmbedding>> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
        file: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32, vote_average: f32) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            original_title: String::new(),
            overview: String::new(),
            tagline: String::new(),
            release_date: None,
            original_language: "en".to_string(),
            vote_average,
            vote_count: 100,
            popularity: 1.0,
            runtime: None,
            poster_path: None,
            genres: vec![],
            keywords: vec![],
            mood_tags: vec![],
        }
    }

    #[test]
    fn test_validate_accepts_consistent_catalog() {
        let mut catalog = Catalog::new();
        catalog.insert_movie(movie(1, 7.5));
        catalog.insert_movie(movie(2, 6.0));
        catalog.insert_embedding(MovieEmbedding { id: 1, vector: vec![1.0, 0.0] });
        catalog.insert_embedding(MovieEmbedding { id: 2, vector: vec![0.0, 1.0] });

        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.dimension(), Some(2));
        assert_eq!(catalog.embedded_ids(), &[1, 2]);
    }

    #[test]
    fn test_validate_rejects_unknown_movie() {
        let mut catalog = Catalog::new();
        catalog.insert_embedding(MovieEmbedding { id: 99, vector: vec![1.0] });

        match catalog.validate() {
            Err(CatalogError::UnknownMovie { movie_id }) => assert_eq!(movie_id, 99),
            other => panic!("expected UnknownMovie, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_dimension_mismatch() {
        let mut catalog = Catalog::new();
        catalog.insert_movie(movie(1, 7.0));
        catalog.insert_movie(movie(2, 7.0));
        catalog.insert_embedding(MovieEmbedding { id: 1, vector: vec![1.0, 0.0] });
        catalog.insert_embedding(MovieEmbedding { id: 2, vector: vec![1.0, 0.0, 0.0] });

        match catalog.validate() {
            Err(CatalogError::DimensionMismatch { movie_id, expected, found }) => {
                assert_eq!(movie_id, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let mut catalog = Catalog::new();
        catalog.insert_movie(movie(1, 11.0));

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidValue { movie_id: 1, .. })
        ));
    }

    #[test]
    fn test_embedded_ids_stay_sorted() {
        let mut catalog = Catalog::new();
        for id in [5, 1, 9, 3] {
            catalog.insert_movie(movie(id, 7.0));
            catalog.insert_embedding(MovieEmbedding { id, vector: vec![0.5] });
        }
        assert_eq!(catalog.embedded_ids(), &[1, 3, 5, 9]);
    }
}
