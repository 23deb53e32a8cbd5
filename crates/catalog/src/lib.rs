//! # Catalog Crate
//!
//! This crate handles loading and indexing the movie catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieEmbedding, Catalog)
//! - **loader**: Parse the JSON export files and validate integrity
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! // Load the catalog export
//! let catalog = Catalog::load_from_files(Path::new("data/catalog"))?;
//!
//! // Query data
//! let movie = catalog.get_movie(603).unwrap();
//! let vector = catalog.embedding(603).unwrap();
//!
//! println!("{} has a {}-dim embedding", movie.title, vector.len());
//! ```
//!
//! The catalog is immutable after loading; requests share it behind an `Arc`.

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Movie, MovieEmbedding, MovieId};
