//! Error types for the recommendation engine.

use catalog::CatalogError;
use embedding::EmbedError;
use thiserror::Error;

/// Errors a `recommend` call (or engine construction) can surface.
///
/// Empty intermediate results are not errors; they produce shorter or empty
/// output lists.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The external embedding call failed or timed out. Not retried here.
    #[error("Embedding service unavailable: {0}")]
    EmbeddingUnavailable(#[from] EmbedError),

    /// Startup configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A candidate reached the pipeline without consistent catalog data.
    /// This points at the offline export, not at the request.
    #[error("Catalog corrupt: {0}")]
    CatalogCorrupt(#[from] CatalogError),

    /// A filter implementation failed. The built-in hard filters never do;
    /// the variant exists because `Filter` is an open set.
    #[error("Pipeline failure: {0}")]
    Internal(#[from] anyhow::Error),
}
