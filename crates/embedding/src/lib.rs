//! Embedding service adapter and global semantic search.
//!
//! This crate owns the only external dependency of the recommendation
//! pipeline: the text-embedding provider. It provides:
//! - An `Embedder` trait so the provider is an injected capability
//! - A gRPC client implementation (`EmbeddingClient`)
//! - Cosine similarity and the full-catalog semantic scan
//!
//! The scan is CPU-bound and runs on rayon; the single suspension point of a
//! recommendation request is the `embed` RPC for the query text.

use thiserror::Error;

// Include the generated protobuf code
pub mod proto {
    tonic::include_proto!("embedding");
}

pub mod client;
pub mod search;
pub mod similarity;

pub use client::{Embedder, EmbeddingClient};
pub use search::{SearchHit, SemanticSearcher};
pub use similarity::cosine_similarity;

/// Errors that can occur when interacting with the embedding service
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Failed to connect to embedding service: {0}")]
    ConnectionError(String),

    #[error("Failed to embed text: {0}")]
    RpcError(String),

    #[error("Invalid response from embedding service: expected {expected}-dim vector, got {found}")]
    InvalidResponse { expected: usize, found: usize },
}
