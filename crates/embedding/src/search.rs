//! Global semantic search over the catalog.
//!
//! One cosine scan across every stored movie vector. At catalog scale
//! (hundreds of titles) this is a few hundred dot products; rayon chunks the
//! scan across cores and a final sort restores deterministic order with
//! ascending-id tie-breaking.

use crate::client::Embedder;
use crate::similarity::cosine_similarity;
use crate::EmbedError;
use catalog::{Catalog, MovieId};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, instrument};

/// One scored movie from the semantic scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub movie_id: MovieId,
    pub score: f32,
}

/// Full-catalog cosine search against an injected embedding provider.
#[derive(Clone)]
pub struct SemanticSearcher {
    catalog: Arc<Catalog>,
    embedder: Arc<dyn Embedder>,
}

impl SemanticSearcher {
    pub fn new(catalog: Arc<Catalog>, embedder: Arc<dyn Embedder>) -> Self {
        Self { catalog, embedder }
    }

    /// Embed the query text and rank every indexed movie by cosine
    /// similarity.
    ///
    /// Entries below `min_similarity` are dropped; the top `top_k` survivors
    /// are returned in descending score order, ties broken by ascending
    /// movie id.
    #[instrument(skip(self, query_text), fields(top_k = top_k))]
    pub async fn search(
        &self,
        query_text: &str,
        top_k: usize,
        min_similarity: f32,
    ) -> Result<Vec<SearchHit>, EmbedError> {
        let query_vector = self.embedder.embed(query_text).await?;

        let mut hits: Vec<SearchHit> = self
            .catalog
            .embedded_ids()
            .par_iter()
            .filter_map(|&movie_id| {
                let stored = self.catalog.embedding(movie_id)?;
                let score = cosine_similarity(&query_vector, stored);
                if score >= min_similarity {
                    Some(SearchHit { movie_id, score })
                } else {
                    None
                }
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.movie_id.cmp(&b.movie_id))
        });
        hits.truncate(top_k);

        debug!("semantic scan returned {} hits", hits.len());
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog::{Movie, MovieEmbedding};

    /// Stub embedder with a fixed vector for every query.
    struct FixedEmbedder {
        vector: Vec<f32>,
    }

    #[async_trait]
    impl Embedder for FixedEmbedder {
        fn dimension(&self) -> usize {
            self.vector.len()
        }

        async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
            if text.trim().is_empty() {
                return Ok(vec![0.0; self.vector.len()]);
            }
            Ok(self.vector.clone())
        }
    }

    fn test_movie(id: u32) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            original_title: String::new(),
            overview: String::new(),
            tagline: String::new(),
            release_date: None,
            original_language: "en".to_string(),
            vote_average: 7.0,
            vote_count: 100,
            popularity: 1.0,
            runtime: None,
            poster_path: None,
            genres: vec![],
            keywords: vec![],
            mood_tags: vec![],
        }
    }

    fn catalog_with_vectors(vectors: &[(u32, Vec<f32>)]) -> Arc<Catalog> {
        let mut catalog = Catalog::new();
        for (id, vector) in vectors {
            catalog.insert_movie(test_movie(*id));
            catalog.insert_embedding(MovieEmbedding {
                id: *id,
                vector: vector.clone(),
            });
        }
        Arc::new(catalog)
    }

    #[tokio::test]
    async fn test_ranks_by_cosine_descending() {
        let catalog = catalog_with_vectors(&[
            (1, vec![1.0, 0.0]),  // cosine 1.0
            (2, vec![0.0, 1.0]),  // cosine 0.0
            (3, vec![1.0, 1.0]),  // cosine ~0.707
        ]);
        let searcher = SemanticSearcher::new(
            catalog,
            Arc::new(FixedEmbedder { vector: vec![1.0, 0.0] }),
        );

        let hits = searcher.search("anything", 10, 0.0).await.unwrap();
        let ids: Vec<u32> = hits.iter().map(|h| h.movie_id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[tokio::test]
    async fn test_min_similarity_filters() {
        let catalog = catalog_with_vectors(&[
            (1, vec![1.0, 0.0]),
            (2, vec![-1.0, 0.0]), // cosine -1.0
        ]);
        let searcher = SemanticSearcher::new(
            catalog,
            Arc::new(FixedEmbedder { vector: vec![1.0, 0.0] }),
        );

        let hits = searcher.search("anything", 10, 0.0).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].movie_id, 1);
    }

    #[tokio::test]
    async fn test_ties_break_by_ascending_id() {
        let catalog = catalog_with_vectors(&[
            (9, vec![1.0, 0.0]),
            (2, vec![1.0, 0.0]),
            (5, vec![2.0, 0.0]), // same direction, same cosine
        ]);
        let searcher = SemanticSearcher::new(
            catalog,
            Arc::new(FixedEmbedder { vector: vec![1.0, 0.0] }),
        );

        let hits = searcher.search("anything", 10, 0.0).await.unwrap();
        let ids: Vec<u32> = hits.iter().map(|h| h.movie_id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[tokio::test]
    async fn test_top_k_truncation() {
        let catalog = catalog_with_vectors(&[
            (1, vec![1.0, 0.0]),
            (2, vec![1.0, 0.1]),
            (3, vec![1.0, 0.2]),
        ]);
        let searcher = SemanticSearcher::new(
            catalog,
            Arc::new(FixedEmbedder { vector: vec![1.0, 0.0] }),
        );

        let hits = searcher.search("anything", 2, 0.0).await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_zero_query_vector_scores_everything_zero() {
        let catalog = catalog_with_vectors(&[(1, vec![1.0, 0.0]), (2, vec![0.0, 1.0])]);
        let searcher = SemanticSearcher::new(
            catalog,
            Arc::new(FixedEmbedder { vector: vec![1.0, 0.0] }),
        );

        // Empty text → zero vector → every cosine is 0.0, still >= 0.0
        let hits = searcher.search("", 10, 0.0).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.score == 0.0));
        // Pure id order on an all-tie scan
        assert_eq!(hits[0].movie_id, 1);
    }

    #[tokio::test]
    async fn test_empty_catalog_returns_no_hits() {
        let searcher = SemanticSearcher::new(
            Arc::new(Catalog::new()),
            Arc::new(FixedEmbedder { vector: vec![1.0, 0.0] }),
        );
        let hits = searcher.search("anything", 10, 0.0).await.unwrap();
        assert!(hits.is_empty());
    }
}
