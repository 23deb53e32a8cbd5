//! # Recommendation Orchestrator
//!
//! This module coordinates the entire embedding-first pipeline:
//! 1. Extract canonical features from the request
//! 2. Synthesize the embedding query (scenario + mood relationship)
//! 3. Global semantic search over the catalog
//! 4. Join hits with catalog metadata
//! 5. Hard filters, match ratios, tiered selection
//! 6. Quadrant classification and dynamic scoring
//! 7. Mixed sort and smart selection
//! 8. Project to the external result shape
//!
//! Empty intermediate results short-circuit to an empty list; the only
//! errors a request can surface are an unreachable embedding service and a
//! corrupt catalog.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use catalog::{Catalog, CatalogError};
use embedding::{Embedder, SemanticSearcher};
use pipeline::filters::{ExcludeGenreFilter, GenreFilter, MinimumRatingFilter, YearRangeFilter};
use pipeline::{Candidate, FilterPipeline, MatchRatioEngine, TieredSelector};
use query::{build_query, extract, UserRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::EngineConfig;
use crate::error::RecommendError;
use crate::output::{project, Recommendation};
use crate::scoring::{QuadrantScorer, RankedCandidate};
use crate::selection::{mixed_sort, smart_select};

/// Main orchestrator wiring catalog, embedder and pipeline together.
///
/// Cheap to share: the catalog sits behind an `Arc` and every request gets
/// its own RNG state, so concurrent `recommend` calls need no coordination.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    searcher: SemanticSearcher,
    filter_pipeline: Arc<FilterPipeline>,
    match_engine: MatchRatioEngine,
    scorer: QuadrantScorer,
    config: EngineConfig,
}

impl Recommender {
    /// Create a new recommender with all components initialized.
    ///
    /// # Arguments
    /// * `catalog` - Shared read-only catalog, already validated at load
    /// * `embedder` - The embedding provider capability
    /// * `config` - Engine configuration; validated here
    pub fn new(
        catalog: Arc<Catalog>,
        embedder: Arc<dyn Embedder>,
        config: EngineConfig,
    ) -> Result<Self, RecommendError> {
        config.validate()?;

        let searcher = SemanticSearcher::new(catalog.clone(), embedder);
        let filter_pipeline = Arc::new(
            FilterPipeline::new()
                .add_filter(GenreFilter::new(catalog.clone()))
                .add_filter(ExcludeGenreFilter::new(catalog.clone()))
                .add_filter(YearRangeFilter::new(catalog.clone()))
                .add_filter(MinimumRatingFilter::new(catalog.clone())),
        );
        let match_engine = MatchRatioEngine::new(catalog.clone());
        let scorer = QuadrantScorer::new(config.quadrant_thresholds, config.quadrant_weights);

        Ok(Self {
            catalog,
            searcher,
            filter_pipeline,
            match_engine,
            scorer,
            config,
        })
    }

    /// Main entry point: produce ranked recommendations for one request.
    ///
    /// # Returns
    /// An ordered list of at most `request.count` recommendations; possibly
    /// empty, never partial on error.
    pub async fn recommend(
        &self,
        request: &UserRequest,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let start_time = Instant::now();
        let counts = &self.config.candidate_counts;

        // Stage 1: canonical features
        let features = extract(request, &self.catalog);
        self.trace(format_args!(
            "features: {} keywords, {} mood tags, {} genres, {} year ranges",
            features.keywords.len(),
            features.mood_tags.len(),
            features.genres.len(),
            features.year_ranges.len()
        ));

        // Stage 2: embedding query synthesis
        let embedding_query =
            build_query(request.natural_query.as_deref(), &features.mood_tags);
        self.trace(format_args!(
            "query scenario={} conflict={} text={}",
            embedding_query.scenario.as_str(),
            embedding_query.conflict,
            embedding_query.query_text
        ));

        // Stage 3: global semantic search
        let hits = self
            .searcher
            .search(
                &embedding_query.query_text,
                counts.embedding_top_k,
                self.config.embedding_search.min_similarity,
            )
            .await?;
        info!("semantic search returned {} hits", hits.len());
        if hits.is_empty() {
            return Ok(Vec::new());
        }

        // Stage 4: join with catalog metadata
        let candidates: Vec<Candidate> = hits
            .iter()
            .map(|hit| {
                if self.catalog.get_movie(hit.movie_id).is_none() {
                    // The scan only sees indexed ids, so a missing metadata
                    // row means the export files disagree with each other.
                    return Err(RecommendError::CatalogCorrupt(CatalogError::UnknownMovie {
                        movie_id: hit.movie_id,
                    }));
                }
                Ok(Candidate::new(hit.movie_id, hit.score))
            })
            .collect::<Result<_, _>>()?;

        // Stage 5: hard filters, match ratios, tiered selection
        let filtered = self.filter_pipeline.apply(candidates, &features)?;
        info!("hard filters kept {} candidates", filtered.len());
        if filtered.is_empty() {
            return Ok(Vec::new());
        }

        let scored = self.match_engine.compute(filtered, &features);
        let selector = TieredSelector::new(
            self.config.feature_filtering.tier1_threshold,
            self.config.feature_filtering.tier2_threshold,
            counts.feature_filter_k,
        );
        let selected = selector.select(scored);
        info!("tiered selection kept {} candidates", selected.len());

        // Stage 6: quadrant classification and scoring
        let mut ranked = self.scorer.score_all(selected);
        if self.config.debug.verbose {
            self.log_quadrant_distribution(&ranked);
        }

        // Stage 7: mixed sort and smart selection
        mixed_sort(&mut ranked);
        let count = request.count.unwrap_or(counts.final_recommendations);
        let mut rng = match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let picked = smart_select(
            ranked,
            count,
            counts.guaranteed_top,
            counts.random_pool_size,
            &mut rng,
        );

        // Stage 8: projection
        let recommendations = picked
            .iter()
            .map(|entry| {
                let movie = self.catalog.get_movie(entry.candidate.movie_id).ok_or(
                    RecommendError::CatalogCorrupt(CatalogError::UnknownMovie {
                        movie_id: entry.candidate.movie_id,
                    }),
                )?;
                Ok(project(movie, entry))
            })
            .collect::<Result<Vec<_>, RecommendError>>()?;

        info!(
            "returned {} recommendations in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    /// Per-stage trace line: info when verbose, debug otherwise.
    fn trace(&self, message: std::fmt::Arguments<'_>) {
        if self.config.debug.verbose {
            info!("{message}");
        } else {
            debug!("{message}");
        }
    }

    fn log_quadrant_distribution(&self, ranked: &[RankedCandidate]) {
        let mut q1 = 0usize;
        let mut q2 = 0usize;
        let mut q4 = 0usize;
        for entry in ranked {
            match entry.quadrant.priority() {
                1 => q1 += 1,
                2 => q2 += 1,
                _ => q4 += 1,
            }
        }
        info!("quadrant distribution: q1={q1} q2={q2} q4={q4}");
    }
}
