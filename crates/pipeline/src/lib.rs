//! Pipeline for filtering and soft-matching movie candidates.
//!
//! This crate provides:
//! - Filter trait and hard-filter implementations (genres, excluded genres,
//!   year ranges, minimum rating)
//! - FilterPipeline for composing filters
//! - MatchRatioEngine for computing per-candidate feature match ratios
//! - TieredSelector for the three-tier progressive selection
//!
//! ## Architecture
//! The pipeline narrows the semantic-search candidates in stages:
//! 1. Hard filters eliminate candidates outright (wrong genre, wrong era,
//!    too low a rating)
//! 2. MatchRatioEngine scores how many requested features each survivor
//!    carries
//! 3. TieredSelector keeps the best `target_count` candidates, falling back
//!    tier by tier when strict matches run out
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, MatchRatioEngine, TieredSelector};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(GenreFilter::new(catalog.clone()))
//!     .add_filter(ExcludeGenreFilter::new(catalog.clone()))
//!     .add_filter(YearRangeFilter::new(catalog.clone()))
//!     .add_filter(MinimumRatingFilter::new(catalog.clone()));
//!
//! let survivors = pipeline.apply(candidates, &features)?;
//! let scored = MatchRatioEngine::new(catalog.clone()).compute(survivors, &features);
//! let selected = TieredSelector::new(0.80, 0.50, 150).select(scored);
//! ```

pub mod candidate;
pub mod filter_pipeline;
pub mod filters;
pub mod match_ratio;
pub mod tiers;
pub mod traits;

// Re-export main types
pub use candidate::Candidate;
pub use filter_pipeline::FilterPipeline;
pub use match_ratio::MatchRatioEngine;
pub use tiers::TieredSelector;
pub use traits::Filter;
