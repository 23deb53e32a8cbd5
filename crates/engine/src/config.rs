//! Engine configuration.
//!
//! One record with nested sections, each with its own defaults, loadable
//! from a TOML file. Everything tunable about the pipeline lives here so
//! threshold experiments never touch code. Validation runs once at engine
//! construction; a config that fails it never serves a request.

use crate::error::RecommendError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Quadrant classification thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadrantThresholds {
    /// A candidate is "high embedding" at or above this cosine score.
    pub high_embedding: f32,
    /// A candidate is "high match" at or above this match ratio.
    pub high_match: f32,
}

impl Default for QuadrantThresholds {
    fn default() -> Self {
        Self {
            high_embedding: 0.60,
            high_match: 0.40,
        }
    }
}

/// Weight vector for one quadrant, on the 0–100 scale.
///
/// The `feature` weight is the reserved share of a future feature-score
/// channel; the current pipeline always feeds that channel a score of zero,
/// so only `embedding` and `match_ratio` contribute to final scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuadrantWeights {
    pub embedding: f32,
    pub match_ratio: f32,
    pub feature: f32,
}

impl QuadrantWeights {
    fn sum(&self) -> f32 {
        self.embedding + self.match_ratio + self.feature
    }
}

/// Per-quadrant scoring weights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub q1: QuadrantWeights,
    pub q2: QuadrantWeights,
    pub q4: QuadrantWeights,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            q1: QuadrantWeights {
                embedding: 0.50,
                match_ratio: 0.20,
                feature: 0.30,
            },
            q2: QuadrantWeights {
                embedding: 0.70,
                match_ratio: 0.20,
                feature: 0.10,
            },
            q4: QuadrantWeights {
                embedding: 0.30,
                match_ratio: 0.30,
                feature: 0.40,
            },
        }
    }
}

/// Candidate-set sizes through the pipeline stages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateCounts {
    /// `top_k` of the global semantic scan.
    pub embedding_top_k: usize,
    /// `target_count` of the tiered feature filter.
    pub feature_filter_k: usize,
    /// Default result size when the request does not ask for a count.
    pub final_recommendations: usize,
    /// Deterministic prefix length of the final selection.
    pub guaranteed_top: usize,
    /// Size of the randomized diversity window after the prefix.
    pub random_pool_size: usize,
}

impl Default for CandidateCounts {
    fn default() -> Self {
        Self {
            embedding_top_k: 300,
            feature_filter_k: 150,
            final_recommendations: 10,
            guaranteed_top: 3,
            random_pool_size: 30,
        }
    }
}

/// Semantic search settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Hits below this cosine score are discarded.
    pub min_similarity: f32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { min_similarity: 0.0 }
    }
}

/// Tier boundaries of the feature filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TierSettings {
    pub tier1_threshold: f32,
    pub tier2_threshold: f32,
}

impl Default for TierSettings {
    fn default() -> Self {
        Self {
            tier1_threshold: 0.80,
            tier2_threshold: 0.50,
        }
    }
}

/// Debug switches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DebugSettings {
    /// Promote per-stage trace output to info level. Never alters results.
    pub verbose: bool,
}

/// The full engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub quadrant_thresholds: QuadrantThresholds,
    pub quadrant_weights: ScoringWeights,
    pub candidate_counts: CandidateCounts,
    pub embedding_search: SearchSettings,
    pub feature_filtering: TierSettings,
    pub debug: DebugSettings,
    /// Seed for the smart-selection sampler. `None` seeds from the OS, so
    /// repeated identical queries vary their diversity picks.
    pub rng_seed: Option<u64>,
}

/// Each weight vector must sum to 1.0 within this tolerance.
const WEIGHT_SUM_TOLERANCE: f32 = 0.05;

impl EngineConfig {
    /// Load a configuration from a TOML file and validate it.
    pub fn load_from_file(path: &Path) -> Result<Self, RecommendError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            RecommendError::InvalidConfiguration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: EngineConfig = toml::from_str(&raw).map_err(|e| {
            RecommendError::InvalidConfiguration(format!("cannot parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration. Called at engine construction.
    pub fn validate(&self) -> Result<(), RecommendError> {
        let unit = 0.0..=1.0;
        for (name, value) in [
            ("quadrant_thresholds.high_embedding", self.quadrant_thresholds.high_embedding),
            ("quadrant_thresholds.high_match", self.quadrant_thresholds.high_match),
            ("feature_filtering.tier1_threshold", self.feature_filtering.tier1_threshold),
            ("feature_filtering.tier2_threshold", self.feature_filtering.tier2_threshold),
        ] {
            if !unit.contains(&value) {
                return Err(RecommendError::InvalidConfiguration(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }

        for (name, weights) in [
            ("q1", self.quadrant_weights.q1),
            ("q2", self.quadrant_weights.q2),
            ("q4", self.quadrant_weights.q4),
        ] {
            let sum = weights.sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(RecommendError::InvalidConfiguration(format!(
                    "quadrant_weights.{name} must sum to 1.0 ± {WEIGHT_SUM_TOLERANCE}, got {sum}"
                )));
            }
        }

        let counts = &self.candidate_counts;
        if counts.embedding_top_k < counts.feature_filter_k
            || counts.feature_filter_k < counts.final_recommendations
        {
            return Err(RecommendError::InvalidConfiguration(format!(
                "candidate counts must satisfy embedding_top_k >= feature_filter_k >= final_recommendations, got {} >= {} >= {}",
                counts.embedding_top_k, counts.feature_filter_k, counts.final_recommendations
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_values_match_deployment() {
        let config = EngineConfig::default();
        assert_eq!(config.quadrant_thresholds.high_embedding, 0.60);
        assert_eq!(config.quadrant_thresholds.high_match, 0.40);
        assert_eq!(config.candidate_counts.embedding_top_k, 300);
        assert_eq!(config.candidate_counts.feature_filter_k, 150);
        assert_eq!(config.candidate_counts.final_recommendations, 10);
        assert_eq!(config.candidate_counts.guaranteed_top, 3);
        assert_eq!(config.candidate_counts.random_pool_size, 30);
        assert_eq!(config.feature_filtering.tier1_threshold, 0.80);
        assert!(!config.debug.verbose);
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn test_out_of_range_threshold_is_rejected() {
        let mut config = EngineConfig::default();
        config.quadrant_thresholds.high_embedding = 1.5;
        assert!(matches!(
            config.validate(),
            Err(RecommendError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_weight_sum_is_checked() {
        let mut config = EngineConfig::default();
        config.quadrant_weights.q1.feature = 0.0; // sum 0.70
        assert!(matches!(
            config.validate(),
            Err(RecommendError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_count_ordering_is_checked() {
        let mut config = EngineConfig::default();
        config.candidate_counts.feature_filter_k = 400; // > embedding_top_k
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.candidate_counts.final_recommendations = 200; // > feature_filter_k
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
            rng_seed = 42

            [quadrant_thresholds]
            high_embedding = 0.65
            "#,
        )
        .unwrap();

        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.quadrant_thresholds.high_embedding, 0.65);
        assert_eq!(config.quadrant_thresholds.high_match, 0.40);
        assert_eq!(config.candidate_counts.embedding_top_k, 300);
    }
}
