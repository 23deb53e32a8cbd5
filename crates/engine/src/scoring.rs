//! Three-quadrant classification and dynamic weighted scoring.
//!
//! Semantic relevance is the primary axis: a candidate with a low embedding
//! score lands in Q4 no matter how well its features match. Q2 exists for
//! the opposite corner, "semantic discovery": the embedding sees a fit the
//! requested features cannot explain.

use crate::config::{QuadrantThresholds, QuadrantWeights, ScoringWeights};
use pipeline::Candidate;

/// Quadrant of a candidate in the (embedding, match) plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Q1PerfectMatch,
    Q2SemanticDiscovery,
    Q4Fallback,
}

impl Quadrant {
    /// Wire name as exposed in the output records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::Q1PerfectMatch => "q1_perfect_match",
            Quadrant::Q2SemanticDiscovery => "q2_semantic_discovery",
            Quadrant::Q4Fallback => "q4_fallback",
        }
    }

    /// Sort priority; lower sorts first.
    pub fn priority(&self) -> u8 {
        match self {
            Quadrant::Q1PerfectMatch => 1,
            Quadrant::Q2SemanticDiscovery => 2,
            Quadrant::Q4Fallback => 3,
        }
    }
}

/// Classify a candidate. Pure function of scores and thresholds.
pub fn classify(embedding_score: f32, match_ratio: f32, thresholds: &QuadrantThresholds) -> Quadrant {
    let high_embedding = embedding_score >= thresholds.high_embedding;
    let high_match = match_ratio >= thresholds.high_match;
    match (high_embedding, high_match) {
        (true, true) => Quadrant::Q1PerfectMatch,
        (true, false) => Quadrant::Q2SemanticDiscovery,
        (false, _) => Quadrant::Q4Fallback,
    }
}

/// A candidate annotated with its quadrant and final score.
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub quadrant: Quadrant,
    /// Weighted score in [0, 100].
    pub final_score: f32,
}

/// Applies quadrant-specific weights to produce final scores.
#[derive(Debug, Clone, Copy)]
pub struct QuadrantScorer {
    thresholds: QuadrantThresholds,
    weights: ScoringWeights,
}

impl QuadrantScorer {
    pub fn new(thresholds: QuadrantThresholds, weights: ScoringWeights) -> Self {
        Self { thresholds, weights }
    }

    /// Classify and score every candidate, preserving input order.
    pub fn score_all(&self, candidates: Vec<Candidate>) -> Vec<RankedCandidate> {
        candidates
            .into_iter()
            .map(|candidate| {
                let quadrant =
                    classify(candidate.embedding_score, candidate.match_ratio, &self.thresholds);
                let final_score = self.score(&candidate, quadrant);
                RankedCandidate {
                    candidate,
                    quadrant,
                    final_score,
                }
            })
            .collect()
    }

    /// Dynamic weighted score on the 0–100 scale.
    fn score(&self, candidate: &Candidate, quadrant: Quadrant) -> f32 {
        let weights: QuadrantWeights = match quadrant {
            Quadrant::Q1PerfectMatch => self.weights.q1,
            Quadrant::Q2SemanticDiscovery => self.weights.q2,
            Quadrant::Q4Fallback => self.weights.q4,
        };
        // The feature channel is reserved; it always contributes zero for now.
        let feature_score = 0.0f32;
        candidate.embedding_score * 100.0 * weights.embedding
            + candidate.match_ratio * 100.0 * weights.match_ratio
            + feature_score * 100.0 * weights.feature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> QuadrantThresholds {
        QuadrantThresholds::default()
    }

    fn candidate(embedding_score: f32, match_ratio: f32) -> Candidate {
        Candidate {
            movie_id: 1,
            embedding_score,
            match_count: 0,
            total_features: 4,
            match_ratio,
        }
    }

    #[test]
    fn test_classification() {
        // High E + high M
        assert_eq!(classify(0.65, 0.75, &thresholds()), Quadrant::Q1PerfectMatch);
        // Boundary values are inclusive
        assert_eq!(classify(0.60, 0.40, &thresholds()), Quadrant::Q1PerfectMatch);
        // High E + low M
        assert_eq!(classify(0.70, 0.30, &thresholds()), Quadrant::Q2SemanticDiscovery);
        assert_eq!(classify(0.65, 0.39, &thresholds()), Quadrant::Q2SemanticDiscovery);
        // Low E collapses to Q4 regardless of match ratio
        assert_eq!(classify(0.50, 0.80, &thresholds()), Quadrant::Q4Fallback);
        assert_eq!(classify(0.59, 0.20, &thresholds()), Quadrant::Q4Fallback);
    }

    #[test]
    fn test_classification_with_custom_thresholds() {
        let custom = QuadrantThresholds {
            high_embedding: 0.70,
            high_match: 0.50,
        };
        assert_eq!(classify(0.75, 0.55, &custom), Quadrant::Q1PerfectMatch);
        assert_eq!(classify(0.65, 0.55, &custom), Quadrant::Q4Fallback);
    }

    #[test]
    fn test_q1_score() {
        let scorer = QuadrantScorer::new(thresholds(), ScoringWeights::default());
        let ranked = scorer.score_all(vec![candidate(0.80, 0.60)]);
        // 0.80*100*0.50 + 0.60*100*0.20 = 40 + 12
        assert_eq!(ranked[0].quadrant, Quadrant::Q1PerfectMatch);
        assert!((ranked[0].final_score - 52.0).abs() < 0.01);
    }

    #[test]
    fn test_q2_score() {
        let scorer = QuadrantScorer::new(thresholds(), ScoringWeights::default());
        let ranked = scorer.score_all(vec![candidate(0.85, 0.30)]);
        // 0.85*100*0.70 + 0.30*100*0.20 = 59.5 + 6
        assert_eq!(ranked[0].quadrant, Quadrant::Q2SemanticDiscovery);
        assert!((ranked[0].final_score - 65.5).abs() < 0.01);
    }

    #[test]
    fn test_q4_score() {
        let scorer = QuadrantScorer::new(thresholds(), ScoringWeights::default());
        let ranked = scorer.score_all(vec![candidate(0.55, 0.50)]);
        // 0.55*100*0.30 + 0.50*100*0.30 = 16.5 + 15
        assert_eq!(ranked[0].quadrant, Quadrant::Q4Fallback);
        assert!((ranked[0].final_score - 31.5).abs() < 0.01);
    }

    #[test]
    fn test_q2_can_outscore_q1_on_raw_score() {
        let scorer = QuadrantScorer::new(thresholds(), ScoringWeights::default());
        let ranked = scorer.score_all(vec![candidate(0.70, 0.80), candidate(0.90, 0.20)]);

        let q1_score = ranked[0].final_score; // 35 + 16 = 51
        let q2_score = ranked[1].final_score; // 63 + 4 = 67
        assert!(q2_score > q1_score);
        // Priority still favors Q1 in the mixed sort; see selection tests.
        assert!(ranked[0].quadrant.priority() < ranked[1].quadrant.priority());
    }

    #[test]
    fn test_scores_stay_in_range() {
        let scorer = QuadrantScorer::new(thresholds(), ScoringWeights::default());
        for (e, m) in [(0.0, 0.0), (1.0, 1.0), (0.61, 0.0), (0.0, 1.0)] {
            let ranked = scorer.score_all(vec![candidate(e, m)]);
            assert!(ranked[0].final_score >= 0.0);
            assert!(ranked[0].final_score <= 100.0);
        }
    }
}
