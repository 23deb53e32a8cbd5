//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible hard filters to be applied to candidate sets.

use crate::candidate::Candidate;
use anyhow::Result;
use query::CanonicalFeatures;

/// Core trait for hard-filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - The request's canonical features are the filtering context, so a
///   pipeline built once at startup serves every request
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `features` - Canonical features extracted from the request
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The surviving candidates
    /// * `Err` - If filtering fails
    fn apply(
        &self,
        candidates: Vec<Candidate>,
        features: &CanonicalFeatures,
    ) -> Result<Vec<Candidate>>;
}
