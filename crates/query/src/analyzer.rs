//! Mood combination analysis.
//!
//! Given the English mood tags a request expanded to, classify how they
//! relate: the curated matrix is consulted first (first matching pair in
//! accumulation order wins), then a group heuristic, and single tags are
//! simply "simple".

use mappings::mood_tags::{mood_group, MoodGroup};
use mappings::relationships::RelationKind;
use mappings::lookup_mood_pair;
use std::collections::HashMap;

/// Relationship classification for a set of mood tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationType {
    Simple,
    Journey,
    Paradox,
    Intensification,
    MultiFaceted,
}

impl RelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Simple => "simple",
            RelationType::Journey => "journey",
            RelationType::Paradox => "paradox",
            RelationType::Intensification => "intensification",
            RelationType::MultiFaceted => "multi-faceted",
        }
    }
}

impl From<RelationKind> for RelationType {
    fn from(kind: RelationKind) -> Self {
        match kind {
            RelationKind::Journey => RelationType::Journey,
            RelationKind::Paradox => RelationType::Paradox,
            RelationKind::Intensification => RelationType::Intensification,
            RelationKind::MultiFaceted => RelationType::MultiFaceted,
        }
    }
}

/// Where the classification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationSource {
    Matrix,
    Heuristic,
}

/// How much to trust the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Result of analyzing a mood combination.
#[derive(Debug, Clone)]
pub struct MoodRelationship {
    pub relation: RelationType,
    /// Curated query template; present only for matrix hits.
    pub template: Option<String>,
    pub description: String,
    pub source: RelationSource,
    pub confidence: Confidence,
}

/// Analyze an ordered list of canonical mood tags.
///
/// Pairs are walked in input order and the first pair present in the matrix
/// decides the result, so leading tags carry the most weight.
pub fn analyze_mood_combination(mood_tags: &[String]) -> MoodRelationship {
    if mood_tags.len() <= 1 {
        return MoodRelationship {
            relation: RelationType::Simple,
            template: None,
            description: "single mood".to_string(),
            source: RelationSource::Heuristic,
            confidence: Confidence::Low,
        };
    }

    // Matrix first: first matching unordered pair wins.
    for i in 0..mood_tags.len() {
        for j in (i + 1)..mood_tags.len() {
            if let Some(entry) = lookup_mood_pair(&mood_tags[i], &mood_tags[j]) {
                return MoodRelationship {
                    relation: entry.kind.into(),
                    template: Some(entry.template.to_string()),
                    description: entry.description.to_string(),
                    source: RelationSource::Matrix,
                    confidence: Confidence::High,
                };
            }
        }
    }

    // Heuristic fallback over the disjoint mood groups.
    let mut group_counts: HashMap<MoodGroup, usize> = HashMap::new();
    for tag in mood_tags {
        if let Some(group) = mood_group(tag) {
            *group_counts.entry(group).or_insert(0) += 1;
        }
    }

    let has = |group: MoodGroup| group_counts.contains_key(&group);
    if (has(MoodGroup::Positive) && has(MoodGroup::Negative))
        || (has(MoodGroup::Energetic) && has(MoodGroup::Calm))
    {
        return MoodRelationship {
            relation: RelationType::Paradox,
            template: None,
            description: "opposing mood groups".to_string(),
            source: RelationSource::Heuristic,
            confidence: Confidence::Medium,
        };
    }
    if group_counts.values().any(|&count| count >= 2) {
        return MoodRelationship {
            relation: RelationType::Intensification,
            template: None,
            description: "reinforcing moods from one group".to_string(),
            source: RelationSource::Heuristic,
            confidence: Confidence::Medium,
        };
    }
    MoodRelationship {
        relation: RelationType::MultiFaceted,
        template: None,
        description: "independent mood facets".to_string(),
        source: RelationSource::Heuristic,
        confidence: Confidence::Low,
    }
}
