//! Embedding query synthesis.
//!
//! Four scenarios, decided purely by which inputs are present:
//!
//! 1. **nl_only** — the natural-language text is the query
//! 2. **mood_only** — a relationship-aware template generated from the tags
//! 3. **both** — NL wins the query text; the mood relationship and any
//!    sentiment conflict are carried along as metadata
//! 4. **empty** — a generic seed phrase

use crate::analyzer::{analyze_mood_combination, MoodRelationship, RelationType};
use crate::conflict::detect_sentiment_conflict;
use tracing::debug;

/// Seed phrase used when the request carries neither text nor moods.
pub const EMPTY_QUERY_TEXT: &str = "popular and highly rated movies";

/// Which input combination produced the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    NlOnly,
    MoodOnly,
    Both,
    Empty,
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::NlOnly => "nl_only",
            Scenario::MoodOnly => "mood_only",
            Scenario::Both => "both",
            Scenario::Empty => "empty",
        }
    }
}

/// The synthesized embedding query plus its provenance.
#[derive(Debug, Clone)]
pub struct EmbeddingQuery {
    /// Text handed to the embedding service.
    pub query_text: String,
    pub scenario: Scenario,
    /// Mood relationship metadata, when moods were present.
    pub relationship: Option<MoodRelationship>,
    /// Advisory sentiment conflict flag (scenario `both` only).
    pub conflict: bool,
}

/// Build the embedding query from the NL text and the request's canonical
/// mood tags.
pub fn build_query(natural_query: Option<&str>, mood_tags: &[String]) -> EmbeddingQuery {
    let nl = natural_query.unwrap_or("").trim();
    let has_nl = !nl.is_empty();
    let has_moods = !mood_tags.is_empty();

    let query = match (has_nl, has_moods) {
        (true, false) => EmbeddingQuery {
            query_text: nl.to_string(),
            scenario: Scenario::NlOnly,
            relationship: None,
            conflict: false,
        },
        (true, true) => {
            // NL wins the query text; moods stay behind for filtering.
            let relationship = analyze_mood_combination(mood_tags);
            let conflict = detect_sentiment_conflict(nl, mood_tags);
            EmbeddingQuery {
                query_text: nl.to_string(),
                scenario: Scenario::Both,
                relationship: Some(relationship),
                conflict,
            }
        }
        (false, true) => {
            let relationship = analyze_mood_combination(mood_tags);
            let query_text = generate_mood_template(mood_tags, &relationship);
            EmbeddingQuery {
                query_text,
                scenario: Scenario::MoodOnly,
                relationship: Some(relationship),
                conflict: false,
            }
        }
        (false, false) => EmbeddingQuery {
            query_text: EMPTY_QUERY_TEXT.to_string(),
            scenario: Scenario::Empty,
            relationship: None,
            conflict: false,
        },
    };

    debug!(
        scenario = query.scenario.as_str(),
        conflict = query.conflict,
        "built embedding query: {}",
        query.query_text
    );
    query
}

/// Render the query text for a mood-only request.
///
/// A curated matrix template wins outright; otherwise a short canned
/// sentence is synthesized from the relationship type and the leading tags.
fn generate_mood_template(mood_tags: &[String], relationship: &MoodRelationship) -> String {
    if let Some(template) = &relationship.template {
        return template.clone();
    }

    match relationship.relation {
        RelationType::Journey => {
            if mood_tags.len() >= 2 {
                format!(
                    "A story about transformation from {} to {}, emotional journey and character development",
                    mood_tags[0], mood_tags[1]
                )
            } else {
                format!(
                    "A {} story about personal growth and transformation",
                    mood_tags[0]
                )
            }
        }
        RelationType::Paradox => {
            if mood_tags.len() >= 2 {
                format!(
                    "A movie that blends {} with {}, contrasting yet harmonious",
                    mood_tags[0], mood_tags[1]
                )
            } else {
                format!("A {} film with unexpected contrasts", mood_tags[0])
            }
        }
        RelationType::Intensification => {
            if mood_tags.len() >= 2 {
                format!(
                    "A deeply {} and {} story, intensely emotional and atmospheric",
                    mood_tags[0], mood_tags[1]
                )
            } else {
                format!("An intensely {} film", mood_tags[0])
            }
        }
        RelationType::MultiFaceted => {
            let facets: Vec<&str> = mood_tags.iter().take(3).map(|s| s.as_str()).collect();
            format!(
                "A complex {} film with layered storytelling",
                facets.join(" and ")
            )
        }
        RelationType::Simple => {
            let joined: Vec<&str> = mood_tags.iter().map(|s| s.as_str()).collect();
            format!("A {} movie", joined.join(" and "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_nl_only() {
        let query = build_query(Some("難過的時候適合看什麼電影"), &[]);
        assert_eq!(query.scenario, Scenario::NlOnly);
        assert_eq!(query.query_text, "難過的時候適合看什麼電影");
        assert!(query.relationship.is_none());
        assert!(!query.conflict);
    }

    #[test]
    fn test_mood_only_uses_matrix_template() {
        // 失戀 expansion: (emotional, melancholic) matrix template wins.
        let query = build_query(
            None,
            &tags(&["emotional", "melancholic", "bittersweet", "romantic"]),
        );
        assert_eq!(query.scenario, Scenario::MoodOnly);
        assert_eq!(
            query.query_text,
            "A deeply emotional and melancholic story, profoundly moving and contemplative"
        );
    }

    #[test]
    fn test_mood_only_synthesizes_without_matrix_entry() {
        // (hopeful, empowering) is a heuristic intensification.
        let query = build_query(None, &tags(&["hopeful", "empowering"]));
        assert_eq!(query.scenario, Scenario::MoodOnly);
        assert_eq!(
            query.query_text,
            "A deeply hopeful and empowering story, intensely emotional and atmospheric"
        );
    }

    #[test]
    fn test_single_mood_template() {
        let query = build_query(None, &tags(&["melancholic"]));
        assert_eq!(query.query_text, "A melancholic movie");
    }

    #[test]
    fn test_both_nl_wins_and_conflict_is_advisory() {
        let query = build_query(Some("溫暖治癒的故事"), &tags(&["dark"]));
        assert_eq!(query.scenario, Scenario::Both);
        assert_eq!(query.query_text, "溫暖治癒的故事");
        assert!(query.conflict);
        assert!(query.relationship.is_some());
    }

    #[test]
    fn test_empty_request_uses_seed_phrase() {
        let query = build_query(None, &[]);
        assert_eq!(query.scenario, Scenario::Empty);
        assert_eq!(query.query_text, EMPTY_QUERY_TEXT);

        let query = build_query(Some("   "), &[]);
        assert_eq!(query.scenario, Scenario::Empty);
    }
}
