//! Sentiment conflict detection between NL text and mood tags.
//!
//! Keyword-based first version. The result is advisory metadata: even when a
//! conflict is flagged, the natural-language text still drives the embedding
//! query and the mood tags still drive feature filtering.

use mappings::sentiment::{
    NEGATIVE_CUE_WORDS, NEGATIVE_SENTIMENT_MOODS, POSITIVE_CUE_WORDS, POSITIVE_SENTIMENT_MOODS,
};

/// Detect whether the query text and the mood tags pull in opposite
/// sentiment directions.
pub fn detect_sentiment_conflict(natural_query: &str, mood_tags: &[String]) -> bool {
    let query_lower = natural_query.to_lowercase();

    let nl_is_positive = POSITIVE_CUE_WORDS.iter().any(|cue| query_lower.contains(cue));
    let nl_is_negative = NEGATIVE_CUE_WORDS.iter().any(|cue| query_lower.contains(cue));

    let moods_are_positive = mood_tags
        .iter()
        .any(|tag| POSITIVE_SENTIMENT_MOODS.contains(&tag.as_str()));
    let moods_are_negative = mood_tags
        .iter()
        .any(|tag| NEGATIVE_SENTIMENT_MOODS.contains(&tag.as_str()));

    (nl_is_positive && moods_are_negative) || (nl_is_negative && moods_are_positive)
}
