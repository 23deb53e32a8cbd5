//! Canonical English mood-tag vocabulary.
//!
//! Every mood tag stored on a movie, produced by a UI mood label, or emitted
//! by the Chinese dictionaries comes from this closed list. The grouping into
//! emotion / atmosphere / theme mirrors how the tags were curated for the
//! catalog; the four `MoodGroup` sets drive the relationship heuristic when a
//! pair of tags has no entry in the relationship matrix.

/// The closed vocabulary of canonical mood tags (~44 entries).
pub const MOOD_TAG_VOCABULARY: &[&str] = &[
    // Emotion
    "hopeful",
    "inspiring",
    "emotional",
    "uplifting",
    "heartwarming",
    "intense",
    "dark",
    "thrilling",
    "suspenseful",
    "thought-provoking",
    "funny",
    "lighthearted",
    "whimsical",
    "cheerful",
    "feel-good",
    "romantic",
    "passionate",
    "bittersweet",
    "melancholic",
    "epic",
    "grand",
    "adventurous",
    "exciting",
    "action-packed",
    "terrifying",
    "creepy",
    "disturbing",
    "mysterious",
    // Atmosphere
    "cozy",
    "relaxing",
    "comforting",
    "gritty",
    "realistic",
    "atmospheric",
    "moody",
    "dreamy",
    "fast-paced",
    "contemplative",
    // Theme
    "mind-bending",
    "philosophical",
    "heartbreaking",
    "empowering",
    "escapist",
    "fantastical",
    "magical",
    "imaginative",
];

/// Check whether a lowercase tag belongs to the canonical vocabulary.
pub fn is_canonical_mood_tag(tag: &str) -> bool {
    MOOD_TAG_VOCABULARY.contains(&tag)
}

/// Disjoint mood groups used by the relationship heuristic.
///
/// A tag belongs to at most one group; tags outside all four groups are
/// neutral for the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodGroup {
    Positive,
    Negative,
    Energetic,
    Calm,
}

const POSITIVE_GROUP: &[&str] = &[
    "hopeful",
    "inspiring",
    "uplifting",
    "heartwarming",
    "funny",
    "lighthearted",
    "whimsical",
    "cheerful",
    "feel-good",
    "romantic",
    "comforting",
    "magical",
    "empowering",
];

const NEGATIVE_GROUP: &[&str] = &[
    "dark",
    "disturbing",
    "melancholic",
    "bittersweet",
    "heartbreaking",
    "terrifying",
    "creepy",
    "gritty",
    "moody",
];

const ENERGETIC_GROUP: &[&str] = &[
    "intense",
    "thrilling",
    "exciting",
    "action-packed",
    "fast-paced",
    "adventurous",
    "epic",
    "suspenseful",
    "passionate",
];

const CALM_GROUP: &[&str] = &[
    "contemplative",
    "dreamy",
    "atmospheric",
    "philosophical",
    "thought-provoking",
    "relaxing",
    "cozy",
];

/// Classify a tag into its mood group, if any.
pub fn mood_group(tag: &str) -> Option<MoodGroup> {
    if POSITIVE_GROUP.contains(&tag) {
        Some(MoodGroup::Positive)
    } else if NEGATIVE_GROUP.contains(&tag) {
        Some(MoodGroup::Negative)
    } else if ENERGETIC_GROUP.contains(&tag) {
        Some(MoodGroup::Energetic)
    } else if CALM_GROUP.contains(&tag) {
        Some(MoodGroup::Calm)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for tag in MOOD_TAG_VOCABULARY {
            assert_eq!(*tag, tag.to_lowercase(), "tag must be lowercase: {tag}");
            assert!(seen.insert(*tag), "duplicate tag: {tag}");
        }
    }

    #[test]
    fn test_groups_are_disjoint_subsets_of_vocabulary() {
        let groups = [POSITIVE_GROUP, NEGATIVE_GROUP, ENERGETIC_GROUP, CALM_GROUP];
        let mut seen = std::collections::HashSet::new();
        for group in groups {
            for tag in group {
                assert!(is_canonical_mood_tag(tag), "unknown tag in group: {tag}");
                assert!(seen.insert(*tag), "tag in more than one group: {tag}");
            }
        }
    }

    #[test]
    fn test_mood_group_lookup() {
        assert_eq!(mood_group("funny"), Some(MoodGroup::Positive));
        assert_eq!(mood_group("dark"), Some(MoodGroup::Negative));
        assert_eq!(mood_group("thrilling"), Some(MoodGroup::Energetic));
        assert_eq!(mood_group("contemplative"), Some(MoodGroup::Calm));
        assert_eq!(mood_group("mysterious"), None);
    }
}
