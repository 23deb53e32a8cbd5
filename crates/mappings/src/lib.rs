//! # Mappings Crate
//!
//! Static lookup tables shared by the recommendation pipeline.
//!
//! ## Components
//!
//! - **mood_tags**: the closed canonical English mood-tag vocabulary and the
//!   mood group sets used by the relationship heuristic
//! - **mood_labels**: UI mood labels (Chinese, closed set) and the database
//!   tags/keywords each label expands to
//! - **zh_mood / zh_keywords**: Chinese surface form → English tag
//!   dictionaries for substring extraction from natural-language queries
//! - **genres**: traditional ↔ simplified Chinese genre script conversion
//! - **eras**: decade ID → inclusive year range
//! - **relationships**: curated mood-pair relationship matrix with query
//!   templates
//! - **sentiment**: positive/negative cue vocabularies for conflict detection
//!
//! All tables are compile-time constants. They are the sole source of truth
//! for the closed vocabularies; no other crate introduces new mood tags.

pub mod eras;
pub mod genres;
pub mod mood_labels;
pub mod mood_tags;
pub mod relationships;
pub mod sentiment;
pub mod zh_keywords;
pub mod zh_mood;

// Re-export commonly used items
pub use eras::{era_to_year_range, ERA_RANGE_MAP};
pub use genres::{genre_to_simplified, genre_to_traditional, GENRE_TRADITIONAL_TO_SIMPLIFIED};
pub use mood_labels::{lookup_mood_label, MoodLabelEntry, MOOD_LABEL_TO_DB_TAGS};
pub use mood_tags::{is_canonical_mood_tag, MoodGroup, MOOD_TAG_VOCABULARY};
pub use relationships::{lookup_mood_pair, MoodPairEntry, RelationKind, MOOD_RELATIONSHIP_MATRIX};
pub use zh_keywords::ZH_TO_EN_KEYWORDS;
pub use zh_mood::ZH_TO_EN_MOOD;
