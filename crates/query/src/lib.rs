//! # Query Crate
//!
//! This crate turns a raw user request into the two things the pipeline
//! needs: canonical feature sets and an embedding query.
//!
//! ## Components
//!
//! ### Feature Extractor
//! Normalizes the request into canonical features:
//! - UI mood labels → English mood tags + keywords (+ rating floors)
//! - Chinese query text → mood tags / keywords via substring dictionaries
//! - Eras → year ranges, traditional genres → simplified
//!
//! ### Embedding Query Generator
//! Decides between the four input scenarios (nl_only / mood_only / both /
//! empty), analyzes how the mood tags relate to each other, and flags
//! advisory sentiment conflicts between text and moods.
//!
//! ## Example Usage
//!
//! ```ignore
//! use query::{build_query, extract, UserRequest};
//!
//! let features = extract(&request, &catalog);
//! let query = build_query(request.natural_query.as_deref(), &features.mood_tags);
//! let hits = searcher.search(&query.query_text, 300, 0.0).await?;
//! ```

// Public modules
pub mod analyzer;
pub mod builder;
pub mod conflict;
pub mod features;
pub mod request;

// Re-export commonly used types
pub use analyzer::{analyze_mood_combination, Confidence, MoodRelationship, RelationSource, RelationType};
pub use builder::{build_query, EmbeddingQuery, Scenario, EMPTY_QUERY_TEXT};
pub use conflict::detect_sentiment_conflict;
pub use features::{extract, CanonicalFeatures};
pub use request::UserRequest;
