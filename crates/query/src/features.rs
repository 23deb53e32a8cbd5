//! Canonical feature extraction.
//!
//! Normalizes a raw `UserRequest` into the canonical feature sets the rest
//! of the pipeline consumes: English keywords and mood tags, simplified
//! genre labels, year ranges and a combined minimum rating. Extraction never
//! fails; unknown labels either pass through (genres, already-canonical mood
//! tags) or degrade to feature sets that match nothing (eras).

use crate::request::UserRequest;
use catalog::{Catalog, MovieId};
use mappings::mood_tags::is_canonical_mood_tag;
use mappings::{era_to_year_range, genre_to_simplified, lookup_mood_label};
use mappings::{ZH_TO_EN_KEYWORDS, ZH_TO_EN_MOOD};
use tracing::debug;

/// Keywords are capped after deduplication.
const MAX_KEYWORDS: usize = 15;
/// Mood tags are capped after deduplication.
const MAX_MOOD_TAGS: usize = 10;

/// Pinned "today" for rule-based year inference.
const CURRENT_YEAR: u16 = 2026;

/// Year range that matches no catalog movie, used for unknown era IDs so
/// they silently filter everything out instead of widening the result.
const IMPOSSIBLE_RANGE: (u16, u16) = (0, 0);

/// Canonical features extracted from one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalFeatures {
    /// English keyword tokens (deduplicated, capped at 15).
    pub keywords: Vec<String>,
    /// Canonical mood tags (deduplicated, capped at 10).
    pub mood_tags: Vec<String>,
    /// Requested genres, simplified-Chinese canonical forms.
    pub genres: Vec<String>,
    /// Excluded genres, simplified-Chinese canonical forms.
    pub exclude_genres: Vec<String>,
    /// Inclusive `[min, max]` year ranges, OR-combined.
    pub year_ranges: Vec<(u16, u16)>,
    /// Minimum vote average: the max of the request's own floor and any
    /// floor imposed by a selected mood label.
    pub min_rating: Option<f32>,
    /// Movies whose title contains a query token (informational).
    pub exact_title_matches: Vec<MovieId>,
    /// Movies whose keywords overlap a query token (informational).
    pub exact_keyword_matches: Vec<MovieId>,
}

impl CanonicalFeatures {
    /// Number of user-requested soft features; the match-ratio denominator.
    pub fn total_features(&self) -> usize {
        self.keywords.len() + self.mood_tags.len() + self.genres.len()
    }
}

/// Extract canonical features from a request against a stable catalog.
pub fn extract(request: &UserRequest, catalog: &Catalog) -> CanonicalFeatures {
    let mut features = CanonicalFeatures::default();

    // 1. Eras → year ranges. Order preserved, no dedup; overlaps are fine.
    for era in &request.eras {
        features
            .year_ranges
            .push(era_to_year_range(era).unwrap_or(IMPOSSIBLE_RANGE));
    }
    if let Some(range) = request.year_range {
        features.year_ranges.push(range);
    }

    // 2. Genres traditional → simplified.
    features.genres = request
        .genres
        .iter()
        .map(|genre| genre_to_simplified(genre).to_string())
        .collect();
    features.exclude_genres = request
        .exclude_genres
        .iter()
        .map(|genre| genre_to_simplified(genre).to_string())
        .collect();

    // 3. Expand UI mood labels.
    let mut label_min_rating: Option<f32> = None;
    for label in &request.mood_labels {
        if let Some(entry) = lookup_mood_label(label) {
            features
                .mood_tags
                .extend(entry.db_mood_tags.iter().map(|tag| tag.to_string()));
            features
                .keywords
                .extend(entry.db_keywords.iter().map(|kw| kw.to_string()));
            if let Some(floor) = entry.min_rating {
                label_min_rating = Some(label_min_rating.map_or(floor, |r: f32| r.max(floor)));
            }
        } else {
            // Callers occasionally hand canonical English tags straight
            // through; accept them, drop everything else.
            let lowered = label.to_lowercase();
            if is_canonical_mood_tag(&lowered) {
                features.mood_tags.push(lowered);
            } else {
                debug!("ignoring unknown mood label: {label}");
            }
        }
    }
    features.min_rating = match (request.min_rating, label_min_rating) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    };

    // 4. Mine the natural-language query.
    if let Some(nl) = request.natural_query.as_deref() {
        let nl = nl.trim();
        if !nl.is_empty() {
            for (zh, en) in ZH_TO_EN_MOOD {
                if nl.contains(zh) {
                    features.mood_tags.push((*en).to_string());
                }
            }
            for (zh, en) in ZH_TO_EN_KEYWORDS {
                if nl.contains(zh) {
                    features.keywords.push((*en).to_string());
                }
            }
            if features.year_ranges.is_empty() {
                if let Some(range) = infer_year_range(nl) {
                    features.year_ranges.push(range);
                }
            }

            let (titles, keywords) = exact_catalog_matches(nl, catalog);
            features.exact_title_matches = titles;
            features.exact_keyword_matches = keywords;
        }
    }

    // 5. Deduplicate and cap.
    dedup_in_place(&mut features.keywords);
    features.keywords.truncate(MAX_KEYWORDS);
    dedup_in_place(&mut features.mood_tags);
    features.mood_tags.truncate(MAX_MOOD_TAGS);
    dedup_in_place(&mut features.genres);
    dedup_in_place(&mut features.exclude_genres);

    debug!(
        keywords = features.keywords.len(),
        mood_tags = features.mood_tags.len(),
        genres = features.genres.len(),
        year_ranges = features.year_ranges.len(),
        "extracted canonical features"
    );
    features
}

/// Rule-based year inference, applied only when no era was selected.
fn infer_year_range(query: &str) -> Option<(u16, u16)> {
    const RECENT_MARKERS: &[&str] = &["近期", "最近", "新", "最新", "2024", "2025"];
    const CLASSIC_MARKERS: &[&str] = &["經典", "老片", "復古", "懷舊"];

    if RECENT_MARKERS.iter().any(|marker| query.contains(marker)) {
        return Some((2020, CURRENT_YEAR));
    }
    if CLASSIC_MARKERS.iter().any(|marker| query.contains(marker)) {
        return Some((1980, 2010));
    }
    if query.contains("90年代") {
        return Some((1990, 1999));
    }
    if query.contains("2000年代") {
        return Some((2000, 2009));
    }
    if query.contains("2010") && (query.contains("後") || query.contains("以後")) {
        return Some((2010, CURRENT_YEAR));
    }
    None
}

/// Substring-search query tokens (≥3 chars) against catalog titles and
/// keywords. Informational; the embedding-first pipeline does not depend on
/// these matches.
fn exact_catalog_matches(query: &str, catalog: &Catalog) -> (Vec<MovieId>, Vec<MovieId>) {
    let tokens: Vec<String> = query
        .split_whitespace()
        .filter(|token| token.chars().count() >= 3)
        .map(|token| token.to_lowercase())
        .collect();
    if tokens.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut title_matches = Vec::new();
    let mut keyword_matches = Vec::new();
    for movie in catalog.movies() {
        let title = movie.title.to_lowercase();
        let original = movie.original_title.to_lowercase();
        if tokens.iter().any(|t| title.contains(t) || original.contains(t)) {
            title_matches.push(movie.id);
        }
        if movie
            .keywords
            .iter()
            .any(|kw| tokens.iter().any(|t| kw.contains(t) || t.contains(kw)))
        {
            keyword_matches.push(movie.id);
        }
    }
    title_matches.sort_unstable();
    keyword_matches.sort_unstable();
    (title_matches, keyword_matches)
}

/// Remove duplicates while keeping first-seen order.
fn dedup_in_place(values: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    values.retain(|value| seen.insert(value.clone()));
}
