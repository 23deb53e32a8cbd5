//! Integration tests for the pipeline.
//!
//! These tests verify that hard filters, match-ratio computation and tiered
//! selection work together in a realistic scenario.

use catalog::{Catalog, Movie};
use chrono::NaiveDate;
use pipeline::filters::*;
use pipeline::{Candidate, FilterPipeline, MatchRatioEngine, TieredSelector};
use query::CanonicalFeatures;
use std::sync::Arc;

fn movie(
    id: u32,
    genres: &[&str],
    keywords: &[&str],
    moods: &[&str],
    year: i32,
    rating: f32,
) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        original_title: String::new(),
        overview: String::new(),
        tagline: String::new(),
        release_date: NaiveDate::from_ymd_opt(year, 6, 15),
        original_language: "zh".to_string(),
        vote_average: rating,
        vote_count: 1000,
        popularity: 25.0,
        runtime: Some(110),
        poster_path: None,
        genres: genres.iter().map(|g| g.to_string()).collect(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        mood_tags: moods.iter().map(|m| m.to_string()).collect(),
    }
}

fn create_test_setup() -> (Arc<Catalog>, Vec<Candidate>) {
    let mut catalog = Catalog::new();

    // Heartbreak drama squarely matching a 失戀 request
    catalog.insert_movie(movie(
        1,
        &["剧情", "爱情"],
        &["heartbreak", "love", "breakup"],
        &["emotional", "melancholic", "romantic"],
        1998,
        8.1,
    ));
    // Romance with partial feature coverage
    catalog.insert_movie(movie(
        2,
        &["爱情"],
        &["love"],
        &["romantic"],
        1995,
        7.2,
    ));
    // Action film, wrong genre for the request below
    catalog.insert_movie(movie(
        3,
        &["动作"],
        &["battle"],
        &["exciting"],
        1997,
        7.8,
    ));
    // Low-rated romance
    catalog.insert_movie(movie(
        4,
        &["爱情"],
        &["love", "breakup"],
        &["romantic", "melancholic"],
        1994,
        5.1,
    ));
    // Right features, wrong decade
    catalog.insert_movie(movie(
        5,
        &["剧情", "爱情"],
        &["heartbreak", "love"],
        &["emotional", "melancholic"],
        2015,
        8.4,
    ));

    let catalog = Arc::new(catalog);
    let candidates = vec![
        Candidate::new(1, 0.82),
        Candidate::new(2, 0.74),
        Candidate::new(3, 0.70),
        Candidate::new(4, 0.68),
        Candidate::new(5, 0.88),
    ];
    (catalog, candidates)
}

fn heartbreak_features() -> CanonicalFeatures {
    CanonicalFeatures {
        keywords: vec!["heartbreak".to_string(), "love".to_string()],
        mood_tags: vec!["emotional".to_string(), "melancholic".to_string()],
        genres: vec!["爱情".to_string()],
        year_ranges: vec![(1990, 1999)],
        min_rating: Some(6.0),
        ..Default::default()
    }
}

#[test]
fn test_hard_filters_respect_all_constraints() {
    let (catalog, candidates) = create_test_setup();

    let pipeline = FilterPipeline::new()
        .add_filter(GenreFilter::new(catalog.clone()))
        .add_filter(YearRangeFilter::new(catalog.clone()))
        .add_filter(MinimumRatingFilter::new(catalog.clone()));

    let features = heartbreak_features();
    let filtered = pipeline.apply(candidates, &features).unwrap();

    // 3 fails the genre filter, 5 fails the year filter, 4 fails the rating
    let ids: Vec<u32> = filtered.iter().map(|c| c.movie_id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_match_ratio_after_filtering() {
    let (catalog, candidates) = create_test_setup();

    let pipeline = FilterPipeline::new().add_filter(GenreFilter::new(catalog.clone()));
    let features = heartbreak_features();

    let filtered = pipeline.apply(candidates, &features).unwrap();
    let scored = MatchRatioEngine::new(catalog.clone()).compute(filtered, &features);

    // Movie 1 carries all 5 requested features
    let top = scored.iter().find(|c| c.movie_id == 1).unwrap();
    assert_eq!(top.total_features, 5);
    assert_eq!(top.match_count, 5);
    assert_eq!(top.match_ratio, 1.0);

    // Movie 2: love + romantic? romantic not requested; love + 爱情 = 2 of 5
    let partial = scored.iter().find(|c| c.movie_id == 2).unwrap();
    assert_eq!(partial.match_count, 2);
    assert!((partial.match_ratio - 0.4).abs() < 1e-6);

    // Match ratio law: ratio * total is an integer count
    for candidate in &scored {
        let reconstructed = candidate.match_ratio * candidate.total_features as f32;
        assert!((reconstructed - candidate.match_count as f32).abs() < 1e-4);
    }
}

#[test]
fn test_full_pipeline_with_tiered_selection() {
    let (catalog, candidates) = create_test_setup();

    let pipeline = FilterPipeline::new()
        .add_filter(GenreFilter::new(catalog.clone()))
        .add_filter(ExcludeGenreFilter::new(catalog.clone()))
        .add_filter(YearRangeFilter::new(catalog.clone()))
        .add_filter(MinimumRatingFilter::new(catalog.clone()));

    let features = heartbreak_features();
    let filtered = pipeline.apply(candidates, &features).unwrap();
    let scored = MatchRatioEngine::new(catalog.clone()).compute(filtered, &features);
    let selected = TieredSelector::new(0.80, 0.50, 150).select(scored);

    assert_eq!(selected.len(), 2);
    // Perfect match first
    assert_eq!(selected[0].movie_id, 1);
    // Embedding scores survive untouched
    assert!((selected[0].embedding_score - 0.82).abs() < 1e-6);
}

#[test]
fn test_impossible_filter_yields_empty_set() {
    let (catalog, candidates) = create_test_setup();

    let pipeline = FilterPipeline::new()
        .add_filter(YearRangeFilter::new(catalog.clone()))
        .add_filter(MinimumRatingFilter::new(catalog.clone()));

    let features = CanonicalFeatures {
        year_ranges: vec![(1960, 1969)],
        min_rating: Some(9.9),
        ..Default::default()
    };

    let filtered = pipeline.apply(candidates, &features).unwrap();
    assert!(filtered.is_empty());
}
