//! The incoming recommendation request.

use serde::Deserialize;

/// A recommendation request as the frontend sends it.
///
/// All fields are optional; an entirely empty request is still valid and
/// falls back to a generic seed query downstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    /// Free-form natural-language query, usually Chinese.
    pub natural_query: Option<String>,
    /// UI mood labels (Chinese, closed set). Already-canonical English mood
    /// tags are accepted verbatim.
    pub mood_labels: Vec<String>,
    /// Genre labels in traditional Chinese.
    pub genres: Vec<String>,
    /// Genres to exclude, traditional Chinese.
    pub exclude_genres: Vec<String>,
    /// Decade IDs, e.g. `["90s", "00s"]`.
    pub eras: Vec<String>,
    /// Explicit inclusive year range, OR-combined with `eras`.
    pub year_range: Option<(u16, u16)>,
    /// Minimum vote average.
    pub min_rating: Option<f32>,
    /// Desired number of recommendations; defaults from configuration.
    pub count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_partial_json() {
        let request: UserRequest =
            serde_json::from_str(r#"{"natural_query": "難過的時候適合看什麼電影"}"#).unwrap();
        assert!(request.mood_labels.is_empty());
        assert!(request.count.is_none());
    }

    #[test]
    fn test_deserializes_full_request() {
        let raw = r#"{
            "natural_query": "想看刺激的",
            "mood_labels": ["派對"],
            "genres": ["動作"],
            "exclude_genres": ["恐怖"],
            "eras": ["90s"],
            "min_rating": 7.0,
            "count": 5
        }"#;
        let request: UserRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.eras, vec!["90s"]);
        assert_eq!(request.count, Some(5));
    }
}
