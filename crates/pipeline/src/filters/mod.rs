//! Hard-filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline. Each filter is a no-op when
//! the request did not set the corresponding constraint.

pub mod exclude_genre;
pub mod genre;
pub mod minimum_rating;
pub mod year_range;

// Re-export for convenience
pub use exclude_genre::ExcludeGenreFilter;
pub use genre::GenreFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use year_range::YearRangeFilter;
