//! Field filters and filter chains.
//!
//! A [`Filter`] is a stateless acceptance test on a decoded [`Title`]. Chains
//! compose by logical AND with short-circuit on the first rejection; the
//! empty chain accepts everything. Filters are `Send + Sync` so one chain can
//! be shared read-only across all shard workers.

use std::collections::BTreeSet;

use crate::types::Title;

pub trait Filter: Send + Sync {
    /// True when the title should be included in the result.
    fn matches(&self, title: &Title) -> bool;
}

/// An ordered conjunction of filters.
pub type FilterChain = Vec<Box<dyn Filter>>;

/// Evaluate a chain against a title: logical AND, short-circuiting.
pub fn matches_all(filters: &[Box<dyn Filter>], title: &Title) -> bool {
    filters.iter().all(|f| f.matches(title))
}

/// Equality on the `titleType` column.
pub struct TitleTypeFilter(pub String);

impl Filter for TitleTypeFilter {
    fn matches(&self, title: &Title) -> bool {
        title.title_type == self.0
    }
}

/// Equality on the `primaryTitle` column.
pub struct PrimaryTitleFilter(pub String);

impl Filter for PrimaryTitleFilter {
    fn matches(&self, title: &Title) -> bool {
        title.primary_title == self.0
    }
}

/// Equality on the `originalTitle` column.
pub struct OriginalTitleFilter(pub String);

impl Filter for OriginalTitleFilter {
    fn matches(&self, title: &Title) -> bool {
        title.original_title == self.0
    }
}

/// Membership test: the title's genre list contains this genre.
pub struct GenreFilter(pub String);

impl Filter for GenreFilter {
    fn matches(&self, title: &Title) -> bool {
        title.genres.iter().any(|g| *g == self.0)
    }
}

/// Equality on the `startYear` column.
pub struct StartYearFilter(pub i32);

impl Filter for StartYearFilter {
    fn matches(&self, title: &Title) -> bool {
        title.start_year == self.0
    }
}

/// Equality on the `endYear` column.
pub struct EndYearFilter(pub i32);

impl Filter for EndYearFilter {
    fn matches(&self, title: &Title) -> bool {
        title.end_year == self.0
    }
}

/// Equality on the `runtimeMinutes` column.
pub struct RuntimeMinutesFilter(pub i32);

impl Filter for RuntimeMinutesFilter {
    fn matches(&self, title: &Title) -> bool {
        title.runtime_minutes == self.0
    }
}

/// Set equality on the full genre list: the title matches when its genres and
/// the wanted genres are equal as sets (order and duplicates ignored).
pub struct GenresFilter {
    wanted: BTreeSet<String>,
}

impl GenresFilter {
    pub fn new(genres: impl IntoIterator<Item = String>) -> Self {
        Self {
            wanted: genres.into_iter().collect(),
        }
    }
}

impl Filter for GenresFilter {
    fn matches(&self, title: &Title) -> bool {
        let have: BTreeSet<&str> = title.genres.iter().map(String::as_str).collect();
        have.len() == self.wanted.len() && have.iter().all(|g| self.wanted.contains(*g))
    }
}
