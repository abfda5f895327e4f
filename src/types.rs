//! Public types for the titlescan API.

/// One decoded row of the `title.basics.tsv` dataset.
///
/// Numeric fields use 0 for "unknown" (the dataset's `\N` sentinel).
/// `genres` preserves the order of the comma-separated source cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Title {
    pub tconst: String,
    pub title_type: String,
    pub primary_title: String,
    pub original_title: String,
    pub is_adult: i32,
    pub start_year: i32,
    pub end_year: i32,
    pub runtime_minutes: i32,
    pub genres: Vec<String>,
}

/// Options for [`scan_titles`](crate::scan::scan_titles).
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Worker count for the interleaved scan. When `None`, derived from the
    /// available thread count. Clamped to at least 1.
    pub workers: Option<usize>,
}

impl ScanOptions {
    /// Effective worker count: explicit override, else rayon's thread count.
    pub fn effective_workers(&self) -> usize {
        self.workers
            .unwrap_or_else(rayon::current_num_threads)
            .max(1)
    }
}
