//! Titlescan: concurrent filtered scanner for the IMDb title.basics TSV dataset
//!
//! The core is a cancellable scan that partitions the file by interleaved
//! line ownership: worker `w` of `N` owns every `N`-th data line starting at
//! offset `w`, each over its own read handle, with no shared cursor and no
//! locks on accumulation. Matches are merged in worker-id order, which is not
//! file order.

pub mod cancel;
pub mod dataset;
pub mod decode;
pub mod engine;
pub mod error;
pub mod filters;
pub mod lookup;
pub mod scan;
pub mod types;
pub mod utils;

pub use cancel::CancelToken;
pub use dataset::{Dataset, LineCursor, TsvCursor};
pub use error::ScanError;
pub use filters::{Filter, FilterChain};
pub use scan::scan_titles;
pub use types::{ScanOptions, Title};

use std::path::Path;

/// Single entry point: open `path`, validate its header, and scan it with
/// `opts`, `filters`, and `cancel`.
pub fn scan_file(
    path: impl AsRef<Path>,
    opts: &ScanOptions,
    filters: FilterChain,
    cancel: &CancelToken,
) -> Result<Vec<Title>, ScanError> {
    let dataset = Dataset::open(path)?;
    scan::scan_titles(&dataset, opts, filters, cancel)
}
